//! Shared registry of raw and factorized frequency maps
//!
//! Each collection sits behind an `RwLock<Arc<Vec<_>>>`. Writers update it
//! copy-on-write; lookups clone the `Arc` under the read lock and scan the
//! snapshot unlocked, so a lookup never waits on a running bootstrap.

use parking_lot::RwLock;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, trace};

use super::map::{FrequencyMap, FrequencyMapParams};
use crate::config::FrequencyMapConfig;
use crate::error::AnalyseError;

/// Keep per-bin maps in the raw collection after factorizing them
pub const PRESERVE_FREQUENCY_MAP: u32 = 1;

/// Frequency reached by the last bin of the default bootstrap
pub const EQUINOX_FREQUENCY: f64 = 22000.0;

pub const DEFAULT_SAMPLERATES: [u32; 4] = [44100, 48000, 96000, 192000];

pub const DEFAULT_BUFFER_SIZES: [usize; 6] = [64, 128, 256, 512, 1024, 2048];

type MapCollection = Arc<Vec<Arc<FrequencyMap>>>;

static INSTANCE: OnceLock<Arc<FrequencyMapManager>> = OnceLock::new();

/// Process-wide manager, created on first use
///
/// Prefer constructing one manager and passing it around explicitly.
pub fn get_instance() -> Arc<FrequencyMapManager> {
    Arc::clone(INSTANCE.get_or_init(|| Arc::new(FrequencyMapManager::new())))
}

/// Frequency of bin `k` in the default bootstrap
pub fn bin_frequency(k: usize, buffer_size: usize) -> f64 {
    EQUINOX_FREQUENCY * (k as f64 / buffer_size as f64)
}

#[derive(Debug, Default)]
pub struct FrequencyMapManager {
    flags: AtomicU32,
    frequency_maps: RwLock<MapCollection>,
    factorized_frequency_maps: RwLock<MapCollection>,
}

impl FrequencyMapManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(flags: u32) -> Self {
        let manager = Self::new();
        manager.set_flags(flags);
        manager
    }

    pub fn from_config(config: &FrequencyMapConfig) -> Self {
        if config.preserve {
            Self::with_flags(PRESERVE_FREQUENCY_MAP)
        } else {
            Self::new()
        }
    }

    pub fn flags(&self) -> u32 {
        self.flags.load(AtomicOrdering::Acquire)
    }

    pub fn set_flags(&self, flags: u32) {
        self.flags.fetch_or(flags, AtomicOrdering::AcqRel);
    }

    pub fn unset_flags(&self, flags: u32) {
        self.flags.fetch_and(!flags, AtomicOrdering::AcqRel);
    }

    /// True if every bit of `flags` is set
    pub fn test_flags(&self, flags: u32) -> bool {
        self.flags() & flags == flags
    }

    /// Insert into the raw collection keeping it sorted
    ///
    /// Returns `false` if this exact map is already present. Distinct maps
    /// with equal keys are all kept.
    pub fn add_frequency_map(&self, map: Arc<FrequencyMap>) -> bool {
        let mut guard = self.frequency_maps.write();
        if guard.iter().any(|m| Arc::ptr_eq(m, &map)) {
            return false;
        }

        let maps = Arc::make_mut(&mut *guard);
        let index = maps.partition_point(|m| FrequencyMap::sort_cmp(m, &map) != Ordering::Greater);

        trace!(
            samplerate = map.samplerate(),
            buffer_size = map.buffer_size(),
            freq = map.freq(),
            index,
            "added frequency map"
        );
        maps.insert(index, map);

        true
    }

    /// Append to the factorized collection
    ///
    /// Returns `false` if this exact map is already present.
    pub fn add_factorized_frequency_map(&self, map: Arc<FrequencyMap>) -> bool {
        let mut guard = self.factorized_frequency_maps.write();
        if guard.iter().any(|m| Arc::ptr_eq(m, &map)) {
            return false;
        }

        trace!(
            samplerate = map.samplerate(),
            buffer_size = map.buffer_size(),
            "added factorized frequency map"
        );
        Arc::make_mut(&mut *guard).push(map);

        true
    }

    /// First raw map matching all three keys exactly
    pub fn find_frequency_map(
        &self,
        samplerate: u32,
        buffer_size: usize,
        freq: f64,
    ) -> Option<Arc<FrequencyMap>> {
        let snapshot = self.frequency_maps();
        snapshot
            .iter()
            .find(|m| m.samplerate() == samplerate && m.buffer_size() == buffer_size && m.freq() == freq)
            .cloned()
    }

    pub fn find_factorized_frequency_map(
        &self,
        samplerate: u32,
        buffer_size: usize,
    ) -> Option<Arc<FrequencyMap>> {
        let snapshot = self.factorized_frequency_maps();
        snapshot
            .iter()
            .find(|m| m.samplerate() == samplerate && m.buffer_size() == buffer_size)
            .cloned()
    }

    /// Snapshot of the raw collection
    pub fn frequency_maps(&self) -> MapCollection {
        Arc::clone(&self.frequency_maps.read())
    }

    /// Snapshot of the factorized collection
    pub fn factorized_frequency_maps(&self) -> MapCollection {
        Arc::clone(&self.factorized_frequency_maps.read())
    }

    /// Bootstrap the built-in samplerate and buffer size table
    ///
    /// Unless `PRESERVE_FREQUENCY_MAP` is set the raw collection stays empty,
    /// so [`find_frequency_map`](Self::find_frequency_map) returns `None` and
    /// only the factorized aggregates can be looked up.
    pub fn load_default(&self) -> Result<(), AnalyseError> {
        self.load_table(&DEFAULT_SAMPLERATES, &DEFAULT_BUFFER_SIZES)
    }

    /// Build one aggregate per (samplerate, buffer size) pair
    ///
    /// Every bin `k` contributes a map at [`bin_frequency`] spanning half a
    /// buffer from offset `k`. The aggregate is registered once all bins
    /// are factorized into it.
    pub fn load_table(&self, samplerates: &[u32], buffer_sizes: &[usize]) -> Result<(), AnalyseError> {
        let preserve = self.test_flags(PRESERVE_FREQUENCY_MAP);

        for &samplerate in samplerates {
            for &buffer_size in buffer_sizes {
                let mut aggregate = FrequencyMap::factorized(samplerate, buffer_size)?;

                for k in 0..buffer_size {
                    let mut map = FrequencyMap::new(FrequencyMapParams {
                        z_index: k,
                        window_count: buffer_size,
                        samplerate,
                        buffer_size,
                        freq: bin_frequency(k, buffer_size),
                        frame_count: buffer_size / 2,
                        attack: k,
                        ..Default::default()
                    })?;

                    map.process();
                    map.factorize(&mut aggregate);

                    if preserve {
                        self.add_frequency_map(Arc::new(map));
                    }
                }

                self.add_factorized_frequency_map(Arc::new(aggregate));
                debug!(samplerate, buffer_size, "factorized frequency maps");
            }
        }

        info!(
            raw = self.frequency_maps.read().len(),
            factorized = self.factorized_frequency_maps.read().len(),
            preserve,
            "loaded frequency maps"
        );

        Ok(())
    }
}
