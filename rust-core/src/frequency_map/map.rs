//! One precomputed complex frequency basis

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::ops::Range;

use super::oscillator::OscillatorMode;
use crate::codec::ComplexSample;
use crate::config::{DEFAULT_BUFFER_SIZE, DEFAULT_SAMPLERATE};
use crate::error::{try_zeroed, AnalyseError};

/// `freq` of an aggregate map
pub const FACTORIZED_FREQ: f64 = -1.0;

pub const DEFAULT_FREQ: f64 = 440.0;

/// Construction parameters of a [`FrequencyMap`]
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyMapParams {
    /// Bin ordinal
    pub z_index: usize,
    /// Length of the complex buffer
    pub window_count: usize,
    pub samplerate: u32,
    pub buffer_size: usize,
    pub freq: f64,
    /// Frames filled by [`FrequencyMap::process`]
    pub frame_count: usize,
    /// Offset of the first filled frame
    pub attack: usize,
    pub oscillator_mode: OscillatorMode,
    pub phase: f64,
    pub volume: f64,
}

impl Default for FrequencyMapParams {
    fn default() -> Self {
        Self {
            z_index: 0,
            window_count: DEFAULT_BUFFER_SIZE,
            samplerate: DEFAULT_SAMPLERATE,
            buffer_size: DEFAULT_BUFFER_SIZE,
            freq: DEFAULT_FREQ,
            frame_count: 0,
            attack: 0,
            oscillator_mode: OscillatorMode::Sin,
            phase: 0.0,
            volume: 1.0,
        }
    }
}

/// Complex basis vector for one bin at a fixed samplerate and buffer size
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyMap {
    params: FrequencyMapParams,
    buffer: Vec<ComplexSample>,
}

impl FrequencyMap {
    /// Allocate a zeroed map
    pub fn new(params: FrequencyMapParams) -> Result<Self, AnalyseError> {
        let buffer = try_zeroed("frequency map", params.window_count)?;
        Ok(Self { params, buffer })
    }

    /// Aggregate map for one (samplerate, buffer size) pair, every slot 1 + 0i
    pub fn factorized(samplerate: u32, buffer_size: usize) -> Result<Self, AnalyseError> {
        let mut map = Self::new(FrequencyMapParams {
            window_count: buffer_size,
            samplerate,
            buffer_size,
            freq: FACTORIZED_FREQ,
            frame_count: buffer_size,
            ..Default::default()
        })?;
        map.buffer.fill(ComplexSample::new(1.0, 0.0));
        Ok(map)
    }

    pub fn is_factorized(&self) -> bool {
        self.params.freq == FACTORIZED_FREQ
    }

    /// Slots written by [`process`](Self::process), clamped to the buffer
    pub fn filled_range(&self) -> Range<usize> {
        let window_count = self.buffer.len();
        let start = self.params.attack.min(window_count);
        let end = self
            .params
            .attack
            .saturating_add(self.params.frame_count)
            .min(window_count);
        start..end
    }

    /// Accumulate the oscillator's short-time spectrum frames into the buffer
    ///
    /// `buffer[attack + t] += y(t) * exp(-2πi t / frame_count)` for
    /// `t` in `0..frame_count`.
    pub fn process(&mut self) {
        let frame_count = self.params.frame_count;
        if frame_count == 0 {
            return;
        }

        let range = self.filled_range();
        let FrequencyMapParams {
            samplerate,
            freq,
            oscillator_mode,
            phase,
            volume,
            ..
        } = self.params;

        for (t, slot) in self.buffer[range].iter_mut().enumerate() {
            let y = oscillator_mode.sample(t as f64 + phase, freq, samplerate) * volume;
            let angle = -2.0 * PI * t as f64 / frame_count as f64;
            *slot += ComplexSample::cis(angle) * y;
        }
    }

    /// Multiply `aggregate` slot-wise by this map's filled region
    pub fn factorize(&self, aggregate: &mut FrequencyMap) {
        let range = self.filled_range();
        let end = range.end.min(aggregate.buffer.len());

        for i in range.start..end {
            aggregate.buffer[i] *= self.buffer[i];
        }
    }

    /// `retval[i] = buffer[i] * source[i]` over the common length
    pub fn compute_max_likelihood(&self, source: &[ComplexSample], retval: &mut [ComplexSample]) {
        for ((r, &b), &s) in retval.iter_mut().zip(&self.buffer).zip(source) {
            *r = b * s;
        }
    }

    /// Order by samplerate, then buffer size, then frequency
    pub fn sort_cmp(a: &FrequencyMap, b: &FrequencyMap) -> Ordering {
        a.params
            .samplerate
            .cmp(&b.params.samplerate)
            .then(a.params.buffer_size.cmp(&b.params.buffer_size))
            .then(a.params.freq.total_cmp(&b.params.freq))
    }

    pub fn params(&self) -> &FrequencyMapParams {
        &self.params
    }

    pub fn z_index(&self) -> usize {
        self.params.z_index
    }

    pub fn window_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn samplerate(&self) -> u32 {
        self.params.samplerate
    }

    pub fn buffer_size(&self) -> usize {
        self.params.buffer_size
    }

    pub fn freq(&self) -> f64 {
        self.params.freq
    }

    pub fn frame_count(&self) -> usize {
        self.params.frame_count
    }

    pub fn attack(&self) -> usize {
        self.params.attack
    }

    pub fn oscillator_mode(&self) -> OscillatorMode {
        self.params.oscillator_mode
    }

    pub fn buffer(&self) -> &[ComplexSample] {
        &self.buffer
    }
}
