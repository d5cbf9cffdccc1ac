//! Per-channel analysis cache publishing frequency and magnitude ports
//!
//! The render thread pushes PCM with [`AnalyseChannel::buffer_add`]; a UI
//! thread periodically calls
//! [`AnalyseChannel::retrieve_frequency_and_magnitude`] and reads the
//! `frequency_buffer` / `magnitude_buffer` ports. Both operations serialize
//! on one per-channel lock whose hold time is a copy or a transform.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use super::fft::HalfComplexPlan;
use super::port::{Port, PortValue};
use super::windowing::{fill_window, WindowType};
use crate::codec::{BufferResampler, PcmBuffer, SampleFormat};
use crate::config::AudioConfig;
use crate::error::{try_zeroed, AnalyseError};

pub const PLUGIN_NAME: &str = "analyse";

const SPECIFIERS: [&str; 4] = [
    "./buffer-cleared[0]",
    "./buffer-computed[0]",
    "./frequency-buffer[0]",
    "./magnitude-buffer[0]",
];

const CONTROL_PORTS: [&str; 4] = ["1/4", "2/4", "3/4", "4/4"];

/// How the magnitude of bin `i` is read from the half-complex output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MagnitudeMode {
    /// `|X[i]|` from `out[i]` and `out[n - i]`
    #[default]
    Bin,

    /// `sqrt(out[i]^2 + out[n/2 + 1 - i]^2)`
    ///
    /// Pairs bin `i` with the real part of bin `n/2 + 1 - i`, so the
    /// spectrum is mirrored around `n/4`. Kept for displays calibrated
    /// against that output.
    MirroredLegacy,
}

/// Length of the frequency / magnitude arrays for a cache of `buffer_size`
pub fn spectrum_len(buffer_size: usize) -> usize {
    buffer_size.div_ceil(2)
}

#[inline]
fn magnitude_at(out: &[f64], i: usize, mode: MagnitudeMode) -> f64 {
    let n = out.len();
    let re = out[i];

    let other = match mode {
        MagnitudeMode::Bin => {
            if i == 0 {
                0.0
            } else {
                out[n - i]
            }
        }
        MagnitudeMode::MirroredLegacy => out.get(n / 2 + 1 - i).copied().unwrap_or(0.0),
    };

    (re * re + other * other).sqrt()
}

/// Buffers owned by one channel, sized once from the cache buffer size
struct AnalyseCache {
    samplerate: u32,
    buffer_size: usize,
    format: SampleFormat,
    window_type: WindowType,
    magnitude_mode: MagnitudeMode,

    plan: HalfComplexPlan,
    window: Vec<f64>,
    input: Vec<f64>,
    output: Vec<f64>,

    frequency_pre_buffer: Arc<Vec<f64>>,
    magnitude_pre_buffer: Arc<Vec<f64>>,

    /// Planned for the last mismatched input rate
    resampler: Option<BufferResampler>,

    cleared: bool,
    computed: bool,
}

impl AnalyseCache {
    fn allocate(
        samplerate: u32,
        buffer_size: usize,
        format: SampleFormat,
        window_type: WindowType,
        magnitude_mode: MagnitudeMode,
    ) -> Result<Self, AnalyseError> {
        if samplerate == 0 || buffer_size == 0 {
            return Err(AnalyseError::InvalidGeometry {
                samplerate,
                buffer_size,
            });
        }

        let plan = HalfComplexPlan::new(buffer_size)?;

        let mut window = try_zeroed("window", buffer_size)?;
        fill_window(window_type, &mut window, buffer_size);

        let half = spectrum_len(buffer_size);

        Ok(Self {
            samplerate,
            buffer_size,
            format,
            window_type,
            magnitude_mode,
            plan,
            window,
            input: try_zeroed("input array", buffer_size)?,
            output: try_zeroed("output array", buffer_size)?,
            frequency_pre_buffer: Arc::new(try_zeroed("frequency pre-buffer", half)?),
            magnitude_pre_buffer: Arc::new(try_zeroed("magnitude pre-buffer", half)?),
            resampler: None,
            cleared: false,
            computed: false,
        })
    }

    /// Resample with the cached resampler, replanning it on a new geometry
    fn resample(
        slot: &mut Option<BufferResampler>,
        samples: &[f64],
        from_rate: u32,
        to_rate: u32,
    ) -> Result<Vec<f64>, AnalyseError> {
        let resampler = match slot.take() {
            Some(resampler) if resampler.matches(from_rate, to_rate, samples.len()) => resampler,
            _ => BufferResampler::new(from_rate, to_rate, samples.len())?,
        };

        slot.insert(resampler).process(samples)
    }
}

/// Spectral analysis of one audio channel
pub struct AnalyseChannel {
    cache: Mutex<AnalyseCache>,

    buffer_cleared: Port,
    buffer_computed: Port,
    frequency_buffer: Port,
    magnitude_buffer: Port,
}

impl AnalyseChannel {
    /// Create a channel with geometry read from `config`
    pub fn new(config: &AudioConfig) -> Result<Self, AnalyseError> {
        config.validate()?;

        Self::with_geometry(
            config.soundcard.samplerate,
            config.soundcard.buffer_size,
            config.analyse.cache_format,
            config.analyse.window,
            config.analyse.magnitude_mode,
        )
    }

    /// Create a channel with explicit geometry
    pub fn with_geometry(
        cache_samplerate: u32,
        cache_buffer_size: usize,
        cache_format: SampleFormat,
        window_type: WindowType,
        magnitude_mode: MagnitudeMode,
    ) -> Result<Self, AnalyseError> {
        let cache = AnalyseCache::allocate(
            cache_samplerate,
            cache_buffer_size,
            cache_format,
            window_type,
            magnitude_mode,
        )?;

        let zeroed = || PortValue::DoubleArray(vec![0.0; spectrum_len(cache_buffer_size)].into());

        debug!(
            samplerate = cache_samplerate,
            buffer_size = cache_buffer_size,
            format = ?cache_format,
            window = ?window_type,
            "created analyse channel"
        );

        Ok(Self {
            cache: Mutex::new(cache),
            buffer_cleared: Port::new(PLUGIN_NAME, SPECIFIERS[0], CONTROL_PORTS[0], PortValue::Bool(false)),
            buffer_computed: Port::new(PLUGIN_NAME, SPECIFIERS[1], CONTROL_PORTS[1], PortValue::Bool(false)),
            frequency_buffer: Port::new(PLUGIN_NAME, SPECIFIERS[2], CONTROL_PORTS[2], zeroed()),
            magnitude_buffer: Port::new(PLUGIN_NAME, SPECIFIERS[3], CONTROL_PORTS[3], zeroed()),
        })
    }

    /// Set the cache geometry
    ///
    /// A new buffer size reallocates the plan and every array, and resets
    /// the array ports to zeros of the new length.
    pub fn configure(
        &self,
        cache_samplerate: u32,
        cache_buffer_size: usize,
        cache_format: SampleFormat,
    ) -> Result<(), AnalyseError> {
        if cache_samplerate == 0 || cache_buffer_size == 0 {
            return Err(AnalyseError::InvalidGeometry {
                samplerate: cache_samplerate,
                buffer_size: cache_buffer_size,
            });
        }

        let mut cache = self.cache.lock();

        if cache.buffer_size != cache_buffer_size {
            let (window_type, magnitude_mode) = (cache.window_type, cache.magnitude_mode);
            *cache = AnalyseCache::allocate(
                cache_samplerate,
                cache_buffer_size,
                cache_format,
                window_type,
                magnitude_mode,
            )?;

            let len = spectrum_len(cache_buffer_size);
            self.frequency_buffer
                .safe_write(PortValue::DoubleArray(vec![0.0; len].into()));
            self.magnitude_buffer
                .safe_write(PortValue::DoubleArray(vec![0.0; len].into()));
            self.publish_status(&cache);
        } else {
            cache.samplerate = cache_samplerate;
            cache.format = cache_format;
        }

        debug!(
            samplerate = cache_samplerate,
            buffer_size = cache_buffer_size,
            format = ?cache_format,
            "configured analyse channel"
        );

        Ok(())
    }

    /// Copy one cycle of PCM into the analysis cache
    ///
    /// Converts from the buffer's format, resamples to the cache samplerate
    /// when `samplerate` differs, and requantizes through the cache format.
    /// If resampling fails the unresampled samples are used.
    pub fn buffer_add(&self, buffer: PcmBuffer<'_>, samplerate: u32, buffer_size: usize) {
        if buffer.is_empty() || buffer_size == 0 {
            return;
        }

        let (cache_samplerate, cache_format, mut resampler) = {
            let mut cache = self.cache.lock();
            (cache.samplerate, cache.format, cache.resampler.take())
        };

        let samples = buffer.to_f64(buffer_size);

        // Resampling runs outside the lock
        let mut samples = if samplerate != cache_samplerate && samplerate != 0 {
            match AnalyseCache::resample(&mut resampler, &samples, samplerate, cache_samplerate) {
                Ok(resampled) => resampled,
                Err(e) => {
                    warn!(
                        from = samplerate,
                        to = cache_samplerate,
                        error = %e,
                        "resampling failed, using unresampled buffer"
                    );
                    samples
                }
            }
        } else {
            samples
        };

        if cache_format != SampleFormat::Double {
            for s in samples.iter_mut() {
                *s = cache_format.requantize(*s);
            }
        }

        let mut cache = self.cache.lock();
        let n = samples.len().min(cache.buffer_size);
        cache.input[..n].copy_from_slice(&samples[..n]);
        cache.input[n..].fill(0.0);

        if cache.resampler.is_none() {
            cache.resampler = resampler;
        }

        cache.cleared = false;
        cache.computed = false;
        self.publish_status(&cache);
    }

    /// Transform the cache and publish frequency and magnitude
    pub fn retrieve_frequency_and_magnitude(&self) {
        let mut guard = self.cache.lock();
        let cache = &mut *guard;

        cache.output.fill(0.0);

        if let Err(e) = cache
            .plan
            .execute_windowed(&cache.input, &cache.window, &mut cache.output)
        {
            warn!(error = %e, "transform failed, ports left unchanged");
            return;
        }

        let n = cache.buffer_size;
        let correction = cache.samplerate as f64 / n as f64;

        let frequency = Arc::make_mut(&mut cache.frequency_pre_buffer);
        let magnitude = Arc::make_mut(&mut cache.magnitude_pre_buffer);

        for i in 0..n / 2 {
            frequency[i] = i as f64 * correction;
            magnitude[i] = magnitude_at(&cache.output, i, cache.magnitude_mode);
        }

        cache.computed = true;
        self.publish_spectrum(cache);
    }

    /// Reset the cache and publish zeroed spectra
    pub fn clear(&self) {
        let mut guard = self.cache.lock();
        let cache = &mut *guard;

        cache.input.fill(0.0);
        cache.output.fill(0.0);
        Arc::make_mut(&mut cache.frequency_pre_buffer).fill(0.0);
        Arc::make_mut(&mut cache.magnitude_pre_buffer).fill(0.0);

        cache.cleared = true;
        cache.computed = false;
        self.publish_spectrum(cache);
    }

    // Port writes happen with the cache locked, so the ports always
    // describe the cache they were published from.

    fn publish_status(&self, cache: &AnalyseCache) {
        self.buffer_cleared.safe_write(PortValue::Bool(cache.cleared));
        self.buffer_computed.safe_write(PortValue::Bool(cache.computed));
    }

    fn publish_spectrum(&self, cache: &AnalyseCache) {
        self.frequency_buffer
            .safe_write(PortValue::Pointer(Arc::clone(&cache.frequency_pre_buffer)));
        self.magnitude_buffer
            .safe_write(PortValue::Pointer(Arc::clone(&cache.magnitude_pre_buffer)));
        self.publish_status(cache);
    }

    /// Whether the cache holds a spectrum of its current input
    pub fn is_computed(&self) -> bool {
        self.cache.lock().computed
    }

    pub fn is_cleared(&self) -> bool {
        self.cache.lock().cleared
    }

    pub fn cache_samplerate(&self) -> u32 {
        self.cache.lock().samplerate
    }

    pub fn cache_buffer_size(&self) -> usize {
        self.cache.lock().buffer_size
    }

    pub fn cache_format(&self) -> SampleFormat {
        self.cache.lock().format
    }

    /// Number of bins written by each retrieve
    pub fn frequency_bins(&self) -> usize {
        self.cache.lock().buffer_size / 2
    }

    pub fn window_type(&self) -> WindowType {
        self.cache.lock().window_type
    }

    pub fn magnitude_mode(&self) -> MagnitudeMode {
        self.cache.lock().magnitude_mode
    }

    pub fn buffer_cleared(&self) -> &Port {
        &self.buffer_cleared
    }

    pub fn buffer_computed(&self) -> &Port {
        &self.buffer_computed
    }

    pub fn frequency_buffer(&self) -> &Port {
        &self.frequency_buffer
    }

    pub fn magnitude_buffer(&self) -> &Port {
        &self.magnitude_buffer
    }

    /// All four ports in specifier order
    pub fn ports(&self) -> [&Port; 4] {
        [
            &self.buffer_cleared,
            &self.buffer_computed,
            &self.frequency_buffer,
            &self.magnitude_buffer,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, samplerate: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|n| (2.0 * PI * freq * n as f64 / samplerate).sin())
            .collect()
    }

    fn peak_bin(values: &[f64]) -> usize {
        values
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .map(|(i, _)| i)
            .unwrap()
    }

    fn channel(samplerate: u32, buffer_size: usize, window: WindowType) -> AnalyseChannel {
        AnalyseChannel::with_geometry(
            samplerate,
            buffer_size,
            SampleFormat::Double,
            window,
            MagnitudeMode::Bin,
        )
        .unwrap()
    }

    #[test]
    fn test_440hz_peak_at_bin_10() {
        for window in [WindowType::Hann, WindowType::Rectangular] {
            let channel = channel(44100, 1024, window);
            let signal = sine(440.0, 44100.0, 1024);

            channel.buffer_add(PcmBuffer::Double(&signal), 44100, 1024);
            channel.retrieve_frequency_and_magnitude();

            let magnitude = channel.magnitude_buffer().snapshot().unwrap();
            let frequency = channel.frequency_buffer().snapshot().unwrap();

            assert_eq!(magnitude.len(), 512);
            assert!((frequency[10] - 430.664).abs() < 1e-3);

            let peak = magnitude[10];
            for (i, &m) in magnitude.iter().enumerate() {
                if i != 10 {
                    assert!(peak > m, "{:?}: bin {} = {} >= peak {}", window, i, m, peak);
                }
            }
        }
    }

    #[test]
    fn test_peak_within_one_bin_for_integer_input() {
        let samplerate = 48000;
        let buffer_size = 2048;
        let freq = 3000.0;

        let channel = channel(samplerate, buffer_size, WindowType::Hann);
        let signal: Vec<i16> = sine(freq, samplerate as f64, buffer_size)
            .iter()
            .map(|&s| (s * 16000.0) as i16)
            .collect();

        channel.buffer_add(PcmBuffer::S16(&signal), samplerate, buffer_size);
        channel.retrieve_frequency_and_magnitude();

        let magnitude = channel.magnitude_buffer().snapshot().unwrap();
        let frequency = channel.frequency_buffer().snapshot().unwrap();
        let bin_width = samplerate as f64 / buffer_size as f64;

        assert!((frequency[peak_bin(&magnitude)] - freq).abs() <= bin_width);
    }

    #[test]
    fn test_resampled_input_keeps_peak() {
        let channel = channel(44100, 1024, WindowType::Hann);
        let signal = sine(1000.0, 48000.0, 2048);

        channel.buffer_add(PcmBuffer::Double(&signal), 48000, 2048);
        channel.retrieve_frequency_and_magnitude();

        let magnitude = channel.magnitude_buffer().snapshot().unwrap();
        let frequency = channel.frequency_buffer().snapshot().unwrap();
        let bin_width = 44100.0 / 1024.0;

        assert!((frequency[peak_bin(&magnitude)] - 1000.0).abs() <= bin_width);
    }

    #[test]
    fn test_single_sample_at_other_rates() {
        for samplerate in [48000, 22050, 96000, 8000] {
            for len in [1, 2] {
                let channel = channel(44100, 1024, WindowType::Rectangular);
                channel.clear();

                channel.buffer_add(PcmBuffer::Double(&vec![0.5; len]), samplerate, len);
                assert_eq!(channel.buffer_cleared().read_bool(), Some(false));

                channel.retrieve_frequency_and_magnitude();
                assert_eq!(channel.buffer_computed().read_bool(), Some(true));
                let magnitude = channel.magnitude_buffer().snapshot().unwrap();
                assert!(magnitude.iter().all(|m| m.is_finite()), "{} Hz x {}", samplerate, len);
            }
        }
    }

    #[test]
    fn test_resampler_is_kept_between_buffers() {
        let channel = channel(44100, 1024, WindowType::Hann);
        let signal = sine(1000.0, 48000.0, 1024);

        channel.buffer_add(PcmBuffer::Double(&signal), 48000, 1024);
        channel.retrieve_frequency_and_magnitude();
        let first = channel.magnitude_buffer().snapshot().unwrap();

        let planned = channel.cache.lock().resampler.as_ref().map(|r| r.chunk_size());
        assert_eq!(planned, Some(1024));

        channel.buffer_add(PcmBuffer::Double(&signal), 48000, 1024);
        channel.retrieve_frequency_and_magnitude();
        let second = channel.magnitude_buffer().snapshot().unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            assert!((a - b).abs() < 1e-9);
        }

        // A different input rate replans
        channel.buffer_add(PcmBuffer::Double(&signal), 22050, 1024);
        assert!(channel
            .cache
            .lock()
            .resampler
            .as_ref()
            .is_some_and(|r| r.matches(22050, 44100, 1024)));
    }

    #[test]
    fn test_default_window_is_raw_input() {
        let channel = AnalyseChannel::new(&AudioConfig::default()).unwrap();
        assert_eq!(channel.window_type(), WindowType::Rectangular);

        channel.buffer_add(PcmBuffer::Double(&[1.0; 512]), 44100, 512);
        channel.retrieve_frequency_and_magnitude();

        let magnitude = channel.magnitude_buffer().snapshot().unwrap();
        assert!((magnitude[0] - 512.0).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_mode_mirrors_around_quarter() {
        let n = 256;
        let channel = AnalyseChannel::with_geometry(
            48000,
            n,
            SampleFormat::Double,
            WindowType::Rectangular,
            MagnitudeMode::MirroredLegacy,
        )
        .unwrap();

        let signal = sine(1234.5, 48000.0, n);
        channel.buffer_add(PcmBuffer::Double(&signal), 48000, n);
        channel.retrieve_frequency_and_magnitude();

        let magnitude = channel.magnitude_buffer().snapshot().unwrap();
        for i in 2..n / 2 {
            assert_eq!(magnitude[i], magnitude[n / 2 + 1 - i]);
        }
    }

    #[test]
    fn test_status_ports() {
        let channel = channel(44100, 64, WindowType::Hann);
        assert_eq!(channel.buffer_cleared().read_bool(), Some(false));
        assert_eq!(channel.buffer_computed().read_bool(), Some(false));

        channel.buffer_add(PcmBuffer::Double(&[0.5; 64]), 44100, 64);
        channel.retrieve_frequency_and_magnitude();
        assert_eq!(channel.buffer_computed().read_bool(), Some(true));

        channel.buffer_add(PcmBuffer::Double(&[0.5; 64]), 44100, 64);
        assert_eq!(channel.buffer_computed().read_bool(), Some(false));

        channel.clear();
        assert_eq!(channel.buffer_cleared().read_bool(), Some(true));
        assert_eq!(channel.buffer_computed().read_bool(), Some(false));

        let magnitude = channel.magnitude_buffer().snapshot().unwrap();
        assert!(magnitude.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_status_ports_follow_cache_flags() {
        let channel = channel(8000, 64, WindowType::Rectangular);
        let agree = |channel: &AnalyseChannel| {
            assert_eq!(channel.buffer_computed().read_bool(), Some(channel.is_computed()));
            assert_eq!(channel.buffer_cleared().read_bool(), Some(channel.is_cleared()));
        };

        agree(&channel);
        channel.buffer_add(PcmBuffer::Double(&[0.5; 64]), 8000, 64);
        agree(&channel);
        channel.retrieve_frequency_and_magnitude();
        assert!(channel.is_computed());
        agree(&channel);
        channel.clear();
        assert!(channel.is_cleared());
        agree(&channel);
        channel.configure(8000, 32, SampleFormat::Double).unwrap();
        assert!(!channel.is_computed());
        agree(&channel);
    }

    #[test]
    fn test_held_snapshot_is_not_overwritten() {
        let channel = channel(8000, 128, WindowType::Rectangular);

        channel.buffer_add(PcmBuffer::Double(&sine(1000.0, 8000.0, 128)), 8000, 128);
        channel.retrieve_frequency_and_magnitude();
        let first = channel.magnitude_buffer().snapshot().unwrap();
        let first_copy = first.to_vec();

        channel.buffer_add(PcmBuffer::Double(&sine(2000.0, 8000.0, 128)), 8000, 128);
        channel.retrieve_frequency_and_magnitude();
        let second = channel.magnitude_buffer().snapshot().unwrap();

        assert_eq!(*first, first_copy);
        assert_ne!(peak_bin(&first), peak_bin(&second));
    }

    #[test]
    fn test_configure_reallocates() {
        let channel = channel(44100, 512, WindowType::Hann);
        channel.configure(48000, 256, SampleFormat::Float).unwrap();

        assert_eq!(channel.cache_samplerate(), 48000);
        assert_eq!(channel.cache_buffer_size(), 256);
        assert_eq!(channel.cache_format(), SampleFormat::Float);
        assert_eq!(channel.magnitude_buffer().with_doubles(|v| v.len()), Some(128));

        channel.buffer_add(PcmBuffer::Float(&[0.25; 1024]), 48000, 1024);
        channel.retrieve_frequency_and_magnitude();
        assert_eq!(channel.frequency_buffer().snapshot().unwrap().len(), 128);

        assert!(channel.configure(0, 256, SampleFormat::Double).is_err());
    }

    #[test]
    fn test_odd_buffer_size() {
        let channel = channel(1000, 9, WindowType::Rectangular);
        channel.buffer_add(PcmBuffer::Double(&[1.0; 9]), 1000, 9);
        channel.retrieve_frequency_and_magnitude();

        let magnitude = channel.magnitude_buffer().snapshot().unwrap();
        assert_eq!(magnitude.len(), 5);
        assert!((magnitude[0] - 9.0).abs() < 1e-9);
        assert_eq!(magnitude[4], 0.0);
    }

    #[test]
    fn test_short_buffer_is_zero_padded() {
        let channel = channel(1000, 16, WindowType::Rectangular);
        channel.buffer_add(PcmBuffer::Double(&[1.0; 16]), 1000, 16);
        channel.buffer_add(PcmBuffer::Double(&[1.0; 4]), 1000, 4);
        channel.retrieve_frequency_and_magnitude();

        let magnitude = channel.magnitude_buffer().snapshot().unwrap();
        assert!((magnitude[0] - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let channel = channel(1000, 16, WindowType::Hann);
        channel.clear();
        channel.buffer_add(PcmBuffer::Double(&[]), 1000, 0);
        channel.buffer_add(PcmBuffer::Double(&[1.0; 16]), 1000, 0);
        assert_eq!(channel.buffer_cleared().read_bool(), Some(true));
    }

    #[test]
    fn test_invalid_geometry() {
        let err = AnalyseChannel::with_geometry(
            0,
            1024,
            SampleFormat::Double,
            WindowType::Hann,
            MagnitudeMode::Bin,
        );
        assert!(matches!(err, Err(AnalyseError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_new_from_config() {
        let config = AudioConfig::default();
        let channel = AnalyseChannel::new(&config).unwrap();

        assert_eq!(channel.cache_samplerate(), 44100);
        assert_eq!(channel.cache_buffer_size(), 512);
        assert_eq!(channel.cache_format(), SampleFormat::Double);
        assert_eq!(channel.frequency_bins(), 256);

        let specifiers: Vec<_> = channel.ports().iter().map(|p| p.specifier()).collect();
        assert_eq!(specifiers, SPECIFIERS.to_vec());
    }
}
