//! Precomputed complex frequency bases shared between DSP consumers
//!
//! A [`FrequencyMap`] holds the accumulated short-time spectrum of one
//! oscillator bin. The [`FrequencyMapManager`] keeps per-bin maps and one
//! factorized aggregate per (samplerate, buffer size) pair.

mod manager;
mod map;
mod oscillator;

pub use manager::{
    bin_frequency, get_instance, FrequencyMapManager, DEFAULT_BUFFER_SIZES, DEFAULT_SAMPLERATES,
    EQUINOX_FREQUENCY, PRESERVE_FREQUENCY_MAP,
};
pub use map::{FrequencyMap, FrequencyMapParams, DEFAULT_FREQ, FACTORIZED_FREQ};
pub use oscillator::OscillatorMode;
