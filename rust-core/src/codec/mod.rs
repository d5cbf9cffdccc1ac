//! PCM format conversion and resampling into the analysis cache

pub mod format;
pub mod resample;

pub use format::{ComplexSample, PcmBuffer, SampleFormat};
pub use resample::{resample, resampled_len, BufferResampler};
