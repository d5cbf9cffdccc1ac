//! Error types for the analysis and configuration layers

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing or driving an analysis channel
#[derive(Error, Debug)]
pub enum AnalyseError {
    #[error("failed to allocate {what} ({len} elements): {source}")]
    Allocation {
        what: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid cache geometry: samplerate {samplerate} Hz, buffer size {buffer_size}")]
    InvalidGeometry { samplerate: u32, buffer_size: usize },

    #[error("transform failed: {0}")]
    Transform(#[from] realfft::FftError),

    #[error("failed to build resampler: {0}")]
    ResamplerConstruction(#[from] rubato::ResamplerConstructionError),

    #[error("resampling failed: {0}")]
    Resample(#[from] rubato::ResampleError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AnalyseError {
    pub(crate) fn allocation(what: &'static str, len: usize, source: TryReserveError) -> Self {
        AnalyseError::Allocation { what, len, source }
    }
}

/// Errors raised while loading the application configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Allocate a zeroed vector with fallible reservation
pub(crate) fn try_zeroed<T: Clone + Default>(
    what: &'static str,
    len: usize,
) -> Result<Vec<T>, AnalyseError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|e| AnalyseError::allocation(what, len, e))?;
    v.resize(len, T::default());
    Ok(v)
}
