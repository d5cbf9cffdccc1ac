//! Application configuration consumed at component construction
//!
//! Loaded from TOML. Every section and field is optional and falls back to
//! the defaults below.
//!
//! ```toml
//! [soundcard]
//! samplerate = 48000
//! buffer_size = 1024
//!
//! [analyse]
//! window = "hann"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::codec::SampleFormat;
use crate::error::ConfigError;
use crate::spectrum::{MagnitudeMode, WindowType};

pub const DEFAULT_SAMPLERATE: u32 = 44100;
pub const DEFAULT_BUFFER_SIZE: usize = 512;

/// Upper bound accepted for the analysis buffer size
pub const MAX_BUFFER_SIZE: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub soundcard: SoundcardConfig,
    pub analyse: AnalyseConfig,
    pub frequency_map: FrequencyMapConfig,
}

/// Soundcard geometry shared by all channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundcardConfig {
    pub samplerate: u32,
    pub buffer_size: usize,
}

impl Default for SoundcardConfig {
    fn default() -> Self {
        Self {
            samplerate: DEFAULT_SAMPLERATE,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Analysis cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyseConfig {
    pub cache_format: SampleFormat,
    pub window: WindowType,
    pub magnitude_mode: MagnitudeMode,
}

impl Default for AnalyseConfig {
    fn default() -> Self {
        Self {
            cache_format: SampleFormat::Double,
            window: WindowType::Rectangular,
            magnitude_mode: MagnitudeMode::Bin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyMapConfig {
    /// Keep per-bin maps resident after bootstrap
    pub preserve: bool,
}

impl AudioConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AudioConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.soundcard.samplerate == 0 {
            return Err(ConfigError::invalid(
                "soundcard.samplerate",
                "must be greater than zero",
            ));
        }

        let buffer_size = self.soundcard.buffer_size;
        if buffer_size == 0 || buffer_size > MAX_BUFFER_SIZE {
            return Err(ConfigError::invalid(
                "soundcard.buffer_size",
                format!("{} is outside 1..={}", buffer_size, MAX_BUFFER_SIZE),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AudioConfig::default();
        assert_eq!(config.soundcard.samplerate, 44100);
        assert_eq!(config.soundcard.buffer_size, 512);
        assert_eq!(config.analyse.cache_format, SampleFormat::Double);
        assert_eq!(config.analyse.window, WindowType::Rectangular);
        assert!(!config.frequency_map.preserve);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_document() {
        let config = AudioConfig::from_toml_str(
            r#"
            [soundcard]
            buffer_size = 1024

            [analyse]
            cache_format = "s16"
            window = "hann"
            magnitude_mode = "mirrored-legacy"

            [frequency_map]
            preserve = true
            "#,
        )
        .unwrap();

        assert_eq!(config.soundcard.samplerate, DEFAULT_SAMPLERATE);
        assert_eq!(config.soundcard.buffer_size, 1024);
        assert_eq!(config.analyse.cache_format, SampleFormat::S16);
        assert_eq!(config.analyse.window, WindowType::Hann);
        assert_eq!(config.analyse.magnitude_mode, MagnitudeMode::MirroredLegacy);
        assert!(config.frequency_map.preserve);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AudioConfig::from_toml_str("").unwrap(), AudioConfig::default());
    }

    #[test]
    fn test_rejects_zero_buffer_size() {
        let err = AudioConfig::from_toml_str("[soundcard]\nbuffer_size = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "soundcard.buffer_size",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = AudioConfig::from_toml_str("[analyse]\ncache_format = \"u8\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AudioConfig::from_file("/nonexistent/spectral-cache.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
