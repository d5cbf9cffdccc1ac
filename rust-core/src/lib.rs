//! Spectral Cache - Real-Time Spectral Analysis Core
//!
//! Per-channel spectral analysis publishing frequency and magnitude ports,
//! a shared registry of precomputed complex frequency bases, and alias-free
//! envelope reconstruction from quadrature signal pairs.

pub mod aliase;
pub mod audio;
pub mod codec;
pub mod config;
pub mod error;
pub mod frequency_map;
pub mod spectrum;

pub use aliase::{AliaseBuffers, AliaseProcessor, Quadrature};
pub use audio::AnalyseFeed;
pub use codec::{ComplexSample, PcmBuffer, SampleFormat};
pub use config::AudioConfig;
pub use error::{AnalyseError, ConfigError};
pub use frequency_map::{FrequencyMap, FrequencyMapManager, FrequencyMapParams, OscillatorMode};
pub use spectrum::{AnalyseChannel, MagnitudeMode, Port, PortValue, WindowType};
