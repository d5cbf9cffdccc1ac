//! Spectral analysis of cached audio channels

pub mod analyse_channel;
pub mod fft;
pub mod port;
pub mod windowing;

pub use analyse_channel::{spectrum_len, AnalyseChannel, MagnitudeMode};
pub use fft::HalfComplexPlan;
pub use port::{Port, PortValue};
pub use windowing::{generate_window, WindowType};
