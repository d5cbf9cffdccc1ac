//! Waveforms used to fill frequency maps

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Oscillator waveform of a frequency map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OscillatorMode {
    #[default]
    Sin,
    Sawtooth,
    Triangle,
    Square,
    Impulse,
}

impl OscillatorMode {
    /// Unit-amplitude value at `frame` for an oscillator at `freq` Hz
    pub fn sample(&self, frame: f64, freq: f64, samplerate: u32) -> f64 {
        if samplerate == 0 {
            return 0.0;
        }

        let cycles = frame * freq / samplerate as f64;
        let angle = 2.0 * PI * cycles;

        match self {
            OscillatorMode::Sin => angle.sin(),
            OscillatorMode::Sawtooth => 2.0 * cycles.rem_euclid(1.0) - 1.0,
            OscillatorMode::Triangle => 4.0 * (cycles.rem_euclid(1.0) - 0.5).abs() - 1.0,
            OscillatorMode::Square => {
                if angle.sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            OscillatorMode::Impulse => {
                // Pulse edge at sin(2π·3/5)
                if angle.sin() >= (2.0 * PI * 3.0 / 5.0).sin() {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}
