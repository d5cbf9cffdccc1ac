//! PCM sample representations and normalized conversion
//!
//! Integer formats are mapped to [-1, 1] by dividing through their positive
//! full scale. 24-bit samples live in the low bits of an `i32`.

use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Full-scale magnitude of signed 24-bit audio
pub const S24_MAX: i32 = 8_388_607;
pub const S24_MIN: i32 = -8_388_608;

/// Two-component complex sample
pub type ComplexSample = Complex<f64>;

/// Supported sample representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    S8,
    S16,
    S24,
    S32,
    S64,
    Float,
    Double,
    Complex,
}

impl SampleFormat {
    pub const ALL: [SampleFormat; 8] = [
        SampleFormat::S8,
        SampleFormat::S16,
        SampleFormat::S24,
        SampleFormat::S32,
        SampleFormat::S64,
        SampleFormat::Float,
        SampleFormat::Double,
        SampleFormat::Complex,
    ];

    /// Positive full scale used for normalization (1.0 for floating formats)
    pub fn full_scale(&self) -> f64 {
        match self {
            SampleFormat::S8 => i8::MAX as f64,
            SampleFormat::S16 => i16::MAX as f64,
            SampleFormat::S24 => S24_MAX as f64,
            SampleFormat::S32 => i32::MAX as f64,
            SampleFormat::S64 => i64::MAX as f64,
            SampleFormat::Float | SampleFormat::Double | SampleFormat::Complex => 1.0,
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(
            self,
            SampleFormat::Float | SampleFormat::Double | SampleFormat::Complex
        )
    }

    /// Round a normalized sample to the precision of this format
    ///
    /// Values are clamped to the representable range of integer formats.
    /// `Float` rounds through `f32`; `Double` and `Complex` pass through.
    pub fn requantize(&self, value: f64) -> f64 {
        match self {
            SampleFormat::Float => value as f32 as f64,
            SampleFormat::Double | SampleFormat::Complex => value,
            _ => {
                let scale = self.full_scale();
                (value * scale).round().clamp(-scale - 1.0, scale) / scale
            }
        }
    }
}

/// Borrowed PCM buffer tagged with its format
#[derive(Debug, Clone, Copy)]
pub enum PcmBuffer<'a> {
    S8(&'a [i8]),
    S16(&'a [i16]),
    S24(&'a [i32]),
    S32(&'a [i32]),
    S64(&'a [i64]),
    Float(&'a [f32]),
    Double(&'a [f64]),
    Complex(&'a [Complex<f64>]),
}

impl<'a> PcmBuffer<'a> {
    pub fn format(&self) -> SampleFormat {
        match self {
            PcmBuffer::S8(_) => SampleFormat::S8,
            PcmBuffer::S16(_) => SampleFormat::S16,
            PcmBuffer::S24(_) => SampleFormat::S24,
            PcmBuffer::S32(_) => SampleFormat::S32,
            PcmBuffer::S64(_) => SampleFormat::S64,
            PcmBuffer::Float(_) => SampleFormat::Float,
            PcmBuffer::Double(_) => SampleFormat::Double,
            PcmBuffer::Complex(_) => SampleFormat::Complex,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PcmBuffer::S8(b) => b.len(),
            PcmBuffer::S16(b) => b.len(),
            PcmBuffer::S24(b) | PcmBuffer::S32(b) => b.len(),
            PcmBuffer::S64(b) => b.len(),
            PcmBuffer::Float(b) => b.len(),
            PcmBuffer::Double(b) => b.len(),
            PcmBuffer::Complex(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert the first `frames` samples to normalized `f64`
    ///
    /// Complex samples contribute their real component.
    pub fn to_f64(&self, frames: usize) -> Vec<f64> {
        let n = frames.min(self.len());
        let scale = self.format().full_scale();

        match self {
            PcmBuffer::S8(b) => b[..n].iter().map(|&s| s as f64 / scale).collect(),
            PcmBuffer::S16(b) => b[..n].iter().map(|&s| s as f64 / scale).collect(),
            PcmBuffer::S24(b) => b[..n]
                .iter()
                .map(|&s| s.clamp(S24_MIN, S24_MAX) as f64 / scale)
                .collect(),
            PcmBuffer::S32(b) => b[..n].iter().map(|&s| s as f64 / scale).collect(),
            PcmBuffer::S64(b) => b[..n].iter().map(|&s| s as f64 / scale).collect(),
            PcmBuffer::Float(b) => b[..n].iter().map(|&s| s as f64).collect(),
            PcmBuffer::Double(b) => b[..n].to_vec(),
            PcmBuffer::Complex(b) => b[..n].iter().map(|z| z.re).collect(),
        }
    }
}
