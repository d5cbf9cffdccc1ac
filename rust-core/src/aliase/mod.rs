//! Alias-free envelope reconstruction from a quadrature signal pair
//!
//! Given a signal and its 90°-phase-shifted twin, each output sample is the
//! Euclidean magnitude of the pair, signed by whichever operand dominates.
//! Eight sample representations are supported, each with its own kernel.

mod kernel;

pub use kernel::signed_envelope;

use crate::codec::format::{S24_MAX, S24_MIN};
use crate::codec::SampleFormat;
use kernel::{envelope_kernel, Strides};
use num_complex::Complex;

/// Destination, source and phase-shifted source for one format
///
/// A `None` buffer stands for a missing (null) buffer and turns processing
/// into a no-op.
#[derive(Debug, Default)]
pub struct Quadrature<'a, T> {
    pub destination: Option<&'a mut [T]>,
    pub source: Option<&'a [T]>,
    pub phase_shifted_source: Option<&'a [T]>,
}

impl<'a, T> Quadrature<'a, T> {
    pub fn new(destination: &'a mut [T], source: &'a [T], phase_shifted_source: &'a [T]) -> Self {
        Self {
            destination: Some(destination),
            source: Some(source),
            phase_shifted_source: Some(phase_shifted_source),
        }
    }
}

/// Typed buffers; the variant selects the processing kernel
#[derive(Debug)]
pub enum AliaseBuffers<'a> {
    S8(Quadrature<'a, i8>),
    S16(Quadrature<'a, i16>),
    /// 24-bit samples stored in `i32`
    S24(Quadrature<'a, i32>),
    S32(Quadrature<'a, i32>),
    S64(Quadrature<'a, i64>),
    Float(Quadrature<'a, f32>),
    Double(Quadrature<'a, f64>),
    Complex(Quadrature<'a, Complex<f64>>),
}

impl AliaseBuffers<'_> {
    pub fn format(&self) -> SampleFormat {
        match self {
            AliaseBuffers::S8(_) => SampleFormat::S8,
            AliaseBuffers::S16(_) => SampleFormat::S16,
            AliaseBuffers::S24(_) => SampleFormat::S24,
            AliaseBuffers::S32(_) => SampleFormat::S32,
            AliaseBuffers::S64(_) => SampleFormat::S64,
            AliaseBuffers::Float(_) => SampleFormat::Float,
            AliaseBuffers::Double(_) => SampleFormat::Double,
            AliaseBuffers::Complex(_) => SampleFormat::Complex,
        }
    }
}

/// Configured envelope reconstruction over one set of buffers
///
/// Performs no locking: callers must not mutate the inputs concurrently.
#[derive(Debug)]
pub struct AliaseProcessor<'a> {
    buffers: AliaseBuffers<'a>,
    destination_stride: usize,
    source_stride: usize,
    phase_shifted_source_stride: usize,
    buffer_length: usize,
}

impl<'a> AliaseProcessor<'a> {
    /// Create a processor with unit strides
    pub fn new(buffers: AliaseBuffers<'a>, buffer_length: usize) -> Self {
        Self {
            buffers,
            destination_stride: 1,
            source_stride: 1,
            phase_shifted_source_stride: 1,
            buffer_length,
        }
    }

    /// Set interleaving strides for destination, source and phase-shifted source
    pub fn with_strides(
        mut self,
        destination_stride: usize,
        source_stride: usize,
        phase_shifted_source_stride: usize,
    ) -> Self {
        self.destination_stride = destination_stride;
        self.source_stride = source_stride;
        self.phase_shifted_source_stride = phase_shifted_source_stride;
        self
    }

    pub fn format(&self) -> SampleFormat {
        self.buffers.format()
    }

    pub fn buffer_length(&self) -> usize {
        self.buffer_length
    }

    pub fn set_buffer_length(&mut self, buffer_length: usize) {
        self.buffer_length = buffer_length;
    }

    /// Release the buffers
    pub fn into_buffers(self) -> AliaseBuffers<'a> {
        self.buffers
    }

    fn strides(&self) -> Strides {
        Strides {
            destination: self.destination_stride,
            source: self.source_stride,
            phase_shifted_source: self.phase_shifted_source_stride,
        }
    }

    /// Run the kernel matching the configured format
    pub fn process(&mut self) {
        match self.format() {
            SampleFormat::S8 => self.process_s8(),
            SampleFormat::S16 => self.process_s16(),
            SampleFormat::S24 => self.process_s24(),
            SampleFormat::S32 => self.process_s32(),
            SampleFormat::S64 => self.process_s64(),
            SampleFormat::Float => self.process_float(),
            SampleFormat::Double => self.process_double(),
            SampleFormat::Complex => self.process_complex(),
        }
    }

    pub fn process_s8(&mut self) {
        let (strides, len) = (self.strides(), self.buffer_length);
        if let AliaseBuffers::S8(q) = &mut self.buffers {
            envelope_kernel(q, strides, len, |s| s as f64, |v| v.round() as i8);
        }
    }

    pub fn process_s16(&mut self) {
        let (strides, len) = (self.strides(), self.buffer_length);
        if let AliaseBuffers::S16(q) = &mut self.buffers {
            envelope_kernel(q, strides, len, |s| s as f64, |v| v.round() as i16);
        }
    }

    pub fn process_s24(&mut self) {
        let (strides, len) = (self.strides(), self.buffer_length);
        if let AliaseBuffers::S24(q) = &mut self.buffers {
            envelope_kernel(
                q,
                strides,
                len,
                |s| s.clamp(S24_MIN, S24_MAX) as f64,
                |v| v.round().clamp(S24_MIN as f64, S24_MAX as f64) as i32,
            );
        }
    }

    pub fn process_s32(&mut self) {
        let (strides, len) = (self.strides(), self.buffer_length);
        if let AliaseBuffers::S32(q) = &mut self.buffers {
            envelope_kernel(q, strides, len, |s| s as f64, |v| v.round() as i32);
        }
    }

    pub fn process_s64(&mut self) {
        let (strides, len) = (self.strides(), self.buffer_length);
        if let AliaseBuffers::S64(q) = &mut self.buffers {
            envelope_kernel(q, strides, len, |s| s as f64, |v| v.round() as i64);
        }
    }

    pub fn process_float(&mut self) {
        let (strides, len) = (self.strides(), self.buffer_length);
        if let AliaseBuffers::Float(q) = &mut self.buffers {
            envelope_kernel(q, strides, len, |s| s as f64, |v| v as f32);
        }
    }

    pub fn process_double(&mut self) {
        let (strides, len) = (self.strides(), self.buffer_length);
        if let AliaseBuffers::Double(q) = &mut self.buffers {
            envelope_kernel(q, strides, len, |s| s, |v| v);
        }
    }

    /// Complex samples: sign from the real parts, magnitude from the moduli
    pub fn process_complex(&mut self) {
        let (strides, len) = (self.strides(), self.buffer_length);
        if let AliaseBuffers::Complex(q) = &mut self.buffers {
            kernel::complex_envelope_kernel(q, strides, len);
        }
    }
}
