//! Real-to-half-complex transform plan built on realfft
//!
//! The output uses the FFTW R2HC layout: for a transform of size n,
//! `out[k]` holds Re X[k] for k = 0..=n/2 and `out[n-k]` holds Im X[k]
//! for k = 1..(n+1)/2.

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

use super::windowing::apply_window_into;
use crate::error::{try_zeroed, AnalyseError};

/// Planned real-to-half-complex transform of fixed size
pub struct HalfComplexPlan {
    /// Transform size (number of samples)
    size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Scratch input (realfft overwrites its input)
    scratch_in: Vec<f64>,

    /// Complex spectrum, size/2 + 1 bins
    spectrum: Vec<Complex<f64>>,
}

impl HalfComplexPlan {
    /// Plan a transform of `size` samples
    pub fn new(size: usize) -> Result<Self, AnalyseError> {
        if size == 0 {
            return Err(AnalyseError::InvalidGeometry {
                samplerate: 0,
                buffer_size: size,
            });
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(size);

        let scratch_in = try_zeroed("transform input", size)?;
        let spectrum = try_zeroed("transform spectrum", size / 2 + 1)?;

        Ok(Self {
            size,
            r2c,
            scratch_in,
            spectrum,
        })
    }

    /// Transform `input` into `out` in half-complex order
    ///
    /// `input` and `out` must both hold `size` samples.
    pub fn execute(&mut self, input: &[f64], out: &mut [f64]) -> Result<(), AnalyseError> {
        let n = self.size;
        self.scratch_in.copy_from_slice(&input[..n]);

        self.transform_into(out)
    }

    /// Windowed variant: `input[i] * window[i]` is transformed
    pub fn execute_windowed(
        &mut self,
        input: &[f64],
        window: &[f64],
        out: &mut [f64],
    ) -> Result<(), AnalyseError> {
        let n = self.size;
        apply_window_into(&input[..n], &window[..n], &mut self.scratch_in);

        self.transform_into(out)
    }

    fn transform_into(&mut self, out: &mut [f64]) -> Result<(), AnalyseError> {
        let n = self.size;

        self.r2c.process(&mut self.scratch_in, &mut self.spectrum)?;

        for k in 0..=n / 2 {
            out[k] = self.spectrum[k].re;
        }
        for k in 1..(n + 1) / 2 {
            out[n - k] = self.spectrum[k].im;
        }

        Ok(())
    }

    /// Get transform size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Complex spectrum of the last execution (bins 0..=size/2)
    pub fn spectrum(&self) -> &[Complex<f64>] {
        &self.spectrum
    }
}
