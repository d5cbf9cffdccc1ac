//! Samplerate conversion for whole analysis buffers
//!
//! Wraps rubato's synchronous FFT resampler. The input is fed in fixed
//! chunks, zero-padded past its end until the resampler's delay is flushed,
//! and the delay-compensated output is trimmed to `ceil(len * to / from)`.
//! A [`BufferResampler`] keeps its plan between buffers of one geometry.

use rubato::{FftFixedIn, Resampler};

use crate::error::AnalyseError;

/// Sub-chunks used by the FFT resampler
const SUB_CHUNKS: usize = 2;

/// Smallest chunk handed to rubato; shorter buffers are zero-padded
pub const MIN_CHUNK_SIZE: usize = 64;

/// Resampler calls allowed past the input, on top of the delay
const MAX_FLUSH_CHUNKS: usize = 8;

/// Number of output frames produced for `len` input frames
pub fn resampled_len(len: usize, from_rate: u32, to_rate: u32) -> usize {
    if from_rate == 0 {
        return 0;
    }
    ((len as u64 * to_rate as u64 + from_rate as u64 - 1) / from_rate as u64) as usize
}

/// Resample a mono buffer from `from_rate` to `to_rate`
///
/// Returns a copy of `input` when the rates already match.
pub fn resample(input: &[f64], from_rate: u32, to_rate: u32) -> Result<Vec<f64>, AnalyseError> {
    if from_rate == to_rate || input.is_empty() {
        return Ok(input.to_vec());
    }

    BufferResampler::new(from_rate, to_rate, input.len())?.process(input)
}

/// Reusable mono resampler for buffers of a fixed rate pair
pub struct BufferResampler {
    from_rate: u32,
    to_rate: u32,
    chunk_size: usize,
    resampler: FftFixedIn<f64>,
}

impl BufferResampler {
    /// Plan a resampler for buffers of about `buffer_len` frames
    pub fn new(from_rate: u32, to_rate: u32, buffer_len: usize) -> Result<Self, AnalyseError> {
        let chunk_size = buffer_len.max(MIN_CHUNK_SIZE);
        let resampler = FftFixedIn::<f64>::new(
            from_rate as usize,
            to_rate as usize,
            chunk_size,
            SUB_CHUNKS,
            1,
        )?;

        Ok(Self {
            from_rate,
            to_rate,
            chunk_size,
            resampler,
        })
    }

    /// True if this resampler was planned for the given geometry
    pub fn matches(&self, from_rate: u32, to_rate: u32, buffer_len: usize) -> bool {
        self.from_rate == from_rate
            && self.to_rate == to_rate
            && self.chunk_size == buffer_len.max(MIN_CHUNK_SIZE)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Resample one whole buffer, starting from a cleared state
    pub fn process(&mut self, input: &[f64]) -> Result<Vec<f64>, AnalyseError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        self.resampler.reset();

        let target_len = resampled_len(input.len(), self.from_rate, self.to_rate);
        let delay = self.resampler.output_delay();
        let chunk_out = resampled_len(self.chunk_size, self.from_rate, self.to_rate).max(1);
        let max_flush_chunks = MAX_FLUSH_CHUNKS + delay / chunk_out;

        let mut output: Vec<f64> = Vec::with_capacity(target_len + delay);
        let mut consumed = 0;
        let mut flush_chunks = 0;

        while output.len() < target_len + delay {
            let frames = self.resampler.input_frames_next();

            let mut chunk = vec![0.0; frames];
            if consumed < input.len() {
                let n = frames.min(input.len() - consumed);
                chunk[..n].copy_from_slice(&input[consumed..consumed + n]);
                consumed += n;
            } else {
                flush_chunks += 1;
                if flush_chunks > max_flush_chunks {
                    break;
                }
            }

            let produced = self.resampler.process(&[chunk], None)?;
            if let Some(channel) = produced.into_iter().next() {
                output.extend_from_slice(&channel);
            }
        }

        let start = delay.min(output.len());
        let end = (start + target_len).min(output.len());
        let mut trimmed = output[start..end].to_vec();
        trimmed.resize(target_len, 0.0);

        Ok(trimmed)
    }
}
