use super::Quadrature;
use num_complex::Complex;

#[derive(Debug, Clone, Copy)]
pub(super) struct Strides {
    pub destination: usize,
    pub source: usize,
    pub phase_shifted_source: usize,
}

impl Strides {
    /// Element offsets of sample `i`, or `None` once an offset overflows
    #[inline]
    fn at(self, i: usize) -> Option<Strides> {
        Some(Strides {
            destination: i.checked_mul(self.destination)?,
            source: i.checked_mul(self.source)?,
            phase_shifted_source: i.checked_mul(self.phase_shifted_source)?,
        })
    }
}

/// Signed Euclidean magnitude of a quadrature pair
///
/// Negative when both operands are negative, or when the negative operand
/// has the larger magnitude.
#[inline]
pub fn signed_envelope(source: f64, phase_shifted_source: f64) -> f64 {
    let magnitude = (source * source + phase_shifted_source * phase_shifted_source).sqrt();

    if is_negative(source, phase_shifted_source) {
        -magnitude
    } else {
        magnitude
    }
}

#[inline]
fn is_negative(s: f64, p: f64) -> bool {
    (s < 0.0 && p < 0.0) || (s < 0.0 && s.abs() > p) || (p < 0.0 && p.abs() > s)
}

pub(super) fn envelope_kernel<T: Copy>(
    q: &mut Quadrature<'_, T>,
    strides: Strides,
    buffer_length: usize,
    load: impl Fn(T) -> f64,
    store: impl Fn(f64) -> T,
) {
    let (Some(destination), Some(source), Some(shifted)) = (
        q.destination.as_deref_mut(),
        q.source,
        q.phase_shifted_source,
    ) else {
        return;
    };

    for i in 0..buffer_length {
        let Some(at) = strides.at(i) else {
            break;
        };
        let (Some(&s), Some(&p)) = (source.get(at.source), shifted.get(at.phase_shifted_source))
        else {
            break;
        };
        let Some(slot) = destination.get_mut(at.destination) else {
            break;
        };

        *slot = store(signed_envelope(load(s), load(p)));
    }
}

pub(super) fn complex_envelope_kernel(
    q: &mut Quadrature<'_, Complex<f64>>,
    strides: Strides,
    buffer_length: usize,
) {
    let (Some(destination), Some(source), Some(shifted)) = (
        q.destination.as_deref_mut(),
        q.source,
        q.phase_shifted_source,
    ) else {
        return;
    };

    for i in 0..buffer_length {
        let Some(at) = strides.at(i) else {
            break;
        };
        let (Some(s), Some(p)) = (source.get(at.source), shifted.get(at.phase_shifted_source))
        else {
            break;
        };
        let Some(slot) = destination.get_mut(at.destination) else {
            break;
        };

        let magnitude = (s.norm_sqr() + p.norm_sqr()).sqrt();
        let sign = if is_negative(s.re, p.re) { -1.0 } else { 1.0 };

        *slot = Complex::new(sign * magnitude, 0.0);
    }
}
