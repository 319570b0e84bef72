use crate::error::{BeatError, Result};

/// One time-aligned left/right sample pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StereoFrame<T> {
    pub left: T,
    pub right: T,
}

impl<T> StereoFrame<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }
}

/// Pairs two channels positionally: frame `i` is `(left[i], right[i])`.
pub fn interleave_stereo(left: &[f64], right: &[f64]) -> Result<Vec<StereoFrame<f64>>> {
    if left.len() != right.len() {
        return Err(BeatError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left
        .iter()
        .zip(right)
        .map(|(&l, &r)| StereoFrame::new(l, r))
        .collect())
}

/// Maps `s` to `round(s * 32767)`, saturating at the i16 bounds.
///
/// Overshoot clips instead of wrapping around. NaN becomes silence.
pub fn quantize_sample(s: f64) -> i16 {
    // `as` from float saturates and sends NaN to 0.
    (s * i16::MAX as f64).round() as i16
}

pub fn quantize_to_int16(frames: &[StereoFrame<f64>]) -> Vec<StereoFrame<i16>> {
    frames
        .iter()
        .map(|f| StereoFrame::new(quantize_sample(f.left), quantize_sample(f.right)))
        .collect()
}
