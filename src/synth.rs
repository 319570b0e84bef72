//! Sine synthesis over a fixed sample grid.

use std::f64::consts::PI;

use log::warn;

use crate::config::{check_amplitude, check_frequency, check_grid_params};
use crate::error::Result;

/// Sample times `i / sample_rate` for every frame in `[0, duration_secs)`.
///
/// The frame count is `floor(sample_rate * duration_secs)`; the endpoint
/// itself is never included.
pub fn generate_time_grid(sample_rate: u32, duration_secs: f64) -> Result<Vec<f64>> {
    check_grid_params(sample_rate, duration_secs)?;

    let frames = (sample_rate as f64 * duration_secs).floor() as usize;
    let rate = sample_rate as f64;
    Ok((0..frames).map(|i| i as f64 / rate).collect())
}

/// `amplitude * sin(2π * frequency * t)` for every `t` in the grid.
pub fn synthesize_channel(time_grid: &[f64], frequency: f64, amplitude: f64) -> Result<Vec<f64>> {
    check_frequency("frequency", frequency)?;
    check_amplitude(amplitude)?;

    let omega = 2.0 * PI * frequency;
    Ok(time_grid
        .iter()
        .map(|&t| amplitude * (omega * t).sin())
        .collect())
}

/// Logs a warning for tones that will alias at this sample rate.
pub(crate) fn warn_if_aliasing(channel: &str, frequency: f64, sample_rate: u32) {
    let nyquist = sample_rate as f64 / 2.0;
    if frequency >= nyquist {
        warn!(
            "{channel} frequency {frequency} Hz is at or above Nyquist ({nyquist} Hz) and will alias"
        );
    }
}
