use crate::error::{BeatError, Result};

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_DURATION_SECS: f64 = 30.0;
pub const DEFAULT_FREQUENCY_LEFT: f64 = 310.0;
pub const DEFAULT_FREQUENCY_RIGHT: f64 = 315.0;
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Output is always interleaved stereo, one tone per ear.
pub const CHANNELS: u16 = 2;
pub const BITS_PER_SAMPLE: u16 = 16;

/// Parameters for one rendered beat.
///
/// Build with [`BeatConfig::default`] or [`BeatConfig::from_base_and_beat`]
/// and adjust with the `with_*` setters. Nothing is checked until
/// [`BeatConfig::validate`] runs, which every rendering entry point does
/// before touching any sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatConfig {
    pub sample_rate: u32,
    pub duration_secs: f64,
    pub frequency_left: f64,
    pub frequency_right: f64,
    pub amplitude: f64,
}

impl Default for BeatConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_secs: DEFAULT_DURATION_SECS,
            frequency_left: DEFAULT_FREQUENCY_LEFT,
            frequency_right: DEFAULT_FREQUENCY_RIGHT,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}

impl BeatConfig {
    /// Left ear plays `base_hz`, right ear plays `base_hz + beat_hz`.
    pub fn from_base_and_beat(base_hz: f64, beat_hz: f64) -> Self {
        Self {
            frequency_left: base_hz,
            frequency_right: base_hz + beat_hz,
            ..Self::default()
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn with_frequencies(mut self, left: f64, right: f64) -> Self {
        self.frequency_left = left;
        self.frequency_right = right;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// The perceived beat rate in Hz.
    pub fn beat_frequency(&self) -> f64 {
        (self.frequency_right - self.frequency_left).abs()
    }

    /// Number of stereo frames the time grid will hold.
    pub fn frame_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_secs).floor() as usize
    }

    pub fn wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: CHANNELS,
            sample_rate: self.sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_format: hound::SampleFormat::Int,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_grid_params(self.sample_rate, self.duration_secs)?;
        check_frequency("frequency_left", self.frequency_left)?;
        check_frequency("frequency_right", self.frequency_right)?;
        check_amplitude(self.amplitude)
    }
}

/// Largest frame count whose 16-bit stereo payload still fits the 32-bit
/// RIFF size field (which also counts the 36 header bytes after it).
pub(crate) const MAX_FRAMES: u64 = (u32::MAX as u64 - 36) / (CHANNELS as u64 * 2);

pub(crate) fn check_grid_params(sample_rate: u32, duration_secs: f64) -> Result<()> {
    if sample_rate == 0 {
        return Err(BeatError::invalid("sample_rate", "must be greater than zero"));
    }
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(BeatError::invalid(
            "duration_secs",
            format!("must be a positive number of seconds, got {duration_secs}"),
        ));
    }
    let frames = (sample_rate as f64 * duration_secs).floor();
    if frames > MAX_FRAMES as f64 {
        return Err(BeatError::invalid(
            "duration_secs",
            format!("{frames} frames do not fit in a WAVE data chunk (max {MAX_FRAMES})"),
        ));
    }
    Ok(())
}

pub(crate) fn check_frequency(name: &'static str, frequency: f64) -> Result<()> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(BeatError::invalid(
            name,
            format!("must be a positive frequency in Hz, got {frequency}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_amplitude(amplitude: f64) -> Result<()> {
    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&amplitude) {
        return Err(BeatError::invalid(
            "amplitude",
            format!("must lie in [0, 1], got {amplitude}"),
        ));
    }
    Ok(())
}
