//! Offline binaural beat generator.
//!
//! Two sine tones, one per ear, rendered over a fixed time grid, quantized to
//! 16-bit PCM and written as a RIFF/WAVE file. The whole pipeline is a single
//! forward pass:
//!
//! ```text
//! BeatConfig -> time grid -> left/right channels -> stereo frames -> i16 frames -> .wav
//! ```

pub mod config;
pub mod error;
pub mod frame;
pub mod synth;
pub mod wav;

use std::path::{Path, PathBuf};

use log::{debug, info};

pub use config::BeatConfig;
pub use error::{BeatError, Result};
pub use frame::{interleave_stereo, quantize_to_int16, StereoFrame};
pub use synth::{generate_time_grid, synthesize_channel};
pub use wav::{encode_wave, write_wave_file};

/// What [`render_to_file`] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub path: PathBuf,
    pub frames: usize,
    pub bytes: u64,
}

/// Runs the synthesis half of the pipeline and returns quantized frames.
pub fn render(config: &BeatConfig) -> Result<Vec<StereoFrame<i16>>> {
    config.validate()?;
    synth::warn_if_aliasing("left", config.frequency_left, config.sample_rate);
    synth::warn_if_aliasing("right", config.frequency_right, config.sample_rate);

    let grid = generate_time_grid(config.sample_rate, config.duration_secs)?;
    debug!(
        "rendering {} frames at {} Hz ({} Hz / {} Hz, beat {} Hz)",
        grid.len(),
        config.sample_rate,
        config.frequency_left,
        config.frequency_right,
        config.beat_frequency()
    );

    let left = synthesize_channel(&grid, config.frequency_left, config.amplitude)?;
    let right = synthesize_channel(&grid, config.frequency_right, config.amplitude)?;
    let frames = interleave_stereo(&left, &right)?;
    Ok(quantize_to_int16(&frames))
}

/// Renders `config` and writes it to `path`, replacing any existing file.
///
/// Parameters are validated before the file is opened, so an invalid config
/// never leaves anything on disk.
pub fn render_to_file(config: &BeatConfig, path: impl AsRef<Path>) -> Result<RenderSummary> {
    let path = path.as_ref();
    let frames = render(config)?;
    write_wave_file(path, config.sample_rate, config::CHANNELS, &frames)?;

    let bytes = std::fs::metadata(path)?.len();
    info!("wrote {} ({} frames, {} bytes)", path.display(), frames.len(), bytes);
    Ok(RenderSummary {
        path: path.to_path_buf(),
        frames: frames.len(),
        bytes,
    })
}
