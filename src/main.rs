use anyhow::Context;
use binaural_beat::{render_to_file, BeatConfig};
use console::style;

const PATH: &str = "binaural_beat.wav";

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let config = BeatConfig::default();
    println!(
        "Rendering {}s binaural beat: {} Hz left, {} Hz right ({} Hz beat)",
        config.duration_secs,
        config.frequency_left,
        config.frequency_right,
        config.beat_frequency()
    );

    let summary = render_to_file(&config, PATH)
        .with_context(|| format!("failed to render binaural beat to {PATH}"))?;

    println!(
        "{} {} ({} frames, {} bytes)",
        style("Wrote").green().bold(),
        summary.path.display(),
        summary.frames,
        summary.bytes
    );
    Ok(())
}
