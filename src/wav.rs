//! RIFF/WAVE output for quantized stereo frames.
//!
//! 16-bit stereo PCM is written with the plain 16-byte `fmt ` chunk, so the
//! header is always 44 bytes:
//!
//! ```text
//!  0  "RIFF"   4  riff size   8  "WAVE"
//! 12  "fmt "  16  16         20  format tag (1)   22  channels
//! 24  sample rate             28  byte rate        32  block align   34  bits
//! 36  "data"  40  data size   44  samples, L R L R ...
//! ```

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

use crate::config::{BITS_PER_SAMPLE, CHANNELS};
use crate::error::{BeatError, Result};
use crate::frame::StereoFrame;

pub const HEADER_LEN: usize = 44;
pub const BYTES_PER_SAMPLE: usize = BITS_PER_SAMPLE as usize / 8;

fn stereo_spec(sample_rate: u32, channel_count: u16) -> Result<WavSpec> {
    if channel_count != CHANNELS {
        return Err(BeatError::invalid(
            "channel_count",
            format!("stereo frames need {CHANNELS} channels, got {channel_count}"),
        ));
    }
    if sample_rate == 0 {
        return Err(BeatError::invalid("sample_rate", "must be greater than zero"));
    }
    Ok(WavSpec {
        channels: channel_count,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    })
}

fn write_frames<W: Write + Seek>(
    mut writer: WavWriter<W>,
    frames: &[StereoFrame<i16>],
) -> Result<()> {
    for frame in frames {
        writer.write_sample(frame.left)?;
        writer.write_sample(frame.right)?;
    }
    // Drop also finalizes but discards the error.
    writer.finalize()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `frames` as 16-bit PCM.
pub fn write_wave_file(
    path: impl AsRef<Path>,
    sample_rate: u32,
    channel_count: u16,
    frames: &[StereoFrame<i16>],
) -> Result<()> {
    let path = path.as_ref();
    let spec = stereo_spec(sample_rate, channel_count)?;
    debug!("writing {} frames to {}", frames.len(), path.display());
    let writer = WavWriter::create(path, spec)?;
    write_frames(writer, frames)
}

/// Same layout as [`write_wave_file`], returned as bytes.
pub fn encode_wave(
    sample_rate: u32,
    channel_count: u16,
    frames: &[StereoFrame<i16>],
) -> Result<Vec<u8>> {
    let spec = stereo_spec(sample_rate, channel_count)?;
    let data_len = frames.len() * channel_count as usize * BYTES_PER_SAMPLE;
    let mut cursor = Cursor::new(Vec::with_capacity(HEADER_LEN + data_len));
    write_frames(WavWriter::new(&mut cursor, spec)?, frames)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u16_at(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([bytes[at], bytes[at + 1]])
    }

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn header_fields_sit_at_riff_offsets() {
        let frames = vec![StereoFrame::new(0i16, 0i16); 10];
        let wav = encode_wave(44100, 2, &frames).unwrap();

        assert_eq!(wav.len(), HEADER_LEN + 40);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32_at(&wav, 4), 36 + 40);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u32_at(&wav, 16), 16);
        assert_eq!(u16_at(&wav, 20), 1);
        assert_eq!(u16_at(&wav, 22), 2);
        assert_eq!(u32_at(&wav, 24), 44100);
        assert_eq!(u32_at(&wav, 28), 44100 * 4);
        assert_eq!(u16_at(&wav, 32), 4);
        assert_eq!(u16_at(&wav, 34), 16);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, 40), 40);
    }

    #[test]
    fn samples_are_little_endian_left_then_right() {
        let frames = [
            StereoFrame::new(1i16, -1i16),
            StereoFrame::new(i16::MAX, i16::MIN),
        ];
        let wav = encode_wave(8, 2, &frames).unwrap();
        let data: Vec<i16> = wav[HEADER_LEN..]
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        assert_eq!(data, vec![1, -1, i16::MAX, i16::MIN]);
    }

    #[test]
    fn empty_frames_still_produce_a_header() {
        let wav = encode_wave(8000, 2, &[]).unwrap();
        assert_eq!(wav.len(), HEADER_LEN);
        assert_eq!(u32_at(&wav, 40), 0);
    }

    #[test]
    fn rejects_non_stereo_channel_counts() {
        assert!(matches!(
            encode_wave(8000, 1, &[]),
            Err(BeatError::InvalidParameter { name: "channel_count", .. })
        ));
    }

    #[test]
    fn file_matches_in_memory_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.wav");
        let frames = [StereoFrame::new(100i16, -100i16); 3];

        write_wave_file(&path, 22050, 2, &frames).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, encode_wave(22050, 2, &frames).unwrap());
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");
        let result = write_wave_file(&path, 8000, 2, &[StereoFrame::new(0, 0)]);
        assert!(matches!(result, Err(BeatError::Io(_))));
        assert!(!path.exists());
    }
}
