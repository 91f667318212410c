//! Read-back check of a written file

use std::path::Path;

use crate::analysis::dominant_frequency;
use crate::audio::load_audio;
use crate::wav::AudioFormat;

pub(crate) struct VerifyReport {
    pub(crate) sample_rate: u32,
    pub(crate) channels: u16,
    pub(crate) bits_per_sample: u32,
    pub(crate) frames: usize,
    pub(crate) dominant_hz: Option<f32>,
}

/// Decode `path` and compare it against the format and length it was written with
pub(crate) fn verify_wave(
    path: &Path,
    expected: AudioFormat,
    expected_frames: u64,
) -> Result<VerifyReport, String> {
    let audio = load_audio(path)?;

    if !audio.is_pcm_s16 {
        return Err("data is not 16-bit signed PCM".to_string());
    }
    let bits_per_sample = audio.bits_per_sample.unwrap_or(expected.bits_per_sample as u32);
    if audio.sample_rate != expected.sample_rate
        || audio.channels != expected.channels
        || bits_per_sample != expected.bits_per_sample as u32
    {
        return Err(format!(
            "format is {} Hz / {} ch / {} bit, expected {} Hz / {} ch / {} bit",
            audio.sample_rate,
            audio.channels,
            bits_per_sample,
            expected.sample_rate,
            expected.channels,
            expected.bits_per_sample
        ));
    }
    if audio.samples.len() as u64 != expected_frames {
        return Err(format!(
            "decoded {} frames, expected {}",
            audio.samples.len(),
            expected_frames
        ));
    }

    Ok(VerifyReport {
        sample_rate: audio.sample_rate,
        channels: audio.channels,
        bits_per_sample,
        frames: audio.samples.len(),
        dominant_hz: dominant_frequency(&audio.samples, audio.sample_rate),
    })
}
