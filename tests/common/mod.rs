//! Common test utilities

use std::f64::consts::PI;
use std::path::Path;

/// Fields of a canonical 44-byte PCM WAVE header plus its samples
#[derive(Debug)]
pub struct WavInfo {
    pub riff_size: u32,
    pub fmt_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
    pub samples: Vec<i16>,
}

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Parse a WAVE file laid out as RIFF, fmt, data with no extra chunks
pub fn read_wav(path: &Path) -> WavInfo {
    let bytes = std::fs::read(path).expect("failed to read wav");
    assert!(bytes.len() >= 44, "file shorter than a WAVE header");
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[12..16], b"fmt ");
    assert_eq!(&bytes[36..40], b"data");

    let samples = bytes[44..]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();

    WavInfo {
        riff_size: u32_at(&bytes, 4),
        fmt_size: u32_at(&bytes, 16),
        audio_format: u16_at(&bytes, 20),
        channels: u16_at(&bytes, 22),
        sample_rate: u32_at(&bytes, 24),
        byte_rate: u32_at(&bytes, 28),
        block_align: u16_at(&bytes, 32),
        bits_per_sample: u16_at(&bytes, 34),
        data_size: u32_at(&bytes, 40),
        samples,
    }
}

/// Reference value of sample `n` for the given harmonics, phase reset every second
pub fn expected_sample(freqs: &[u32], n: usize, sample_rate: u32) -> i16 {
    let t = (n % sample_rate as usize) as f64 / sample_rate as f64;
    let amplitude = 32765.0 / freqs.len() as f64;
    let sum: f64 = freqs
        .iter()
        .map(|&f| (2.0 * PI * f as f64 * t).sin() * amplitude)
        .sum();
    sum as i16
}
