//! WAVE header layout
//!
//! Three fixed-size records precede the sample data:
//!
//! | record      | bytes | fields                                              |
//! |-------------|-------|-----------------------------------------------------|
//! | RIFF chunk  | 12    | "RIFF", chunk size, "WAVE"                          |
//! | fmt chunk   | 24    | "fmt ", 16, PCM tag, channels, rate, byte rate, ... |
//! | data header | 8     | "data", data size                                   |
//!
//! All integers are little-endian regardless of the host.

use std::io::Write;

use crate::error::WavError;

const RIFF_HEADER_LEN: u32 = 12;
const FMT_CHUNK_LEN: u32 = 24;
const DATA_HEADER_LEN: u32 = 8;

/// Total bytes before the first sample
pub(crate) const HEADER_LEN: u32 = RIFF_HEADER_LEN + FMT_CHUNK_LEN + DATA_HEADER_LEN;

/// Size field of a PCM fmt chunk (excludes its own id and size)
const FMT_BODY_LEN: u32 = FMT_CHUNK_LEN - 8;

const FORMAT_PCM: u16 = 1;

/// PCM stream parameters written into the fmt chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AudioFormat {
    pub(crate) channels: u16,
    pub(crate) bits_per_sample: u16,
    pub(crate) sample_rate: u32,
}

impl AudioFormat {
    /// 16-bit mono at 44.1 kHz
    pub(crate) const CD_MONO: AudioFormat = AudioFormat {
        channels: 1,
        bits_per_sample: 16,
        sample_rate: 44100,
    };

    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame across all channels
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::CD_MONO
    }
}

/// Header for a WAVE file holding `sample_count` interleaved samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WaveHeader {
    format: AudioFormat,
    data_size: u32,
}

impl WaveHeader {
    pub(crate) fn new(format: AudioFormat, sample_count: u64) -> Result<Self, WavError> {
        if format.bits_per_sample != 16 {
            return Err(WavError::UnsupportedFormat {
                bits_per_sample: format.bits_per_sample,
            });
        }
        let data_bytes = sample_count * format.bytes_per_sample() as u64;
        let data_size = u32::try_from(data_bytes)
            .ok()
            .filter(|size| size.checked_add(HEADER_LEN - 8).is_some())
            .ok_or(WavError::TooLarge { data_bytes })?;

        Ok(Self { format, data_size })
    }

    pub(crate) fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Size field of the RIFF chunk: everything after its id and size
    pub(crate) fn riff_chunk_size(&self) -> u32 {
        self.data_size + (HEADER_LEN - 8)
    }

    pub(crate) fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let format = &self.format;

        // RIFF header
        writer.write_all(b"RIFF")?;
        writer.write_all(&self.riff_chunk_size().to_le_bytes())?;
        writer.write_all(b"WAVE")?;

        // fmt chunk
        writer.write_all(b"fmt ")?;
        writer.write_all(&FMT_BODY_LEN.to_le_bytes())?;
        writer.write_all(&FORMAT_PCM.to_le_bytes())?;
        writer.write_all(&format.channels.to_le_bytes())?;
        writer.write_all(&format.sample_rate.to_le_bytes())?;
        writer.write_all(&format.byte_rate().to_le_bytes())?;
        writer.write_all(&format.block_align().to_le_bytes())?;
        writer.write_all(&format.bits_per_sample.to_le_bytes())?;

        // data chunk
        writer.write_all(b"data")?;
        writer.write_all(&self.data_size.to_le_bytes())?;

        Ok(())
    }
}
