//! RIFF/WAVE container output

mod header;
mod writer;

pub(crate) use header::{AudioFormat, WaveHeader};
pub(crate) use writer::{stream_wave_file, write_wave_file};
