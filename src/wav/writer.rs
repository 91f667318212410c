//! Header + sample serialization

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::header::{AudioFormat, WaveHeader};
use crate::error::WavError;
use crate::synth::SampleBuffer;

/// Samples packed per `write_all` call
pub(crate) const WRITE_WINDOW_SAMPLES: usize = 4096;

/// Write a complete WAVE stream from an already synthesized buffer
pub(crate) fn write_wave<W: Write>(
    samples: SampleBuffer,
    format: AudioFormat,
    sink: W,
    on_progress: impl FnMut(u32),
) -> Result<(), WavError> {
    stream_wave(samples.as_slice().iter().copied(), format, sink, on_progress)
}

/// Write a complete WAVE stream, pulling samples as each window is filled.
///
/// `on_progress` receives the completed percentage whenever it changes.
pub(crate) fn stream_wave<I, W>(
    samples: I,
    format: AudioFormat,
    mut sink: W,
    mut on_progress: impl FnMut(u32),
) -> Result<(), WavError>
where
    I: ExactSizeIterator<Item = i16>,
    W: Write,
{
    let total = samples.len();
    let header = WaveHeader::new(format, total as u64)?;
    header.write_to(&mut sink)?;

    let sample_bytes = format.bytes_per_sample() as usize;
    let window_bytes = WRITE_WINDOW_SAMPLES * sample_bytes;
    let mut window: Vec<u8> = Vec::with_capacity(window_bytes);
    let mut written = 0usize;
    let mut last_progress = 0;
    on_progress(0);

    for sample in samples {
        window.extend_from_slice(&sample.to_le_bytes());
        if window.len() == window_bytes {
            sink.write_all(&window)?;
            written += window.len() / sample_bytes;
            window.clear();

            let progress = (written * 100 / total) as u32;
            if progress != last_progress {
                last_progress = progress;
                on_progress(progress);
            }
        }
    }

    if !window.is_empty() {
        sink.write_all(&window)?;
    }
    sink.flush()?;

    if last_progress != 100 {
        on_progress(100);
    }

    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>, WavError> {
    let file = File::create(path).map_err(|source| WavError::CannotCreate {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Create (or overwrite) `path` and write the buffer to it
pub(crate) fn write_wave_file(
    path: &Path,
    samples: SampleBuffer,
    format: AudioFormat,
    on_progress: impl FnMut(u32),
) -> Result<(), WavError> {
    // Size is checked before the file is touched
    WaveHeader::new(format, samples.len() as u64)?;
    let writer = create_file(path)?;
    write_wave(samples, format, writer, on_progress)
}

/// Create (or overwrite) `path` and stream samples into it
pub(crate) fn stream_wave_file<I>(
    path: &Path,
    samples: I,
    format: AudioFormat,
    on_progress: impl FnMut(u32),
) -> Result<(), WavError>
where
    I: ExactSizeIterator<Item = i16>,
{
    WaveHeader::new(format, samples.len() as u64)?;
    let writer = create_file(path)?;
    stream_wave(samples, format, writer, on_progress)
}
