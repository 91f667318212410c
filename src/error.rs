//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Rejected command-line input
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("duration must be a positive, non-zero number of seconds")]
    ZeroDuration,

    #[error("at least one frequency is required")]
    NoFrequencies,

    #[error("frequency {freq} Hz is outside the range [{min}, {max}] Hz")]
    FrequencyOutOfRange { freq: u32, min: u32, max: u32 },
}

/// Failures while producing a WAVE file
#[derive(Debug, Error)]
pub(crate) enum WavError {
    #[error("could not create '{}': {source}", path.display())]
    CannotCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing wave data: {source}")]
    WriteFailed {
        #[source]
        source: std::io::Error,
    },

    /// Samples are always packed as 16-bit integers
    #[error("unsupported sample width: {bits_per_sample} bits (only 16-bit PCM is written)")]
    UnsupportedFormat { bits_per_sample: u16 },

    /// Data chunk would overflow the 32-bit RIFF size fields
    #[error("{data_bytes} bytes of sample data do not fit in a WAVE file")]
    TooLarge { data_bytes: u64 },
}

impl From<std::io::Error> for WavError {
    fn from(source: std::io::Error) -> Self {
        WavError::WriteFailed { source }
    }
}

/// Top-level error reported by `main`
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Wav(#[from] WavError),

    #[error("verification failed: {0}")]
    Verify(String),
}
