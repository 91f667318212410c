//! Validated synthesis requests

use std::path::PathBuf;

use crate::error::ValidationError;

/// Lowest accepted harmonic frequency in Hz
pub(crate) const MIN_FREQUENCY: u32 = 20;

/// Highest accepted harmonic frequency in Hz (Nyquist limit at 44.1 kHz)
pub(crate) const MAX_FREQUENCY: u32 = 22050;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SynthesisRequest {
    output_path: PathBuf,
    duration_secs: u32,
    frequencies: Vec<u32>,
}

impl SynthesisRequest {
    pub(crate) fn new(
        output_path: impl Into<PathBuf>,
        duration_secs: u32,
        frequencies: Vec<u32>,
    ) -> Result<Self, ValidationError> {
        if duration_secs == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        if frequencies.is_empty() {
            return Err(ValidationError::NoFrequencies);
        }
        if let Some(&freq) = frequencies
            .iter()
            .find(|&&f| !(MIN_FREQUENCY..=MAX_FREQUENCY).contains(&f))
        {
            return Err(ValidationError::FrequencyOutOfRange {
                freq,
                min: MIN_FREQUENCY,
                max: MAX_FREQUENCY,
            });
        }

        Ok(Self {
            output_path: output_path.into(),
            duration_secs,
            frequencies,
        })
    }

    pub(crate) fn output_path(&self) -> &std::path::Path {
        &self.output_path
    }

    pub(crate) fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub(crate) fn frequencies(&self) -> &[u32] {
        &self.frequencies
    }
}
