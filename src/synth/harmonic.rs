//! Sum-of-sines sample generation

use std::f64::consts::PI;

/// Peak amplitude of the summed signal, kept just under `i16::MAX`
pub(crate) const MAX_AMPLITUDE: f64 = 32765.0;

/// How sample time is derived from the sample index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PhaseMode {
    /// Time restarts at zero on every second boundary
    #[default]
    PerSecond,
    /// Time advances across the whole duration
    Continuous,
}

/// Quantized mono samples produced by the synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SampleBuffer(Vec<i16>);

impl SampleBuffer {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn as_slice(&self) -> &[i16] {
        &self.0
    }
}

impl FromIterator<i16> for SampleBuffer {
    fn from_iter<I: IntoIterator<Item = i16>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Generates samples for a fixed set of harmonics.
///
/// Frequencies are assumed to be validated already (non-empty, each within
/// `[20, sample_rate / 2]`).
#[derive(Debug, Clone)]
pub(crate) struct Synthesizer<'a> {
    frequencies: &'a [u32],
    sample_rate: u32,
    phase: PhaseMode,
}

impl<'a> Synthesizer<'a> {
    pub(crate) fn new(frequencies: &'a [u32], sample_rate: u32, phase: PhaseMode) -> Self {
        Self {
            frequencies,
            sample_rate,
            phase,
        }
    }

    /// Number of samples in `duration_secs` seconds of signal
    pub(crate) fn sample_count(&self, duration_secs: u32) -> u64 {
        duration_secs as u64 * self.sample_rate as u64
    }

    /// Value of sample `n`.
    ///
    /// Each harmonic is scaled by `MAX_AMPLITUDE / harmonic_count` before
    /// summing, and the sum is truncated toward zero.
    pub(crate) fn sample_at(&self, n: u64) -> i16 {
        let rate = self.sample_rate as u64;
        let index = match self.phase {
            PhaseMode::PerSecond => n % rate,
            PhaseMode::Continuous => n,
        };
        let t = index as f64 / self.sample_rate as f64;
        let amplitude = MAX_AMPLITUDE / self.frequencies.len() as f64;

        let sum: f64 = self
            .frequencies
            .iter()
            .map(|&freq| (2.0 * PI * freq as f64 * t).sin() * amplitude)
            .sum();

        // `as` truncates toward zero
        sum as i16
    }

    /// Iterate over every sample of `duration_secs` seconds of signal
    pub(crate) fn samples(&self, duration_secs: u32) -> Samples<'_, 'a> {
        Samples {
            synth: self,
            next: 0,
            end: self.sample_count(duration_secs),
        }
    }
}

pub(crate) struct Samples<'s, 'a> {
    synth: &'s Synthesizer<'a>,
    next: u64,
    end: u64,
}

impl Iterator for Samples<'_, '_> {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.next >= self.end {
            return None;
        }
        let sample = self.synth.sample_at(self.next);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_, '_> {}

/// Synthesize `duration_secs` seconds of the given harmonics into one buffer
pub(crate) fn synthesize(
    frequencies: &[u32],
    duration_secs: u32,
    sample_rate: u32,
    phase: PhaseMode,
) -> SampleBuffer {
    Synthesizer::new(frequencies, sample_rate, phase)
        .samples(duration_secs)
        .collect()
}
