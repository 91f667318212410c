//! Harmonic signal synthesis

mod harmonic;

pub(crate) use harmonic::{PhaseMode, SampleBuffer, Synthesizer, synthesize};
