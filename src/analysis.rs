//! Spectral check of synthesized output

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// Largest FFT used for peak detection
pub(crate) const MAX_FFT_SIZE: usize = 32768;

/// Create a Hann window of the given size
pub(crate) fn create_hann_window(size: usize) -> Vec<f32> {
    let pi2 = 2.0 * std::f32::consts::PI;
    (0..size)
        .map(|i| 0.5 * (1.0 - (pi2 * i as f32 / (size - 1) as f32).cos()))
        .collect()
}

/// Frequency of the strongest non-DC bin over the first FFT block.
///
/// Returns `None` when there are fewer than 2 samples or the block is silent.
pub(crate) fn dominant_frequency(samples: &[f32], sample_rate: u32) -> Option<f32> {
    if samples.len() < 2 {
        return None;
    }
    let size = prev_power_of_two(samples.len().min(MAX_FFT_SIZE));
    let window = create_hann_window(size);

    let mut buffer: Vec<Complex<f32>> = samples[..size]
        .iter()
        .zip(&window)
        .map(|(s, w)| Complex::new(s * w, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(size).process(&mut buffer);

    let (peak_bin, peak_power) = buffer[1..=size / 2]
        .iter()
        .enumerate()
        .map(|(i, c)| (i + 1, c.norm_sqr()))
        .fold((0, 0.0f32), |best, cur| if cur.1 > best.1 { cur } else { best });

    if peak_power <= 0.0 {
        return None;
    }
    Some(peak_bin as f32 * sample_rate as f32 / size as f32)
}

fn prev_power_of_two(n: usize) -> usize {
    1 << (usize::BITS - 1 - n.leading_zeros())
}
