// Spectrum analysis for the native microphone path.
//
// Mirrors a browser AnalyserNode closely enough that both front-ends feed
// the same band grouping: Hann window, magnitudes scaled by 1/N, then
// exponential smoothing across blocks.

use std::sync::Arc;

use app_core::{BandLayout, ANALYZER_SMOOTHING};
use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// One sample per interleaved frame, taken from channel 0.
pub fn first_channel<T: Copy>(
    interleaved: &[T],
    channels: usize,
) -> impl Iterator<Item = T> + '_ {
    interleaved.chunks(channels.max(1)).map(|frame| frame[0])
}

pub fn hann_window(index: usize, size: usize) -> f32 {
    if size < 2 {
        return 1.0;
    }
    let phase = 2.0 * std::f32::consts::PI * index as f32 / (size - 1) as f32;
    0.5 * (1.0 - phase.cos())
}

pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    buffer: Vec<Complex<f32>>,
    smoothed: Vec<f32>,
    layout: BandLayout,
    bands: Vec<f32>,
}

impl SpectrumAnalyzer {
    pub fn new(sample_rate: f32, fft_size: usize) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(fft_size);
        let layout = BandLayout::standard(sample_rate, fft_size);
        Self {
            fft,
            window: (0..fft_size).map(|i| hann_window(i, fft_size)).collect(),
            buffer: vec![Complex::new(0.0, 0.0); fft_size],
            smoothed: vec![0.0; fft_size / 2],
            bands: Vec::with_capacity(layout.len()),
            layout,
        }
    }

    pub fn fft_size(&self) -> usize {
        self.window.len()
    }

    pub fn layout(&self) -> &BandLayout {
        &self.layout
    }

    /// Analyse one block and return the normalized band values.
    ///
    /// Short blocks are zero-padded; extra samples are ignored.
    pub fn process(&mut self, block: &[f32]) -> &[f32] {
        let n = self.fft_size();
        for (i, slot) in self.buffer.iter_mut().enumerate() {
            let sample = block.get(i).copied().unwrap_or(0.0);
            *slot = Complex::new(sample * self.window[i], 0.0);
        }
        self.fft.process(&mut self.buffer);

        let scale = 1.0 / n as f32;
        for (smoothed, c) in self.smoothed.iter_mut().zip(&self.buffer) {
            let magnitude = c.norm() * scale;
            *smoothed = ANALYZER_SMOOTHING * *smoothed + (1.0 - ANALYZER_SMOOTHING) * magnitude;
        }
        self.layout.fill_from_magnitudes(&self.smoothed, &mut self.bands);
        &self.bands
    }
}
