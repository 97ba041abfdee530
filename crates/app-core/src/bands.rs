//! Grouping of FFT bins into fractional-octave bands.
//!
//! The core never runs an FFT itself. Front-ends hand over a spectrum (the
//! browser analyser's decibel array, or magnitudes from a native FFT) and get
//! back one normalized value per band, ready for [`BinMailbox::publish`].
//!
//! [`BinMailbox::publish`]: crate::mailbox::BinMailbox::publish

use std::ops::RangeInclusive;

use crate::constants::{
    ANALYZER_MAX_DB, ANALYZER_MIN_DB, BANDS_PER_OCTAVE, BAND_MAX_HZ, BAND_MIN_HZ,
};

/// Map a decibel reading onto \[0, 1\] using the analyzer's display range.
#[inline]
pub fn normalize_db(db: f32) -> f32 {
    if db.is_nan() {
        return 0.0;
    }
    ((db - ANALYZER_MIN_DB) / (ANALYZER_MAX_DB - ANALYZER_MIN_DB)).clamp(0.0, 1.0)
}

#[inline]
pub fn magnitude_to_db(magnitude: f32) -> f32 {
    if magnitude > 0.0 {
        20.0 * magnitude.log10()
    } else {
        f32::NEG_INFINITY
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    pub center_hz: f32,
    pub bins: RangeInclusive<usize>,
}

/// Fixed band layout for one sample rate and FFT size.
#[derive(Clone, Debug)]
pub struct BandLayout {
    bands: Vec<Band>,
    spectrum_len: usize,
}

impl BandLayout {
    /// `bands_per_octave` bands starting at `min_hz`, stopping at `max_hz` or
    /// the Nyquist frequency, whichever comes first.
    pub fn octave_fraction(
        bands_per_octave: u32,
        min_hz: f32,
        max_hz: f32,
        sample_rate: f32,
        fft_size: usize,
    ) -> Self {
        let spectrum_len = fft_size / 2;
        let mut bands = Vec::new();
        if bands_per_octave == 0 || spectrum_len < 2 || sample_rate <= 0.0 || min_hz <= 0.0 {
            return Self {
                bands,
                spectrum_len,
            };
        }

        let nyquist = sample_rate / 2.0;
        let top = max_hz.min(nyquist);
        let hz_per_bin = sample_rate / fft_size as f32;
        let half_step = 2f32.powf(0.5 / bands_per_octave as f32);
        let to_bin = |hz: f32| ((hz / hz_per_bin).round() as usize).clamp(1, spectrum_len - 1);

        let mut k = 0u32;
        loop {
            let center_hz = min_hz * 2f32.powf(k as f32 / bands_per_octave as f32);
            if center_hz > top {
                break;
            }
            let lo = to_bin(center_hz / half_step);
            let hi = to_bin(center_hz * half_step).max(lo);
            bands.push(Band {
                center_hz,
                bins: lo..=hi,
            });
            k += 1;
        }

        Self {
            bands,
            spectrum_len,
        }
    }

    /// The layout the visualizer uses: 1/12 octave, 20 Hz to 22 kHz.
    pub fn standard(sample_rate: f32, fft_size: usize) -> Self {
        Self::octave_fraction(
            BANDS_PER_OCTAVE,
            BAND_MIN_HZ,
            BAND_MAX_HZ,
            sample_rate,
            fft_size,
        )
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Bins expected per spectrum (`fft_size / 2`).
    pub fn spectrum_len(&self) -> usize {
        self.spectrum_len
    }

    /// One normalized value per band: the loudest bin in the band.
    pub fn fill_from_db(&self, db: &[f32], out: &mut Vec<f32>) {
        out.clear();
        out.extend(self.bands.iter().map(|band| {
            let lo = *band.bins.start();
            let hi = (*band.bins.end()).min(db.len().saturating_sub(1));
            if lo > hi || db.is_empty() {
                return 0.0;
            }
            let peak = db[lo..=hi]
                .iter()
                .copied()
                .fold(f32::NEG_INFINITY, f32::max);
            normalize_db(peak)
        }));
    }

    /// Same as [`fill_from_db`](Self::fill_from_db) for linear magnitudes.
    /// Peak magnitude maps to peak decibels, so the max is taken first.
    pub fn fill_from_magnitudes(&self, magnitudes: &[f32], out: &mut Vec<f32>) {
        out.clear();
        out.extend(self.bands.iter().map(|band| {
            let lo = *band.bins.start();
            let hi = (*band.bins.end()).min(magnitudes.len().saturating_sub(1));
            if lo > hi || magnitudes.is_empty() {
                return 0.0;
            }
            let peak = magnitudes[lo..=hi].iter().copied().fold(0.0, f32::max);
            normalize_db(magnitude_to_db(peak))
        }));
    }
}
