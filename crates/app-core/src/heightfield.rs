//! Per-cell height generation.
//!
//! Both strategies key off the cell's radial distance from the grid center
//! in normalized coordinates, which turns a 1D source into a radially
//! symmetric ripple regardless of the grid's aspect ratio.

use std::f64::consts::TAU;

use crate::grid::GridConfig;
use crate::sampler::sample;

/// Largest radial distance a cell can have: the corner at (0, 0).
pub const MAX_RADIAL: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Normalized location of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
    /// `row / rows`, in \[0, 1)
    pub u: f32,
    /// `col / cols`, in \[0, 1)
    pub v: f32,
    /// Euclidean distance from (0.5, 0.5) in (u, v) space.
    pub radial: f32,
}

impl CellCoord {
    pub fn new(config: &GridConfig, row: u32, col: u32) -> Self {
        let u = row as f32 / config.rows() as f32;
        let v = col as f32 / config.cols() as f32;
        let du = u - 0.5;
        let dv = v - 0.5;
        Self {
            row,
            col,
            u,
            v,
            radial: (du * du + dv * dv).sqrt(),
        }
    }

    /// XY position with the grid centered on the origin.
    #[inline]
    pub fn planar(&self, config: &GridConfig) -> (f32, f32) {
        (
            config.width() * (self.u - 0.5),
            config.height() * (self.v - 0.5),
        )
    }
}

/// Parameters of the generated traveling wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveConfig {
    pub amplitude: f32,
    pub frequency_hz: f32,
}

/// How a cell's radial distance becomes a lookup key into the bin series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadialMapping {
    /// Radial distance used as-is; bins past ~70% of the series are never reached.
    #[default]
    Raw,
    /// Radial distance divided by [`MAX_RADIAL`] so the corners reach the last bin.
    Corner,
}

impl RadialMapping {
    #[inline]
    pub fn key(self, radial: f32) -> f32 {
        match self {
            RadialMapping::Raw => radial,
            RadialMapping::Corner => radial / MAX_RADIAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RadialMapping::Raw => "raw",
            RadialMapping::Corner => "corner",
        }
    }
}

pub trait HeightField {
    fn height(&self, cell: &CellCoord) -> f32;
}

/// Audio-reactive strategy: interpolate the frequency bins at the radial key.
#[derive(Clone, Copy, Debug)]
pub struct RadialBins<'a> {
    bins: &'a [f32],
    mapping: RadialMapping,
}

impl<'a> RadialBins<'a> {
    pub fn new(bins: &'a [f32], mapping: RadialMapping) -> Self {
        Self { bins, mapping }
    }
}

impl HeightField for RadialBins<'_> {
    #[inline]
    fn height(&self, cell: &CellCoord) -> f32 {
        sample(self.bins, self.mapping.key(cell.radial))
    }
}

/// Generated strategy: `amplitude * sin(b * radial + phase)` with
/// `b = 2π / period` and phase taken from wall-clock elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TravelingWave {
    amplitude: f32,
    angular_freq: f32,
    phase: f32,
}

impl TravelingWave {
    pub fn new(wave: &WaveConfig, elapsed_ms: f64) -> Self {
        // Zero frequency means an infinite period: no oscillation at all.
        if wave.frequency_hz <= 0.0 || !wave.frequency_hz.is_finite() {
            return Self {
                amplitude: 0.0,
                angular_freq: 0.0,
                phase: 0.0,
            };
        }
        let period_sec = 1.0 / wave.frequency_hz;
        let angular_freq = std::f32::consts::TAU / period_sec;
        // sin is 2π-periodic, so reduce in f64 before narrowing to keep
        // precision over long sessions.
        let phase = (elapsed_ms / 1000.0).rem_euclid(TAU) as f32;
        Self {
            amplitude: wave.amplitude,
            angular_freq,
            phase,
        }
    }
}

impl HeightField for TravelingWave {
    #[inline]
    fn height(&self, cell: &CellCoord) -> f32 {
        if self.angular_freq == 0.0 {
            return 0.0;
        }
        self.amplitude * (self.angular_freq * cell.radial + self.phase).sin()
    }
}

/// The strategy selected for one frame.
#[derive(Clone, Copy, Debug)]
pub enum HeightSource<'a> {
    Wave(TravelingWave),
    Bins(RadialBins<'a>),
}

impl HeightField for HeightSource<'_> {
    #[inline]
    fn height(&self, cell: &CellCoord) -> f32 {
        match self {
            HeightSource::Wave(w) => w.height(cell),
            HeightSource::Bins(b) => b.height(cell),
        }
    }
}
