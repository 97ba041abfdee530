//! Live-tunable parameters.
//!
//! Every edit goes through [`Settings::apply`], which validates the value and
//! reports whether the instance buffer has to be reallocated.

use crate::constants::*;
use crate::error::SettingsError;
use crate::grid::GridConfig;
use crate::heightfield::{RadialMapping, WaveConfig};

/// A numeric parameter exposed on the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Rows,
    Cols,
    Amplitude,
    FrequencyHz,
}

impl Param {
    pub const ALL: [Param; 4] = [Param::Rows, Param::Cols, Param::Amplitude, Param::FrequencyHz];

    pub fn name(self) -> &'static str {
        match self {
            Param::Rows => "rows",
            Param::Cols => "cols",
            Param::Amplitude => "amplitude",
            Param::FrequencyHz => "frequency_hz",
        }
    }

    /// Inclusive (min, max).
    pub fn range(self) -> (f32, f32) {
        match self {
            Param::Rows | Param::Cols => (GRID_DIM_MIN as f32, GRID_DIM_MAX as f32),
            Param::Amplitude => (AMPLITUDE_MIN, AMPLITUDE_MAX),
            Param::FrequencyHz => (FREQUENCY_HZ_MIN, FREQUENCY_HZ_MAX),
        }
    }

    pub fn step(self) -> f32 {
        match self {
            Param::Rows | Param::Cols => 1.0,
            Param::Amplitude => AMPLITUDE_STEP,
            Param::FrequencyHz => FREQUENCY_HZ_STEP,
        }
    }

    /// Build a change for this parameter from a raw panel value.
    pub fn change(self, value: f32) -> ParamChange {
        match self {
            Param::Rows => ParamChange::Rows(value.round().max(0.0) as u32),
            Param::Cols => ParamChange::Cols(value.round().max(0.0) as u32),
            Param::Amplitude => ParamChange::Amplitude(value),
            Param::FrequencyHz => ParamChange::FrequencyHz(value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamChange {
    Rows(u32),
    Cols(u32),
    Amplitude(f32),
    FrequencyHz(f32),
    GroundPlane(bool),
    Radial(RadialMapping),
}

/// What a successful edit requires from the owner of the instance buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamEffect {
    Unchanged,
    Updated,
    Reallocate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    grid: GridConfig,
    wave: WaveConfig,
    ground_plane_enabled: bool,
    radial_mapping: RadialMapping,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            wave: WaveConfig {
                amplitude: DEFAULT_AMPLITUDE,
                frequency_hz: DEFAULT_FREQUENCY_HZ,
            },
            ground_plane_enabled: true,
            radial_mapping: RadialMapping::Raw,
        }
    }
}

impl Settings {
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn wave(&self) -> &WaveConfig {
        &self.wave
    }

    pub fn ground_plane_enabled(&self) -> bool {
        self.ground_plane_enabled
    }

    pub fn radial_mapping(&self) -> RadialMapping {
        self.radial_mapping
    }

    /// Ground sits just below the deepest trough the wave can reach.
    pub fn ground_plane_z(&self) -> f32 {
        -self.wave.amplitude - GROUND_CLEARANCE
    }

    pub fn value(&self, param: Param) -> f32 {
        match param {
            Param::Rows => self.grid.rows() as f32,
            Param::Cols => self.grid.cols() as f32,
            Param::Amplitude => self.wave.amplitude,
            Param::FrequencyHz => self.wave.frequency_hz,
        }
    }

    /// Change for `param` moved by `steps` increments, clamped to its range.
    pub fn nudged(&self, param: Param, steps: i32) -> ParamChange {
        let (min, max) = param.range();
        let raw = self.value(param) + steps as f32 * param.step();
        // snap to the step grid so repeated nudges don't drift
        let snapped = (raw / param.step()).round() * param.step();
        param.change(snapped.clamp(min, max))
    }

    pub fn apply(&mut self, change: ParamChange) -> Result<ParamEffect, SettingsError> {
        match change {
            ParamChange::Rows(rows) => {
                check_range(Param::Rows, rows as f32)?;
                self.set_dims(rows, self.grid.cols())
            }
            ParamChange::Cols(cols) => {
                check_range(Param::Cols, cols as f32)?;
                self.set_dims(self.grid.rows(), cols)
            }
            ParamChange::Amplitude(amplitude) => {
                check_range(Param::Amplitude, amplitude)?;
                Ok(update(&mut self.wave.amplitude, amplitude))
            }
            ParamChange::FrequencyHz(hz) => {
                check_range(Param::FrequencyHz, hz)?;
                Ok(update(&mut self.wave.frequency_hz, hz))
            }
            ParamChange::GroundPlane(enabled) => Ok(update(&mut self.ground_plane_enabled, enabled)),
            ParamChange::Radial(mapping) => Ok(update(&mut self.radial_mapping, mapping)),
        }
    }

    fn set_dims(&mut self, rows: u32, cols: u32) -> Result<ParamEffect, SettingsError> {
        if rows == self.grid.rows() && cols == self.grid.cols() {
            return Ok(ParamEffect::Unchanged);
        }
        // Range was checked above, so construction cannot fail on dimensions.
        self.grid = GridConfig::new(rows, cols, self.grid.cell_size()).map_err(|_| {
            SettingsError::OutOfRange {
                name: "grid",
                value: rows.min(cols) as f64,
                min: GRID_DIM_MIN as f64,
                max: GRID_DIM_MAX as f64,
            }
        })?;
        Ok(ParamEffect::Reallocate)
    }
}

fn check_range(param: Param, value: f32) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::NotFinite(param.name()));
    }
    let (min, max) = param.range();
    if value < min || value > max {
        return Err(SettingsError::OutOfRange {
            name: param.name(),
            value: value as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

fn update<T: PartialEq>(slot: &mut T, value: T) -> ParamEffect {
    if *slot == value {
        ParamEffect::Unchanged
    } else {
        *slot = value;
        ParamEffect::Updated
    }
}
