//! Error types for the core crate.
//!
//! None of these are fatal to the frame loop: a failed action leaves the
//! visualizer in the state it had before the attempt, and front-ends surface
//! the message to the user (alert on web, log + title on native).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid needs at least one row and one column (got {rows}x{cols})")]
    EmptyDimension { rows: u32, cols: u32 },
    #[error("cell size must be a finite positive number (got {0})")]
    InvalidCellSize(f32),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{name} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

/// Failures while connecting an audio input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Microphone access denied by user")]
    PermissionDenied,
    #[error("Audio input devices not available: {0}")]
    DeviceUnavailable(String),
    #[error("Unexpected audio source value: {0}")]
    UnrecognizedSource(String),
    #[error("Audio stream failed: {0}")]
    StreamFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("microphone permission resolved after another source was selected")]
    StalePermission,
}
