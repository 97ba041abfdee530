// Control panel element ids and value parsing.
//
// Kept free of DOM types so it can be exercised on the host.

use app_core::{Mode, Param, ParamChange, RadialMapping, Settings};

pub const SOURCE_SELECT_ID: &str = "audio-source";
pub const GROUND_TOGGLE_ID: &str = "ground-plane";
pub const RADIAL_SELECT_ID: &str = "radial-mapping";
pub const STATUS_ID: &str = "status";

/// Range inputs and the parameter each one edits.
pub const PARAM_INPUTS: [(Param, &str); 4] = [
    (Param::Rows, "rows"),
    (Param::Cols, "cols"),
    (Param::Amplitude, "amplitude"),
    (Param::FrequencyHz, "frequency"),
];

/// Parse a raw `<input>` value. Returns `None` for anything that is not a
/// finite number; range checks are left to `Settings::apply`.
pub fn parse_param(param: Param, raw: &str) -> Option<ParamChange> {
    let value: f32 = raw.trim().parse().ok()?;
    value.is_finite().then(|| param.change(value))
}

pub fn parse_radial(raw: &str) -> Option<RadialMapping> {
    match raw.trim() {
        "raw" => Some(RadialMapping::Raw),
        "corner" => Some(RadialMapping::Corner),
        _ => None,
    }
}

pub fn format_value(param: Param, value: f32) -> String {
    match param {
        Param::Rows | Param::Cols => format!("{}", value.round() as u32),
        Param::Amplitude | Param::FrequencyHz => format!("{:.1}", value),
    }
}

pub fn status_line(settings: &Settings, mode: Mode) -> String {
    let mode = match mode {
        Mode::Generated => "generated",
        Mode::AudioReactive => "audio",
    };
    format!(
        "{}x{} | amp {:.1} | {:.1} Hz | {}",
        settings.grid().rows(),
        settings.grid().cols(),
        settings.wave().amplitude,
        settings.wave().frequency_hz,
        mode
    )
}
