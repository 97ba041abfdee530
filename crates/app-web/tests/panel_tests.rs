// Host-side tests for control panel parsing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod panel {
    include!("../src/panel.rs");
}

use app_core::{Mode, Param, ParamChange, RadialMapping, Settings};
use panel::*;

#[test]
fn parses_numeric_inputs_per_param() {
    assert_eq!(parse_param(Param::Rows, "120"), Some(ParamChange::Rows(120)));
    assert_eq!(parse_param(Param::Cols, " 7.6 "), Some(ParamChange::Cols(8)));
    assert_eq!(
        parse_param(Param::Amplitude, "1.5"),
        Some(ParamChange::Amplitude(1.5))
    );
    assert_eq!(
        parse_param(Param::FrequencyHz, "0"),
        Some(ParamChange::FrequencyHz(0.0))
    );
}

#[test]
fn rejects_non_numeric_inputs() {
    assert_eq!(parse_param(Param::Rows, ""), None);
    assert_eq!(parse_param(Param::Amplitude, "loud"), None);
    assert_eq!(parse_param(Param::FrequencyHz, "NaN"), None);
    assert_eq!(parse_param(Param::FrequencyHz, "inf"), None);
}

#[test]
fn every_param_has_an_input() {
    for param in Param::ALL {
        assert!(PARAM_INPUTS.iter().any(|(p, _)| *p == param), "{param:?}");
    }
    let ids: Vec<&str> = PARAM_INPUTS.iter().map(|(_, id)| *id).collect();
    assert!(!ids.contains(&SOURCE_SELECT_ID));
}

#[test]
fn radial_select_values() {
    assert_eq!(parse_radial("raw"), Some(RadialMapping::Raw));
    assert_eq!(parse_radial("corner"), Some(RadialMapping::Corner));
    assert_eq!(parse_radial("edge"), None);
    for mapping in [RadialMapping::Raw, RadialMapping::Corner] {
        assert_eq!(parse_radial(mapping.as_str()), Some(mapping));
    }
}

#[test]
fn formats_values_for_display() {
    assert_eq!(format_value(Param::Rows, 250.0), "250");
    assert_eq!(format_value(Param::Amplitude, 1.0), "1.0");
    assert_eq!(format_value(Param::FrequencyHz, 4.5), "4.5");
}

#[test]
fn status_reflects_settings_and_mode() {
    let settings = Settings::default();
    assert_eq!(
        status_line(&settings, Mode::Generated),
        "250x250 | amp 1.0 | 4.0 Hz | generated"
    );
    assert!(status_line(&settings, Mode::AudioReactive).ends_with("audio"));
}
