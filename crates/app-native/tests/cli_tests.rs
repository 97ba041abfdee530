#![allow(dead_code)]
mod cli {
    include!("../src/cli.rs");
}

use app_core::{RadialMapping, Settings, SourceKind, DEFAULT_GRID_COLS};
use clap::Parser;
use cli::Args;

#[test]
fn no_flags_gives_default_settings() {
    let args = Args::try_parse_from(["radial-grid"]).unwrap();
    assert_eq!(args.source, SourceKind::Generated);
    assert_eq!(args.settings().unwrap(), Settings::default());
}

#[test]
fn flags_override_defaults() {
    let args = Args::try_parse_from([
        "radial-grid",
        "--rows",
        "120",
        "--amplitude",
        "0.5",
        "--no-ground",
        "--radial",
        "corner",
        "--source",
        "mic",
    ])
    .unwrap();
    let settings = args.settings().unwrap();
    assert_eq!(settings.grid().rows(), 120);
    assert_eq!(settings.grid().cols(), DEFAULT_GRID_COLS);
    assert_eq!(settings.wave().amplitude, 0.5);
    assert!(!settings.ground_plane_enabled());
    assert_eq!(settings.radial_mapping(), RadialMapping::Corner);
    assert_eq!(args.source, SourceKind::Microphone);
}

#[test]
fn out_of_range_values_fail_validation() {
    let args = Args::try_parse_from(["radial-grid", "--rows", "0"]).unwrap();
    assert!(args.settings().is_err());
    let args = Args::try_parse_from(["radial-grid", "--frequency-hz", "80"]).unwrap();
    assert!(args.settings().is_err());
}

#[test]
fn unknown_source_is_a_parse_error() {
    assert!(Args::try_parse_from(["radial-grid", "--source", "speaker"]).is_err());
}
