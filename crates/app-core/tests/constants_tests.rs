// Sanity relationships between tuning constants.

use app_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_lie_within_ranges() {
    assert!((GRID_DIM_MIN..=GRID_DIM_MAX).contains(&DEFAULT_GRID_ROWS));
    assert!((GRID_DIM_MIN..=GRID_DIM_MAX).contains(&DEFAULT_GRID_COLS));
    assert!((AMPLITUDE_MIN..=AMPLITUDE_MAX).contains(&DEFAULT_AMPLITUDE));
    assert!((FREQUENCY_HZ_MIN..=FREQUENCY_HZ_MAX).contains(&DEFAULT_FREQUENCY_HZ));
    assert!(GRID_DIM_MIN >= 1);
    assert!(DEFAULT_CUBE_SIDE > 0.0);
    assert!(CELL_GAP_FACTOR > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_ranges_are_ordered() {
    assert!(FOG_NEAR < FOG_FAR);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
    assert!(ANALYZER_MIN_DB < ANALYZER_MAX_DB);
    assert!(BAND_MIN_HZ < BAND_MAX_HZ);
    assert!((0.0..1.0).contains(&ANALYZER_SMOOTHING));
    assert!(ANALYZER_FFT_SIZE.is_power_of_two());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn start_eye_is_reachable_by_orbit() {
    let d = camera_start_eye().length();
    assert!((ORBIT_MIN_DISTANCE..=ORBIT_MAX_DISTANCE).contains(&d));
    assert!(GROUND_CLEARANCE > 0.0);
}

#[test]
fn palette_channels_are_normalized() {
    for rgb in [BACKGROUND_RGB, ALBEDO_RGB, AMBIENT_RGB, SPOT_RGB, DIR_RGB] {
        assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}
