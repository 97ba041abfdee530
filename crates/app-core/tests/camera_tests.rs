// Orbit camera and light rig motion.

use std::f32::consts::TAU;

use app_core::{LightRig, OrbitCamera, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE};
use glam::{Vec3, Vec4};

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn starts_at_configured_eye() {
    let orbit = OrbitCamera::new(16.0 / 9.0);
    assert!(close(orbit.eye(), Vec3::new(0.0, -4.0, 2.8)), "{:?}", orbit.eye());
    let cam = orbit.camera();
    assert_eq!(cam.up, Vec3::Z);
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((cam.fovy_radians - 45f32.to_radians()).abs() < 1e-6);
}

#[test]
fn target_projects_to_screen_center() {
    let cam = OrbitCamera::new(1.5).camera();
    let clip = cam.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
}

#[test]
fn zoom_is_clamped() {
    let mut orbit = OrbitCamera::new(1.0);
    let d0 = orbit.distance();
    orbit.zoom(1.0);
    assert!(orbit.distance() < d0);
    orbit.zoom(1_000.0);
    assert_eq!(orbit.distance(), ORBIT_MIN_DISTANCE);
    orbit.zoom(-1_000.0);
    assert_eq!(orbit.distance(), ORBIT_MAX_DISTANCE);
}

#[test]
fn full_height_drag_is_one_turn() {
    let mut orbit = OrbitCamera::new(1.0);
    let before = orbit.eye();
    orbit.drag(600.0, 0.0, 600.0);
    assert!(close(orbit.eye(), before), "{:?} vs {:?}", orbit.eye(), before);
    assert!(orbit.azimuth() >= 0.0 && orbit.azimuth() < TAU);
}

#[test]
fn elevation_never_reaches_the_pole() {
    let mut orbit = OrbitCamera::new(1.0);
    orbit.drag(0.0, 1e6, 100.0);
    assert!(orbit.elevation() < std::f32::consts::FRAC_PI_2);
    orbit.drag(0.0, -1e7, 100.0);
    assert!(orbit.elevation() > -std::f32::consts::FRAC_PI_2);
}

#[test]
fn reset_restores_start_view() {
    let mut orbit = OrbitCamera::new(1.0);
    orbit.drag(123.0, 45.0, 300.0);
    orbit.zoom(4.0);
    orbit.reset();
    assert!(close(orbit.eye(), Vec3::new(0.0, -4.0, 2.8)));
}

#[test]
fn bad_aspect_falls_back_to_square() {
    let mut orbit = OrbitCamera::new(0.0);
    assert_eq!(orbit.camera().aspect, 1.0);
    orbit.set_aspect(2.0);
    assert_eq!(orbit.camera().aspect, 2.0);
    orbit.set_aspect(f32::NAN);
    assert_eq!(orbit.camera().aspect, 1.0);
}

#[test]
fn directional_light_starts_at_local_position() {
    let rig = LightRig::at(0.0);
    assert!(close(rig.directional.position, Vec3::new(3.0, 12.0, 17.0)));
    assert!(close(rig.spot.position, Vec3::new(8.0, 10.0, 5.0)));
    assert_eq!(rig.spot.target, Vec3::ZERO);
}

#[test]
fn directional_light_orbits_the_y_axis() {
    for elapsed_ms in [250.0, 1_570.796, 20_000.0, 3.6e6] {
        let rig = LightRig::at(elapsed_ms);
        let sway = 17.0 + 5.0 * ((elapsed_ms * 0.001) as f32).sin();
        let pos = rig.directional.position;
        assert!((pos.y - 12.0).abs() < 1e-3);
        let radius = (pos.x * pos.x + pos.z * pos.z).sqrt();
        assert!((radius - (9.0 + sway * sway).sqrt()).abs() < 1e-2, "{elapsed_ms}");
    }
}

#[test]
fn spot_cone_has_soft_edge() {
    let (inner, outer) = LightRig::at(0.0).spot.cone_cosines();
    assert!(inner > outer);
    assert!((outer - (std::f32::consts::PI / 5.0).cos()).abs() < 1e-6);
}
