use glam::Vec3;

// Shared visual/audio tuning constants used by both web and native frontends.

// Grid layout
pub const CELL_GAP_FACTOR: f32 = 1.1; // cell pitch relative to cube side (10% gap)
pub const DEFAULT_CUBE_SIDE: f32 = 0.02;
pub const DEFAULT_GRID_ROWS: u32 = 250;
pub const DEFAULT_GRID_COLS: u32 = 250;
pub const GRID_DIM_MIN: u32 = 1;
pub const GRID_DIM_MAX: u32 = 500;

// Wave generation
pub const DEFAULT_AMPLITUDE: f32 = 1.0;
pub const AMPLITUDE_MIN: f32 = 0.0;
pub const AMPLITUDE_MAX: f32 = 2.5;
pub const AMPLITUDE_STEP: f32 = 0.1;
pub const DEFAULT_FREQUENCY_HZ: f32 = 4.0;
pub const FREQUENCY_HZ_MIN: f32 = 0.0;
pub const FREQUENCY_HZ_MAX: f32 = 50.0;
pub const FREQUENCY_HZ_STEP: f32 = 0.5;

// Ground plane
pub const GROUND_PLANE_SIZE: f32 = 200.0;
pub const GROUND_CLEARANCE: f32 = 0.05; // gap below the lowest possible wave trough

// Sources
pub const LIVE_STREAM_URL: &str = "https://icecast2.ufpel.edu.br/live";

// Scene palette (display-space RGB)
pub const BACKGROUND_RGB: [f32; 3] = [0.133, 0.133, 0.267]; // 0x222244
pub const FOG_NEAR: f32 = 50.0;
pub const FOG_FAR: f32 = 100.0;
pub const ALBEDO_RGB: [f32; 3] = [0.6, 0.6, 0.6]; // 0x999999, boxes and ground

// Light rig
pub const AMBIENT_RGB: [f32; 3] = [0.267, 0.267, 0.267]; // 0x444444
pub const SPOT_RGB: [f32; 3] = [1.0, 0.533, 0.533]; // 0xff8888
pub const SPOT_POSITION: [f32; 3] = [8.0, 10.0, 5.0];
pub const SPOT_ANGLE_RAD: f32 = std::f32::consts::PI / 5.0;
pub const SPOT_PENUMBRA: f32 = 0.3;
pub const DIR_RGB: [f32; 3] = [0.533, 0.533, 1.0]; // 0x8888ff
pub const DIR_LOCAL_POSITION: [f32; 3] = [3.0, 12.0, 17.0];
pub const DIR_ORBIT_RAD_PER_SEC: f32 = 0.14; // rotation of the light group around +Y
pub const DIR_SWAY_AMPLITUDE: f32 = 5.0;
pub const DIR_SWAY_RAD_PER_MS: f64 = 0.001;

// Camera
pub const CAMERA_START_EYE: [f32; 3] = [0.0, -4.0, 2.8];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_MIN_DISTANCE: f32 = 1.5;
pub const ORBIT_MAX_DISTANCE: f32 = 60.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance scale per wheel notch toward the target

// Analyzer
pub const ANALYZER_FFT_SIZE: usize = 8192;
pub const ANALYZER_SMOOTHING: f32 = 0.5;
pub const ANALYZER_MIN_DB: f32 = -85.0;
pub const ANALYZER_MAX_DB: f32 = -25.0;
pub const BAND_MIN_HZ: f32 = 20.0;
pub const BAND_MAX_HZ: f32 = 22_000.0;
pub const BANDS_PER_OCTAVE: u32 = 12;

#[inline]
pub fn camera_start_eye() -> Vec3 {
    Vec3::from(CAMERA_START_EYE)
}
