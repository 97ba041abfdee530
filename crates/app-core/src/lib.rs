pub mod bands;
pub mod constants;
pub mod error;
pub mod grid;
pub mod heightfield;
pub mod lighting;
pub mod mailbox;
pub mod mesh;
pub mod mode;
#[cfg(feature = "gpu")]
pub mod render;
pub mod sampler;
pub mod settings;
pub mod state;
pub mod visualizer;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use bands::{BandLayout, normalize_db};
pub use constants::*;
pub use error::*;
pub use grid::{CellTransform, GridConfig, GridInstanceBuffer};
pub use heightfield::{
    CellCoord, HeightField, HeightSource, RadialBins, RadialMapping, TravelingWave, WaveConfig,
    MAX_RADIAL,
};
pub use lighting::LightRig;
pub use mailbox::{BinMailbox, SharedMailbox};
pub use mode::{
    InputConnection, Mode, ModeController, PermissionTicket, SelectOutcome, SourceKind,
};
#[cfg(feature = "gpu")]
pub use render::{GridRenderer, RenderError};
pub use sampler::sample;
pub use settings::{Param, ParamChange, ParamEffect, Settings};
pub use state::{Camera, OrbitCamera};
pub use visualizer::{Frame, GroundPlane, Visualizer};
