//! Application context owned by a front-end.
//!
//! Holds the settings, the mode controller and the instance buffer. Each
//! frame pulls the newest analyzer snapshot, recomputes every cell height and
//! hands the result to the renderer.

use crate::constants::GROUND_PLANE_SIZE;
use crate::error::{InputError, ModeError, SettingsError};
use crate::grid::{CellTransform, GridInstanceBuffer};
use crate::heightfield::HeightField;
use crate::lighting::LightRig;
use crate::mailbox::SharedMailbox;
use crate::mode::{InputConnection, Mode, ModeController, PermissionTicket, SelectOutcome, SourceKind};
use crate::settings::{ParamChange, ParamEffect, Settings};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    pub z: f32,
    pub size: f32,
}

/// Everything the renderer needs for one frame.
pub struct Frame<'a> {
    /// Fresh transforms, or `None` if nothing was rebuilt.
    pub transforms: Option<&'a [CellTransform]>,
    pub cell_count: usize,
    pub ground: Option<GroundPlane>,
    pub lights: LightRig,
}

pub struct Visualizer<C: InputConnection> {
    settings: Settings,
    buffer: GridInstanceBuffer,
    modes: ModeController<C>,
    mailbox: SharedMailbox,
}

impl<C: InputConnection> Visualizer<C> {
    pub fn new(settings: Settings, mailbox: SharedMailbox) -> Self {
        let buffer = GridInstanceBuffer::new(*settings.grid());
        log::info!(
            "[grid] {}x{} cells, amplitude {}, {} Hz",
            settings.grid().rows(),
            settings.grid().cols(),
            settings.wave().amplitude,
            settings.wave().frequency_hz
        );
        Self {
            settings,
            buffer,
            modes: ModeController::new(),
            mailbox,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn buffer(&self) -> &GridInstanceBuffer {
        &self.buffer
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn modes(&self) -> &ModeController<C> {
        &self.modes
    }

    pub fn mailbox(&self) -> &SharedMailbox {
        &self.mailbox
    }

    /// Validate and apply a parameter edit. Grid size changes reallocate the
    /// instance buffer before returning.
    pub fn apply(&mut self, change: ParamChange) -> Result<ParamEffect, SettingsError> {
        let effect = self.settings.apply(change)?;
        if effect == ParamEffect::Reallocate {
            self.buffer.reallocate(*self.settings.grid());
        }
        Ok(effect)
    }

    pub fn select_source(&mut self, source: SourceKind) -> SelectOutcome {
        self.modes.select(source)
    }

    pub fn select_str(&mut self, value: &str) -> Result<SelectOutcome, InputError> {
        self.modes.select_str(value)
    }

    pub fn microphone_granted(
        &mut self,
        ticket: PermissionTicket,
        connection: C,
    ) -> Result<(), ModeError> {
        self.modes.microphone_granted(ticket, connection)
    }

    pub fn microphone_failed(&mut self, ticket: PermissionTicket, error: InputError) -> InputError {
        self.modes.microphone_failed(ticket, error)
    }

    pub fn attach_stream(&mut self, connection: C) {
        self.modes.attach_stream(connection)
    }

    pub fn ground_plane(&self) -> Option<GroundPlane> {
        self.settings.ground_plane_enabled().then(|| GroundPlane {
            z: self.settings.ground_plane_z(),
            size: GROUND_PLANE_SIZE,
        })
    }

    pub fn frame(&mut self, elapsed_ms: f64) -> Frame<'_> {
        self.modes.refresh_bins(&self.mailbox);
        let source = self.modes.height_source(
            self.settings.wave(),
            elapsed_ms,
            self.settings.radial_mapping(),
        );
        self.buffer
            .rebuild(self.settings.grid(), |cell| source.height(cell));

        let ground = self.ground_plane();
        Frame {
            cell_count: self.buffer.len(),
            transforms: self.buffer.take_upload(),
            ground,
            lights: LightRig::at(elapsed_ms),
        }
    }
}
