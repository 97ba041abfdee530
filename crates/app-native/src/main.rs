use std::time::Instant;

use anyhow::Context;
use app_core::{
    BinMailbox, GridRenderer, OrbitCamera, ParamChange, ParamEffect, PermissionTicket,
    RadialMapping, RenderError, SelectOutcome, SharedMailbox, SourceKind, Visualizer,
};
use clap::Parser;
use glam::Vec2;
use winit::{
    event::*,
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

mod analyzer;
mod audio;
mod cli;
mod keys;

use audio::{MicHandle, PendingMic};
use keys::Action;

/// Wheel travel in pixels that counts as one zoom notch.
const PIXELS_PER_NOTCH: f32 = 100.0;

struct App<'w> {
    window: &'w Window,
    renderer: GridRenderer<'w>,
    vis: Visualizer<MicHandle>,
    orbit: OrbitCamera,
    mailbox: SharedMailbox,
    pending: Option<(PermissionTicket, PendingMic)>,
    dragging: bool,
    cursor: Option<Vec2>,
    started: Instant,
}

impl<'w> App<'w> {
    fn update_title(&self, note: Option<&str>) {
        let settings = self.vis.settings();
        let grid = settings.grid();
        let wave = settings.wave();
        let mode = if self.vis.modes().is_audio_reactive() {
            "audio"
        } else {
            "generated"
        };
        let mut title = format!(
            "Radial Grid | {}x{} | amp {:.1} | {:.1} Hz | {}",
            grid.rows(),
            grid.cols(),
            wave.amplitude,
            wave.frequency_hz,
            mode
        );
        if let Some(note) = note {
            title.push_str(" | ");
            title.push_str(note);
        }
        self.window.set_title(&title);
    }

    fn select(&mut self, source: SourceKind) {
        // Replacing a pending request drops it, which stops its capture thread.
        self.pending = None;
        match self.vis.select_source(source) {
            SelectOutcome::Generated => {}
            SelectOutcome::AwaitMicrophone(ticket) => {
                self.pending = Some((ticket, audio::open_microphone(self.mailbox.clone())));
            }
            SelectOutcome::ConnectStream { url } => {
                log::warn!("[audio] no native stream player; {} is not played", url);
            }
        }
        self.update_title(None);
    }

    fn poll_microphone(&mut self) {
        let polled = self
            .pending
            .as_mut()
            .and_then(|(ticket, mic)| mic.poll().map(|result| (*ticket, result)));
        let Some((ticket, result)) = polled else {
            return;
        };
        self.pending = None;
        match result {
            Ok(handle) => {
                if let Err(e) = self.vis.microphone_granted(ticket, handle) {
                    log::info!("[mode] {}", e);
                }
                self.update_title(None);
            }
            Err(e) => {
                let e = self.vis.microphone_failed(ticket, e);
                log::error!("[audio] {}", e);
                self.update_title(Some(&e.to_string()));
            }
        }
    }

    fn apply(&mut self, change: ParamChange) {
        match self.vis.apply(change) {
            Ok(ParamEffect::Reallocate) => {
                let grid = *self.vis.settings().grid();
                log::info!("[grid] resized to {}x{}", grid.rows(), grid.cols());
            }
            Ok(_) => {}
            Err(e) => log::warn!("[ui] rejected {:?}: {}", change, e),
        }
        self.update_title(None);
    }

    fn handle_action(&mut self, action: Action, elwt: &EventLoopWindowTarget<()>) {
        match action {
            Action::Select(source) => self.select(source),
            Action::Nudge(param, steps) => {
                let change = self.vis.settings().nudged(param, steps);
                self.apply(change);
            }
            Action::ToggleGround => {
                let enabled = self.vis.settings().ground_plane_enabled();
                self.apply(ParamChange::GroundPlane(!enabled));
            }
            Action::ToggleRadial => {
                let next = match self.vis.settings().radial_mapping() {
                    RadialMapping::Raw => RadialMapping::Corner,
                    RadialMapping::Corner => RadialMapping::Raw,
                };
                self.apply(ParamChange::Radial(next));
            }
            Action::ResetCamera => self.orbit.reset(),
            Action::Quit => elwt.exit(),
        }
    }

    fn window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::Resized(size) => {
                // a minimized window reports 0x0; the surface keeps its last size
                self.renderer.resize(size.width, size.height);
                let (w, h) = self.renderer.size();
                self.orbit.set_aspect(w as f32 / h as f32);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(action) = keys::action_for(&event.logical_key) {
                    self.handle_action(action, elwt);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.dragging = state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                if let (true, Some(last)) = (self.dragging, self.cursor) {
                    let delta = pos - last;
                    let height = self.window.inner_size().height as f32;
                    self.orbit.drag(delta.x, delta.y, height);
                }
                self.cursor = Some(pos);
            }
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseWheel { delta, .. } => {
                // scrolling toward the user moves the camera away
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_NOTCH,
                };
                self.orbit.zoom(notches);
            }
            _ => {}
        }
    }

    fn render(&mut self, elwt: &EventLoopWindowTarget<()>) {
        self.poll_microphone();
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let camera = self.orbit.camera();
        let frame = self.vis.frame(elapsed_ms);
        match self.renderer.render(&camera, &frame) {
            Ok(()) => self.window.request_redraw(),
            Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                log::error!("[gpu] out of memory");
                elwt.exit();
            }
            Err(e) => log::error!("[gpu] render error: {}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = cli::Args::parse();
    let settings = args.settings().context("invalid arguments")?;

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title("Radial Grid")
        .build(&event_loop)
        .context("window")?;
    let size = window.inner_size();

    let renderer = pollster::block_on(GridRenderer::new(
        &window,
        size.width,
        size.height,
        settings.grid().cell_size(),
    ))
    .context("gpu")?;

    let mailbox = BinMailbox::shared();
    let mut app = App {
        window: &window,
        renderer,
        vis: Visualizer::new(settings, mailbox.clone()),
        orbit: OrbitCamera::new(size.width as f32 / size.height.max(1) as f32),
        mailbox,
        pending: None,
        dragging: false,
        cursor: None,
        started: Instant::now(),
    };
    app.select(args.source);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => app.window_event(event, elwt),
        Event::AboutToWait => app.render(elwt),
        _ => {}
    })?;
    Ok(())
}
