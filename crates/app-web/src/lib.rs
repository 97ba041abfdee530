#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use app_core::{
    BinMailbox, GridRenderer, OrbitCamera, RenderError, SelectOutcome, Settings, Visualizer,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod frame;
mod input;
mod overlay;
pub mod panel;
mod ui;

use audio::{AudioGraph, WebInput};

/// Everything event handlers and the frame loop share.
pub(crate) struct App {
    pub vis: Visualizer<WebInput>,
    pub orbit: OrbitCamera,
    pub audio: Option<AudioGraph>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element(&document, "app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;

    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            w.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
                .ok();
        }
        resize_closure.forget();
    }

    let settings = Settings::default();
    let renderer = match GridRenderer::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        canvas.width(),
        canvas.height(),
        settings.grid().cell_size(),
    )
    .await
    {
        Ok(r) => r,
        Err(RenderError::Unsupported(reason)) => {
            log::error!("[gpu] {}", reason);
            overlay::show_not_supported(&document, &canvas);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let audio = dom::element::<web::HtmlAudioElement>(&document, "audio")
        .ok_or_else(|| JsValue::from_str("missing #audio"))
        .and_then(AudioGraph::new)
        .map_err(|e| log::error!("[audio] WebAudio unavailable: {:?}", e))
        .ok();

    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let app = Rc::new(RefCell::new(App {
        vis: Visualizer::new(settings, BinMailbox::shared()),
        orbit: OrbitCamera::new(aspect),
        audio,
    }));

    ui::wire_panel(&document, app.clone());
    wire_source_select(&document, app.clone());
    input::wire_orbit_controls(&canvas, app.clone());
    frame::start_loop(app, renderer, canvas);
    Ok(())
}

fn wire_source_select(document: &web::Document, app: Rc<RefCell<App>>) {
    let Some(select) = dom::element::<web::HtmlSelectElement>(document, panel::SOURCE_SELECT_ID)
    else {
        log::warn!("[ui] missing #{}", panel::SOURCE_SELECT_ID);
        return;
    };
    let doc = document.clone();
    let source = select.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        select_source(&doc, &app, &source.value());
    }) as Box<dyn FnMut(_)>);
    select
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

fn select_source(document: &web::Document, app: &Rc<RefCell<App>>, value: &str) {
    let mut guard = app.borrow_mut();
    let App { vis, audio, .. } = &mut *guard;
    let outcome = match vis.select_str(value) {
        Ok(outcome) => outcome,
        Err(e) => {
            dom::alert(&e.to_string());
            return;
        }
    };
    let Some(graph) = audio.as_mut() else {
        if outcome != SelectOutcome::Generated {
            dom::alert("Web Audio is not available in this browser");
        }
        return;
    };
    graph.resume();

    match outcome {
        SelectOutcome::Generated => {}
        SelectOutcome::ConnectStream { url } => match graph.play_stream(url) {
            Ok(conn) => vis.attach_stream(conn),
            Err(e) => dom::alert(&e.to_string()),
        },
        SelectOutcome::AwaitMicrophone(ticket) => {
            let app = app.clone();
            let doc = document.clone();
            spawn_local(async move {
                let requested = audio::request_microphone().await;
                let mut guard = app.borrow_mut();
                let App { vis, audio, .. } = &mut *guard;
                let connected = requested.and_then(|stream| match audio.as_mut() {
                    Some(graph) => graph.connect_microphone(stream),
                    None => Err(app_core::InputError::DeviceUnavailable(
                        "Web Audio is not available".into(),
                    )),
                });
                match connected {
                    Ok(conn) => match vis.microphone_granted(ticket, conn) {
                        Ok(()) => {
                            if let Some(graph) = audio.as_ref() {
                                graph.mute_output();
                            }
                        }
                        Err(e) => log::info!("[mode] {}", e),
                    },
                    Err(e) => {
                        let e = vis.microphone_failed(ticket, e);
                        dom::alert(&e.to_string());
                    }
                }
                ui::update_status(&doc, &guard);
            });
        }
    }
    ui::update_status(document, &guard);
}
