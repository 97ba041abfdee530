use std::cell::RefCell;
use std::rc::Rc;

use app_core::GridRenderer;
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::App;

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive the visualizer from requestAnimationFrame until the page goes away.
pub fn start_loop(
    app: Rc<RefCell<App>>,
    mut renderer: GridRenderer<'static>,
    canvas: web::HtmlCanvasElement,
) {
    let started = Instant::now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        {
            let mut guard = app.borrow_mut();
            let App { vis, orbit, audio } = &mut *guard;

            if vis.modes().is_audio_reactive() {
                if let Some(audio) = audio.as_mut() {
                    audio.poll(vis.mailbox());
                }
            }

            // Keep the surface sized to the canvas backing store
            renderer.resize(canvas.width(), canvas.height());
            let (w, h) = renderer.size();
            orbit.set_aspect(w as f32 / h as f32);

            let camera = orbit.camera();
            let frame = vis.frame(elapsed_ms);
            if let Err(e) = renderer.render(&camera, &frame) {
                log::error!("[gpu] render error: {}", e);
            }
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
