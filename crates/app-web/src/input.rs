use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::App;

/// Pixels of wheel travel per zoom notch.
const WHEEL_PIXELS_PER_NOTCH: f32 = 100.0;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    last: Vec2,
}

#[inline]
fn pointer_css_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Drag to orbit, wheel to zoom.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<App>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    {
        let drag = drag.clone();
        let canvas_down = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let _ = canvas_down.set_pointer_capture(ev.pointer_id());
            *drag.borrow_mut() = DragState {
                active: true,
                last: pointer_css_px(&ev),
            };
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    {
        let drag = drag.clone();
        let app = app.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag.borrow_mut();
            if !d.active {
                return;
            }
            let pos = pointer_css_px(&ev);
            let delta = pos - d.last;
            d.last = pos;
            let height = canvas_move.get_bounding_client_rect().height() as f32;
            app.borrow_mut().orbit.drag(delta.x, delta.y, height);
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    for name in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag.borrow_mut().active = false;
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            // wheel down (positive delta) moves away from the target
            let notches = -(ev.delta_y() as f32) / WHEEL_PIXELS_PER_NOTCH;
            app.borrow_mut().orbit.zoom(notches);
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
}
