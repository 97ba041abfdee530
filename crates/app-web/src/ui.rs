use std::cell::RefCell;
use std::rc::Rc;

use app_core::{Param, ParamChange, ParamEffect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::panel::{self, GROUND_TOGGLE_ID, PARAM_INPUTS, RADIAL_SELECT_ID, STATUS_ID};
use crate::App;

fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Push current settings back into the panel, e.g. after a rejected edit.
pub fn sync_panel(document: &web::Document, app: &App) {
    let settings = app.vis.settings();
    for (param, id) in PARAM_INPUTS {
        if let Some(input) = dom::element::<web::HtmlInputElement>(document, id) {
            input.set_value(&panel::format_value(param, settings.value(param)));
        }
    }
    if let Some(toggle) = dom::element::<web::HtmlInputElement>(document, GROUND_TOGGLE_ID) {
        toggle.set_checked(settings.ground_plane_enabled());
    }
    if let Some(select) = dom::element::<web::HtmlSelectElement>(document, RADIAL_SELECT_ID) {
        select.set_value(settings.radial_mapping().as_str());
    }
    update_status(document, app);
}

pub fn update_status(document: &web::Document, app: &App) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(&panel::status_line(app.vis.settings(), app.vis.mode())));
    }
}

fn configure_range(input: &web::HtmlInputElement, param: Param) {
    let (min, max) = param.range();
    input.set_min(&min.to_string());
    input.set_max(&max.to_string());
    input.set_step(&param.step().to_string());
}

fn apply_change(document: &web::Document, app: &Rc<RefCell<App>>, change: ParamChange) {
    let mut app = app.borrow_mut();
    match app.vis.apply(change) {
        Ok(ParamEffect::Reallocate) => {
            let grid = *app.vis.settings().grid();
            log::info!("[grid] resized to {}x{}", grid.rows(), grid.cols());
        }
        Ok(_) => {}
        Err(e) => {
            log::warn!("[ui] rejected {:?}: {}", change, e);
            sync_panel(document, &app);
            return;
        }
    }
    update_status(document, &app);
}

pub fn wire_panel(document: &web::Document, app: Rc<RefCell<App>>) {
    for (param, id) in PARAM_INPUTS {
        let Some(input) = dom::element::<web::HtmlInputElement>(document, id) else {
            log::warn!("[ui] missing #{}", id);
            continue;
        };
        configure_range(&input, param);
        let app = app.clone();
        let doc = document.clone();
        let source = input.clone();
        listen(&input, "input", move |_ev: web::Event| {
            match panel::parse_param(param, &source.value()) {
                Some(change) => apply_change(&doc, &app, change),
                None => sync_panel(&doc, &app.borrow()),
            }
        });
    }

    if let Some(toggle) = dom::element::<web::HtmlInputElement>(document, GROUND_TOGGLE_ID) {
        let app = app.clone();
        let doc = document.clone();
        let source = toggle.clone();
        listen(&toggle, "change", move |_ev: web::Event| {
            apply_change(&doc, &app, ParamChange::GroundPlane(source.checked()));
        });
    }

    if let Some(select) = dom::element::<web::HtmlSelectElement>(document, RADIAL_SELECT_ID) {
        let app = app.clone();
        let doc = document.clone();
        let source = select.clone();
        listen(&select, "change", move |_ev: web::Event| {
            if let Some(mapping) = panel::parse_radial(&source.value()) {
                apply_change(&doc, &app, ParamChange::Radial(mapping));
            }
        });
    }

    sync_panel(document, &app.borrow());
}
