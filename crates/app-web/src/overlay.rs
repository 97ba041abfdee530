use web_sys as web;

const NOT_SUPPORTED_ID: &str = "not-supported";

/// Replace the canvas with the static "not supported" notice.
pub fn show_not_supported(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    if let Some(el) = document.get_element_by_id(NOT_SUPPORTED_ID) {
        let _ = el.set_attribute("style", "");
    }
    let _ = canvas.set_attribute("style", "display:none");
}
