//! Small DOM lookup and wiring helpers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_document() -> Option<web::Document> {
    web::window()?.document()
}

/// Find the canvas the visualization draws into.
pub fn viz_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))
}

/// Attach a click handler to an element by id. Missing elements are
/// logged and skipped so one absent button does not take the app down.
pub fn add_click_listener(document: &web::Document, id: &str, mut handler: impl FnMut() + 'static) {
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("[dom] no element #{id} to wire");
        return;
    };
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| handler()) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the resulting pixel size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let width = (rect.width() * dpr).round().max(1.0) as u32;
    let height = (rect.height() * dpr).round().max(1.0) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (width, height)
}
