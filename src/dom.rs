use flipbook_core::PageError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolve `id` and cast it to the element type the feature needs.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &'static str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or(PageError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType(id))
}

/// All elements under `root` matching `selector`, cast to `T`; others are skipped.
pub fn query_all<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<T>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn query_all_in_document<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    document
        .document_element()
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Match the canvas backing store to the viewport.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}
