use web_sys as web;

/// Current viewport size in CSS pixels, zero when unavailable.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w.max(0.0) as u32, h.max(0.0) as u32)
}

/// Size the canvas backing store to the viewport so the layer covers the
/// whole page behind the content. Returns the applied dimensions.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = match web::window() {
        Some(win) => viewport_size(&win),
        None => (0, 0),
    };
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}
