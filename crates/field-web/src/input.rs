use glam::DVec2;
use web_sys as web;

/// Map CSS-space coordinates relative to an element's rect into the canvas
/// backing store's pixel space. Degenerate rects map to the origin.
#[inline]
pub fn css_to_surface(
    x_css: f64,
    y_css: f64,
    rect_w: f64,
    rect_h: f64,
    surface_w: f64,
    surface_h: f64,
) -> DVec2 {
    if rect_w > 0.0 && rect_h > 0.0 {
        DVec2::new(x_css / rect_w * surface_w, y_css / rect_h * surface_h)
    } else {
        DVec2::ZERO
    }
}

/// Pointer position in surface pixels for an event over the given canvas.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    css_to_surface(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
        rect.width(),
        rect.height(),
        canvas.width() as f64,
        canvas.height() as f64,
    )
}
