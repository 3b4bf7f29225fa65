use crate::constants::{LINK_STROKE, LINK_WIDTH, PARTICLE_RGB};
use field_core::Field;
use std::f64::consts::PI;
use web_sys as web;

// Every canvas call's Result is discarded: a frame that cannot draw (e.g. a
// lost surface) is skipped, and the next resize or attach recovers.

/// Translucent full-surface fill painted before the update; the residue of
/// previous frames is what produces the motion trails.
pub fn fade(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, alpha: f64) {
    ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {alpha})"));
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Draw all particles, then the proximity links between near pairs.
pub fn render(ctx: &web::CanvasRenderingContext2d, field: &Field) {
    for p in &field.particles {
        let sprite = p.sprite(field.config.depth_range);
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, sprite.radius, 0.0, 2.0 * PI);
        ctx.set_fill_style_str(&format!("rgba({PARTICLE_RGB}, {})", sprite.alpha));
        ctx.fill();
    }

    ctx.set_stroke_style_str(LINK_STROKE);
    ctx.set_line_width(LINK_WIDTH);
    field.for_each_link(|a, b| {
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.stroke();
    });
}
