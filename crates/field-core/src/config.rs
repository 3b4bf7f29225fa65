/// Tuning parameters for a particle field.
///
/// `Default` carries the values the layer ships with; hosts that want a
/// denser field or a wider pointer well override individual fields.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Hard cap on the particle count regardless of surface area.
    pub max_particles: usize,
    /// Surface area (px^2) per particle; count = area / divisor, capped.
    pub density_divisor: f64,
    /// Pointer influence radius in px; no force at or beyond it.
    pub pointer_radius: f64,
    /// Acceleration applied per frame at zero distance from the pointer.
    pub pointer_strength: f64,
    /// Pairs closer than this (strictly) get a connecting line.
    pub link_distance: f64,
    /// Per-frame multiplier on vx/vy; vz is left undamped.
    pub damping: f64,
    /// Alpha of the full-surface black fill painted each frame; this is what
    /// produces motion trails instead of a hard clear.
    pub trail_fade: f64,
    /// Depth axis extent; z near 0 renders large, z near the extent fades out.
    pub depth_range: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 200,
            density_divisor: 8000.0,
            pointer_radius: 150.0,
            pointer_strength: 0.02,
            link_distance: 100.0,
            damping: 0.999,
            trail_fade: 0.05,
            depth_range: 1000.0,
        }
    }
}
