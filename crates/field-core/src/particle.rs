/// One point in the pseudo-3D field, projected onto the 2D surface.
///
/// `z` carries no real projection math; it only scales apparent size and
/// opacity so low-z particles read as nearer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    /// Base radius in px, fixed at seeding.
    pub size: f64,
    /// Base alpha, fixed at seeding.
    pub opacity: f64,
}

/// Renderer-facing radius/alpha after depth scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sprite {
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    /// Depth-scaled sprite for drawing. Guaranteed finite: corrupted state
    /// (NaN/inf anywhere) renders as an invisible sprite rather than
    /// propagating into the canvas calls.
    pub fn sprite(&self, depth_range: f64) -> Sprite {
        let scale = (depth_range - self.z) / depth_range;
        let radius = self.size * scale;
        let alpha = self.opacity * scale;
        Sprite {
            radius: if radius.is_finite() { radius.max(0.0) } else { 0.0 },
            alpha: if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 },
        }
    }
}
