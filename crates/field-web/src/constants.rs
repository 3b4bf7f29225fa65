// Canvas draw styles for the field layer.

pub const PARTICLE_RGB: &str = "255, 255, 255"; // white dots, alpha per depth
pub const LINK_STROKE: &str = "rgba(255, 255, 255, 0.03)";
pub const LINK_WIDTH: f64 = 0.5; // hairline
