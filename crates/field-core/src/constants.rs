// Seeding spreads for freshly spawned particles. Velocities are centered on
// zero, so a spread of 0.3 means vx, vy land in [-0.15, 0.15).

pub const SEED_SPEED_XY: f64 = 0.3; // planar drift per frame
pub const SEED_SPEED_Z: f64 = 0.5; // depth drift per frame (never damped)

pub const SEED_SIZE_MIN: f64 = 0.5; // base radius in px
pub const SEED_SIZE_SPAN: f64 = 2.0;

pub const SEED_OPACITY_MIN: f64 = 0.2; // base alpha before depth scaling
pub const SEED_OPACITY_SPAN: f64 = 0.5;
