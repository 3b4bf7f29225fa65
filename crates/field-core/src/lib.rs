pub mod config;
pub mod constants;
pub mod field;
pub mod particle;

pub use config::*;
pub use field::*;
pub use particle::*;
