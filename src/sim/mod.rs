//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - One tick per frame
//! - Seeded noise only
//! - No rendering or platform dependencies

pub mod noise;
pub mod state;
pub mod tick;

pub use noise::{NoiseSource, PerlinNoise};
pub use state::{Ball, SimState, SurfaceSize, limit_speed};
pub use tick::tick;
