//! Drift Ball - a decorative bouncing ball for a web page
//!
//! Core modules:
//! - `sim`: Deterministic simulation (noise drift, damping, wall bounces)
//! - `renderer`: Backend-agnostic 2D scene drawing
//! - `platform`: Browser/native host abstraction (surface sizing, DOM canvas)
//! - `settings`: Data-driven tuning and host configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, Tuning};

/// Animation configuration constants
pub mod consts {
    /// Ball radius in CSS pixels
    pub const BALL_RADIUS: f32 = 22.0;

    /// Noise drift magnitude (acceleration range is ±DRIFT/2 per tick)
    pub const DRIFT: f32 = 0.18;
    /// Per-tick velocity retention
    pub const DAMPING: f32 = 0.992;
    /// Speed cap in pixels/tick
    pub const MAX_SPEED: f32 = 3.2;
    /// Velocity retained on a wall bounce
    pub const RESTITUTION: f32 = 0.98;

    /// Noise phase advance per tick
    pub const NOISE_STEP: f64 = 0.008;
    /// Starting noise phases; far apart so the axes are uncorrelated
    pub const NOISE_PHASE_X: f64 = 1000.0;
    pub const NOISE_PHASE_Y: f64 = 2000.0;

    /// Spawn position as a fraction of the surface size
    pub const SPAWN_FRACTION_X: f32 = 0.33;
    pub const SPAWN_FRACTION_Y: f32 = 0.45;
    /// Spawn velocity in pixels/tick
    pub const SPAWN_VEL_X: f32 = 0.9;
    pub const SPAWN_VEL_Y: f32 = -0.6;

    /// Drawing surface dimensions
    pub const BASE_HEIGHT: u32 = 260;
    pub const MIN_WIDTH: u32 = 240;
    /// Upper bound on device pixel ratio used for the backing store
    pub const MAX_PIXEL_DENSITY: f64 = 2.0;

    /// DOM id of the element the canvas is mounted into
    pub const CONTAINER_ID: &str = "ball-container";
    /// Shown until the ball first touches a wall
    pub const HINT_TEXT: &str = "壁に当たると反射します";
}
