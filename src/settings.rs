//! Animation settings
//!
//! Read from the container's `data-settings` attribute on the web. Every field
//! is optional in the JSON; missing fields take the defaults from `consts`.

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics tuning for the ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub radius: f32,
    pub drift: f32,
    pub damping: f32,
    pub max_speed: f32,
    pub restitution: f32,
    /// Noise phase advance per tick
    pub noise_step: f64,
    /// Initial noise phases for the x and y drift
    pub noise_phase: DVec2,
    /// Spawn position as a fraction of surface width/height
    pub spawn_fraction: Vec2,
    pub spawn_velocity: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            drift: DRIFT,
            damping: DAMPING,
            max_speed: MAX_SPEED,
            restitution: RESTITUTION,
            noise_step: NOISE_STEP,
            noise_phase: DVec2::new(NOISE_PHASE_X, NOISE_PHASE_Y),
            spawn_fraction: Vec2::new(SPAWN_FRACTION_X, SPAWN_FRACTION_Y),
            spawn_velocity: Vec2::new(SPAWN_VEL_X, SPAWN_VEL_Y),
        }
    }
}

/// Host and appearance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    /// Fixed surface height in CSS pixels
    pub base_height: u32,
    /// Floor for the surface width in CSS pixels
    pub min_width: u32,
    /// Cap on device pixel ratio
    pub max_pixel_density: f64,

    // === Hint ===
    /// Draw the hint label until the first bounce
    pub show_hint: bool,
    pub hint_text: String,

    /// Noise seed (None = pick one at startup)
    pub seed: Option<u64>,

    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_height: BASE_HEIGHT,
            min_width: MIN_WIDTH,
            max_pixel_density: MAX_PIXEL_DENSITY,
            show_hint: true,
            hint_text: HINT_TEXT.to_string(),
            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults.
    ///
    /// Out-of-range values are replaced (see `sanitized`).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Replace values the simulation cannot run with, logging each fix.
    ///
    /// The surface is never smaller than the ball's diameter, so the ball
    /// always fits in `[radius, extent - radius]`.
    pub fn sanitized(mut self) -> Self {
        let defaults = Tuning::default();
        let t = &mut self.tuning;

        check_f32("radius", &mut t.radius, defaults.radius, |v| v > 0.0);
        check_f32("drift", &mut t.drift, defaults.drift, |_| true);
        check_f32("damping", &mut t.damping, defaults.damping, |v| v >= 0.0);
        check_f32("max_speed", &mut t.max_speed, defaults.max_speed, |v| v >= 0.0);
        check_f32("restitution", &mut t.restitution, defaults.restitution, |v| v >= 0.0);

        if !t.noise_step.is_finite() {
            log::warn!("Invalid noise_step ({}), using {}", t.noise_step, defaults.noise_step);
            t.noise_step = defaults.noise_step;
        }
        if !t.noise_phase.is_finite() {
            log::warn!("Invalid noise_phase ({}), using {}", t.noise_phase, defaults.noise_phase);
            t.noise_phase = defaults.noise_phase;
        }
        if !t.spawn_fraction.is_finite() {
            log::warn!("Invalid spawn_fraction, using {}", defaults.spawn_fraction);
            t.spawn_fraction = defaults.spawn_fraction;
        }
        if !t.spawn_velocity.is_finite() {
            log::warn!("Invalid spawn_velocity, using {}", defaults.spawn_velocity);
            t.spawn_velocity = defaults.spawn_velocity;
        }

        let diameter = (2.0 * t.radius).ceil() as u32;
        if self.min_width < diameter {
            log::warn!("min_width {} is below the ball diameter, using {}", self.min_width, diameter);
            self.min_width = diameter;
        }
        if self.base_height < diameter {
            log::warn!(
                "base_height {} is below the ball diameter, using {}",
                self.base_height,
                diameter
            );
            self.base_height = diameter;
        }

        if !(self.max_pixel_density.is_finite() && self.max_pixel_density > 0.0) {
            log::warn!(
                "Invalid max_pixel_density ({}), using {}",
                self.max_pixel_density,
                MAX_PIXEL_DENSITY
            );
            self.max_pixel_density = MAX_PIXEL_DENSITY;
        }

        self
    }

    /// Attribute on the container element holding settings JSON
    pub const SETTINGS_ATTRIBUTE: &'static str = "data-settings";

    /// Load settings from the container's `data-settings` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(container: &web_sys::Element) -> Self {
        match container.get_attribute(Self::SETTINGS_ATTRIBUTE) {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::SETTINGS_ATTRIBUTE);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", Self::SETTINGS_ATTRIBUTE, e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

/// Reset a non-finite or rejected tuning value to its default
fn check_f32(name: &str, value: &mut f32, default: f32, valid: impl Fn(f32) -> bool) {
    if !value.is_finite() || !valid(*value) {
        log::warn!("Invalid {} ({}), using {}", name, value, default);
        *value = default;
    }
}
