//! Simulation state and ball kinematics
//!
//! The whole animation is one ball on one surface. Everything the tick and
//! the renderer need lives in `SimState`, owned by whoever drives the loop.

use glam::{DVec2, Vec2};

use crate::settings::Tuning;

/// Drawing surface dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as a float vector (far edges of the surface)
    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Independent noise phases driving x and y drift
    pub noise_phase: DVec2,
    /// Latched on the first wall contact; hides the hint
    pub has_bounced: bool,
}

impl Ball {
    /// Place a fresh ball on a surface
    pub fn spawn(size: SurfaceSize, tuning: &Tuning) -> Self {
        Self {
            pos: size.extent() * tuning.spawn_fraction,
            vel: tuning.spawn_velocity,
            radius: tuning.radius,
            noise_phase: tuning.noise_phase,
            has_bounced: false,
        }
    }

    /// Keep the ball inside `[radius, extent - radius]` on both axes.
    ///
    /// Each axis is corrected on its own, so a corner hit flips both velocity
    /// components in the same call. Returns true if any wall was touched.
    pub fn bounce_off_walls(&mut self, extent: Vec2, restitution: f32) -> bool {
        let r = self.radius;
        let hit_x = bounce_axis(&mut self.pos.x, &mut self.vel.x, r, extent.x, restitution);
        let hit_y = bounce_axis(&mut self.pos.y, &mut self.vel.y, r, extent.y, restitution);
        let hit = hit_x || hit_y;
        if hit {
            self.has_bounced = true;
        }
        hit
    }
}

/// Reflect one axis off the near (0) or far (`extent`) wall
#[inline]
fn bounce_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32, restitution: f32) -> bool {
    if *pos - radius < 0.0 {
        *pos = radius;
        *vel = vel.abs() * restitution;
        true
    } else if *pos + radius > extent {
        *pos = extent - radius;
        *vel = -vel.abs() * restitution;
        true
    } else {
        false
    }
}

/// Cap the magnitude of `vel` at `max_speed`, keeping its direction.
///
/// Zero velocity comes back unchanged.
#[inline]
pub fn limit_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed <= max_speed || speed == 0.0 {
        return vel;
    }
    vel * (max_speed / speed)
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    /// Seed the noise source was built from
    pub seed: u64,
    pub ball: Ball,
    pub size: SurfaceSize,
    pub time_ticks: u64,
}

impl SimState {
    pub fn new(seed: u64, size: SurfaceSize, tuning: &Tuning) -> Self {
        Self {
            seed,
            ball: Ball::spawn(size, tuning),
            size,
            time_ticks: 0,
        }
    }

    /// Adopt a new surface size, moving the ball so its relative position is
    /// preserved. Velocity, noise phases and the bounce latch are untouched.
    pub fn resize(&mut self, size: SurfaceSize) {
        let old = self.size.extent();
        let new = size.extent();
        if old.x > 0.0 {
            self.ball.pos.x = self.ball.pos.x / old.x * new.x;
        }
        if old.y > 0.0 {
            self.ball.pos.y = self.ball.pos.y / old.y * new.y;
        }
        self.size = size;
    }
}
