//! Per-frame simulation tick
//!
//! One tick is one animation frame. Positions are in CSS pixels and
//! velocities in pixels per tick.

use glam::Vec2;

use super::noise::NoiseSource;
use super::state::{SimState, limit_speed};
use crate::settings::Tuning;

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, noise: &impl NoiseSource, tuning: &Tuning) {
    let ball = &mut state.ball;

    // Drift: smooth noise centred on zero
    let accel = Vec2::new(
        (noise.sample(ball.noise_phase.x) - 0.5) * tuning.drift,
        (noise.sample(ball.noise_phase.y) - 0.5) * tuning.drift,
    );
    ball.noise_phase += tuning.noise_step;

    ball.vel = (ball.vel + accel) * tuning.damping;
    ball.vel = limit_speed(ball.vel, tuning.max_speed);
    ball.pos += ball.vel;

    let was_bounced = ball.has_bounced;
    ball.bounce_off_walls(state.size.extent(), tuning.restitution);
    if ball.has_bounced && !was_bounced {
        log::debug!(
            "First bounce at tick {} ({:.1}, {:.1})",
            state.time_ticks,
            ball.pos.x,
            ball.pos.y
        );
    }

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::surface_size;
    use crate::settings::Settings;
    use crate::sim::noise::PerlinNoise;
    use crate::sim::state::SurfaceSize;
    use proptest::prelude::*;

    /// Noise pinned at the midpoint: no drift at all
    struct Still;

    impl NoiseSource for Still {
        fn sample(&self, _phase: f64) -> f32 {
            0.5
        }
    }

    /// Noise pinned at a fixed value
    struct Fixed(f32);

    impl NoiseSource for Fixed {
        fn sample(&self, _phase: f64) -> f32 {
            self.0
        }
    }

    fn state(width: u32, height: u32) -> SimState {
        SimState::new(1, SurfaceSize::new(width, height), &Tuning::default())
    }

    #[test]
    fn test_tick_without_drift_damps_and_moves() {
        let tuning = Tuning::default();
        let mut state = state(300, 260);
        let start = state.ball.pos;

        tick(&mut state, &Still, &tuning);

        let expected_vel = Vec2::new(0.9, -0.6) * 0.992;
        assert!((state.ball.vel - expected_vel).length() < 1e-6);
        assert!((state.ball.pos - (start + expected_vel)).length() < 1e-4);
        assert_eq!(state.time_ticks, 1);
        assert!(!state.ball.has_bounced);
    }

    #[test]
    fn test_tick_advances_noise_phases() {
        let tuning = Tuning::default();
        let mut state = state(300, 260);
        for _ in 0..10 {
            tick(&mut state, &Still, &tuning);
        }
        assert!((state.ball.noise_phase.x - 1000.08).abs() < 1e-9);
        assert!((state.ball.noise_phase.y - 2000.08).abs() < 1e-9);
    }

    #[test]
    fn test_drift_direction_follows_noise() {
        let tuning = Tuning::default();
        let mut state = state(300, 260);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state, &Fixed(0.9), &tuning);
        // (0.9 - 0.5) * 0.18 = 0.072, then damped
        assert!((state.ball.vel.x - 0.072 * 0.992).abs() < 1e-6);
        assert!((state.ball.vel.y - 0.072 * 0.992).abs() < 1e-6);
    }

    #[test]
    fn test_speed_capped_after_tick() {
        let tuning = Tuning::default();
        let mut state = state(800, 260);
        state.ball.pos = Vec2::new(400.0, 130.0);
        state.ball.vel = Vec2::new(30.0, 0.0);

        tick(&mut state, &Still, &tuning);
        assert!((state.ball.vel.length() - 3.2).abs() < 1e-5);
        assert!((state.ball.pos.x - 403.2).abs() < 1e-3);
    }

    #[test]
    fn test_corner_collision_in_one_tick() {
        let tuning = Tuning::default();
        let mut state = state(300, 260);
        state.ball.pos = Vec2::new(5.0, 5.0);
        state.ball.vel = Vec2::new(-1.0, -1.0);

        tick(&mut state, &Still, &tuning);

        let expected = 0.992 * 0.98;
        assert_eq!(state.ball.pos, Vec2::new(22.0, 22.0));
        assert!((state.ball.vel.x - expected).abs() < 1e-6);
        assert!((state.ball.vel.y - expected).abs() < 1e-6);
        assert!(state.ball.has_bounced);
    }

    #[test]
    fn test_bounce_latch_never_resets() {
        let tuning = Tuning::default();
        let mut state = state(300, 260);
        state.ball.pos = Vec2::new(279.0, 130.0);
        state.ball.vel = Vec2::new(3.0, 0.0);
        tick(&mut state, &Still, &tuning);
        assert!(state.ball.has_bounced);

        // Well inside the walls from here on
        for _ in 0..20 {
            tick(&mut state, &Still, &tuning);
            assert!(state.ball.has_bounced);
        }
    }

    #[test]
    fn test_ball_eventually_bounces_with_real_noise() {
        let tuning = Tuning::default();
        let noise = PerlinNoise::new(2024);
        let mut state = state(240, 260);
        for _ in 0..10_000 {
            tick(&mut state, &noise, &tuning);
            if state.ball.has_bounced {
                return;
            }
        }
        panic!("ball never reached a wall");
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let noise = PerlinNoise::new(99999);
        let mut state1 = state(640, 260);
        let mut state2 = state(640, 260);

        for _ in 0..500 {
            tick(&mut state1, &noise, &tuning);
            tick(&mut state2, &noise, &tuning);
        }
        assert_eq!(state1, state2);
    }

    #[test]
    fn test_huge_noise_phase_from_settings() {
        let settings =
            Settings::from_json(r#"{ "tuning": { "noise_phase": [1e20, 2000.0] } }"#).unwrap();
        let noise = PerlinNoise::new(4);
        let mut state = SimState::new(4, SurfaceSize::new(300, 260), &settings.tuning);
        for _ in 0..100 {
            tick(&mut state, &noise, &settings.tuning);
        }
        assert!(state.ball.pos.is_finite());
        assert!(state.ball.vel.length() <= settings.tuning.max_speed + 1e-4);
    }

    #[test]
    fn test_tiny_surface_settings_keep_ball_inside() {
        let settings = Settings::from_json(r#"{ "min_width": 10, "base_height": 10 }"#).unwrap();
        let tuning = &settings.tuning;
        let noise = PerlinNoise::new(11);
        let size = surface_size(0.0, &settings);
        let mut state = SimState::new(11, size, tuning);
        let extent = size.extent();
        let r = tuning.radius;

        for _ in 0..500 {
            tick(&mut state, &noise, tuning);
            let pos = state.ball.pos;
            assert!(pos.x >= r && pos.x <= extent.x - r, "x {} outside surface", pos.x);
            assert!(pos.y >= r && pos.y <= extent.y - r, "y {} outside surface", pos.y);
        }
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_tick(
            seed in any::<u64>(),
            width in 240u32..2000,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let tuning = Tuning::default();
            let noise = PerlinNoise::new(seed);
            let mut state = SimState::new(seed, SurfaceSize::new(width, 260), &tuning);
            let extent = state.size.extent();
            state.ball.pos = extent * Vec2::new(fx, fy);
            state.ball.vel = Vec2::new(vx, vy);

            let r = tuning.radius;
            let mut latched = false;
            for _ in 0..300 {
                tick(&mut state, &noise, &tuning);
                let ball = &state.ball;

                prop_assert!(ball.vel.length() <= tuning.max_speed + 1e-4);
                prop_assert!(ball.pos.x >= r - 1e-3 && ball.pos.x <= extent.x - r + 1e-3);
                prop_assert!(ball.pos.y >= r - 1e-3 && ball.pos.y <= extent.y - r + 1e-3);
                if latched {
                    prop_assert!(ball.has_bounced);
                }
                latched = ball.has_bounced;
            }
        }

        #[test]
        fn prop_limit_speed(vx in -100.0f32..100.0, vy in -100.0f32..100.0) {
            let v = Vec2::new(vx, vy);
            let limited = super::limit_speed(v, 3.2);
            if v.length() > 3.2 {
                prop_assert!((limited.length() - 3.2).abs() < 1e-4);
            } else {
                prop_assert_eq!(limited, v);
            }
        }
    }
}
