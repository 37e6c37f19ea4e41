//! Smooth 1D noise for the ball's drift
//!
//! A layered value-noise in the style of the classic Processing `noise()`:
//! a table of random values, cosine-interpolated, summed over a few octaves
//! with halving amplitude.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Anything that maps a phase to a smooth value in `[0, 1)`
pub trait NoiseSource {
    fn sample(&self, phase: f64) -> f32;
}

/// Table size minus one; used as a wrap mask
const TABLE_MASK: usize = 4095;
const OCTAVES: u32 = 4;
const FALLOFF: f32 = 0.5;

/// Seeded layered value-noise
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    seed: u64,
    table: Vec<f32>,
}

impl PerlinNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let table = (0..=TABLE_MASK).map(|_| rng.random::<f32>()).collect();
        Self { seed, table }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[inline]
fn scaled_cosine(t: f32) -> f32 {
    0.5 * (1.0 - (t * std::f32::consts::PI).cos())
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, phase: f64) -> f32 {
        // Every octave index is masked, so the pattern repeats every table length
        let phase = if phase.is_finite() {
            phase.abs() % (TABLE_MASK + 1) as f64
        } else {
            0.0
        };
        let mut xi = phase.floor() as usize;
        let mut xf = (phase - phase.floor()) as f32;

        let mut total = 0.0;
        let mut amplitude = 0.5;
        for _ in 0..OCTAVES {
            let a = self.table[xi & TABLE_MASK];
            let b = self.table[(xi + 1) & TABLE_MASK];
            total += (a + scaled_cosine(xf) * (b - a)) * amplitude;
            amplitude *= FALLOFF;

            xi <<= 1;
            xf *= 2.0;
            if xf >= 1.0 {
                xi += 1;
                xf -= 1.0;
            }
        }
        // Octave weights sum to 0.9375, so this only guards float drift
        total.clamp(0.0, 0.999_999)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_values() {
        let a = PerlinNoise::new(7);
        let b = PerlinNoise::new(7);
        for i in 0..100 {
            let phase = 1000.0 + i as f64 * 0.37;
            assert_eq!(a.sample(phase), b.sample(phase));
        }
    }

    #[test]
    fn test_different_seed_differs() {
        let a = PerlinNoise::new(1);
        let b = PerlinNoise::new(2);
        let differs = (0..50).any(|i| a.sample(i as f64 * 0.5) != b.sample(i as f64 * 0.5));
        assert!(differs);
    }

    #[test]
    fn test_range() {
        let noise = PerlinNoise::new(12345);
        for i in 0..10_000 {
            let v = noise.sample(i as f64 * 0.013);
            assert!((0.0..1.0).contains(&v), "sample {} out of range: {}", i, v);
        }
    }

    #[test]
    fn test_smooth_over_small_steps() {
        // Adjacent ticks must not jump; that is the whole point of the drift
        let noise = PerlinNoise::new(99);
        let mut phase = 2000.0;
        let mut prev = noise.sample(phase);
        for _ in 0..5000 {
            phase += 0.008;
            let next = noise.sample(phase);
            assert!((next - prev).abs() < 0.1, "jump at phase {}", phase);
            prev = next;
        }
    }

    #[test]
    fn test_huge_phase_stays_in_range() {
        let noise = PerlinNoise::new(5);
        for phase in [1e20, -1e20, f64::MAX, 1.8e19] {
            let v = noise.sample(phase);
            assert!((0.0..1.0).contains(&v), "phase {} gave {}", phase, v);
        }
    }

    #[test]
    fn test_non_finite_phase_is_finite() {
        let noise = PerlinNoise::new(5);
        for phase in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(noise.sample(phase).is_finite());
        }
    }

    #[test]
    fn test_pattern_repeats_every_table_length() {
        let noise = PerlinNoise::new(8);
        for i in 0..20 {
            let phase = 17.0 + i as f64 * 0.25;
            assert_eq!(noise.sample(phase), noise.sample(phase + 4096.0));
        }
    }

    #[test]
    fn test_negative_phase_mirrors() {
        let noise = PerlinNoise::new(3);
        assert_eq!(noise.sample(-12.5), noise.sample(12.5));
    }
}
