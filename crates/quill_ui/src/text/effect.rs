//! Procedural text effects
//!
//! Effects displace individual glyphs as a function of elapsed time and
//! character index, or (for `Typewriter`) gate how much of the string is
//! visible. Pen advance is never affected by displacement.
//!
//! `RandomBounce` and `Jitter` deliberately use different randomness
//! disciplines: the former re-derives a per-index seeded generator every
//! frame (same index, same motion), the latter samples the thread rng fresh
//! every frame (visibly noisy, not reproducible).

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::math::Vec2;

/// Procedural effect applied to a text run
///
/// Every variant carries `speed` and `strength`; variants that have no use
/// for one of them ignore it (`Jitter` ignores speed, `Typewriter` ignores
/// strength).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextEffect {
    /// No displacement, whole string visible
    None,
    /// Sinusoidal vertical bounce with a fixed per-character phase shift
    Bounce {
        /// Oscillation frequency in cycles per second
        speed: f32,
        /// Peak displacement in pixels
        strength: f32,
    },
    /// Per-character bounce with independent-looking but reproducible
    /// phase, speed, and strength multipliers
    RandomBounce {
        /// Base oscillation frequency in cycles per second
        speed: f32,
        /// Base peak displacement in pixels
        strength: f32,
    },
    /// Frame-fresh uniform noise on both axes
    Jitter {
        /// Ignored
        speed: f32,
        /// Displacement bound in pixels, per axis
        strength: f32,
    },
    /// Monotonic left-to-right reveal
    Typewriter {
        /// Characters revealed per second
        speed: f32,
        /// Ignored
        strength: f32,
    },
}

impl TextEffect {
    /// Number of characters of an `total`-character string that are visible
    /// at `elapsed` seconds
    ///
    /// Non-decreasing in `elapsed` and bounded by `total`. Every effect
    /// except `Typewriter` shows the whole string.
    pub fn visible_chars(&self, total: usize, elapsed: f32) -> usize {
        match self {
            Self::Typewriter { speed, .. } => {
                let revealed = (elapsed * speed).floor().max(0.0);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let revealed = revealed as usize;
                revealed.min(total)
            }
            _ => total,
        }
    }

    /// Displacement for the glyph at `index`, `elapsed` seconds in
    pub fn displacement(&self, index: usize, elapsed: f32) -> Vec2 {
        #[allow(clippy::cast_precision_loss)]
        match *self {
            Self::None | Self::Typewriter { .. } => Vec2::zeros(),
            Self::Bounce { speed, strength } => {
                let phase = index as f32 * 0.5;
                Vec2::new(0.0, (TAU * speed * elapsed + phase).sin() * strength)
            }
            Self::RandomBounce { speed, strength } => {
                // Re-derived each frame from the index so every frame agrees
                // on this character's motion parameters
                let mut rng = StdRng::seed_from_u64(per_index_seed(index));
                let phase = rng.gen_range(0.0..TAU);
                let speed_mul = rng.gen_range(0.5..1.5);
                let strength_mul = rng.gen_range(0.5..1.5);
                Vec2::new(
                    0.0,
                    (TAU * speed * speed_mul * elapsed + phase).sin() * strength * strength_mul,
                )
            }
            Self::Jitter { strength, .. } => {
                if strength <= 0.0 {
                    return Vec2::zeros();
                }
                let mut rng = rand::thread_rng();
                Vec2::new(
                    rng.gen_range(-strength..=strength),
                    rng.gen_range(-strength..=strength),
                )
            }
        }
    }
}

/// Deterministic seed for a character index
fn per_index_seed(index: usize) -> u64 {
    (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(0x5851_F42D)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_typewriter_reveal_is_monotonic_and_bounded() {
        let effect = TextEffect::Typewriter {
            speed: 3.0,
            strength: 0.0,
        };
        let total = 12;

        let mut last = 0;
        for step in 0..100 {
            let elapsed = step as f32 * 0.1;
            let visible = effect.visible_chars(total, elapsed);
            assert!(visible >= last, "reveal went backwards");
            assert!(visible <= total);
            last = visible;
        }
        assert_eq!(last, total);
    }

    #[test]
    fn test_typewriter_negative_time_shows_nothing() {
        let effect = TextEffect::Typewriter {
            speed: 5.0,
            strength: 0.0,
        };
        assert_eq!(effect.visible_chars(8, -1.0), 0);
        assert_eq!(effect.visible_chars(8, 0.0), 0);
    }

    #[test]
    fn test_bounce_formula() {
        let effect = TextEffect::Bounce {
            speed: 2.0,
            strength: 4.0,
        };
        let d = effect.displacement(3, 0.25);
        assert_eq!(d.x, 0.0);
        assert_relative_eq!(d.y, (TAU * 2.0 * 0.25 + 1.5).sin() * 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_random_bounce_is_reproducible_per_index() {
        let effect = TextEffect::RandomBounce {
            speed: 1.0,
            strength: 3.0,
        };

        let a = effect.displacement(5, 0.7);
        let b = effect.displacement(5, 0.7);
        assert_eq!(a, b, "same index and time must give the same displacement");

        // Different indices should not move in lockstep
        let c = effect.displacement(6, 0.7);
        assert_ne!(a, c);
    }

    #[test]
    fn test_jitter_stays_within_strength() {
        let effect = TextEffect::Jitter {
            speed: 0.0,
            strength: 2.5,
        };
        for _ in 0..200 {
            let d = effect.displacement(0, 0.0);
            assert!(d.x.abs() <= 2.5);
            assert!(d.y.abs() <= 2.5);
        }
    }

    #[test]
    fn test_none_has_no_displacement() {
        assert_eq!(TextEffect::None.displacement(9, 4.2), Vec2::zeros());
        assert_eq!(TextEffect::None.visible_chars(7, 0.0), 7);
    }
}
