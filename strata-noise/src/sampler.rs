use strata_util::math::{lerp2, vector2::Vector2};
use strata_util::random::{RandomImpl, lattice_key, xoroshiro128::Xoroshiro};

use crate::fade::FadeCoefficients;

/// Samples 2D gradient noise for one seed pair and fade curve.
///
/// Carries no state between calls: every gradient lookup derives its own
/// random stream from the lattice point and the seed pair, so one sampler
/// can be shared across threads without locking.
pub struct GradientNoiseSampler {
    seed_x: i64,
    seed_y: i64,
    fade: FadeCoefficients,
}

impl GradientNoiseSampler {
    pub fn new(seed_x: i64, seed_y: i64, fade: FadeCoefficients) -> Self {
        log::trace!(
            "new gradient noise sampler, seeds ({}, {})",
            seed_x,
            seed_y
        );
        Self {
            seed_x,
            seed_y,
            fade,
        }
    }

    /// Unit gradient vector of the lattice point `(x, y)`.
    ///
    /// Pure in `(x, y)` and the seed pair: identical inputs produce the
    /// bit-identical vector, on any thread, in any call order.
    pub fn gradient(&self, x: i32, y: i32) -> Vector2<f64> {
        let mut random =
            Xoroshiro::from_seed(lattice_key(x, y, self.seed_x, self.seed_y) as u64);
        let angle = random.next_f64() * std::f64::consts::TAU;
        Vector2::new(angle.cos(), angle.sin())
    }

    /// Noise value at `(x, y)`, approximately in [-1, 1].
    ///
    /// Exactly 0 at integer lattice points; NaN inputs propagate NaN.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor() as i32;
        let y0 = y.floor() as i32;
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let sx = self.fade.fade(x - x0 as f64);
        let sy = self.fade.fade(y - y0 as f64);

        let n00 = self.gradient(x0, y0).dot(x - x0 as f64, y - y0 as f64);
        let n10 = self.gradient(x1, y0).dot(x - x1 as f64, y - y0 as f64);
        let n01 = self.gradient(x0, y1).dot(x - x0 as f64, y - y1 as f64);
        let n11 = self.gradient(x1, y1).dot(x - x1 as f64, y - y1 as f64);

        lerp2(sx, sy, n00, n10, n01, n11)
    }
}
