use serde::{Deserialize, Serialize};

/// Coefficients of the quintic fade polynomial `t³(t(ta - b) + c)` applied
/// to local cell offsets before interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FadeCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl FadeCoefficients {
    /// Ken Perlin's `6t⁵ - 15t⁴ + 10t³`, flat to the second derivative at
    /// both cell edges.
    pub const CLASSIC: Self = Self {
        a: 6.0,
        b: 15.0,
        c: 10.0,
    };

    /// Evaluates the polynomial as-is: no clamping, no validation. Inputs
    /// outside [0, 1] yield whatever the polynomial yields.
    #[inline]
    pub fn fade(&self, t: f64) -> f64 {
        t * t * t * (t * (t * self.a - self.b) + self.c)
    }
}

impl Default for FadeCoefficients {
    fn default() -> Self {
        Self::CLASSIC
    }
}
