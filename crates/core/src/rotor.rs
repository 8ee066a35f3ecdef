//! Rotor - a complex number used as a 2D rotation.

use std::ops::Mul;

/// Complex number `re + im·i`. A unit rotor rotates by its angle when multiplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotor {
    pub re: f64,
    pub im: f64,
}

impl Rotor {
    /// No rotation.
    pub const IDENTITY: Rotor = Rotor { re: 1.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Unit rotor for `angle` radians (counter-clockwise in math coordinates,
    /// clockwise on screen because y grows downward).
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { re: cos, im: sin }
    }

    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Multiplicative inverse `1 / self`, or `None` for zero / non-finite input.
    pub fn inverse(self) -> Option<Self> {
        let n = self.norm_sqr();
        if n == 0.0 || !n.is_finite() {
            return None;
        }
        Some(Self {
            re: self.re / n,
            im: -self.im / n,
        })
    }

    /// Rotate the point `(x, y)`.
    #[inline]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        let p = self * Rotor::new(x, y);
        (p.re, p.im)
    }
}

impl Default for Rotor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Rotor {
    type Output = Rotor;

    #[inline]
    fn mul(self, rhs: Rotor) -> Rotor {
        Rotor {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}
