// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// A 2D similarity transform: uniform scale, rotation, then translation.
///
/// Treating each point as a complex number `z = x + iy`, the transform maps
/// `z` to `s·e^{iθ}·z + t`. Two point correspondences determine it uniquely,
/// which is exactly what a two-finger gesture provides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Similarity {
    /// Uniform scale factor `s`.
    pub scale: f64,
    /// Rotation `θ` in degrees.
    pub rotation_degrees: f64,
    /// Translation `t`, applied after scale and rotation.
    pub translation: Vec2,
}

impl Similarity {
    /// The identity similarity.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_degrees: 0.0,
        translation: Vec2::ZERO,
    };

    /// Solves for the similarity mapping `prev.0 → current.0` and
    /// `prev.1 → current.1` simultaneously.
    ///
    /// With `k = s·e^{iθ}` as a single complex number, the two constraints
    /// give `k = (z2' - z1') / (z2 - z1)` and `t = z1' - k·z1`.
    ///
    /// Returns `None` when the previous positions coincide: the denominator
    /// vanishes and rotation/scale are underdetermined. Callers are expected
    /// to skip the update for that frame.
    #[must_use]
    pub fn from_point_pairs(prev: (Point, Point), current: (Point, Point)) -> Option<Self> {
        if prev.0 == prev.1 {
            return None;
        }
        let k = complex_div(current.1 - current.0, prev.1 - prev.0);
        let translation = current.0 - complex_mul(k, prev.0.to_vec2()).to_point();
        Some(Self {
            scale: k.hypot(),
            rotation_degrees: k.atan2().to_degrees(),
            translation,
        })
    }

    /// Applies the transform to a point: `s·e^{iθ}·z + t`.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let k = Vec2::from_angle(self.rotation_degrees.to_radians()) * self.scale;
        (complex_mul(k, point.to_vec2()) + self.translation).to_point()
    }
}

/// Complex product of two vectors interpreted as `x + iy`.
fn complex_mul(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x - a.y * b.y, a.x * b.y + a.y * b.x)
}

/// Complex quotient `a / b`. Caller guarantees `b` is nonzero.
fn complex_div(a: Vec2, b: Vec2) -> Vec2 {
    complex_mul(a, Vec2::new(b.x, -b.y)) / b.hypot2()
}
