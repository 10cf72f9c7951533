// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// The displayed image's similarity transform: translation, uniform scale,
/// and rotation.
///
/// This is the single source of truth for how the image is shown. It is owned
/// and mutated by [`GestureEngine`](crate::GestureEngine) and read by the
/// renderer as an atomic snapshot (it is `Copy`, so a read always sees all
/// three fields from the same frame).
///
/// `rotation_degrees` accumulates without wrapping so that continuity is
/// preserved across many gesture segments; use
/// [`ViewTransform::display_rotation`] when a `[0, 360)` value is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Offset of the image on the input surface.
    pub translation: Vec2,
    /// Uniform scale factor. Always positive.
    pub scale: f64,
    /// Accumulated rotation in degrees, unbounded.
    pub rotation_degrees: f64,
}

impl ViewTransform {
    /// The identity transform: no translation, unit scale, no rotation.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
        rotation_degrees: 0.0,
    };

    /// Returns the rotation normalized into `[0, 360)` for display.
    ///
    /// The accumulator itself is left untouched.
    #[must_use]
    pub fn display_rotation(&self) -> f64 {
        self.rotation_degrees.rem_euclid(360.0)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
