// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Frame: image-centered reference frame primitives.
//!
//! This crate provides a small, headless model of an image's local reference
//! frame: coordinates expressed relative to the image's own geometric center,
//! independent of its current on-screen pan offset. It focuses on:
//! - Session-fixed image dimensions ([`ImageFrame`]).
//! - Coordinate conversion between the input surface (touch/pointer
//!   coordinates) and the image-centered local frame.
//!
//! It does **not** own the pan offset. Callers (typically
//! `pinchview_gesture`) hold the current translation and pass it into each
//! conversion, so a single `ImageFrame` value stays valid for the whole
//! viewer session while the image moves underneath it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use pinchview_frame::ImageFrame;
//!
//! // An 800x800 image, currently panned by (30, -10).
//! let frame = ImageFrame::new(800.0, 800.0);
//! let pan = Vec2::new(30.0, -10.0);
//!
//! // A finger at the image's displayed center maps to the local origin.
//! let finger = Point::new(430.0, 390.0);
//! let local = frame.to_image_frame(finger, pan);
//! assert_eq!(local, Point::ZERO);
//!
//! // Conversions are inverses of each other.
//! let back = frame.from_image_frame(local, pan);
//! assert_eq!(back, finger);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Vec2};

/// Session-fixed dimensions of the displayed image.
///
/// `ImageFrame` converts points between input-surface coordinates (where touch
/// samples are reported) and the image's local frame, whose origin sits at the
/// image's geometric center at its current displayed position. Both
/// conversions are pure and defined for all finite inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageFrame {
    width: f64,
    height: f64,
}

impl ImageFrame {
    /// Creates a frame for an image of the given dimensions.
    ///
    /// Dimensions are expressed in the same units as the input surface
    /// (typically device pixels) and are fixed for the session.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the image width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the image height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the offset from the image's minimum corner to its center.
    #[must_use]
    pub fn center_offset(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Converts an input-surface point into the image's local frame.
    ///
    /// `pan` is the current translation of the image on the input surface.
    /// The result's origin corresponds to the image's geometric center at its
    /// current displayed position.
    #[must_use]
    pub fn to_image_frame(&self, point: Point, pan: Vec2) -> Point {
        point - pan - self.center_offset()
    }

    /// Converts a local-frame point back into input-surface coordinates.
    ///
    /// Inverse of [`ImageFrame::to_image_frame`] for the same `pan`.
    #[must_use]
    pub fn from_image_frame(&self, point: Point, pan: Vec2) -> Point {
        point + pan + self.center_offset()
    }
}
