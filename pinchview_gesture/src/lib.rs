// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Gesture: turn raw multi-touch samples into a pan/zoom/rotate
//! view transform.
//!
//! This crate owns the persistent [`ViewTransform`] (translation, uniform
//! scale, rotation) for a displayed image and updates it frame by frame from
//! finger samples: one finger pans, two fingers pan, zoom, and rotate
//! simultaneously. The two-finger update solves for the unique similarity
//! transform explaining the motion of both fingers at once, so zooming about
//! a point and rotating about a point fall out of the same math with no
//! special cases.
//!
//! The engine is a pure synchronous reducer: exactly one
//! [`GestureEngine::update`] runs per delivered input frame, and the
//! resulting [`ViewTransform`] is read as an atomic snapshot by whatever
//! renders the image. Touch capture/dispatch and rendering live elsewhere;
//! callers feed in the active finger list and the cumulative one-finger drag
//! offset their touch source reports.
//!
//! ## Usage
//!
//! 1) Create a [`GestureEngine`] from the image's
//!    [`ImageFrame`](pinchview_frame::ImageFrame) dimensions.
//! 2) On each input frame, call [`GestureEngine::update`] with the active
//!    finger samples (input-surface coordinates) and the cumulative drag
//!    delta since the last release.
//! 3) Read [`GestureEngine::transform`] once per rendered frame to position,
//!    scale, and rotate the image.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use pinchview_frame::ImageFrame;
//! use pinchview_gesture::{GestureEngine, Transition};
//!
//! let mut engine = GestureEngine::new(ImageFrame::new(800.0, 800.0));
//!
//! // One finger down, dragged by (12, 8) since the gesture began.
//! let t = engine.update(&[Point::new(412.0, 408.0)], Vec2::new(12.0, 8.0));
//! assert_eq!(t, Transition::Pan);
//! assert_eq!(engine.transform().translation, Vec2::new(12.0, 8.0));
//!
//! // A second finger lands: the engine starts tracking the pair.
//! let fingers = [Point::new(412.0, 408.0), Point::new(500.0, 408.0)];
//! let t = engine.update(&fingers, Vec2::new(12.0, 8.0));
//! assert_eq!(t, Transition::TwoFingerStart);
//!
//! // All fingers lift: the transform is kept for the next gesture.
//! let t = engine.update(&[], Vec2::ZERO);
//! assert_eq!(t, Transition::Release);
//! ```
//!
//! ## Frame ordering
//!
//! The two-finger update is stateful across frames (scale and rotation are
//! composed incrementally), so frames must be applied in the order the touch
//! source delivers them. Reordering silently corrupts the accumulation.
//!
//! This crate is `no_std`.

#![no_std]

mod engine;
mod similarity;
mod transform;

pub use engine::{FingerPair, GestureEngine, GestureEngineDebugInfo, GesturePhase, Transition};
pub use similarity::Similarity;
pub use transform::ViewTransform;
