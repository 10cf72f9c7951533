// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use pinchview_frame::ImageFrame;

use crate::similarity::Similarity;
use crate::transform::ViewTransform;

/// The previous frame's two finger samples, in input-surface coordinates.
///
/// Stored as `Option<FingerPair>` inside the engine: `None` means "not
/// currently tracking two fingers". The pair is non-`None` only while exactly
/// two fingers have been continuously down since it was last established.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerPair {
    /// First finger's position.
    pub a: Point,
    /// Second finger's position.
    pub b: Point,
}

/// Which finger configuration the engine saw on the most recent frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No fingers down.
    #[default]
    Idle,
    /// Exactly one finger down; plain panning.
    OnePanning,
    /// Two fingers down; pan/zoom/rotate tracking.
    TwoTracking,
}

/// Which transition an [`GestureEngine::update`] call performed.
///
/// Exactly one transition fires per frame, chosen from the previous tracking
/// state and the new finger count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// All fingers lifted; tracking cleared and the pan anchor rebased to the
    /// current translation.
    Release,
    /// One finger moving with no pair tracked; plain translation from the pan
    /// anchor.
    Pan,
    /// Finger count reached two; the current samples were recorded as the
    /// tracked pair.
    TwoFingerStart,
    /// Finger count dropped from two to one; tracking cleared and the pan
    /// anchor rebased so the remaining finger continues without a jump.
    TwoFingerStop,
    /// Two fingers still down; the similarity solver ran and the tracked pair
    /// was refreshed.
    TwoFingerContinue,
}

/// Per-frame reducer from finger samples to a persistent [`ViewTransform`].
///
/// The engine is single-threaded and frame-driven: each [`GestureEngine::update`]
/// call runs to completion before the next frame is accepted, and the
/// transform it produces is a `Copy` snapshot consumed by the renderer.
///
/// Inputs per frame:
/// - the active finger samples in input-surface coordinates (zero, one, or
///   two participate; extra fingers beyond the first two are ignored);
/// - the cumulative drag offset since the last release, as reported by the
///   touch source. It drives one-finger panning and the anchor rebase when a
///   two-finger gesture drops back to one finger.
#[derive(Clone, Copy, Debug)]
pub struct GestureEngine {
    frame: ImageFrame,
    transform: ViewTransform,
    pan_anchor: Vec2,
    tracked: Option<FingerPair>,
    phase: GesturePhase,
}

impl GestureEngine {
    /// Creates an engine for an image with the given frame dimensions.
    ///
    /// The transform starts at identity and the engine starts idle.
    #[must_use]
    pub fn new(frame: ImageFrame) -> Self {
        Self {
            frame,
            transform: ViewTransform::IDENTITY,
            pan_anchor: Vec2::ZERO,
            tracked: None,
            phase: GesturePhase::Idle,
        }
    }

    /// Returns the current transform snapshot.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Returns the finger configuration seen on the most recent frame.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns the image frame this engine was created with.
    #[must_use]
    pub fn image_frame(&self) -> ImageFrame {
        self.frame
    }

    /// Returns the tracked finger pair, if a two-finger gesture is active.
    #[must_use]
    pub fn tracked_pair(&self) -> Option<FingerPair> {
        self.tracked
    }

    /// Resets the transform to identity and clears all gesture state.
    ///
    /// The transform otherwise persists for the whole session; this is the
    /// explicit external reset.
    pub fn reset(&mut self) {
        self.transform = ViewTransform::IDENTITY;
        self.pan_anchor = Vec2::ZERO;
        self.tracked = None;
        self.phase = GesturePhase::Idle;
    }

    /// Applies one input frame and returns the transition that fired.
    ///
    /// `touches` holds the active finger samples; only the first two
    /// participate when more are reported. `drag_delta` is the cumulative
    /// drag offset since the last release and must stay continuous across a
    /// two-to-one finger transition for panning to resume without a jump.
    pub fn update(&mut self, touches: &[Point], drag_delta: Vec2) -> Transition {
        let transition = match (self.tracked, touches.len()) {
            (_, 0) => self.on_release(),
            (None, 1) => self.pan_to(drag_delta),
            (Some(_), 1) => self.stop_two_finger(drag_delta),
            (None, _) => self.start_two_finger(FingerPair {
                a: touches[0],
                b: touches[1],
            }),
            (Some(prev), _) => self.continue_two_finger(
                prev,
                FingerPair {
                    a: touches[0],
                    b: touches[1],
                },
            ),
        };
        self.phase = match touches.len() {
            0 => GesturePhase::Idle,
            1 => GesturePhase::OnePanning,
            _ => GesturePhase::TwoTracking,
        };
        transition
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GestureEngineDebugInfo {
        GestureEngineDebugInfo {
            transform: self.transform,
            phase: self.phase,
            pan_anchor: self.pan_anchor,
            tracked: self.tracked,
        }
    }

    fn on_release(&mut self) -> Transition {
        self.tracked = None;
        self.pan_anchor = self.transform.translation;
        Transition::Release
    }

    fn pan_to(&mut self, drag_delta: Vec2) -> Transition {
        self.transform.translation = self.pan_anchor + drag_delta;
        Transition::Pan
    }

    fn stop_two_finger(&mut self, drag_delta: Vec2) -> Transition {
        self.tracked = None;
        // Rebase the anchor by the net drag so far: the remaining finger's
        // next pan frame lands on the current translation, not a stale one.
        self.pan_anchor = self.transform.translation - drag_delta;
        Transition::TwoFingerStop
    }

    fn start_two_finger(&mut self, pair: FingerPair) -> Transition {
        self.tracked = Some(pair);
        Transition::TwoFingerStart
    }

    fn continue_two_finger(&mut self, prev: FingerPair, current: FingerPair) -> Transition {
        let pan = self.transform.translation;
        let prev_local = (
            self.frame.to_image_frame(prev.a, pan),
            self.frame.to_image_frame(prev.b, pan),
        );
        let current_local = (
            self.frame.to_image_frame(current.a, pan),
            self.frame.to_image_frame(current.b, pan),
        );

        // A degenerate previous pair leaves the transform untouched for this
        // frame; the pair is still refreshed below so tracking recovers.
        if let Some(motion) = Similarity::from_point_pairs(prev_local, current_local) {
            self.transform.translation += motion.translation;
            self.transform.scale *= motion.scale;
            self.transform.rotation_degrees += motion.rotation_degrees;
        }
        self.tracked = Some(current);
        Transition::TwoFingerContinue
    }
}

/// Debug snapshot of a [`GestureEngine`] state.
#[derive(Clone, Copy, Debug)]
pub struct GestureEngineDebugInfo {
    /// Current transform snapshot.
    pub transform: ViewTransform,
    /// Finger configuration seen on the most recent frame.
    pub phase: GesturePhase,
    /// Translation recorded at the start of the current gesture segment.
    pub pan_anchor: Vec2,
    /// Tracked finger pair, if a two-finger gesture is active.
    pub tracked: Option<FingerPair>,
}
