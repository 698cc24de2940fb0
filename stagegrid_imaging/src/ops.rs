// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use peniko::Color;

use crate::text::MeasuredText;

/// One paint primitive in a back-to-front ordered list.
///
/// Coordinates are in device pixels, already translated by whatever scroll
/// offset applies to the layer the op belongs to; backends apply no further
/// transform. Colors are opaque tokens as far as producers are concerned.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Fill an axis-aligned rounded rectangle with a uniform corner radius.
    FillRoundedRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Uniform corner radius in pixels.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// Stroke a line segment.
    Line {
        /// Start point.
        p0: Point,
        /// End point.
        p1: Point,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Draw a pre-measured text run with its top-left corner at `origin`.
    ///
    /// The full string is drawn; the active clip is what keeps it inside
    /// its cell. Backends must not truncate or re-wrap.
    Text {
        /// Top-left corner of the text's bounding box.
        origin: Point,
        /// Measured text, including the style it was measured with.
        text: MeasuredText,
    },
    /// Begin a rectangular clip scope.
    ///
    /// Scopes nest and must be well-nested: every push is eventually
    /// matched by a [`PaintOp::PopClip`].
    PushClip(Rect),
    /// End the most recent clip scope.
    PopClip,
}

/// Push-style paint surface.
///
/// The layout layer emits ops through this trait in back-to-front order.
/// Implementations range from real canvases to the recording
/// [`DisplayList`](crate::DisplayList).
pub trait Painter {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rounded rectangle with a uniform corner radius.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);

    /// Stroke a line segment.
    fn line(&mut self, p0: Point, p1: Point, width: f64, color: Color);

    /// Draw a pre-measured text run with its top-left corner at `origin`.
    fn text(&mut self, origin: Point, text: MeasuredText);

    /// Begin a rectangular clip scope.
    ///
    /// Must be matched by [`Painter::pop_clip`].
    fn push_clip(&mut self, rect: Rect);

    /// End the most recent clip scope.
    fn pop_clip(&mut self);
}

/// Convenience helpers for [`Painter`] callers.
///
/// This is separate from [`Painter`] so that methods can accept closures
/// and return values without complicating trait object usage
/// (`&mut dyn Painter`).
pub trait PainterExt: Painter {
    /// Run `f` inside a clip scope, popping it afterwards.
    ///
    /// Note: if `f` panics, the clip will not be popped.
    #[inline]
    fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_clip(rect);
        let out = f(self);
        self.pop_clip();
        out
    }
}

impl<P: Painter + ?Sized> PainterExt for P {}
