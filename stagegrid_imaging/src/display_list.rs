// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use peniko::Color;

use crate::ops::{PaintOp, Painter};
use crate::text::MeasuredText;

/// Recording painter that accumulates ops into an ordered list.
///
/// `DisplayList` is the pull-style face of the IR: a host that prefers a
/// flat list over push callbacks renders into one of these and then walks
/// [`DisplayList::ops`]. It is also the comparison vehicle for tests —
/// lists are `PartialEq`, so "identical inputs yield identical output" is
/// a single assertion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<PaintOp>,
}

impl DisplayList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded ops in back-to-front order.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns the number of recorded ops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Clears the recorded ops.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Consumes the list, returning the raw op vector.
    #[must_use]
    pub fn into_ops(self) -> Vec<PaintOp> {
        self.ops
    }
}

impl Painter for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.ops.push(PaintOp::FillRoundedRect {
            rect,
            radius,
            color,
        });
    }

    fn line(&mut self, p0: Point, p1: Point, width: f64, color: Color) {
        self.ops.push(PaintOp::Line {
            p0,
            p1,
            width,
            color,
        });
    }

    fn text(&mut self, origin: Point, text: MeasuredText) {
        self.ops.push(PaintOp::Text { origin, text });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(PaintOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.ops.push(PaintOp::PopClip);
    }
}
