// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pan/zoom state of a grid view.
///
/// This is a plain value: three floats that a host may hand to an external
/// lifecycle manager and restore verbatim later via
/// [`GridViewport::restore`](crate::GridViewport::restore). All mutation
/// goes through [`GridViewport`](crate::GridViewport), which keeps the
/// invariants:
/// - `min_zoom <= zoom <= max_zoom`,
/// - `min(0, container - content(zoom)) <= offset <= 0` per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Uniform zoom factor applied to both axes.
    pub zoom: f64,
    /// Horizontal scroll offset in device pixels; always `<= 0`.
    pub offset_x: f64,
    /// Vertical scroll offset in device pixels; always `<= 0`.
    pub offset_y: f64,
}

impl ViewState {
    /// The initial state: unit zoom, content anchored to the origin.
    pub const INITIAL: Self = Self {
        zoom: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
}

impl Default for ViewState {
    fn default() -> Self {
        Self::INITIAL
    }
}
