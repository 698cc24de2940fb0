// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::state::ViewState;

/// Default minimum zoom factor.
const DEFAULT_MIN_ZOOM: f64 = 1.0;
/// Default maximum zoom factor.
const DEFAULT_MAX_ZOOM: f64 = 2.5;

/// Single authoritative owner of a grid view's pan/zoom state.
///
/// `GridViewport` holds one [`ViewState`] and mutates it only through
/// [`GridViewport::apply_gesture`], which applies a pan delta and a zoom
/// factor from one gesture tick and re-establishes all bounds invariants
/// in the same update. There is no partially-applied intermediate state,
/// so a host that reads the state between updates never observes a zoom
/// that has committed before its offsets were re-clamped.
///
/// The viewport does not retain the container or content size; both are
/// supplied per update so that layout changes (orientation, window resize)
/// never leave stale bounds behind. After such a change, call
/// [`GridViewport::reclamp`] once to pull the offsets back into range.
#[derive(Clone, Debug)]
pub struct GridViewport {
    state: ViewState,
    min_zoom: f64,
    max_zoom: f64,
}

impl GridViewport {
    /// Creates a viewport with the initial state and default zoom limits.
    ///
    /// - Initial state is [`ViewState::INITIAL`] (unit zoom, zero offsets).
    /// - Zoom is clamped to `[1.0, 2.5]` by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewState::INITIAL,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Creates a viewport with the given zoom limits.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom`.
    #[must_use]
    pub fn with_zoom_limits(min_zoom: f64, max_zoom: f64) -> Self {
        let mut vp = Self::new();
        vp.set_zoom_limits(min_zoom, max_zoom);
        vp
    }

    /// Returns the current view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Returns the current scroll offset in device pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.state.offset_x, self.state.offset_y)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range; offsets are re-clamped
    /// on the next [`GridViewport::apply_gesture`] or
    /// [`GridViewport::reclamp`] call, once a container size is available.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.state.zoom = self.state.zoom.clamp(min_zoom, max_zoom);
    }

    /// Restores a previously saved state.
    ///
    /// The zoom is clamped into the configured limits and non-finite fields
    /// fall back to [`ViewState::INITIAL`], so a corrupt saved blob can
    /// never poison the viewport. Offsets are pulled back into range by the
    /// next [`GridViewport::reclamp`] / [`GridViewport::apply_gesture`].
    pub fn restore(&mut self, saved: ViewState) {
        let zoom = if saved.zoom.is_finite() {
            saved.zoom.clamp(self.min_zoom, self.max_zoom)
        } else {
            ViewState::INITIAL.zoom
        };
        self.state = ViewState {
            zoom,
            offset_x: finite_or_zero(saved.offset_x).min(0.0),
            offset_y: finite_or_zero(saved.offset_y).min(0.0),
        };
    }

    /// Applies one gesture tick: a pan delta plus a zoom factor.
    ///
    /// The update is atomic with respect to the invariants:
    /// 1. `zoom` is multiplied by `zoom_factor` and clamped into the zoom
    ///    limits.
    /// 2. Scroll bounds are computed from the content size *at the new
    ///    zoom* (`unzoomed_content * zoom`).
    /// 3. The pan delta is added to the offsets.
    /// 4. On any axis where the zoomed content is smaller than the
    ///    container, the offset is forced to `0` so the content anchors to
    ///    the container origin and no gap opens on zoom-out.
    /// 5. Offsets are clamped into `[min(0, container - content), 0]` per
    ///    axis.
    ///
    /// Degenerate input recovers locally rather than corrupting state: a
    /// non-finite or non-positive `zoom_factor` is treated as identity and
    /// non-finite pan components as zero. If the container or content size
    /// itself is non-finite, the tick is a no-op.
    pub fn apply_gesture(
        &mut self,
        pan: Vec2,
        zoom_factor: f64,
        container: Size,
        unzoomed_content: Size,
    ) -> ViewState {
        if !size_is_finite(container) || !size_is_finite(unzoomed_content) {
            return self.state;
        }

        let factor = if zoom_factor.is_finite() && zoom_factor > 0.0 {
            zoom_factor
        } else {
            1.0
        };
        let pan = Vec2::new(finite_or_zero(pan.x), finite_or_zero(pan.y));

        let new_zoom = (self.state.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        let content_width = unzoomed_content.width * new_zoom;
        let content_height = unzoomed_content.height * new_zoom;

        let mut offset_x = self.state.offset_x + pan.x;
        let mut offset_y = self.state.offset_y + pan.y;
        if content_width < container.width {
            offset_x = 0.0;
        }
        if content_height < container.height {
            offset_y = 0.0;
        }

        self.state = ViewState {
            zoom: new_zoom,
            offset_x: offset_x.clamp(min_offset(container.width, content_width), 0.0),
            offset_y: offset_y.clamp(min_offset(container.height, content_height), 0.0),
        };
        self.state
    }

    /// Re-clamps the current state against new container/content sizes.
    ///
    /// Use this after a container resize; the state is pulled back into
    /// bounds, never reset.
    pub fn reclamp(&mut self, container: Size, unzoomed_content: Size) -> ViewState {
        self.apply_gesture(Vec2::ZERO, 1.0, container, unzoomed_content)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GridViewportDebugInfo {
        GridViewportDebugInfo {
            state: self.state,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

impl Default for GridViewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`GridViewport`].
#[derive(Clone, Copy, Debug)]
pub struct GridViewportDebugInfo {
    /// Current view state.
    pub state: ViewState,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}

/// Lower scroll bound for one axis: `min(0, container - content)`.
fn min_offset(container: f64, content: f64) -> f64 {
    (container - content).min(0.0)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn size_is_finite(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite()
}
