// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagegrid Viewport: clamped pan/zoom state for a scrollable grid.
//!
//! This crate provides a small, headless model of the view state behind a
//! zoomable, pannable content surface such as a schedule grid:
//! - A plain [`ViewState`] value (`zoom`, `offset_x`, `offset_y`) suitable
//!   for opaque save/restore by a host.
//! - [`GridViewport`], the single authoritative owner of that state, which
//!   applies one gesture delta at a time and re-establishes all bounds
//!   invariants atomically.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to:
//! - Wire gesture input (pan deltas and pinch zoom factors) into
//!   [`GridViewport::apply_gesture`].
//! - Re-run their layout whenever the returned [`ViewState`] changes.
//! - Call [`GridViewport::reclamp`] when the container is resized (for
//!   example on an orientation change), which re-clamps rather than resets.
//!
//! ## Model
//!
//! Content scales uniformly with zoom on both axes. Offsets are expressed
//! in device pixels and are always in `[min(0, container - content), 0]`
//! per axis: `0` means the content's top-left corner sits at the
//! container's top-left corner, and negative values scroll the content up
//! and to the left. When the zoomed content is smaller than the container
//! on an axis, the offset on that axis is forced to `0` so the content
//! anchors to the origin instead of drifting.
//!
//! Zooming is deliberately not focal-point preserving: the pixel under the
//! gesture is not kept stationary. Pan and zoom from one gesture tick are
//! applied in the same update so clamping never lags the zoom by a frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use stagegrid_viewport::GridViewport;
//!
//! let container = Size::new(400.0, 600.0);
//! let content = Size::new(400.0, 1200.0);
//!
//! let mut view = GridViewport::new();
//! let state = view.apply_gesture(Vec2::new(0.0, -150.0), 1.0, container, content);
//! assert_eq!(state.offset_y, -150.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod state;
mod viewport;

pub use state::ViewState;
pub use viewport::{GridViewport, GridViewportDebugInfo};
