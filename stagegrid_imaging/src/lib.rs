// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagegrid Imaging: a flat paint-primitive IR and painter traits.
//!
//! This crate defines the small, plain-old-data drawing language that the
//! Stagegrid layout engine speaks. It sits between the layout layer (which
//! decides *what* to draw and where) and concrete paint surfaces (a GPU
//! canvas, a software rasterizer, an SVG exporter, a test recorder).
//!
//! # Core concepts
//!
//! - **Primitives**: [`PaintOp`] covers exactly the operations a schedule
//!   grid needs: filled rectangles, filled rounded rectangles, lines, and
//!   positioned pre-measured text, plus rectangular clip scoping.
//! - **Painters**: [`Painter`] is the push-style host interface; backends
//!   implement it once and receive ops in back-to-front order.
//!   [`PainterExt::with_clip`] scopes a closure under a clip rectangle.
//! - **Recording**: [`DisplayList`] is a `Painter` that records ops into a
//!   comparable list, for tests, debugging, and pull-style hosts that want
//!   an `ops()` slice instead of callbacks.
//! - **Text seam**: text shaping and font resolution are not this crate's
//!   business. [`TextMeasurer`] is the capability the layout layer consumes
//!   (`measure(text, style) -> MeasuredText`); a real host backs it with
//!   its text engine, and [`MonospaceMeasurer`] provides deterministic
//!   fixed metrics for headless use.
//!
//! Clip scopes must be well-nested: every [`Painter::push_clip`] must
//! eventually be matched by a [`Painter::pop_clip`]. Text is *clipped*,
//! never truncated — a backend draws the full measured string and lets the
//! active clip cut it off.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use peniko::Color;
//! use stagegrid_imaging::{DisplayList, Painter, PainterExt};
//!
//! let mut list = DisplayList::new();
//! list.with_clip(Rect::new(0.0, 0.0, 100.0, 50.0), |p| {
//!     p.fill_rect(Rect::new(10.0, 10.0, 90.0, 40.0), Color::WHITE);
//! });
//! assert_eq!(list.ops().len(), 3);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod display_list;
mod ops;
mod text;

pub use display_list::DisplayList;
pub use ops::{PaintOp, Painter, PainterExt};
pub use text::{FontWeight, MeasuredText, MonospaceMeasurer, TextMeasurer, TextStyle};
