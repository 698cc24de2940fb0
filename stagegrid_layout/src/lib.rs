// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagegrid Layout: a zoomable time-by-category schedule grid.
//!
//! This crate turns schedule data plus a view state into a flat,
//! back-to-front list of paint primitives: a scrollable grid of category
//! columns and time rows, event cards with clipped text, and sticky header
//! and time-label bands that stay fixed on one axis while the content
//! scrolls underneath.
//!
//! The pieces:
//! - [`Category`] / [`ScheduleItem`] / [`Schedule`]: the data model, with
//!   span validation at ingestion ([`Schedule::new`]).
//! - [`GridMetrics`] / [`GridStyle`]: immutable per-session layout
//!   constants and style tokens.
//! - [`render`] / [`layout`]: the pure layout functions. Same inputs,
//!   same output, every time; no state, no I/O.
//!
//! View state comes from [`stagegrid_viewport`], text measurement and the
//! paint surface from [`stagegrid_imaging`]. A typical frame:
//!
//! ```rust
//! use kurbo::Size;
//! use peniko::Color;
//! use stagegrid_imaging::MonospaceMeasurer;
//! use stagegrid_layout::{Category, CategoryId, GridMetrics, GridStyle, Schedule, ScheduleItem};
//! use stagegrid_viewport::GridViewport;
//!
//! let categories = vec![
//!     Category::new(CategoryId(0), "Main Stage"),
//!     Category::new(CategoryId(1), "Rock Stage"),
//! ];
//! let schedule = Schedule::new(vec![ScheduleItem {
//!     label: "Band X".into(),
//!     category: CategoryId(0),
//!     start_minutes: 13 * 60,
//!     end_minutes: 14 * 60 + 30,
//!     color: Color::from_rgb8(0x81, 0xC7, 0x84),
//! }])
//! .unwrap();
//!
//! let metrics = GridMetrics::default();
//! let container = Size::new(400.0, 800.0);
//! let view = GridViewport::new().state();
//!
//! let list = stagegrid_layout::layout(
//!     schedule.items(),
//!     &categories,
//!     &metrics,
//!     &GridStyle::default(),
//!     view,
//!     container,
//!     &MonospaceMeasurer::new(),
//! );
//! assert!(!list.is_empty());
//! ```
//!
//! The host is responsible for re-running [`layout`] whenever the view
//! state or the container size changes; there is no implicit observation.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod render;
mod schedule;

pub use config::{GridMetrics, GridStyle};
pub use render::{layout, render};
pub use schedule::{Category, CategoryId, Schedule, ScheduleDataError, ScheduleItem};
