// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

/// Identifier for a category (a display column).
///
/// This is a small, opaque handle. The configured category list maps ids to
/// column positions; an item whose id is absent from that list is simply
/// not drawn.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryId(pub u32);

/// One display column of the grid.
///
/// The order of the configured `&[Category]` slice is the column order,
/// left to right, and is fixed for a rendering session.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    /// Identifier items refer to.
    pub id: CategoryId,
    /// Label shown in the sticky header band.
    pub label: String,
}

impl Category {
    /// Creates a category.
    #[must_use]
    pub fn new(id: CategoryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// One scheduled item: a labeled, colored span of time in one category.
///
/// Times are minutes from midnight. Items may overlap arbitrarily; the
/// renderer draws them in list order with no collision policy
/// (last-drawn-wins).
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleItem {
    /// Label drawn on the event card.
    pub label: String,
    /// Column the item belongs to.
    pub category: CategoryId,
    /// Start of the span, in minutes from midnight.
    pub start_minutes: u32,
    /// End of the span, in minutes from midnight. Must exceed the start.
    pub end_minutes: u32,
    /// Card color. Treated as an opaque token.
    pub color: Color,
}

/// A validated list of schedule items.
///
/// [`Schedule::new`] is where malformed data gets reported; everything
/// downstream may assume `end_minutes > start_minutes`. The renderer still
/// clamps rather than crashes if handed raw unvalidated items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    items: Vec<ScheduleItem>,
}

impl Schedule {
    /// Validates and wraps a list of items, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDataError`] for the first item whose span is empty
    /// or inverted (`end_minutes <= start_minutes`).
    pub fn new(items: Vec<ScheduleItem>) -> Result<Self, ScheduleDataError> {
        for (index, item) in items.iter().enumerate() {
            if item.end_minutes <= item.start_minutes {
                return Err(ScheduleDataError {
                    index,
                    start_minutes: item.start_minutes,
                    end_minutes: item.end_minutes,
                });
            }
        }
        Ok(Self { items })
    }

    /// Returns the items in their original order.
    #[must_use]
    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }
}

/// Data-validation error reported by [`Schedule::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleDataError {
    /// Index of the offending item in the input list.
    pub index: usize,
    /// The item's start, in minutes from midnight.
    pub start_minutes: u32,
    /// The item's end, in minutes from midnight.
    pub end_minutes: u32,
}

impl fmt::Display for ScheduleDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "schedule item {} has an empty span: end ({} min) is not after start ({} min)",
            self.index, self.end_minutes, self.start_minutes
        )
    }
}

impl core::error::Error for ScheduleDataError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use peniko::Color;

    use super::{CategoryId, Schedule, ScheduleItem};

    fn item(start_minutes: u32, end_minutes: u32) -> ScheduleItem {
        ScheduleItem {
            label: "DJ A".to_string(),
            category: CategoryId(0),
            start_minutes,
            end_minutes,
            color: Color::from_rgb8(0xE5, 0x73, 0x73),
        }
    }

    #[test]
    fn accepts_well_formed_items_in_order() {
        let schedule = Schedule::new(vec![item(720, 780), item(760, 820)]).unwrap();
        assert_eq!(schedule.items().len(), 2);
        assert_eq!(schedule.items()[0].start_minutes, 720);
    }

    #[test]
    fn rejects_empty_and_inverted_spans() {
        let err = Schedule::new(vec![item(720, 780), item(800, 800)]).unwrap_err();
        assert_eq!(err.index, 1);

        let err = Schedule::new(vec![item(900, 840)]).unwrap_err();
        assert_eq!(err.index, 0);
        assert!(err.to_string().contains("not after start"));
    }
}
