// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use peniko::Color;

/// Fixed layout constants for a rendering session.
///
/// All lengths are in device pixels at `zoom = 1`; the renderer scales the
/// zoom-dependent ones (`base_hour_height`, column widths, `event_padding`,
/// `corner_radius`) uniformly. Band sizes (`header_height`,
/// `time_column_width`) and margins stay fixed regardless of zoom.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMetrics {
    /// First hour of the time domain (inclusive), 0-23.
    pub start_hour: u32,
    /// Last hour of the time domain, `> start_hour`.
    pub end_hour: u32,
    /// Height of one hour row at unit zoom.
    pub base_hour_height: f64,
    /// Height of the sticky header band.
    pub header_height: f64,
    /// Width of the sticky time-label column.
    pub time_column_width: f64,
    /// Left inset of the time labels inside their column.
    pub time_label_inset: f64,
    /// Gap between the header band and the first hour gridline.
    pub grid_top_margin: f64,
    /// Scrollable slack below the last hour gridline.
    pub bottom_margin: f64,
    /// Inset applied to every side of an event card at unit zoom.
    pub event_padding: f64,
    /// Corner radius of event cards at unit zoom.
    pub corner_radius: f64,
    /// Horizontal gridline granularity: lines per hour (2 = half hours).
    pub rows_per_hour: u32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            start_hour: 12,
            end_hour: 23,
            base_hour_height: 100.0,
            header_height: 56.0,
            time_column_width: 44.0,
            time_label_inset: 12.0,
            grid_top_margin: 28.0,
            bottom_margin: 50.0,
            event_padding: 4.0,
            corner_radius: 6.0,
            rows_per_hour: 2,
        }
    }
}

impl GridMetrics {
    /// Number of hours in the time domain.
    #[must_use]
    pub fn total_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Width of one category column at unit zoom.
    ///
    /// Columns divide the container width left over after the time-label
    /// column, so the full category range spans the container exactly at
    /// `zoom = 1`.
    #[must_use]
    pub fn base_column_width(&self, container: Size, category_count: usize) -> f64 {
        if category_count == 0 {
            return 0.0;
        }
        (container.width - self.time_column_width).max(0.0) / category_count as f64
    }

    /// Total content extent at `zoom = 1`, the basis for scroll bounds.
    #[must_use]
    pub fn unzoomed_content_size(&self, container: Size, category_count: usize) -> Size {
        let width = self.time_column_width
            + self.base_column_width(container, category_count) * category_count as f64;
        let height = self.header_height
            + self.grid_top_margin
            + self.base_hour_height * f64::from(self.total_hours())
            + self.bottom_margin;
        Size::new(width, height)
    }
}

/// Style tokens for a rendering session.
///
/// Colors are opaque to the layout engine; sizes are font sizes in pixels
/// at unit zoom (the renderer scales them with the zoom factor before
/// measuring).
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Surface color, also used to back the sticky bands and corner patch.
    pub background: Color,
    /// Gridline color.
    pub grid_line: Color,
    /// Gridline stroke width.
    pub grid_line_width: f64,
    /// Color of header labels and event card text.
    pub heading_text: Color,
    /// Color of the time labels.
    pub label_text: Color,
    /// Font size of category labels in the header band.
    pub heading_size: f64,
    /// Font size of the hour labels in the time column.
    pub label_size: f64,
    /// Font size of the event card title line.
    pub event_title_size: f64,
    /// Font size of the event card time line.
    pub event_time_size: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xFF, 0xFF, 0xF0),
            grid_line: Color::from_rgb8(0xE8, 0xDB, 0xC3),
            grid_line_width: 1.0,
            heading_text: Color::from_rgb8(0x42, 0x1E, 0x17),
            label_text: Color::from_rgb8(0x78, 0x6B, 0x68),
            heading_size: 18.0,
            label_size: 10.0,
            event_title_size: 16.0,
            event_time_size: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::GridMetrics;

    #[test]
    fn column_width_divides_space_after_time_column() {
        let metrics = GridMetrics {
            time_column_width: 60.0,
            ..GridMetrics::default()
        };
        let container = Size::new(360.0, 800.0);
        assert_eq!(metrics.base_column_width(container, 3), 100.0);
        assert_eq!(metrics.base_column_width(container, 0), 0.0);
    }

    #[test]
    fn unzoomed_content_size_spans_domain_plus_margins() {
        let metrics = GridMetrics::default();
        let container = Size::new(400.0, 800.0);
        let content = metrics.unzoomed_content_size(container, 3);
        // 11 hours at 100px plus header, top margin, and bottom slack.
        assert_eq!(content.height, 56.0 + 28.0 + 1100.0 + 50.0);
        // Columns fill the container width exactly at unit zoom.
        assert_eq!(content.width, 400.0);
    }

    #[test]
    fn narrow_container_clamps_column_width_to_zero() {
        let metrics = GridMetrics::default();
        let container = Size::new(10.0, 800.0);
        assert_eq!(metrics.base_column_width(container, 3), 0.0);
    }
}
