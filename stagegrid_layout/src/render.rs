// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect, Size};
use stagegrid_imaging::{
    DisplayList, FontWeight, Painter, PainterExt, TextMeasurer, TextStyle,
};
use stagegrid_viewport::ViewState;

use crate::config::{GridMetrics, GridStyle};
use crate::schedule::{Category, ScheduleItem};

/// Inset of event card text from the card's top-left corner.
const TEXT_INSET: f64 = 8.0;

/// Lays the grid out into a fresh [`DisplayList`].
///
/// Convenience wrapper around [`render`] for pull-style hosts and tests.
#[must_use]
pub fn layout(
    items: &[ScheduleItem],
    categories: &[Category],
    metrics: &GridMetrics,
    style: &GridStyle,
    view: ViewState,
    container: Size,
    measurer: &dyn TextMeasurer,
) -> DisplayList {
    let mut list = DisplayList::new();
    render(
        items, categories, metrics, style, view, container, measurer, &mut list,
    );
    list
}

/// Renders the schedule grid into `painter` as four compositing layers.
///
/// Pure function of its inputs: no state is read or written besides the
/// ops pushed into `painter`, so identical inputs always emit identical
/// op sequences. Emission order, back to front:
///
/// 1. Scrollable content, translated by the full scroll offset: the
///    surface background, horizontal gridlines at the configured per-hour
///    granularity, vertical category boundaries, and event cards with
///    their clipped two-line text.
/// 2. The header band, fixed in Y and translated only by `offset_x`:
///    opaque backing plus centered category labels.
/// 3. The time-label column, fixed in X and translated only by
///    `offset_y`: opaque backing plus one label per hour, vertically
///    centered on its gridline.
/// 4. The corner patch at the origin, occluding the spot where the two
///    sticky bands overlap.
///
/// Everything is scoped under one clip covering the container, so no
/// layer paints outside the drawing surface.
///
/// A degenerate container (zero, negative, or non-finite extent) emits
/// nothing. Items whose category is not in `categories` are skipped, as
/// are items whose span collapses to zero or negative card size.
pub fn render(
    items: &[ScheduleItem],
    categories: &[Category],
    metrics: &GridMetrics,
    style: &GridStyle,
    view: ViewState,
    container: Size,
    measurer: &dyn TextMeasurer,
    painter: &mut dyn Painter,
) {
    let degenerate = !(container.width > 0.0 && container.height > 0.0)
        || !container.width.is_finite()
        || !container.height.is_finite();
    if degenerate {
        return;
    }

    let frame = Frame {
        metrics,
        style,
        categories,
        container,
        zoom: view.zoom,
        offset_x: view.offset_x,
        offset_y: view.offset_y,
        column_width: metrics.base_column_width(container, categories.len()) * view.zoom,
        hour_height: metrics.base_hour_height * view.zoom,
    };

    painter.with_clip(container.to_rect(), |p| {
        p.fill_rect(container.to_rect(), style.background);
        frame.content_layer(items, measurer, p);
        frame.header_band(measurer, p);
        frame.time_column(measurer, p);
        frame.corner_patch(p);
    });
}

/// Per-pass geometry shared by the four layers.
struct Frame<'a> {
    metrics: &'a GridMetrics,
    style: &'a GridStyle,
    categories: &'a [Category],
    container: Size,
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    column_width: f64,
    hour_height: f64,
}

impl Frame<'_> {
    /// X of the first category column's left edge.
    fn grid_left(&self) -> f64 {
        self.metrics.time_column_width
    }

    /// X of the last category column's right edge.
    fn grid_right(&self) -> f64 {
        self.grid_left() + self.categories.len() as f64 * self.column_width
    }

    /// Y of the first hour gridline.
    fn rows_top(&self) -> f64 {
        self.metrics.header_height + self.metrics.grid_top_margin
    }

    /// Y of the last hour gridline.
    fn grid_bottom(&self) -> f64 {
        self.rows_top() + f64::from(self.metrics.total_hours()) * self.hour_height
    }

    /// Layer 1: background, gridlines, and event cards, scrolled on both axes.
    fn content_layer(
        &self,
        items: &[ScheduleItem],
        measurer: &dyn TextMeasurer,
        painter: &mut dyn Painter,
    ) {
        let ox = self.offset_x;
        let oy = self.offset_y;
        let style = self.style;

        if self.metrics.rows_per_hour > 0 {
            let rows = self.metrics.total_hours() * self.metrics.rows_per_hour;
            let row_height = self.hour_height / f64::from(self.metrics.rows_per_hour);
            for i in 0..=rows {
                let y = self.rows_top() + f64::from(i) * row_height + oy;
                painter.line(
                    Point::new(self.grid_left() + ox, y),
                    Point::new(self.grid_right() + ox, y),
                    style.grid_line_width,
                    style.grid_line,
                );
            }
        }

        for i in 0..=self.categories.len() {
            let x = self.grid_left() + i as f64 * self.column_width + ox;
            painter.line(
                Point::new(x, self.metrics.header_height + oy),
                Point::new(x, self.grid_bottom() + oy),
                style.grid_line_width,
                style.grid_line,
            );
        }

        for item in items {
            // The category list is authoritative; unknown ids are not drawn.
            let Some(column) = self
                .categories
                .iter()
                .position(|c| c.id == item.category)
            else {
                continue;
            };
            self.event_card(item, column, measurer, painter);
        }
    }

    /// One event card plus its clipped two-line text.
    fn event_card(
        &self,
        item: &ScheduleItem,
        column: usize,
        measurer: &dyn TextMeasurer,
        painter: &mut dyn Painter,
    ) {
        let start_hours = f64::from(item.start_minutes) / 60.0 - f64::from(self.metrics.start_hour);
        // Inverted spans clamp to zero height here rather than producing
        // negative geometry; validation belongs to `Schedule::new`.
        let duration_hours =
            f64::from(item.end_minutes.saturating_sub(item.start_minutes)) / 60.0;

        let x = self.grid_left() + column as f64 * self.column_width + self.offset_x;
        let y = self.rows_top() + start_hours * self.hour_height + self.offset_y;
        let pad = self.metrics.event_padding * self.zoom;
        let card = Rect::new(
            x + pad,
            y + pad,
            x + self.column_width - pad,
            y + duration_hours * self.hour_height - pad,
        );
        if card.width() <= 0.0 || card.height() <= 0.0 {
            return;
        }

        painter.fill_rounded_rect(card, self.metrics.corner_radius * self.zoom, item.color);

        let time_style = TextStyle::new(
            self.style.event_time_size * self.zoom,
            self.style.heading_text,
        );
        let title_style = TextStyle::new(
            self.style.event_title_size * self.zoom,
            self.style.heading_text,
        )
        .with_weight(FontWeight::Bold);
        let time = measurer.measure(&time_range_label(item), &time_style);
        let title = measurer.measure(&item.label, &title_style);

        painter.with_clip(card, |p| {
            let origin = Point::new(card.x0 + TEXT_INSET, card.y0 + TEXT_INSET);
            let time_height = time.size.height;
            p.text(origin, time);
            p.text(Point::new(origin.x, origin.y + time_height), title);
        });
    }

    /// Layer 2: sticky header band, scrolled in X only.
    fn header_band(&self, measurer: &dyn TextMeasurer, painter: &mut dyn Painter) {
        let band = Rect::new(0.0, 0.0, self.container.width, self.metrics.header_height);
        painter.fill_rect(band, self.style.background);

        let label_style = TextStyle::new(
            self.style.heading_size * self.zoom,
            self.style.heading_text,
        )
        .with_weight(FontWeight::Bold);
        painter.with_clip(band, |p| {
            for (i, category) in self.categories.iter().enumerate() {
                let x = self.grid_left() + i as f64 * self.column_width + self.offset_x;
                let text = measurer.measure(&category.label, &label_style);
                let origin = Point::new(
                    x + (self.column_width - text.size.width) / 2.0,
                    (self.metrics.header_height - text.size.height) / 2.0,
                );
                p.text(origin, text);
            }
        });
    }

    /// Layer 3: sticky time-label column, scrolled in Y only.
    fn time_column(&self, measurer: &dyn TextMeasurer, painter: &mut dyn Painter) {
        painter.fill_rect(
            Rect::new(
                0.0,
                self.metrics.header_height,
                self.metrics.time_column_width,
                self.container.height,
            ),
            self.style.background,
        );

        let label_style = TextStyle::new(self.style.label_size * self.zoom, self.style.label_text);
        let band = Rect::new(
            0.0,
            0.0,
            self.metrics.time_column_width,
            self.container.height,
        );
        painter.with_clip(band, |p| {
            for i in 0..=self.metrics.total_hours() {
                let y = self.rows_top() + f64::from(i) * self.hour_height + self.offset_y;
                let label = format!("{:02}:00", (self.metrics.start_hour + i) % 24);
                let text = measurer.measure(&label, &label_style);
                // Centered on the gridline, not below it.
                let origin =
                    Point::new(self.metrics.time_label_inset, y - text.size.height / 2.0);
                p.text(origin, text);
            }
        });
    }

    /// Layer 4: corner patch where the two sticky bands meet, painted last.
    fn corner_patch(&self, painter: &mut dyn Painter) {
        painter.fill_rect(
            Rect::new(
                0.0,
                0.0,
                self.metrics.time_column_width,
                self.metrics.header_height,
            ),
            self.style.background,
        );
    }
}

/// `"HH:MM-HH:MM"` label for an event card's time line.
fn time_range_label(item: &ScheduleItem) -> String {
    format!(
        "{}-{}",
        clock(item.start_minutes),
        clock(item.end_minutes)
    )
}

fn clock(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size};
    use peniko::Color;
    use stagegrid_imaging::{
        FontWeight, MonospaceMeasurer, PaintOp, TextMeasurer, TextStyle,
    };
    use stagegrid_viewport::ViewState;

    use super::layout;
    use crate::config::{GridMetrics, GridStyle};
    use crate::schedule::{Category, CategoryId, ScheduleItem};

    const CONTAINER: Size = Size::new(260.0, 800.0);

    fn test_metrics() -> GridMetrics {
        GridMetrics {
            start_hour: 12,
            end_hour: 23,
            base_hour_height: 100.0,
            header_height: 80.0,
            time_column_width: 60.0,
            time_label_inset: 12.0,
            grid_top_margin: 0.0,
            bottom_margin: 0.0,
            event_padding: 0.0,
            corner_radius: 6.0,
            rows_per_hour: 2,
        }
    }

    fn test_categories() -> Vec<Category> {
        vec![
            Category::new(CategoryId(0), "Main Stage"),
            Category::new(CategoryId(1), "Rock Stage"),
        ]
    }

    fn item(category: CategoryId, start_minutes: u32, end_minutes: u32) -> ScheduleItem {
        ScheduleItem {
            label: "Band X".to_string(),
            category,
            start_minutes,
            end_minutes,
            color: Color::from_rgb8(0x81, 0xC7, 0x84),
        }
    }

    fn card_rects(ops: &[PaintOp]) -> Vec<Rect> {
        ops.iter()
            .filter_map(|op| match op {
                PaintOp::FillRoundedRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn event_card_maps_time_and_category_to_pixels() {
        // 13:00-14:30 in the first column: one hour below the header,
        // ninety minutes tall, starting right of the time column.
        let items = [item(CategoryId(0), 13 * 60, 14 * 60 + 30)];
        let list = layout(
            &items,
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            ViewState::INITIAL,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );

        let cards = card_rects(list.ops());
        assert_eq!(cards, vec![Rect::new(60.0, 180.0, 160.0, 330.0)]);
    }

    #[test]
    fn zoom_scales_columns_rows_and_card_geometry() {
        let items = [item(CategoryId(1), 13 * 60, 14 * 60)];
        let view = ViewState {
            zoom: 2.0,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        let list = layout(
            &items,
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            view,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );

        let cards = card_rects(list.ops());
        assert_eq!(cards, vec![Rect::new(260.0, 280.0, 460.0, 480.0)]);
    }

    #[test]
    fn layout_is_idempotent() {
        let items = [
            item(CategoryId(0), 13 * 60, 14 * 60 + 30),
            item(CategoryId(1), 14 * 60, 15 * 60),
        ];
        let view = ViewState {
            zoom: 1.5,
            offset_x: -40.0,
            offset_y: -120.0,
        };
        let a = layout(
            &items,
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            view,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );
        let b = layout(
            &items,
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            view,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_category_items_are_dropped() {
        let mut ghost = item(CategoryId(9), 13 * 60, 14 * 60);
        ghost.label = "Ghost".to_string();
        let list = layout(
            &[ghost],
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            ViewState::INITIAL,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );

        assert!(card_rects(list.ops()).is_empty());
        assert!(
            !list.ops().iter().any(|op| matches!(
                op,
                PaintOp::Text { text, .. } if text.text == "Ghost"
            )),
            "dropped item's text leaked into the output"
        );
    }

    #[test]
    fn degenerate_container_emits_nothing() {
        let items = [item(CategoryId(0), 13 * 60, 14 * 60)];
        for container in [
            Size::new(0.0, 0.0),
            Size::new(-10.0, 600.0),
            Size::new(400.0, 0.0),
            Size::new(f64::NAN, 600.0),
        ] {
            let list = layout(
                &items,
                &test_categories(),
                &test_metrics(),
                &GridStyle::default(),
                ViewState::INITIAL,
                container,
                &MonospaceMeasurer::new(),
            );
            assert!(list.is_empty(), "expected empty output for {container:?}");
        }
    }

    #[test]
    fn inverted_span_is_clamped_and_dropped() {
        // The renderer did not construct this data and must not crash on
        // it; the card collapses to zero height and is not drawn.
        let list = layout(
            &[item(CategoryId(0), 14 * 60, 13 * 60)],
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            ViewState::INITIAL,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );
        assert!(card_rects(list.ops()).is_empty());
    }

    #[test]
    fn event_text_is_clipped_to_its_card() {
        let items = [item(CategoryId(0), 13 * 60, 14 * 60 + 30)];
        let list = layout(
            &items,
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            ViewState::INITIAL,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );
        let ops = list.ops();

        let card = Rect::new(60.0, 180.0, 160.0, 330.0);
        let card_at = ops
            .iter()
            .position(|op| matches!(op, PaintOp::FillRoundedRect { .. }))
            .unwrap();
        assert_eq!(ops[card_at + 1], PaintOp::PushClip(card));

        let (PaintOp::Text { text: time, .. }, PaintOp::Text { text: title, .. }) =
            (&ops[card_at + 2], &ops[card_at + 3])
        else {
            panic!("expected two text ops inside the card clip");
        };
        assert_eq!(time.text, "13:00-14:30");
        assert_eq!(title.text, "Band X");
        assert_eq!(title.style.weight, FontWeight::Bold);
        assert_eq!(ops[card_at + 4], PaintOp::PopClip);
    }

    #[test]
    fn layers_composite_back_to_front() {
        let style = GridStyle::default();
        let metrics = test_metrics();
        let items = [item(CategoryId(0), 13 * 60, 14 * 60)];
        let list = layout(
            &items,
            &test_categories(),
            &metrics,
            &style,
            ViewState::INITIAL,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );
        let ops = list.ops();

        // Root clip and surface background open the list.
        assert_eq!(ops[0], PaintOp::PushClip(CONTAINER.to_rect()));
        assert_eq!(
            ops[1],
            PaintOp::FillRect {
                rect: CONTAINER.to_rect(),
                color: style.background,
            }
        );

        let header_backing = PaintOp::FillRect {
            rect: Rect::new(0.0, 0.0, CONTAINER.width, metrics.header_height),
            color: style.background,
        };
        let column_backing = PaintOp::FillRect {
            rect: Rect::new(
                0.0,
                metrics.header_height,
                metrics.time_column_width,
                CONTAINER.height,
            ),
            color: style.background,
        };
        let header_at = ops.iter().position(|op| *op == header_backing).unwrap();
        let column_at = ops.iter().position(|op| *op == column_backing).unwrap();
        let last_line_at = ops
            .iter()
            .rposition(|op| matches!(op, PaintOp::Line { .. }))
            .unwrap();
        let last_card_at = ops
            .iter()
            .rposition(|op| matches!(op, PaintOp::FillRoundedRect { .. }))
            .unwrap();

        assert!(last_line_at < header_at, "content must precede the header");
        assert!(last_card_at < header_at, "events must precede the header");
        assert!(header_at < column_at, "header must precede the time column");

        // Corner patch goes last, just before the root clip pops.
        let corner = PaintOp::FillRect {
            rect: Rect::new(0.0, 0.0, metrics.time_column_width, metrics.header_height),
            color: style.background,
        };
        assert_eq!(ops[ops.len() - 2], corner);
        assert_eq!(ops[ops.len() - 1], PaintOp::PopClip);
    }

    #[test]
    fn sticky_bands_each_ignore_one_scroll_axis() {
        let style = GridStyle::default();
        let metrics = test_metrics();
        let measurer = MonospaceMeasurer::new();
        let view = ViewState {
            zoom: 1.0,
            offset_x: -30.0,
            offset_y: -70.0,
        };
        let list = layout(
            &[],
            &test_categories(),
            &metrics,
            &style,
            view,
            CONTAINER,
            &measurer,
        );
        let ops = list.ops();

        // Content: the first horizontal gridline carries both offsets.
        let first_line = ops
            .iter()
            .find_map(|op| match op {
                PaintOp::Line { p0, p1, .. } => Some((*p0, *p1)),
                _ => None,
            })
            .unwrap();
        assert_eq!(first_line.0, Point::new(60.0 - 30.0, 80.0 - 70.0));
        assert_eq!(first_line.1, Point::new(260.0 - 30.0, 80.0 - 70.0));

        // Header labels scroll in X but stay put in Y.
        let heading_style =
            TextStyle::new(style.heading_size, style.heading_text).with_weight(FontWeight::Bold);
        let heading = measurer.measure("Main Stage", &heading_style);
        let header_origin = ops
            .iter()
            .find_map(|op| match op {
                PaintOp::Text { origin, text } if text.text == "Main Stage" => Some(*origin),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            header_origin,
            Point::new(
                60.0 - 30.0 + (100.0 - heading.size.width) / 2.0,
                (metrics.header_height - heading.size.height) / 2.0,
            )
        );

        // Time labels scroll in Y but stay put in X, centered on their line.
        let label_style = TextStyle::new(style.label_size, style.label_text);
        let label = measurer.measure("12:00", &label_style);
        let label_origin = ops
            .iter()
            .find_map(|op| match op {
                PaintOp::Text { origin, text } if text.text == "12:00" => Some(*origin),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            label_origin,
            Point::new(
                metrics.time_label_inset,
                80.0 - 70.0 - label.size.height / 2.0,
            )
        );
    }

    #[test]
    fn gridline_counts_follow_domain_and_granularity() {
        let list = layout(
            &[],
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            ViewState::INITIAL,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );
        let lines = list
            .ops()
            .iter()
            .filter(|op| matches!(op, PaintOp::Line { .. }))
            .count();
        // 11 hours at half-hour granularity: 23 horizontal lines, plus 3
        // vertical boundaries for 2 columns.
        assert_eq!(lines, 23 + 3);
    }

    #[test]
    fn overlapping_items_draw_in_list_order() {
        let mut first = item(CategoryId(0), 13 * 60, 15 * 60);
        first.color = Color::from_rgb8(0x10, 0x20, 0x30);
        let mut second = item(CategoryId(0), 14 * 60, 16 * 60);
        second.color = Color::from_rgb8(0x40, 0x50, 0x60);
        let list = layout(
            &[first.clone(), second.clone()],
            &test_categories(),
            &test_metrics(),
            &GridStyle::default(),
            ViewState::INITIAL,
            CONTAINER,
            &MonospaceMeasurer::new(),
        );

        let colors: Vec<Color> = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::FillRoundedRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![first.color, second.color]);
    }
}
