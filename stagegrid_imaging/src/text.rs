// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use kurbo::Size;
use peniko::Color;

/// Font weight requested for a text run.
///
/// This is a coarse token, not a full variable-font axis; hosts map it onto
/// whatever their text engine supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Medium weight.
    Medium,
    /// Bold weight.
    Bold,
}

/// Style a text run is measured and drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f64,
    /// Requested weight.
    pub weight: FontWeight,
    /// Text color.
    pub color: Color,
}

impl TextStyle {
    /// Creates a regular-weight style.
    #[must_use]
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            color,
        }
    }

    /// Returns this style with the given weight.
    #[must_use]
    pub fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }
}

/// A string together with its measured extent and the style used.
///
/// Produced by a [`TextMeasurer`] and consumed verbatim by backends; the
/// measured `size` is what layout uses for centering and baseline math.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredText {
    /// The measured string.
    pub text: String,
    /// Style the string was measured with.
    pub style: TextStyle,
    /// Measured width and height in pixels.
    pub size: Size,
}

/// Text measurement capability consumed by the layout layer.
///
/// Shaping and font resolution happen upstream, in whatever text engine
/// the host uses. The only contract here is determinism: within one
/// rendering session, identical `(text, style)` inputs must produce
/// identical measurements, so that identical layout inputs produce
/// identical op lists.
pub trait TextMeasurer {
    /// Measures `text` under `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> MeasuredText;
}

/// Deterministic fixed-metrics measurer.
///
/// Every character advances by `size * advance_ratio` and every run is one
/// line of height `size * line_ratio`. This is not typographically honest;
/// it exists so tests and headless hosts get stable, font-free geometry.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasurer {
    /// Horizontal advance per character, as a fraction of the font size.
    pub advance_ratio: f64,
    /// Line height, as a fraction of the font size.
    pub line_ratio: f64,
}

impl MonospaceMeasurer {
    /// Creates a measurer with conventional terminal-ish ratios.
    #[must_use]
    pub fn new() -> Self {
        Self {
            advance_ratio: 0.6,
            line_ratio: 1.2,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> MeasuredText {
        let chars = text.chars().count();
        let width = chars as f64 * style.size * self.advance_ratio;
        let height = style.size * self.line_ratio;
        MeasuredText {
            text: String::from(text),
            style: *style,
            size: Size::new(width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use peniko::Color;

    use super::{FontWeight, MonospaceMeasurer, TextMeasurer, TextStyle};

    #[test]
    fn monospace_measure_is_deterministic() {
        let measurer = MonospaceMeasurer::new();
        let style = TextStyle::new(10.0, Color::BLACK).with_weight(FontWeight::Bold);
        let a = measurer.measure("Main Stage", &style);
        let b = measurer.measure("Main Stage", &style);
        assert_eq!(a, b);
        assert_eq!(a.size, Size::new(10.0 * 10.0 * 0.6, 12.0));
    }

    #[test]
    fn monospace_measure_counts_chars_not_bytes() {
        let measurer = MonospaceMeasurer::new();
        let style = TextStyle::new(10.0, Color::BLACK);
        let ascii = measurer.measure("aaaa", &style);
        let cyrillic = measurer.measure("\u{0436}\u{0436}\u{0436}\u{0436}", &style);
        assert_eq!(ascii.size.width, cyrillic.size.width);
    }
}
