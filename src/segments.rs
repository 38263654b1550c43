//! Percent change between neighbouring markers and the badges that show it.

use crate::config::BadgeConfig;
use crate::data_types::{Year, MARKER_COUNT, YEARS};
use crate::layout::Layout;
use crate::text::TextMeasure;
use crate::transform::PlotTransform;
use gpui::*;

/// Shown when growing from zero.
pub const INFINITE_CHANGE: &str = "∞%";

/// Human readable change from `a` to `b`: whole percent with an explicit sign.
pub fn display_percent(a: u32, b: u32) -> String {
    if a > 0 {
        let pct = ((b as f64 - a as f64) / a as f64 * 100.0).round().abs() as i64;
        // The sign follows the change, so a small drop reads `−0%`.
        if b < a {
            // U+2212, the minus d3-style formatters emit.
            format!("\u{2212}{pct}%")
        } else {
            format!("+{pct}%")
        }
    } else if b > 0 {
        INFINITE_CHANGE.to_string()
    } else {
        "0%".to_string()
    }
}

/// Machine readable change from `a` to `b`, rounded to four decimals.
///
/// Blank whenever `a` is zero, including the case [`display_percent`] reports as
/// infinite.
pub fn persist_percent(a: u32, b: u32) -> String {
    if a == 0 {
        return String::new();
    }
    let ratio = (b as f64 - a as f64) / a as f64;
    let mut rounded = (ratio * 10_000.0 + 0.5).floor() / 10_000.0;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{rounded}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Year,
    pub to: Year,
    pub display: String,
    pub persisted: String,
}

impl Segment {
    pub fn key(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }

    pub fn span_label(&self) -> String {
        format!("{}→{}", self.from, self.to)
    }
}

pub fn segments(values: &[u32; MARKER_COUNT]) -> Vec<Segment> {
    (0..MARKER_COUNT - 1)
        .map(|i| Segment {
            from: YEARS[i],
            to: YEARS[i + 1],
            display: display_percent(values[i], values[i + 1]),
            persisted: persist_percent(values[i], values[i + 1]),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    pub key: String,
    /// Badge origin in plot-local coordinates; text baselines hang off it.
    pub origin: Point<Pixels>,
    /// Box relative to `origin`.
    pub frame: Bounds<Pixels>,
    pub top: String,
    /// Year span; dropped in compact mode.
    pub bottom: Option<String>,
    pub bottom_dy: f32,
    pub font_size: f32,
    pub corner_radius: f32,
}

pub fn badge_for(
    segment: &Segment,
    transform: &PlotTransform,
    layout: &Layout,
    measure: &dyn TextMeasure,
    config: &BadgeConfig,
) -> Badge {
    let mid_x = (transform.x_of(segment.from) + transform.x_of(segment.to)) / 2.0;
    let (offset, font_size, height, top) = if layout.compact {
        (
            config.compact_offset,
            config.compact_font_size,
            config.compact_height,
            config.compact_top,
        )
    } else {
        (config.offset, config.font_size, config.height, config.top)
    };

    let bottom = (!layout.compact).then(|| segment.span_label());
    let top_width = measure.width(&segment.display, font_size);
    let bottom_width = bottom
        .as_deref()
        .map_or(0.0, |text| measure.width(text, font_size));
    let width = top_width.max(bottom_width) + config.padding;

    Badge {
        key: segment.key(),
        origin: Point::new(px(mid_x), px(layout.plot_height + offset)),
        frame: Bounds::new(
            Point::new(px(-width / 2.0), px(top)),
            Size {
                width: px(width),
                height: px(height),
            },
        ),
        top: segment.display.clone(),
        bottom,
        bottom_dy: config.second_line_dy,
        font_size,
        corner_radius: config.corner_radius,
    }
}
