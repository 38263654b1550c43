use crate::config::{Margins, WidgetConfig};
use gpui::*;

/// Derived view state for one surface width. Recomputed from scratch on every
/// mount and resize, never patched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub margin: Margins,
    pub plot_offset_x: f32,
    pub plot_width: f32,
    pub plot_height: f32,
    pub compact: bool,
}

impl Layout {
    pub fn compute(container_width: f32, config: &WidgetConfig) -> Self {
        let available = if container_width.is_finite() && container_width > 0.0 {
            container_width
        } else {
            config.fallback_width
        };
        let width = available.max(config.min_width);
        let margin = config.margin;
        let plot_width = width - margin.left - margin.right;
        let plot_height = config.height - margin.top - margin.bottom;

        Self {
            width,
            height: config.height,
            margin,
            plot_offset_x: config.plot_offset_x,
            plot_width,
            plot_height,
            compact: plot_width < config.compact_threshold,
        }
    }

    /// Top-left corner of the plot group on the drawing surface.
    pub fn plot_origin(&self) -> Point<Pixels> {
        Point::new(
            px(self.margin.left + self.plot_offset_x),
            px(self.margin.top),
        )
    }

    pub fn size(&self) -> Size<Pixels> {
        Size {
            width: px(self.width),
            height: px(self.height),
        }
    }
}
