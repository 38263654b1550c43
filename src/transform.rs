//! Coordinate mapping between markers/values and plot-local pixels.

use crate::data_types::{index_of, snap_value, Year, MARKER_COUNT, VALUE_MAX, VALUE_MIN};
use crate::layout::Layout;
use crate::scales::{ChartScale, PointScale};
use gpui::*;

#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: PointScale,
    pub y_scale: ChartScale,
    /// Origin of the plot group on the drawing surface.
    pub origin: Point<Pixels>,
    pub plot_height: f32,
}

impl PlotTransform {
    pub fn new(layout: &Layout) -> Self {
        Self {
            x_scale: PointScale::new(MARKER_COUNT, (0.0, layout.plot_width), 0.5),
            y_scale: ChartScale::new_linear(
                (VALUE_MIN as f64, VALUE_MAX as f64),
                (layout.plot_height, 0.0),
            ),
            origin: layout.plot_origin(),
            plot_height: layout.plot_height,
        }
    }

    pub fn x_of(&self, year: Year) -> f32 {
        self.x_scale.map(index_of(year).unwrap_or(0))
    }

    pub fn y_of(&self, value: u32) -> f32 {
        self.y_scale.map(value.min(VALUE_MAX) as f64)
    }

    /// Value under a plot-local vertical pixel, clamped and snapped.
    pub fn value_of(&self, pixel_y: f32) -> u32 {
        let pixel_y = if pixel_y.is_nan() {
            self.plot_height
        } else {
            pixel_y.clamp(0.0, self.plot_height)
        };
        snap_value(self.y_scale.invert(pixel_y))
    }

    /// Plot-local position of a marker.
    pub fn marker_position(&self, year: Year, value: u32) -> Point<Pixels> {
        Point::new(px(self.x_of(year)), px(self.y_of(value)))
    }

    /// Converts a surface position into plot-local coordinates.
    pub fn to_local(&self, surface: Point<Pixels>) -> Point<Pixels> {
        Point::new(surface.x - self.origin.x, surface.y - self.origin.y)
    }
}
