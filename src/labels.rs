//! Value label placement.
//!
//! Decides, per marker, whether its `$` label is shown and where it sits relative
//! to the point. Everything here is a pure function of the chart state and the
//! layout, so it is re-evaluated on every render.

use crate::config::LabelConfig;
use crate::data_types::{is_fixed, ChartState, MARKER_COUNT, YEARS};
use crate::layout::Layout;
use crate::transform::PlotTransform;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub visible: bool,
    pub above: bool,
    /// Horizontal offset from the point.
    pub dx: f32,
    /// Baseline offset from the point; negative is above.
    pub dy: f32,
    pub anchor: TextAnchor,
}

/// Strict local minimum against the neighbours that exist.
pub fn is_local_min(index: usize, values: &[u32; MARKER_COUNT]) -> bool {
    let Some(&value) = values.get(index) else {
        return false;
    };
    let left = index.checked_sub(1).map(|i| values[i]);
    let right = values.get(index + 1).copied();
    match (left, right) {
        (None, Some(r)) => value < r,
        (Some(l), None) => value < l,
        (Some(l), Some(r)) => value < l && value < r,
        (None, None) => false,
    }
}

/// Side preference before the baseline clamp. Compact layouts push points near
/// the top below and points near the bottom above, then flip odd editable markers.
pub fn prefers_above(
    index: usize,
    values: &[u32; MARKER_COUNT],
    y_pixel: f32,
    layout: &Layout,
    config: &LabelConfig,
) -> bool {
    let fixed = is_fixed(YEARS[index]);
    if !layout.compact {
        return !fixed && !is_local_min(index, values);
    }

    let mut above = !fixed;
    if y_pixel < config.compact_top_edge {
        above = false;
    }
    if layout.plot_height - y_pixel < config.compact_bottom_edge {
        above = true;
    }
    if !fixed && index % 2 == 1 {
        above = !above;
    }
    above
}

/// Computes where the label of the marker at `index` goes.
pub fn place_label(
    index: usize,
    state: &ChartState,
    layout: &Layout,
    transform: &PlotTransform,
    config: &LabelConfig,
) -> LabelPlacement {
    let index = index.min(MARKER_COUNT - 1);
    let year = YEARS[index];
    let values = state.values();
    let y_pixel = transform.y_of(values[index]);
    let above = prefers_above(index, &values, y_pixel, layout, config);

    let mut dy = if above { config.above_dy } else { config.below_dy };
    // Keep the baseline inside the plot band; flip sides instead of clipping.
    let top = layout.margin.top;
    let baseline = top + y_pixel + dy;
    if baseline > top + layout.plot_height - config.bottom_guard {
        dy = config.above_dy;
    }
    if baseline < top + config.top_guard {
        dy = config.below_dy;
    }

    let even = index % 2 == 0;
    let dx = match (above, even) {
        (true, true) | (false, false) => config.dx,
        (true, false) | (false, true) => -config.dx,
    };

    let visible = if layout.compact && !state.is_locked() {
        is_fixed(year) || year == state.active_year()
    } else {
        true
    };

    LabelPlacement {
        visible,
        above: dy < 0.0,
        dx,
        dy,
        anchor: TextAnchor::Middle,
    }
}

/// Placements for every marker, in marker order.
pub fn place_labels(
    state: &ChartState,
    layout: &Layout,
    transform: &PlotTransform,
    config: &LabelConfig,
) -> [LabelPlacement; MARKER_COUNT] {
    std::array::from_fn(|i| place_label(i, state, layout, transform, config))
}
