use serde::{Deserialize, Serialize};

/// Calendar year identifying a marker on the horizontal axis.
pub type Year = u16;

pub const MARKER_COUNT: usize = 5;

/// The marker years, in chronological (and drawing) order.
pub const YEARS: [Year; MARKER_COUNT] = [2013, 2018, 2023, 2028, 2033];

/// The marker pinned to the known true value.
pub const FIXED_YEAR: Year = 2023;

pub const VALUE_MIN: u32 = 0;
pub const VALUE_MAX: u32 = 200_000;
/// Values are snapped to multiples of this step.
pub const VALUE_STEP: u32 = 100;
pub const DEFAULT_VALUE: u32 = 100_000;

/// Position of `year` in [`YEARS`].
pub fn index_of(year: Year) -> Option<usize> {
    YEARS.iter().position(|y| *y == year)
}

pub fn is_fixed(year: Year) -> bool {
    year == FIXED_YEAR
}

/// Clamps into `[VALUE_MIN, VALUE_MAX]` and rounds to the nearest step (ties up).
pub fn snap_value(raw: f64) -> u32 {
    if !raw.is_finite() {
        return VALUE_MIN;
    }
    let step = VALUE_STEP as f64;
    let snapped = (raw / step + 0.5).floor() * step;
    snapped.clamp(VALUE_MIN as f64, VALUE_MAX as f64) as u32
}

/// One projection point on the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMarker {
    pub year: Year,
    pub value: u32,
}

impl TimeMarker {
    pub fn new(year: Year) -> Self {
        Self {
            year,
            value: DEFAULT_VALUE,
        }
    }

    pub fn is_fixed(&self) -> bool {
        is_fixed(self.year)
    }
}
