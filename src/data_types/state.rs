use serde::{Deserialize, Serialize};

use super::marker::{
    index_of, is_fixed, snap_value, TimeMarker, Year, FIXED_YEAR, MARKER_COUNT, YEARS,
};

/// Mutable record of the chart: marker values, the active marker and the lock flag.
///
/// Owned by a single widget instance. Values can only be changed from inside the
/// crate (the drag controller), and never for the fixed marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    markers: [TimeMarker; MARKER_COUNT],
    active_year: Year,
    locked: bool,
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            markers: YEARS.map(TimeMarker::new),
            active_year: FIXED_YEAR,
            locked: false,
        }
    }

    /// Builds an unlocked state from raw values, snapping each one into the value domain.
    pub fn from_values(values: [f64; MARKER_COUNT]) -> Self {
        let mut state = Self::new();
        for (marker, raw) in state.markers.iter_mut().zip(values) {
            marker.value = snap_value(raw);
        }
        state
    }

    pub fn markers(&self) -> &[TimeMarker; MARKER_COUNT] {
        &self.markers
    }

    pub fn value(&self, year: Year) -> Option<u32> {
        index_of(year).map(|i| self.markers[i].value)
    }

    pub fn values(&self) -> [u32; MARKER_COUNT] {
        self.markers.map(|m| m.value)
    }

    pub fn active_year(&self) -> Year {
        self.active_year
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Writes a value for an editable marker. Returns `false` for the fixed
    /// marker, unknown years and a locked state.
    pub(crate) fn set_value(&mut self, year: Year, raw: f64) -> bool {
        if self.locked || is_fixed(year) {
            return false;
        }
        match index_of(year) {
            Some(i) => {
                self.markers[i].value = snap_value(raw);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_active(&mut self, year: Year) {
        if index_of(year).is_some() && !is_fixed(year) {
            self.active_year = year;
        }
    }

    /// One-way transition; returns `true` only the first time.
    pub(crate) fn lock(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        true
    }
}
