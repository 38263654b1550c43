use crate::config::FieldNames;
use crate::data_types::ChartState;
use crate::host::{FieldWriter, HostLifecycle};
use crate::segments::segments;
use tracing::info;

/// The ten fields written for a state, in write order.
pub fn field_values(state: &ChartState, names: &FieldNames) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = state
        .markers()
        .iter()
        .map(|m| (names.value_key(m.year), m.value.to_string()))
        .collect();
    fields.extend(
        segments(&state.values())
            .into_iter()
            .map(|s| (names.percent_key(s.from, s.to), s.persisted)),
    );
    let flag = if state.is_locked() { "1" } else { "0" };
    fields.push((names.locked.clone(), flag.to_string()));
    fields
}

/// Writes every field of `state` through `writer`.
pub fn persist(state: &ChartState, writer: &mut dyn FieldWriter, names: &FieldNames) {
    for (key, value) in field_values(state, names) {
        writer.set_field(&key, &value);
    }
}

/// Unlocked -> Locked, once.
pub struct LockManager;

impl LockManager {
    /// Locks the chart, persists it and releases the host's forward navigation.
    /// Returns `false` (and does nothing) when already locked.
    pub fn finalize(
        state: &mut ChartState,
        writer: &mut dyn FieldWriter,
        host: &mut dyn HostLifecycle,
        names: &FieldNames,
    ) -> bool {
        if !state.lock() {
            return false;
        }
        persist(state, writer, names);
        host.enable_forward();
        info!(values = ?state.values(), "answers locked");
        true
    }
}
