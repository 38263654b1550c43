//! Seams to the embedding host: the field store that receives the answers and
//! the page lifecycle around the widget.

use eyre::{Result, WrapErr};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Flat key/value writer for the final answers.
pub trait FieldWriter {
    fn set_field(&mut self, key: &str, value: &str);
}

/// Host page controls the widget drives.
pub trait HostLifecycle {
    fn disable_forward(&mut self);
    fn enable_forward(&mut self);
    /// Shows a terminal, user visible failure notice.
    fn show_failure(&mut self, message: &str);
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FieldLog {
    pub fields: BTreeMap<String, String>,
    /// Total `set_field` calls, including rewrites of identical values.
    pub writes: usize,
}

/// In-memory field store. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct MemoryFieldStore {
    log: Arc<RwLock<FieldLog>>,
}

impl MemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.log.read().fields.get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.log.read().writes
    }

    pub fn snapshot(&self) -> FieldLog {
        self.log.read().clone()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.log.read().fields).wrap_err("failed to encode fields")
    }
}

impl FieldWriter for MemoryFieldStore {
    fn set_field(&mut self, key: &str, value: &str) {
        let mut log = self.log.write();
        log.fields.insert(key.to_string(), value.to_string());
        log.writes += 1;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HostLog {
    pub forward_enabled: bool,
    pub disable_calls: usize,
    pub enable_calls: usize,
    pub failures: Vec<String>,
}

/// Host stand-in that records every lifecycle call. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    log: Arc<RwLock<HostLog>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            log: Arc::new(RwLock::new(HostLog {
                forward_enabled: true,
                ..HostLog::default()
            })),
        }
    }

    pub fn snapshot(&self) -> HostLog {
        self.log.read().clone()
    }
}

impl HostLifecycle for RecordingHost {
    fn disable_forward(&mut self) {
        let mut log = self.log.write();
        log.forward_enabled = false;
        log.disable_calls += 1;
    }

    fn enable_forward(&mut self) {
        let mut log = self.log.write();
        log.forward_enabled = true;
        log.enable_calls += 1;
    }

    fn show_failure(&mut self, message: &str) {
        self.log.write().failures.push(message.to_string());
    }
}
