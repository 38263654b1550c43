/// Collapses bursts of resize signals into one pending re-layout.
///
/// Only the latest width is kept; a new signal supersedes the pending one. The
/// caller schedules a flush when [`signal`](Self::signal) returns `true` and
/// calls [`take`](Self::take) once that flush runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeCoalescer {
    pending: Option<f32>,
    superseded: usize,
}

impl ResizeCoalescer {
    /// Records a resize. Returns `true` when no flush was pending yet.
    pub fn signal(&mut self, width: f32) -> bool {
        let first = self.pending.is_none();
        if !first {
            self.superseded += 1;
        }
        self.pending = Some(width);
        first
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take(&mut self) -> Option<f32> {
        self.pending.take()
    }

    /// Signals dropped in favour of a later one.
    pub fn superseded(&self) -> usize {
        self.superseded
    }
}
