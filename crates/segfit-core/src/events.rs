//! Structured heap lifecycle events.
//!
//! Every public heap operation appends records here instead of printing.
//! Callers inspect or drain the log for diagnostics; the validator's
//! verbose mode reports through the same channel.

/// Severity of a heap lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// One structured record of a heap operation or validator finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEvent {
    /// Monotonic event id, starting at 1.
    pub seq: u64,
    /// Severity level.
    pub level: EventLevel,
    /// Public operation (`allocate`, `release`, `resize`, `zero_allocate`,
    /// `check`, `init`).
    pub op: &'static str,
    /// Event kind (`alloc`, `free`, `grow`, `oom`, ...).
    pub event: &'static str,
    /// Payload offset involved, if any.
    pub ptr: Option<usize>,
    /// Size value involved, if any.
    pub size: Option<usize>,
    /// Free-list bucket involved, if any.
    pub bucket: Option<usize>,
    /// Machine-readable outcome label.
    pub outcome: &'static str,
    /// Free-form details for debugging.
    pub details: String,
    /// Snapshot: arena length when the event was recorded.
    pub arena_len: usize,
}

/// Append-only event log owned by a heap context.
#[derive(Debug, Default)]
pub struct EventLog {
    next_seq: u64,
    records: Vec<HeapEvent>,
}

impl EventLog {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn record(
        &mut self,
        level: EventLevel,
        op: &'static str,
        event: &'static str,
        ptr: Option<usize>,
        size: Option<usize>,
        bucket: Option<usize>,
        outcome: &'static str,
        details: impl Into<String>,
        arena_len: usize,
    ) {
        self.next_seq = self.next_seq.wrapping_add(1);
        self.records.push(HeapEvent {
            seq: self.next_seq,
            level,
            op,
            event,
            ptr,
            size,
            bucket,
            outcome,
            details: details.into(),
            arena_len,
        });
    }

    /// Returns a view of all recorded events.
    pub fn records(&self) -> &[HeapEvent] {
        &self.records
    }

    /// Drains all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<HeapEvent> {
        std::mem::take(&mut self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let mut log = EventLog::default();
        for _ in 0..3 {
            log.record(
                EventLevel::Trace,
                "allocate",
                "alloc",
                Some(16),
                Some(24),
                Some(0),
                "success",
                "",
                272,
            );
        }
        let seqs: Vec<u64> = log.records().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = EventLog::default();
        log.record(
            EventLevel::Warn,
            "allocate",
            "oom",
            None,
            Some(1 << 20),
            None,
            "oom",
            "limit reached",
            272,
        );
        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.records().is_empty());
    }
}
