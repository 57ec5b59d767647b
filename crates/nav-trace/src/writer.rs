//! The `TraceWriter` trait implemented by trace backends.

use crate::{AgentSnapshotRow, TraceResult, UpdateSummaryRow};

/// Backend sink for trace rows.
///
/// Errors are surfaced through [`TraceObserver::take_error`] rather than at
/// the call site, since the observer callbacks have no return value.
///
/// [`TraceObserver::take_error`]: crate::TraceObserver::take_error
pub trait TraceWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> TraceResult<()>;

    /// Write one update summary row.
    fn write_update_summary(&mut self, row: &UpdateSummaryRow) -> TraceResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}
