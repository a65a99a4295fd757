//! The `OutputWriter` trait implemented by output backends.

use sir_sim::DayCounts;

use crate::{AgentSnapshotRow, OutputResult};

/// A sink for per-day counts and agent snapshots.
///
/// The observer never propagates these errors into the sim; they are stored
/// and retrieved with [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one day's counts.
    fn write_day_counts(&mut self, counts: &DayCounts) -> OutputResult<()>;

    /// Flush all underlying file handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
