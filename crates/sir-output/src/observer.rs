//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use sir_agent::Population;
use sir_core::Day;
use sir_sim::{DayCounts, SimObserver, TimeSeries};
use tracing::warn;

use crate::row::AgentSnapshotRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every day's counts and every snapshot to an
/// [`OutputWriter`].
///
/// `SimObserver` methods return nothing, so write errors are held here.
/// After `sim.run()` returns, check with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_end(&mut self, _day: Day, counts: &DayCounts) {
        let result = self.writer.write_day_counts(counts);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, day: Day, population: &Population) {
        let rows: Vec<AgentSnapshotRow> = population
            .iter()
            .map(|(id, agent)| AgentSnapshotRow::new(id, day, agent))
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_day: Day, _series: &TimeSeries) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
