//! CSV output backend.

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use sir_sim::DayCounts;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult};

pub const DAILY_COUNTS_FILE: &str = "daily_counts.csv";
pub const SNAPSHOTS_FILE: &str = "agent_snapshots.csv";

/// Writes simulation output to `daily_counts.csv` and `agent_snapshots.csv`.
pub struct CsvWriter {
    counts:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut counts = Writer::from_path(dir.join(DAILY_COUNTS_FILE))?;
        counts.write_record([
            "day",
            "susceptible",
            "susceptible_normal",
            "susceptible_immunocompromised",
            "infected",
            "recovered",
            "new_infections",
        ])?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record([
            "agent_id",
            "day",
            "x",
            "y",
            "state",
            "immunocompromised",
            "render_class",
        ])?;

        Ok(Self { counts, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.day.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.state.as_str().to_owned(),
                (row.immunocompromised as u8).to_string(),
                row.render_class.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_day_counts(&mut self, c: &DayCounts) -> OutputResult<()> {
        self.counts.write_record(&[
            c.day.0.to_string(),
            c.susceptible().to_string(),
            c.susceptible_normal.to_string(),
            c.susceptible_immunocompromised.to_string(),
            c.infected.to_string(),
            c.recovered.to_string(),
            c.new_infections.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.counts.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
