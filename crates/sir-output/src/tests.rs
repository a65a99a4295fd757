//! Integration tests for sir-output.

#[cfg(test)]
mod csv_tests {
    use sir_agent::{HealthState, RenderClass};
    use sir_core::Day;
    use sir_sim::DayCounts;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, DAILY_COUNTS_FILE, SNAPSHOTS_FILE};
    use crate::row::AgentSnapshotRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    fn snap_row(agent_id: u32, day: u32) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            day,
            x:                 1.5,
            y:                 agent_id as f64,
            state:             HealthState::Infected,
            immunocompromised: agent_id % 2 == 1,
            render_class:      RenderClass::Infected,
        }
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, DAILY_COUNTS_FILE);
        assert_eq!(
            headers,
            [
                "day",
                "susceptible",
                "susceptible_normal",
                "susceptible_immunocompromised",
                "infected",
                "recovered",
                "new_infections",
            ]
        );
        assert!(rows.is_empty());

        let (headers, _) = read(&dir, SNAPSHOTS_FILE);
        assert_eq!(
            headers,
            ["agent_id", "day", "x", "y", "state", "immunocompromised", "render_class"]
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(DAILY_COUNTS_FILE).exists());
    }

    #[test]
    fn day_counts_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let counts = DayCounts {
            day:                           Day(4),
            susceptible_normal:            7,
            susceptible_immunocompromised: 2,
            infected:                      5,
            recovered:                     1,
            new_infections:                3,
        };
        w.write_day_counts(&counts).unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, DAILY_COUNTS_FILE);
        assert_eq!(rows.len(), 1);
        let fields: Vec<_> = rows[0].iter().collect();
        assert_eq!(fields, ["4", "9", "7", "2", "5", "1", "3"]);
    }

    #[test]
    fn snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, SNAPSHOTS_FILE);
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "5");
        assert_eq!(&rows[0][2], "1.5");
        assert_eq!(&rows[0][4], "infected");
        assert_eq!(&rows[0][5], "0");
        assert_eq!(&rows[1][5], "1");
        assert_eq!(&rows[1][6], "infected");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use sir_core::EpidemicConfig;
    use sir_sim::{DayCounts, SimBuilder};

    use crate::csv::{CsvWriter, DAILY_COUNTS_FILE, SNAPSHOTS_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::AgentSnapshotRow;
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn small_config() -> EpidemicConfig {
        let mut c = EpidemicConfig::immunocompromised();
        c.population.agent_count = 20;
        c.population.initial_infected = 3;
        c.run.days = 9;
        c.run.output_interval_days = 5;
        c
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(small_config()).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(DAILY_COUNTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 10);
        for (row, counts) in rows.iter().zip(sim.series().rows()) {
            assert_eq!(row[0], counts.day.0.to_string());
            assert_eq!(row[4], counts.infected.to_string());
        }

        // Snapshots on days 0 and 5.
        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 40);
        assert!(rows[..20].iter().all(|r| &r[1] == "0"));
        assert!(rows[20..].iter().all(|r| &r[1] == "5"));

        // Seeded agents lead the population and are still infected on day 0.
        assert!(rows[..3].iter().all(|r| &r[4] == "infected" && &r[6] == "infected"));
        for row in &rows[3..20] {
            let expected = if &row[5] == "1" {
                "susceptible_immunocompromised"
            } else {
                "susceptible_normal"
            };
            assert_eq!(&row[6], expected);
        }
    }

    /// Fails every count write; counts how often `finish` is reached.
    #[derive(Default)]
    struct FailingWriter {
        attempts: usize,
        finished: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_day_counts(&mut self, counts: &DayCounts) -> OutputResult<()> {
            self.attempts += 1;
            Err(io::Error::other(format!("disk full on {}", counts.day)).into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_kept_and_run_completes() {
        let mut sim = SimBuilder::new(small_config()).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("stored error");
        assert!(matches!(&err, OutputError::Io(e) if e.to_string() == "disk full on Day 0"));
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.attempts, 10);
        assert_eq!(writer.finished, 1);
    }
}
