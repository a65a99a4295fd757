//! `sir-output` — simulation output writers for the rust_sir simulator.
//!
//! The CSV backend creates two files in the output directory:
//!
//! | File                  | One row per                                  |
//! |-----------------------|----------------------------------------------|
//! | `daily_counts.csv`    | simulated day                                |
//! | `agent_snapshots.csv` | agent, on every snapshot day                 |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sir_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sir_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::AgentSnapshotRow;
pub use writer::OutputWriter;
