//! Simulation observer trait for rendering, progress reporting, and output.

use sir_agent::Population;
use sir_core::Day;

use crate::{DayCounts, TimeSeries};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at day boundaries.
///
/// Observers only ever see the population between days, never mid-scan.
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_day_end(&mut self, day: Day, counts: &DayCounts) {
///         println!("{day}: {} infected", counts.infected);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each day, before any agent moves.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called after the day's counts have been appended to the series.
    fn on_day_end(&mut self, _day: Day, _counts: &DayCounts) {}

    /// Called at snapshot intervals (every `config.run.output_interval_days`
    /// days) with the just-completed day's agents: position, state and trait
    /// are everything a renderer needs.
    fn on_snapshot(&mut self, _day: Day, _population: &Population) {}

    /// Called once after the final day with the completed series.
    fn on_sim_end(&mut self, _final_day: Day, _series: &TimeSeries) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
