//! The `Sim` struct and its day loop.

use sir_agent::Population;
use sir_core::{AgentId, Day, DayClock, EpidemicConfig, SimRng};
use tracing::{debug, info};

use crate::infection::{ContactOutcome, resolve_contacts};
use crate::motion::integrate;
use crate::transition::advance_state;
use crate::{DailyCounter, DayCounts, SimObserver, SimResult, TimeSeries};

/// The simulation runner.
///
/// `Sim` exclusively owns the population, the shared random stream and the
/// counter for the whole run.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration, fixed for the lifetime of the sim.
    pub config: EpidemicConfig,

    /// Current day and the last day of the run.
    pub clock: DayClock,

    /// All agents, in the stable order every scan follows.
    pub population: Population,

    /// The single seeded stream every draw comes from.
    pub rng: SimRng,

    /// Owner of the per-day time series.
    pub counter: DailyCounter,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current day through `config.run.days` inclusive.
    ///
    /// Calls observer hooks at every day boundary, then `on_sim_end` with the
    /// finished series.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            agents = self.population.len(),
            days = self.clock.last_day.0,
            seed = self.config.run.seed,
            "simulation start"
        );

        while !self.clock.is_finished() {
            self.step(observer);
        }

        let final_day = Day(self.clock.current_day.0.saturating_sub(1));
        if let Some(peak) = self.counter.series().peak_infected() {
            info!(
                days = self.counter.series().len(),
                peak_infected = peak.infected,
                peak_day = peak.day.0,
                "simulation complete"
            );
        }
        observer.on_sim_end(final_day, self.counter.series());
        Ok(())
    }

    /// Run exactly `n` days from the current position (ignores the last day).
    ///
    /// Useful for tests and for renderers that step the model themselves.
    pub fn run_days<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// The series recorded so far.
    pub fn series(&self) -> &TimeSeries {
        self.counter.series()
    }

    /// Consume the sim and return its series.
    pub fn into_series(self) -> TimeSeries {
        self.counter.into_series()
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let day = self.clock.current_day;

        observer.on_day_start(day);
        let counts = self.process_day(day);
        observer.on_day_end(day, &counts);

        let interval = self.config.run.output_interval_days;
        if interval > 0 && day.0.is_multiple_of(interval) {
            observer.on_snapshot(day, &self.population);
        }

        self.clock.advance();
    }

    fn process_day(&mut self, day: Day) -> DayCounts {
        let bounds = self.config.bounds();
        let disease = &self.config.disease;
        let mut new_infections = 0;

        for i in 0..self.population.len() {
            let actor = AgentId(i as u32);

            integrate(&mut self.population[actor], &bounds);

            if let ContactOutcome::Transmitted { infections, .. } =
                resolve_contacts(&mut self.population, actor, day, disease, &mut self.rng)
            {
                new_infections += infections;
            }

            advance_state(&mut self.population[actor], day, disease);
        }

        let counts = self.counter.record(day, &self.population, new_infections);
        debug!(
            day = day.0,
            susceptible = counts.susceptible(),
            infected = counts.infected,
            recovered = counts.recovered,
            new_infections,
            "day complete"
        );
        counts
    }
}
