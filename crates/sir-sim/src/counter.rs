//! Aggregate counter and the per-day time series it owns.

use sir_agent::{Population, RenderClass};
use sir_core::Day;

// ── DayCounts ─────────────────────────────────────────────────────────────────

/// Population tallied by category at the end of one day.
///
/// Recovered and immune agents are counted together in `recovered`.
/// `new_infections` is incidence for the day and is not part of the
/// four-way partition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DayCounts {
    pub day:                           Day,
    pub susceptible_normal:            u32,
    pub susceptible_immunocompromised: u32,
    pub infected:                      u32,
    pub recovered:                     u32,
    pub new_infections:                u32,
}

impl DayCounts {
    /// Tally every agent into exactly one category.
    pub fn tally(day: Day, population: &Population, new_infections: u32) -> Self {
        let mut counts = DayCounts { day, new_infections, ..DayCounts::default() };
        for agent in population.as_slice() {
            match agent.render_class() {
                RenderClass::SusceptibleNormal => counts.susceptible_normal += 1,
                RenderClass::SusceptibleImmunocompromised => {
                    counts.susceptible_immunocompromised += 1
                }
                RenderClass::Infected => counts.infected += 1,
                RenderClass::Recovered => counts.recovered += 1,
            }
        }
        counts
    }

    #[inline]
    pub fn susceptible(&self) -> u32 {
        self.susceptible_normal + self.susceptible_immunocompromised
    }

    /// Sum of the partition; always the population size.
    #[inline]
    pub fn total(&self) -> u32 {
        self.susceptible() + self.infected + self.recovered
    }
}

// ── TimeSeries ────────────────────────────────────────────────────────────────

/// One [`DayCounts`] row per simulated day, in day order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    rows: Vec<DayCounts>,
}

impl TimeSeries {
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DayCounts] {
        &self.rows
    }

    pub fn last(&self) -> Option<&DayCounts> {
        self.rows.last()
    }

    pub fn susceptible(&self) -> Vec<u32> {
        self.rows.iter().map(DayCounts::susceptible).collect()
    }

    pub fn susceptible_normal(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.susceptible_normal).collect()
    }

    pub fn susceptible_immunocompromised(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.susceptible_immunocompromised).collect()
    }

    pub fn infected(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.infected).collect()
    }

    pub fn recovered(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.recovered).collect()
    }

    /// The first day with the highest infected count.
    pub fn peak_infected(&self) -> Option<&DayCounts> {
        self.rows
            .iter()
            .reduce(|best, r| if r.infected > best.infected { r } else { best })
    }

    fn push(&mut self, row: DayCounts) {
        self.rows.push(row);
    }
}

// ── DailyCounter ──────────────────────────────────────────────────────────────

/// Appends one row per day to the [`TimeSeries`] it owns.
pub struct DailyCounter {
    population_size: u32,
    series:          TimeSeries,
}

impl DailyCounter {
    pub fn new(population_size: usize) -> Self {
        Self {
            population_size: population_size as u32,
            series:          TimeSeries::default(),
        }
    }

    /// Tally `population` for `day` and append the row.
    pub fn record(&mut self, day: Day, population: &Population, new_infections: u32) -> DayCounts {
        let counts = DayCounts::tally(day, population, new_infections);
        debug_assert_eq!(
            counts.total(),
            self.population_size,
            "population count drifted on {day}"
        );
        self.series.push(counts);
        counts
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Hand the finished series to the caller.
    pub fn into_series(self) -> TimeSeries {
        self.series
    }
}
