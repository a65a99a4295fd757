//! Fluent builder for constructing a [`Sim`].

use sir_agent::{Population, PopulationBuilder};
use sir_core::{DayClock, EpidemicConfig, SimRng};

use crate::{DailyCounter, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                           |
/// |---------------------|---------------------------------------------------|
/// | `.population(p)`    | Built by [`PopulationBuilder`] from the config    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     EpidemicConfig,
    population: Option<Population>,
}

impl SimBuilder {
    pub fn new(config: EpidemicConfig) -> Self {
        Self { config, population: None }
    }

    /// Supply a hand-placed population (must be length `agent_count`).
    ///
    /// The seeded RNG stream then starts with the first transmission draw.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate the config, build the population if none was supplied, and
    /// return a ready-to-run [`Sim`] positioned at day 0.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.run.seed);
        let agent_count = self.config.population.agent_count;

        let population = match self.population {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                    });
                }
                p
            }
            None => PopulationBuilder::new(&self.config).build(&mut rng)?,
        };

        Ok(Sim {
            clock:   DayClock::new(self.config.run.days),
            counter: DailyCounter::new(population.len()),
            config:  self.config,
            population,
            rng,
        })
    }
}
