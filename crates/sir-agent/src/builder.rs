//! Population initializer: layout policies and outbreak seeding.
//!
//! # Draw order
//!
//! All randomness comes from the caller's [`SimRng`], consumed per agent in
//! index order:
//!
//! 1. the immunocompromised trait (skipped when the configured fraction is 0),
//! 2. the position (uniform layout only),
//! 3. the velocity `x` then `y` components.
//!
//! Seeding the initial infections afterwards draws nothing.
//!
//! # Usage
//!
//! ```rust
//! use sir_agent::PopulationBuilder;
//! use sir_core::{EpidemicConfig, SimRng};
//!
//! let config = EpidemicConfig::baseline();
//! let mut rng = SimRng::new(config.run.seed);
//! let population = PopulationBuilder::new(&config).build(&mut rng).unwrap();
//! assert_eq!(population.len(), 500);
//! ```

use sir_core::{Day, EpidemicConfig, Layout, SimRng, SirResult, Vec2};
use tracing::debug;

use crate::{Agent, Population};

/// Builds the fixed-size [`Population`] for a run.
pub struct PopulationBuilder<'a> {
    config: &'a EpidemicConfig,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(config: &'a EpidemicConfig) -> Self {
        Self { config }
    }

    /// Validate the config, place every agent, and seed the outbreak.
    ///
    /// Fails before drawing anything if the config is invalid, including
    /// when `initial_infected` exceeds `agent_count`.
    pub fn build(self, rng: &mut SimRng) -> SirResult<Population> {
        self.config.validate()?;

        let pop = &self.config.population;
        let agents = (0..pop.agent_count)
            .map(|_| self.place_agent(rng))
            .collect::<Vec<_>>();
        let mut population = Population::from_agents(agents)?;

        self.seed_outbreak(&mut population);

        debug!(
            agents = population.len(),
            seeded = pop.initial_infected,
            immunocompromised = population
                .as_slice()
                .iter()
                .filter(|a| a.immunocompromised())
                .count(),
            layout = ?pop.layout,
            "population initialised"
        );
        Ok(population)
    }

    fn place_agent(&self, rng: &mut SimRng) -> Agent {
        let fraction = self.config.population.immunocompromised_fraction;
        let immunocompromised = fraction > 0.0 && rng.chance(fraction);

        let position = match self.config.population.layout {
            Layout::Uniform => {
                let bounds = self.config.bounds();
                Vec2::new(
                    rng.gen_range(bounds.min()..=bounds.max_x()),
                    rng.gen_range(bounds.min()..=bounds.max_y()),
                )
            }
            Layout::Clustered if immunocompromised => self.config.immunocompromised_corner(),
            Layout::Clustered => self.config.normal_corner(),
        };

        let speed = self.config.world.max_speed;
        let velocity = Vec2::new(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed));

        Agent::new(position, velocity, immunocompromised)
    }

    /// Infect agents `0..initial_infected` as of day 0; under the clustered
    /// layout they also move to the outbreak corner.
    fn seed_outbreak(&self, population: &mut Population) {
        let seeded = self.config.population.initial_infected;
        let relocate = self.config.population.layout == Layout::Clustered;
        let corner = self.config.outbreak_corner();

        for agent in &mut population.as_mut_slice()[..seeded] {
            agent.seed_infection(Day::ZERO);
            if relocate {
                agent.position = corner;
            }
        }
    }
}
