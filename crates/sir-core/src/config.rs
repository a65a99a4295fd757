//! Run configuration.
//!
//! All options are fixed at startup.  A config is either one of the built-in
//! presets or loaded from TOML; every section is optional in the file and
//! falls back to the [`EpidemicConfig::baseline`] values:
//!
//! ```toml
//! [world]
//! width = 800.0
//! height = 600.0
//!
//! [population]
//! agent_count = 150
//! initial_infected = 30
//! immunocompromised_fraction = 0.3
//! layout = "clustered"
//!
//! [disease]
//! infection_duration = 20
//! infection_duration_immunocompromised = 30
//!
//! [run]
//! days = 365
//! seed = 7
//! ```
//!
//! Call [`EpidemicConfig::validate`] (done automatically by
//! [`EpidemicConfig::from_toml_str`] and by the simulation builder) before
//! running; no simulation day runs on an invalid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Bounds, SirError, SirResult, Vec2};

// ── Sections ──────────────────────────────────────────────────────────────────

/// Domain geometry and agent kinematics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width:        f64,
    pub height:       f64,
    /// Drawn radius of an agent; insets the reflective walls.
    pub agent_radius: f64,
    /// Velocity components are drawn uniformly from `[-max_speed, max_speed]`.
    pub max_speed:    f64,
    /// Distance of the clustered-layout starting corners from the walls.
    pub corner_inset: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width:        1200.0,
            height:       900.0,
            agent_radius: 5.0,
            max_speed:    5.0,
            corner_inset: 50.0,
        }
    }
}

/// How initial positions are assigned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Every agent placed uniformly at random inside the walls.
    #[default]
    Uniform,
    /// Agents start in fixed corners by trait; seeded infections in a third.
    Clustered,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub agent_count:                usize,
    /// Agents `0..initial_infected` start infected on day 0.
    pub initial_infected:           usize,
    /// Per-agent probability of the immunocompromised trait.  `0.0` disables
    /// the trait entirely (and skips its draw).
    pub immunocompromised_fraction: f64,
    pub layout:                     Layout,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            agent_count:                500,
            initial_infected:           50,
            immunocompromised_fraction: 0.0,
            layout:                     Layout::Uniform,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseConfig {
    pub infection_radius:                     f64,
    pub infection_probability:                f64,
    /// Days an agent stays infected before recovering (exclusive threshold).
    pub infection_duration:                   u32,
    pub infection_duration_immunocompromised: u32,
    /// Days an agent stays recovered before becoming immune; `0` means the
    /// next day.
    pub recovery_duration:                    u32,
}

impl Default for DiseaseConfig {
    fn default() -> Self {
        Self {
            infection_radius:                     10.0,
            infection_probability:                0.5,
            infection_duration:                   10,
            infection_duration_immunocompromised: 10,
            recovery_duration:                    0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Last simulated day.  The run covers days `0..=days`.
    pub days:                 u32,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed:                 u64,
    /// Emit an agent snapshot every N days.  `0` disables snapshots.
    pub output_interval_days: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { days: 365, seed: 42, output_interval_days: 1 }
    }
}

// ── EpidemicConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpidemicConfig {
    pub world:      WorldConfig,
    pub population: PopulationConfig,
    pub disease:    DiseaseConfig,
    pub run:        RunConfig,
}

impl EpidemicConfig {
    /// Uniformly scattered population with no immunocompromised agents.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Clustered population in which 30 % of agents are immunocompromised
    /// and stay infected longer.
    pub fn immunocompromised() -> Self {
        Self {
            world: WorldConfig {
                width:        800.0,
                height:       600.0,
                agent_radius: 5.0,
                max_speed:    10.0,
                corner_inset: 50.0,
            },
            population: PopulationConfig {
                agent_count:                150,
                initial_infected:           30,
                immunocompromised_fraction: 0.3,
                layout:                     Layout::Clustered,
            },
            disease: DiseaseConfig {
                infection_radius:                     10.0,
                infection_probability:                0.5,
                infection_duration:                   20,
                infection_duration_immunocompromised: 30,
                recovery_duration:                    0,
            },
            run: RunConfig::default(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> SirResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| SirError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> SirResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The reflective domain derived from the world section.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.world.width, self.world.height, self.world.agent_radius)
    }

    /// Starting corner of non-immunocompromised agents in the clustered layout.
    pub fn normal_corner(&self) -> Vec2 {
        let w = &self.world;
        Vec2::new(w.width - w.corner_inset, w.height - w.corner_inset)
    }

    /// Starting corner of immunocompromised agents in the clustered layout.
    pub fn immunocompromised_corner(&self) -> Vec2 {
        let w = &self.world;
        Vec2::new(w.width - w.corner_inset, w.corner_inset)
    }

    /// Starting corner of the seeded outbreak in the clustered layout.
    pub fn outbreak_corner(&self) -> Vec2 {
        let w = &self.world;
        Vec2::new(w.corner_inset, w.corner_inset)
    }

    /// Reject any configuration the simulation cannot honour.
    pub fn validate(&self) -> SirResult<()> {
        let w = &self.world;
        for (name, value) in [("world.width", w.width), ("world.height", w.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SirError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        for (name, value) in [
            ("world.agent_radius", w.agent_radius),
            ("world.max_speed", w.max_speed),
            ("world.corner_inset", w.corner_inset),
            ("disease.infection_radius", self.disease.infection_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SirError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if 2.0 * w.agent_radius > w.width.min(w.height) {
            return Err(SirError::Config(format!(
                "agent radius {} does not fit a {}x{} domain",
                w.agent_radius, w.width, w.height
            )));
        }
        // Clustered agents start exactly at the inset, which must lie inside
        // the reflective walls on both axes.
        let max_inset = w.width.min(w.height) - w.agent_radius;
        if w.corner_inset < w.agent_radius || w.corner_inset > max_inset {
            return Err(SirError::Config(format!(
                "corner inset {} must lie within [{}, {}]",
                w.corner_inset, w.agent_radius, max_inset
            )));
        }
        if self.run.days == u32::MAX {
            return Err(SirError::Config(format!(
                "run.days must be below {}",
                u32::MAX
            )));
        }

        check_probability("disease.infection_probability", self.disease.infection_probability)?;
        check_probability(
            "population.immunocompromised_fraction",
            self.population.immunocompromised_fraction,
        )?;

        let p = &self.population;
        if p.agent_count == 0 {
            return Err(SirError::Config("population.agent_count must be at least 1".into()));
        }
        if u32::try_from(p.agent_count).is_err() {
            return Err(SirError::Config(format!(
                "population.agent_count {} exceeds the addressable agent range",
                p.agent_count
            )));
        }
        if p.initial_infected > p.agent_count {
            return Err(SirError::SeedExceedsPopulation {
                seeded:     p.initial_infected,
                population: p.agent_count,
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> SirResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SirError::ProbabilityOutOfRange { name, value })
    }
}
