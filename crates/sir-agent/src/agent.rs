//! The agent record and its four-state health machine.

use std::fmt;

use sir_core::{Day, Vec2};

// ── HealthState ───────────────────────────────────────────────────────────────

/// Disease state of one agent.
///
/// The only legal path is `Susceptible → Infected → Recovered → Immune`.
/// `Immune` is terminal.  The transition methods on [`Agent`] are the only
/// writers, and each refuses to move an agent anywhere but forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
    Immune,
}

impl HealthState {
    pub const ALL: [HealthState; 4] = [
        HealthState::Susceptible,
        HealthState::Infected,
        HealthState::Recovered,
        HealthState::Immune,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Infected => "infected",
            HealthState::Recovered => "recovered",
            HealthState::Immune => "immune",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RenderClass ───────────────────────────────────────────────────────────────

/// The category a display or chart groups an agent under.
///
/// Recovered and immune agents share one class; susceptible agents split by
/// trait.  Infected agents are one class regardless of trait.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderClass {
    SusceptibleNormal,
    SusceptibleImmunocompromised,
    Infected,
    Recovered,
}

impl RenderClass {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderClass::SusceptibleNormal => "susceptible_normal",
            RenderClass::SusceptibleImmunocompromised => "susceptible_immunocompromised",
            RenderClass::Infected => "infected",
            RenderClass::Recovered => "recovered",
        }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One simulated individual.
///
/// Both timer fields are always initialised (to day 0) at construction, so
/// they are defined whatever the trait or state.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub position:      Vec2,
    pub velocity:      Vec2,
    state:             HealthState,
    immunocompromised: bool,
    infection_day:     Day,
    recovery_day:      Day,
}

impl Agent {
    /// A susceptible agent with both timers at day 0.
    pub fn new(position: Vec2, velocity: Vec2, immunocompromised: bool) -> Self {
        Self {
            position,
            velocity,
            state: HealthState::Susceptible,
            immunocompromised,
            infection_day: Day::ZERO,
            recovery_day: Day::ZERO,
        }
    }

    #[inline]
    pub fn state(&self) -> HealthState {
        self.state
    }

    #[inline]
    pub fn immunocompromised(&self) -> bool {
        self.immunocompromised
    }

    #[inline]
    pub fn infection_day(&self) -> Day {
        self.infection_day
    }

    #[inline]
    pub fn recovery_day(&self) -> Day {
        self.recovery_day
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.state == HealthState::Infected
    }

    pub fn render_class(&self) -> RenderClass {
        match (self.state, self.immunocompromised) {
            (HealthState::Susceptible, false) => RenderClass::SusceptibleNormal,
            (HealthState::Susceptible, true) => RenderClass::SusceptibleImmunocompromised,
            (HealthState::Infected, _) => RenderClass::Infected,
            (HealthState::Recovered | HealthState::Immune, _) => RenderClass::Recovered,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Susceptible → Infected`, stamping `infection_day`.
    ///
    /// Returns `false` and leaves the agent untouched in any other state; an
    /// already-infected agent keeps its original stamp.
    pub fn infect(&mut self, day: Day) -> bool {
        if self.state != HealthState::Susceptible {
            return false;
        }
        self.state = HealthState::Infected;
        self.infection_day = day;
        true
    }

    /// `Infected → Recovered`, stamping `recovery_day`.
    pub fn recover(&mut self, day: Day) -> bool {
        if self.state != HealthState::Infected {
            return false;
        }
        self.state = HealthState::Recovered;
        self.recovery_day = day;
        true
    }

    /// `Recovered → Immune`.
    pub fn immunize(&mut self) -> bool {
        if self.state != HealthState::Recovered {
            return false;
        }
        self.state = HealthState::Immune;
        true
    }

    /// Force the agent into the outbreak: infected as of `day`.
    ///
    /// Used only when seeding the initial infections, before any day runs.
    pub(crate) fn seed_infection(&mut self, day: Day) {
        self.state = HealthState::Infected;
        self.infection_day = day;
    }
}
