//! Proximity infection resolver.
//!
//! # Contact rules
//!
//! For one acting agent, every other agent is visited in population order.
//! Pairs at distance `>= infection_radius` are skipped.  For a pair in range
//! the first matching rule applies:
//!
//! | Contact                         | Actor             | Effect                             |
//! |---------------------------------|-------------------|------------------------------------|
//! | Infected                        | not Immune        | draw; `u < p` → infect both, stop  |
//! | Immune                          | Infected          | stop                               |
//! | Susceptible, not immunocompromised | immunocompromised | draw; `u < 2p` → infect both, stop |
//!
//! A failed draw continues the scan with the next agent.
//!
//! Two rules are kept exactly as listed even though their intent is open:
//!
//! - The immune stop skips every agent after the immune contact, including
//!   susceptible ones the actor could otherwise reach.
//! - The doubled-probability rule needs no infected party.  An
//!   immunocompromised *susceptible* actor next to a normal susceptible
//!   contact infects both with probability `min(1, 2p)`, with no infected
//!   source in range.  Gate on an infected actor to restrict it to
//!   source-driven transmission.
//!
//! "Infect" only changes a `Susceptible` agent: an agent already infected
//! keeps its original `infection_day`, and a recovered agent stays recovered.
//! The draw and the stop still happen, so the random stream is consumed the
//! same way whatever the pair's states.

use sir_agent::{HealthState, Population};
use sir_core::{AgentId, Day, DiseaseConfig, SimRng};

/// How an actor's contact scan ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Every other agent was visited without a stopping event.
    Exhausted,
    /// A draw succeeded against `contact`.  `infections` counts the agents
    /// (0–2) that actually moved from susceptible to infected.
    Transmitted { contact: AgentId, infections: u32 },
    /// The infected actor met an immune agent and stopped scanning.
    ImmuneContact { contact: AgentId },
}

/// Resolve transmission for `actor` against the rest of the population.
///
/// Mutations are applied in place immediately.
pub fn resolve_contacts(
    population: &mut Population,
    actor:      AgentId,
    day:        Day,
    disease:    &DiseaseConfig,
    rng:        &mut SimRng,
) -> ContactOutcome {
    let agents = population.as_mut_slice();
    let me = actor.index();

    for other in 0..agents.len() {
        if other == me {
            continue;
        }

        let (a, o) = (&agents[me], &agents[other]);
        if a.position.distance(o.position) >= disease.infection_radius {
            continue;
        }

        let threshold = match (o.state(), a.state()) {
            (HealthState::Infected, state) if state != HealthState::Immune => {
                disease.infection_probability
            }
            (HealthState::Immune, HealthState::Infected) => {
                return ContactOutcome::ImmuneContact { contact: AgentId(other as u32) };
            }
            // Keyed on the contact being susceptible; the actor's own state
            // is not consulted, so two susceptible agents can infect each
            // other here (see the module docs).
            (HealthState::Susceptible, _) if a.immunocompromised() && !o.immunocompromised() => {
                2.0 * disease.infection_probability
            }
            _ => continue,
        };

        if rng.chance(threshold) {
            let infections = agents[me].infect(day) as u32 + agents[other].infect(day) as u32;
            return ContactOutcome::Transmitted { contact: AgentId(other as u32), infections };
        }
    }

    ContactOutcome::Exhausted
}
