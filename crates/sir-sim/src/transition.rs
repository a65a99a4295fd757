//! State transition clock.

use sir_agent::{Agent, HealthState};
use sir_core::{Day, DiseaseConfig};

/// Advance `agent` along its health path if its current state has lasted
/// long enough by `day`.
///
/// Thresholds are exclusive: an agent infected on day `d` with duration `n`
/// recovers on day `d + n + 1`.  Immunocompromised agents use
/// `infection_duration_immunocompromised`.  At most one transition happens
/// per call.  Returns the new state when a transition occurred.
pub fn advance_state(agent: &mut Agent, day: Day, disease: &DiseaseConfig) -> Option<HealthState> {
    match agent.state() {
        HealthState::Infected => {
            let threshold = if agent.immunocompromised() {
                disease.infection_duration_immunocompromised
            } else {
                disease.infection_duration
            };
            (day.since(agent.infection_day()) > threshold && agent.recover(day))
                .then_some(HealthState::Recovered)
        }
        HealthState::Recovered => {
            (day.since(agent.recovery_day()) > disease.recovery_duration && agent.immunize())
                .then_some(HealthState::Immune)
        }
        HealthState::Susceptible | HealthState::Immune => None,
    }
}
