//! Plain data rows written by output backends.

use sir_agent::{Agent, HealthState, RenderClass};
use sir_core::{AgentId, Day};

/// One agent's position and health at the end of a snapshot day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:          u32,
    pub day:               u32,
    pub x:                 f64,
    pub y:                 f64,
    pub state:             HealthState,
    pub immunocompromised: bool,
    /// Legend category a renderer colours the agent by.
    pub render_class:      RenderClass,
}

impl AgentSnapshotRow {
    pub fn new(id: AgentId, day: Day, agent: &Agent) -> Self {
        Self {
            agent_id:          id.0,
            day:               day.0,
            x:                 agent.position.x,
            y:                 agent.position.y,
            state:             agent.state(),
            immunocompromised: agent.immunocompromised(),
            render_class:      agent.render_class(),
        }
    }
}
