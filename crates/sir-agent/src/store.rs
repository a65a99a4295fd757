//! `Population` — the ordered, fixed-size collection of agents.
//!
//! The index of an agent in the collection is its [`AgentId`].  That order is
//! the tie-break for every pairwise scan, so the collection is never sorted,
//! resized, or reordered after construction.

use std::ops::{Index, IndexMut};

use sir_core::{AgentId, SirError, SirResult};

use crate::Agent;

/// Exclusive owner of every agent in a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Wrap a pre-built agent list, keeping its order as the id order.
    ///
    /// Fails if the list is empty or too large to address with `AgentId`.
    pub fn from_agents(agents: Vec<Agent>) -> SirResult<Self> {
        if agents.is_empty() {
            return Err(SirError::Config("a population needs at least one agent".into()));
        }
        if u32::try_from(agents.len()).is_err() {
            return Err(SirError::Config(format!(
                "{} agents exceed the addressable agent range",
                agents.len()
            )));
        }
        Ok(Self { agents })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in population order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    /// Agents with their ids, in population order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> + '_ {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, a)| (AgentId(i as u32), a))
    }

    pub fn get(&self, agent: AgentId) -> SirResult<&Agent> {
        self.agents.get(agent.index()).ok_or(SirError::AgentNotFound(agent))
    }

    /// Read-only view of all agents, indexed by `AgentId::index()`.
    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable view for in-place updates.  The length cannot change.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }
}

impl Index<AgentId> for Population {
    type Output = Agent;
    #[inline]
    fn index(&self, agent: AgentId) -> &Agent {
        &self.agents[agent.index()]
    }
}

impl IndexMut<AgentId> for Population {
    #[inline]
    fn index_mut(&mut self, agent: AgentId) -> &mut Agent {
        &mut self.agents[agent.index()]
    }
}
