//! Framework error type.
//!
//! `sir-sim` and `sir-output` keep their own error enums and wrap `SirError`
//! as one variant.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `sir-core` and `sir-agent`.
#[derive(Debug, Error)]
pub enum SirError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{name} must lie within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("initial infected count {seeded} exceeds population size {population}")]
    SeedExceedsPopulation { seeded: usize, population: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sir-*` crates.
pub type SirResult<T> = Result<T, SirError>;
