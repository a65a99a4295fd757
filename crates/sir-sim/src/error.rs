use sir_core::SirError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] SirError),

    #[error("population length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
