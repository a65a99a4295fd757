//! `sir-core` — foundational types for the `rust_sir` epidemic simulator.
//!
//! This crate is a dependency of every other `sir-*` crate.  It has no
//! `sir-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Vec2`, `Bounds` (the rectangular domain)             |
//! | [`time`]        | `Day`, `DayClock`                                     |
//! | [`rng`]         | `SimRng` — the single shared random stream            |
//! | [`config`]      | `EpidemicConfig` and its TOML sections                |
//! | [`error`]       | `SirError`, `SirResult`                               |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DiseaseConfig, EpidemicConfig, Layout, PopulationConfig, RunConfig, WorldConfig,
};
pub use error::{SirError, SirResult};
pub use geo::{Bounds, Vec2};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{Day, DayClock};
