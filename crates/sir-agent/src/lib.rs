//! `sir-agent` — agents and the population that owns them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent`, `HealthState`, `RenderClass`                     |
//! | [`store`]       | `Population` (ordered, fixed-size agent collection)       |
//! | [`builder`]     | `PopulationBuilder` (layout policies + outbreak seeding)  |

pub mod agent;
pub mod builder;
pub mod store;


pub use agent::{Agent, HealthState, RenderClass};
pub use builder::PopulationBuilder;
pub use store::Population;
