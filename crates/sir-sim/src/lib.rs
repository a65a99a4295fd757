//! `sir-sim` — the day-tick driver for the rust_sir epidemic simulator.
//!
//! # Day loop
//!
//! ```text
//! for day in 0..=config.run.days:
//!   for agent in population order:
//!     ① Motion      — position += velocity; reflect velocity at the walls.
//!     ② Contacts    — scan every other agent in order; first transmission
//!                     (or immune contact) ends the scan.
//!     ③ Clock       — Infected → Recovered → Immune once thresholds pass.
//!   ④ Count         — append one DayCounts row to the time series.
//!   ⑤ Observers     — day end, optional snapshot.
//! ```
//!
//! Every agent finishes ①–③ before the next agent starts, and changes are
//! applied immediately: an agent infected during another agent's scan is
//! already `Infected` when its own turn comes.  This ordering is part of the
//! model's semantics, so the loop is strictly sequential.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sir_core::EpidemicConfig;
//! use sir_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(EpidemicConfig::baseline()).build()?;
//! sim.run(&mut NoopObserver)?;
//! let series = sim.into_series();
//! ```

pub mod builder;
pub mod counter;
pub mod error;
pub mod infection;
pub mod motion;
pub mod observer;
pub mod sim;
pub mod transition;


pub use builder::SimBuilder;
pub use counter::{DailyCounter, DayCounts, TimeSeries};
pub use error::{SimError, SimResult};
pub use infection::{ContactOutcome, resolve_contacts};
pub use motion::integrate;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use transition::advance_state;
