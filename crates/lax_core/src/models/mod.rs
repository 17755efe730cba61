//! # Data Model
//!
//! Roster rows and team-level aggregates for a single season.
//!
//! ## Submodules
//!
//! - `roster` - Per-player statistics and derived rates
//! - `team` - Win-loss records and roster-derived team totals

pub mod roster;
pub mod team;

pub use roster::{PlayerRow, Roster};
pub use team::{TeamAggregate, TeamRecord};
