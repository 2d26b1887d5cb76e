//! Data models for the facility dashboard.
//!
//! These models match the facility API payloads so upstream responses decode without
//! an intermediate representation.

mod capacity;
mod catalog;
mod doctor;
mod facility;
mod page;
mod record;
mod triage;

pub use capacity::*;
pub use catalog::*;
pub use doctor::*;
pub use facility::*;
pub use page::*;
pub use record::*;
pub use triage::*;
