//! Facility dashboard core.
//!
//! The orchestrator owns the view state and issues the four upstream reads; the
//! aggregator and composer are pure functions over already-normalized data.

mod aggregate;
mod compose;
mod notify;
mod orchestrator;
mod state;

pub use aggregate::merge;
pub use compose::*;
pub use notify::*;
pub use orchestrator::*;
pub use state::*;
