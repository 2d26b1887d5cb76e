//! View state owned by the fetch orchestrator.

use crate::models::{CapacityRecord, DoctorRecord, FacilityProfile, TriageSummary};

/// Lifecycle of a dashboard view: `Idle -> Loading -> {Ready | Error}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Everything the dashboard renders, replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub phase: Phase,
    /// Bumped by every trigger and by teardown; a batch may only apply its result
    /// while this still equals the value it was started with.
    pub generation: u64,
    pub facility: FacilityProfile,
    pub capacity: Vec<CapacityRecord>,
    pub doctors: Vec<DoctorRecord>,
    pub triage: TriageSummary,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}
