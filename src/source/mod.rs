//! Upstream data sources for the dashboard.
//!
//! The dashboard consumes four independent reads keyed by facility. Each read either
//! yields its payload or a [`SourceError`]; failures of one read never affect another.

mod http;

pub use http::HttpDataSource;

use std::future::Future;

use crate::errors::SourceError;
use crate::models::{CapacityRecord, DoctorRecord, FacilityId, FacilityProfile, TriageSummary};

/// Filter for the facility-scoped list reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityFilter {
    pub facility_id: FacilityId,
}

impl FacilityFilter {
    pub fn new(facility_id: FacilityId) -> Self {
        Self { facility_id }
    }
}

/// Trait for the four asynchronous reads behind the facility dashboard.
///
/// Implementations must be cheap to share: the orchestrator holds one behind an
/// `Arc` and issues all four reads of a batch concurrently.
pub trait DataSourceClient: Send + Sync {
    /// Reads the facility profile.
    fn fetch_facility(
        &self,
        facility_id: &FacilityId,
    ) -> impl Future<Output = Result<FacilityProfile, SourceError>> + Send;

    /// Lists the bed capacity records configured for the facility, in upstream order.
    fn list_capacity(
        &self,
        filter: &FacilityFilter,
    ) -> impl Future<Output = Result<Vec<CapacityRecord>, SourceError>> + Send;

    /// Lists the doctor records configured for the facility, in upstream order.
    fn list_doctors(
        &self,
        filter: &FacilityFilter,
    ) -> impl Future<Output = Result<Vec<DoctorRecord>, SourceError>> + Send;

    /// Lists triage summaries for the facility, latest first.
    fn fetch_triage_summary(
        &self,
        filter: &FacilityFilter,
    ) -> impl Future<Output = Result<Vec<TriageSummary>, SourceError>> + Send;
}
