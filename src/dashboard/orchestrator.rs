//! Cancellable fetch orchestration for one dashboard view.
//!
//! Every trigger starts a batch of the four upstream reads and bumps the view's
//! generation. A batch joins all four reads, then applies its result only if the
//! generation it was started with is still current; a newer trigger or a teardown
//! turns it into a no-op.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::aggregate::merge;
use super::compose::{compose_with, RenderModel};
use super::notify::Notifier;
use super::state::{Phase, ViewState};
use crate::errors::SourceError;
use crate::models::{
    CapacityRecord, Catalog, DoctorRecord, FacilityId, FacilityProfile, TriageSummary,
};
use crate::source::{DataSourceClient, FacilityFilter};

/// Generic message shown to the user when the facility itself cannot be loaded.
pub const FETCH_ERROR_MESSAGE: &str = "Something went wrong..!";

/// How a batch settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The merged result replaced the view state.
    Applied,
    /// The facility read failed; the view moved to `Error` with its data untouched.
    Failed,
    /// A newer trigger or teardown happened first; nothing was changed.
    Superseded,
}

/// Settled results of the four reads of one batch.
struct RawBatch {
    facility_id: FacilityId,
    facility: Result<FacilityProfile, SourceError>,
    capacity: Result<Vec<CapacityRecord>, SourceError>,
    doctors: Result<Vec<DoctorRecord>, SourceError>,
    triage: Result<Vec<TriageSummary>, SourceError>,
}

/// Owns the state of one dashboard view and the right to mutate it.
///
/// Readers only ever get snapshots, through [`snapshot`](Self::snapshot),
/// [`subscribe`](Self::subscribe) or [`render`](Self::render).
pub struct FetchOrchestrator<C, N> {
    client: Arc<C>,
    notifier: Arc<N>,
    state: Arc<watch::Sender<ViewState>>,
}

impl<C, N> FetchOrchestrator<C, N>
where
    C: DataSourceClient + 'static,
    N: Notifier + 'static,
{
    /// Activates a view with an empty, idle state.
    pub fn new(client: Arc<C>, notifier: Arc<N>) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            client,
            notifier,
            state: Arc::new(state),
        }
    }

    /// Starts a new batch for `facility_id`.
    ///
    /// The view is `Loading` and every earlier batch is stale as soon as this
    /// returns; the reads themselves only run once the returned future is polled.
    pub fn trigger(
        &self,
        facility_id: FacilityId,
    ) -> impl Future<Output = BatchOutcome> + Send + 'static {
        let generation = advance(&self.state, Some(Phase::Loading));
        info!(facility = %facility_id, generation, "Dashboard fetch triggered");

        let client = Arc::clone(&self.client);
        let notifier = Arc::clone(&self.notifier);
        let state = Arc::clone(&self.state);

        async move {
            let batch = fetch_batch(client.as_ref(), facility_id).await;
            settle(&state, notifier.as_ref(), generation, batch)
        }
    }

    /// Triggers a batch and waits for it to settle.
    pub async fn refresh(&self, facility_id: FacilityId) -> BatchOutcome {
        self.trigger(facility_id).await
    }

    /// Tears the view down. Batches still in flight settle as superseded.
    pub fn teardown(self) {
        debug!(generation = self.generation(), "Dashboard view torn down");
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// Composes the current state against `catalog`.
    pub fn render(&self, catalog: &Catalog) -> RenderModel {
        compose_with(&self.state.borrow(), catalog)
    }
}

impl<C, N> Drop for FetchOrchestrator<C, N> {
    fn drop(&mut self) {
        advance(&self.state, None);
    }
}

/// Bumps the generation, optionally entering `phase`, and returns the new generation.
fn advance(state: &watch::Sender<ViewState>, phase: Option<Phase>) -> u64 {
    let mut generation = 0;
    state.send_modify(|current| {
        current.generation += 1;
        if let Some(phase) = phase {
            current.phase = phase;
        }
        generation = current.generation;
    });
    generation
}

/// Issues the four reads concurrently and waits for all of them to settle.
async fn fetch_batch<C: DataSourceClient>(client: &C, facility_id: FacilityId) -> RawBatch {
    let filter = FacilityFilter::new(facility_id.clone());

    let (facility, capacity, doctors, triage) = tokio::join!(
        client.fetch_facility(&facility_id),
        client.list_capacity(&filter),
        client.list_doctors(&filter),
        client.fetch_triage_summary(&filter),
    );

    RawBatch {
        facility_id,
        facility,
        capacity,
        doctors,
        triage,
    }
}

/// Applies a settled batch if `generation` is still current.
///
/// The generation check and the replacement happen under the same borrow of the
/// state cell, so a concurrent trigger either lands before (and the batch is
/// discarded) or after (and sees the applied state).
fn settle<N: Notifier + ?Sized>(
    state: &watch::Sender<ViewState>,
    notifier: &N,
    generation: u64,
    batch: RawBatch,
) -> BatchOutcome {
    let RawBatch {
        facility_id,
        facility,
        capacity,
        doctors,
        triage,
    } = batch;

    let mut degraded = Vec::new();
    let capacity = degrade("capacity", capacity, &mut degraded);
    let doctors = degrade("doctors", doctors, &mut degraded);
    let triage = degrade("triage", triage, &mut degraded);

    let mut outcome = BatchOutcome::Superseded;
    let mut failure = None;

    state.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        match facility {
            Ok(profile) => {
                *current = ViewState {
                    generation,
                    ..merge(profile, capacity, doctors, triage)
                };
                outcome = BatchOutcome::Applied;
            }
            Err(err) => {
                current.phase = Phase::Error;
                failure = Some(err);
                outcome = BatchOutcome::Failed;
            }
        }
        true
    });

    match outcome {
        BatchOutcome::Applied => {
            for (source, err) in &degraded {
                warn!(facility = %facility_id, generation, source, error = %err, "Source unavailable, showing it as empty");
            }
            info!(facility = %facility_id, generation, "Dashboard state applied");
        }
        BatchOutcome::Failed => {
            if let Some(err) = failure {
                error!(facility = %facility_id, generation, error = %err, "Facility fetch failed");
            }
            notifier.error(FETCH_ERROR_MESSAGE);
        }
        BatchOutcome::Superseded => {
            debug!(facility = %facility_id, generation, "Discarding superseded batch");
        }
    }

    outcome
}

/// A failed optional source contributes nothing; the failure is kept for logging.
fn degrade<T>(
    source: &'static str,
    result: Result<T, SourceError>,
    degraded: &mut Vec<(&'static str, SourceError)>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            degraded.push((source, err));
            None
        }
    }
}
