//! Facility dashboard API endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};

use super::{error, error_at, success_at, ApiResult};
use crate::dashboard::{BatchOutcome, FetchOrchestrator, RecordingNotifier, RenderModel};
use crate::errors::AppError;
use crate::models::FacilityId;
use crate::AppState;

/// GET /api/facilities/:id/dashboard - Fetch and compose the dashboard of one facility.
///
/// Each request activates its own view, runs a single batch and tears the view
/// down again.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RenderModel> {
    let facility_id = match FacilityId::parse(&id) {
        Ok(facility_id) => facility_id,
        Err(e) => return error(e),
    };

    let notifier = Arc::new(RecordingNotifier::new());
    let view = FetchOrchestrator::new(Arc::clone(&state.source), Arc::clone(&notifier));

    let outcome = view.refresh(facility_id).await;
    let generation = view.generation();

    let result = match outcome {
        BatchOutcome::Applied => success_at(view.render(&state.catalog), generation),
        BatchOutcome::Failed => {
            let message = notifier.messages().pop().unwrap_or_default();
            error_at(AppError::Upstream(message), generation)
        }
        BatchOutcome::Superseded => error_at(
            AppError::Internal("Dashboard fetch was superseded".to_string()),
            generation,
        ),
    };

    view.teardown();
    result
}
