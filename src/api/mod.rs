//! REST API module.
//!
//! Exposes the composed facility dashboard to the presentation layer.

mod catalog;
mod dashboard;

pub use catalog::*;
pub use dashboard::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppErrorWithGeneration};

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    /// Fetch generation the data was produced by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, generation: Option<u64>) -> Self {
        Self {
            success: true,
            data,
            generation,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppErrorWithGeneration>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data, None))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError) -> ApiResult<T> {
    Err(err.into())
}

/// Create a successful response for data produced by fetch `generation`.
pub fn success_at<T: Serialize>(data: T, generation: u64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, Some(generation)))
}

/// Create an error response for fetch `generation`.
pub fn error_at<T: Serialize>(err: AppError, generation: u64) -> ApiResult<T> {
    Err(AppErrorWithGeneration {
        error: err,
        generation: Some(generation),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppErrorWithGeneration {
    AppError::NotFound("No such route".to_string()).into()
}
