use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::regions::services::DatasetError;
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Region dataset unavailable: {0}")]
    DataUnavailable(String),
}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        AppError::DataUnavailable(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::DataUnavailable(ref msg) => {
                tracing::warn!("Region dataset unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    self.to_string(),
                    Some(vec![msg.clone()]),
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
