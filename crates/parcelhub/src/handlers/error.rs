use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use parcelhub_core::storage::{store_error_to_status_code, StoreError};

/// A request that was rejected before reaching a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Body was null")]
    EmptyBody,
    #[error("Request was null")]
    NullRequest,
    #[error("Invalid JSON in body: {0}")]
    InvalidJson(String),
}

/// Error body returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub message: String,
    pub status_code: u16,
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(store_error) = self.0.downcast_ref::<StoreError>() {
            let code = store_error_to_status_code(store_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<RequestError>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = self.0.to_string();

        if status_code.is_server_error() {
            tracing::error!(status = status_code.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status_code.as_u16(), error = %message, "Request rejected");
        }

        let body = ErrorMessage {
            message,
            status_code: status_code.as_u16(),
        };
        (status_code, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
