//! Service-level error type (spec.md §7), mirroring the teacher's
//! `AirmailServiceError: IntoResponse` pattern. Library errors from `navlun`
//! are wrapped here rather than duplicated.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("unauthorized")]
    AuthFail,

    #[error("malformed request body: {0}")]
    ValidationFail(String),

    #[error("pipeline error")]
    Pipeline(#[from] navlun::PipelineError),

    #[error("general error: `{0}`")]
    InternalAnyhowError(Box<anyhow::Error>),

    #[error("failed to encode response")]
    SerdeEncodeError(#[from] serde_json::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalAnyhowError(Box::new(e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::AuthFail => {
                warn!("AuthFail: missing or mismatched x-api-key");
                (StatusCode::UNAUTHORIZED, r#"{"message":"Unauthorized"}"#).into_response()
            }
            Self::ValidationFail(msg) => {
                warn!("ValidationFail: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone()).into_response()
            }
            Self::Pipeline(e) => {
                warn!("Pipeline error: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            Self::InternalAnyhowError(e) => {
                warn!("InternalAnyhowError: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            Self::SerdeEncodeError(e) => {
                warn!("SerdeEncodeError: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
