//! Error responses shared by all handlers

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ServiceError;

/// JSON body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    /// No `image` field in the upload
    MissingInput,
    /// The multipart stream could not be read
    InvalidUpload(String),
    /// The upload exceeded the configured size limit
    UploadTooLarge,
    /// Text detection found nothing
    NoDetection,
    /// Text detection or local storage failed
    Processing(String),
    /// A recipe API call failed
    Fetch {
        context: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn processing(e: impl std::fmt::Display) -> Self {
        ApiError::Processing(e.to_string())
    }

    pub fn fetch(context: &'static str, e: ServiceError) -> Self {
        ApiError::Fetch {
            context,
            message: e.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput | ApiError::InvalidUpload(_) | ApiError::NoDetection => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UploadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Processing(_) | ApiError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            ApiError::MissingInput => ("No image uploaded", None),
            ApiError::InvalidUpload(msg) => ("Invalid upload", Some(msg.clone())),
            ApiError::UploadTooLarge => ("Uploaded image is too large", None),
            ApiError::NoDetection => ("No ingredients detected", None),
            ApiError::Processing(msg) => ("Image processing failed", Some(msg.clone())),
            ApiError::Fetch { context, message } => (*context, Some(message.clone())),
        };
        ErrorBody {
            error: error.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        if status.is_server_error() {
            tracing::error!(
                "{}: {}",
                body.error,
                body.details.as_deref().unwrap_or_default()
            );
        } else {
            tracing::warn!("Rejected request ({}): {}", status, body.error);
        }

        (status, Json(body)).into_response()
    }
}
