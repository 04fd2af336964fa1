//! HTTP error type shared by every handler.
//!
//! Domain errors convert into [`AppError`] through `From`, so handlers can use
//! `?` directly on service calls. Every error renders as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::entities::PageRequestError;
use crate::domain::errors::{DonationError, RegistrationError, RepositoryError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        tracing::error!(error = %e, "Repository failure");
        AppError::internal("Internal server error", json!({}))
    }
}

impl From<DonationError> for AppError {
    fn from(e: DonationError) -> Self {
        match e {
            DonationError::DonationNotFound(id) => {
                AppError::not_found("Donation not found", json!({ "id": id }))
            }
            DonationError::InvalidContent(field) => AppError::bad_request(
                format!("Field '{}' has no content after sanitization", field),
                json!({ "field": field }),
            ),
            DonationError::Repository(e) => e.into(),
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::RegistrationNotFound(id) => {
                AppError::not_found("Registration not found", json!({ "id": id }))
            }
            RegistrationError::UserAlreadyRegistered {
                donation_id,
                user_id,
            } => AppError::conflict(
                "User is already registered for this donation",
                json!({ "donationId": donation_id, "userId": user_id }),
            ),
            RegistrationError::InvalidRegistrationStatus(status) => AppError::bad_request(
                "Invalid registration status",
                json!({ "status": status }),
            ),
            RegistrationError::CannotCancelRegistration { id, status } => AppError::bad_request(
                format!("Cannot cancel a registration with status {}", status),
                json!({ "id": id, "status": status }),
            ),
            RegistrationError::Repository(e) => e.into(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl From<PageRequestError> for AppError {
    fn from(e: PageRequestError) -> Self {
        AppError::bad_request(e.to_string(), json!({}))
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::bad_request("Invalid query parameters", json!({ "reason": e.body_text() }))
    }
}
