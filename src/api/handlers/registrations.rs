//! Handlers for registration endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::registration::{
    CreateRegistrationRequest, RegistrationResponse, UpdateRegistrationStatusRequest,
};
use crate::domain::entities::{Registration, RegistrationStatus};
use crate::domain::errors::RegistrationError;
use crate::error::AppError;
use crate::state::AppState;

fn to_responses(registrations: Vec<Registration>) -> Vec<RegistrationResponse> {
    registrations.into_iter().map(Into::into).collect()
}

/// Registers a donor for a donation.
///
/// # Endpoint
///
/// `POST /registrations`
///
/// # Errors
///
/// - **400**: malformed body or validation failure
/// - **409**: the user already has a registration for this donation
pub async fn create_registration_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegistrationResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let registration = state
        .registration_service
        .create_registration(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(registration.into())))
}

/// `GET /registrations/donation/{donationId}`, oldest first.
pub async fn registrations_by_donation_handler(
    State(state): State<AppState>,
    Path(donation_id): Path<String>,
) -> Result<Json<Vec<RegistrationResponse>>, AppError> {
    let registrations = state
        .registration_service
        .find_registrations_by_donation(&donation_id)
        .await?;

    Ok(Json(to_responses(registrations)))
}

/// `GET /registrations/user/{userId}`, oldest first.
pub async fn registrations_by_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<RegistrationResponse>>, AppError> {
    let registrations = state
        .registration_service
        .find_registrations_by_user(&user_id)
        .await?;

    Ok(Json(to_responses(registrations)))
}

/// Sets a registration's status and stamps the matching timestamp.
///
/// # Endpoint
///
/// `PATCH /registrations/{id}/status`
///
/// Transitions are not restricted; `PENDING` to `COMPLETED` is accepted.
pub async fn update_registration_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRegistrationStatusRequest>, JsonRejection>,
) -> Result<Json<RegistrationResponse>, AppError> {
    let Json(payload) = payload?;
    let status: RegistrationStatus = payload
        .status
        .parse()
        .map_err(|_| RegistrationError::InvalidRegistrationStatus(payload.status.clone()))?;

    let registration = state
        .registration_service
        .update_registration_status(&id, status)
        .await?;

    Ok(Json(registration.into()))
}

/// Cancels a pending or confirmed registration.
///
/// # Endpoint
///
/// `PATCH /registrations/{id}/cancel`
pub async fn cancel_registration_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RegistrationResponse>, AppError> {
    let registration = state.registration_service.cancel_registration(&id).await?;
    Ok(Json(registration.into()))
}
