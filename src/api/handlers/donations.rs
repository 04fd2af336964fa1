//! Handlers for donation endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::donation::{
    CountResponse, DeleteByUserResponse, DonationRequest, DonationResponse, MessageResponse,
    UpdateStatusRequest,
};
use crate::api::dto::pagination::{PaginatedResponse, PaginationParams};
use crate::domain::entities::{BloodType, DonationStatus};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a donation request.
///
/// # Endpoint
///
/// `POST /donations`
///
/// # Errors
///
/// Returns 400 if the body is malformed, fails validation, or a text field
/// sanitizes to nothing.
pub async fn create_donation_handler(
    State(state): State<AppState>,
    payload: Result<Json<DonationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DonationResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let donation = state
        .donation_service
        .create_donation(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(donation.into())))
}

/// Lists donations, newest first.
///
/// # Endpoint
///
/// `GET /donations?page=1&limit=10`
///
/// `limit` defaults to the configured page size and may not exceed 100.
pub async fn list_donations_handler(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<PaginatedResponse<DonationResponse>>, AppError> {
    let Query(params) = params?;
    let request = params.to_page_request(state.default_page_limit)?;

    let page = state.donation_service.find_all_donations(request).await?;

    Ok(Json(page.map(DonationResponse::from).into()))
}

/// `GET /donations/{id}`
pub async fn get_donation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DonationResponse>, AppError> {
    let donation = state.donation_service.find_donation_by_id(&id).await?;
    Ok(Json(donation.into()))
}

/// Lists donations needing a given blood type.
///
/// # Endpoint
///
/// `GET /donations/blood-type/{bloodType}`
///
/// # Errors
///
/// Returns 400 for an unknown blood type and 404 when no donation matches.
pub async fn donations_by_blood_type_handler(
    State(state): State<AppState>,
    Path(blood_type): Path<String>,
) -> Result<Json<Vec<DonationResponse>>, AppError> {
    let parsed: BloodType = blood_type
        .parse()
        .map_err(|reason: String| AppError::bad_request(reason, json!({ "bloodType": blood_type })))?;

    let donations = state
        .donation_service
        .find_donations_by_blood_type(parsed)
        .await?;

    if donations.is_empty() {
        return Err(AppError::not_found(
            "No donations found for this blood type",
            json!({ "bloodType": parsed }),
        ));
    }

    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// `GET /donations/count`
pub async fn count_donations_handler(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let count = state.donation_service.count_donations().await?;
    Ok(Json(CountResponse { count }))
}

/// Replaces the status of a donation. Any status may follow any other.
///
/// # Endpoint
///
/// `PUT /donations/{id}/status`
pub async fn update_donation_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<DonationResponse>, AppError> {
    let Json(payload) = payload?;
    let status: DonationStatus = payload.status.parse().map_err(|reason: String| {
        AppError::bad_request(reason, json!({ "status": payload.status }))
    })?;

    let donation = state.donation_service.update_status(&id, status).await?;

    Ok(Json(donation.into()))
}

/// Replaces every field of a donation.
///
/// # Endpoint
///
/// `PUT /donations/{id}`
///
/// Body as for `POST /donations`.
pub async fn update_donation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DonationRequest>, JsonRejection>,
) -> Result<Json<DonationResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let donation = state
        .donation_service
        .update_donation(&id, payload.into())
        .await?;

    Ok(Json(donation.into()))
}

/// `DELETE /donations/{id}`
pub async fn delete_donation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.donation_service.delete_donation(&id).await?;

    Ok(Json(MessageResponse {
        message: "Donation deleted successfully".to_string(),
    }))
}

/// Deletes every donation posted by a user.
///
/// # Endpoint
///
/// `DELETE /donations/user/{userId}`
///
/// Deleting nothing is not an error; the response reports `deletedCount: 0`.
pub async fn delete_donations_by_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteByUserResponse>, AppError> {
    let deleted_count = state
        .donation_service
        .delete_donations_by_user_id(&user_id)
        .await?;

    Ok(Json(DeleteByUserResponse {
        message: format!(
            "Successfully deleted {} donation(s) for user {}",
            deleted_count, user_id
        ),
        deleted_count,
    }))
}
