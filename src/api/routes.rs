//! API route configuration.

use crate::api::handlers::{
    cancel_registration_handler, count_donations_handler, create_donation_handler,
    create_registration_handler, delete_donation_handler, delete_donations_by_user_handler,
    donations_by_blood_type_handler, get_donation_handler, list_donations_handler,
    registrations_by_donation_handler, registrations_by_user_handler, update_donation_handler,
    update_donation_status_handler, update_registration_status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

/// Donation routes.
///
/// # Endpoints
///
/// - `POST   /donations`                         - Create a donation
/// - `GET    /donations`                         - Paginated list, newest first
/// - `GET    /donations/count`                   - Total number of donations
/// - `GET    /donations/blood-type/{bloodType}`  - Donations needing a blood type
/// - `GET    /donations/{id}`                    - Single donation
/// - `PUT    /donations/{id}`                    - Full update
/// - `PUT    /donations/{id}/status`             - Status update
/// - `DELETE /donations/{id}`                    - Delete one donation
/// - `DELETE /donations/user/{userId}`           - Delete every donation of a user
pub fn donation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/donations",
            post(create_donation_handler).get(list_donations_handler),
        )
        .route("/donations/count", get(count_donations_handler))
        .route(
            "/donations/blood-type/{blood_type}",
            get(donations_by_blood_type_handler),
        )
        .route(
            "/donations/user/{user_id}",
            delete(delete_donations_by_user_handler),
        )
        .route(
            "/donations/{id}",
            get(get_donation_handler)
                .put(update_donation_handler)
                .delete(delete_donation_handler),
        )
        .route("/donations/{id}/status", put(update_donation_status_handler))
}

/// Registration routes.
///
/// # Endpoints
///
/// - `POST  /registrations`                        - Register a donor
/// - `GET   /registrations/donation/{donationId}`  - Registrations for a donation
/// - `GET   /registrations/user/{userId}`          - Registrations of a user
/// - `PATCH /registrations/{id}/status`            - Status update
/// - `PATCH /registrations/{id}/cancel`            - Cancel
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/registrations", post(create_registration_handler))
        .route(
            "/registrations/donation/{donation_id}",
            get(registrations_by_donation_handler),
        )
        .route(
            "/registrations/user/{user_id}",
            get(registrations_by_user_handler),
        )
        .route(
            "/registrations/{id}/status",
            patch(update_registration_status_handler),
        )
        .route(
            "/registrations/{id}/cancel",
            patch(cancel_registration_handler),
        )
}
