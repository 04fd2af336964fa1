#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use donation_service::domain::entities::{
    BloodType, DonationStatus, Location, NewDonation, NewRegistration, RegistrationStatus,
};
use donation_service::infrastructure::memory::{
    MemoryDonationRepository, MemoryRegistrationRepository,
};
use donation_service::routes::app_router;
use donation_service::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Application state over fresh in-memory repositories.
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryDonationRepository::new()),
        Arc::new(MemoryRegistrationRepository::new()),
        DEFAULT_PAGE_LIMIT,
        "memory",
    )
}

/// Test server over the full router, middleware included.
pub fn make_server() -> TestServer {
    let app = app_router(create_test_state());
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn donation_body(user_id: &str, blood_type: &str) -> Value {
    json!({
        "content": "<p>Need blood for surgery</p>",
        "startDate": "2026-03-01T08:00:00Z",
        "bloodType": blood_type,
        "location": { "latitude": -23.55, "longitude": -46.63 },
        "userId": user_id,
    })
}

/// Creates a donation through the API and returns its id.
pub async fn create_donation(server: &TestServer, user_id: &str, blood_type: &str) -> String {
    let response = server
        .post("/donations")
        .json(&donation_body(user_id, blood_type))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_str().unwrap().to_string()
}

/// Registers a user through the API and returns the registration id.
pub async fn create_registration(server: &TestServer, donation_id: &str, user_id: &str) -> String {
    let response = server
        .post("/registrations")
        .json(&json!({ "donationId": donation_id, "userId": user_id }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_str().unwrap().to_string()
}

pub fn new_donation(user_id: &str, blood_type: BloodType) -> NewDonation {
    NewDonation {
        status: DonationStatus::Pending,
        content: "Need blood".to_string(),
        description: Some("Surgery on Monday".to_string()),
        start_date: Utc::now(),
        finish_date: Some(Utc::now() + Duration::days(7)),
        blood_type,
        location: Location {
            latitude: 10.5,
            longitude: -20.25,
        },
        user_id: user_id.to_string(),
        name: Some("Central Hospital".to_string()),
        image: None,
        phone: Some("+1 555 0100".to_string()),
    }
}

pub fn new_registration(donation_id: &str, user_id: &str) -> NewRegistration {
    NewRegistration {
        donation_id: donation_id.to_string(),
        user_id: user_id.to_string(),
        status: RegistrationStatus::Pending,
        registered_at: Utc::now(),
        notes: None,
    }
}
