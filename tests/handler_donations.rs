mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_donation_success() {
    let server = common::make_server();

    let response = server
        .post("/donations")
        .json(&common::donation_body("user-1", "A+"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert!(json["id"].as_str().is_some());
    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["bloodType"], "A+");
    assert_eq!(json["userId"], "user-1");
    assert_eq!(json["location"]["latitude"], -23.55);
    assert!(json.get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_donation_sanitizes_content() {
    let server = common::make_server();
    let mut body = common::donation_body("user-1", "O-");
    body["content"] = json!("<p onclick=\"steal()\">Help</p><script>alert(1)</script>");

    let response = server.post("/donations").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["content"], "<p>Help</p>");
}

#[tokio::test]
async fn test_create_donation_content_empty_after_sanitization() {
    let server = common::make_server();
    let mut body = common::donation_body("user-1", "O-");
    body["content"] = json!("<script>alert(1)</script>");

    let response = server.post("/donations").json(&body).await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "content");
}

#[tokio::test]
async fn test_create_donation_content_wrapped_script_is_rejected() {
    let server = common::make_server();
    let mut body = common::donation_body("user-1", "O-");
    body["content"] = json!("<iframe><script>x</script></iframe>");

    let response = server.post("/donations").json(&body).await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "content");
}

#[tokio::test]
async fn test_create_donation_invalid_location() {
    let server = common::make_server();
    let mut body = common::donation_body("user-1", "B+");
    body["location"]["longitude"] = json!(181.0);

    let response = server.post("/donations").json(&body).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_donation_unknown_blood_type() {
    let server = common::make_server();

    let response = server
        .post("/donations")
        .json(&common::donation_body("user-1", "C+"))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_donation_accepts_blood_type_alias() {
    let server = common::make_server();

    let response = server
        .post("/donations")
        .json(&common::donation_body("user-1", "AB_NEGATIVE"))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["bloodType"], "AB-");
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_donation_by_id() {
    let server = common::make_server();
    let id = common::create_donation(&server, "user-1", "A-").await;

    let response = server.get(&format!("/donations/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], id.as_str());
}

#[tokio::test]
async fn test_get_donation_not_found() {
    let server = common::make_server();

    let response = server.get("/donations/does-not-exist").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_list_donations_pagination() {
    let server = common::make_server();
    for _ in 0..25 {
        common::create_donation(&server, "user-1", "O+").await;
    }

    let first = server
        .get("/donations")
        .add_query_param("page", 1)
        .add_query_param("limit", 10)
        .await;
    first.assert_status_ok();
    let first = first.json::<Value>();
    assert_eq!(first["data"].as_array().unwrap().len(), 10);
    assert_eq!(first["metadata"]["page"], 1);
    assert_eq!(first["metadata"]["limit"], 10);
    assert_eq!(first["metadata"]["total"], 25);
    assert_eq!(first["metadata"]["totalPages"], 3);

    let last = server
        .get("/donations")
        .add_query_param("page", 3)
        .add_query_param("limit", 10)
        .await
        .json::<Value>();
    assert_eq!(last["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_list_donations_defaults_and_order() {
    let server = common::make_server();
    let older = common::create_donation(&server, "user-1", "O+").await;
    let newer = common::create_donation(&server, "user-1", "O+").await;

    let json = server.get("/donations").await.json::<Value>();

    assert_eq!(json["metadata"]["page"], 1);
    assert_eq!(json["metadata"]["limit"], common::DEFAULT_PAGE_LIMIT);
    assert_eq!(json["data"][0]["id"], newer.as_str());
    assert_eq!(json["data"][1]["id"], older.as_str());
}

#[tokio::test]
async fn test_list_donations_invalid_pagination() {
    let server = common::make_server();

    server
        .get("/donations")
        .add_query_param("page", 0)
        .await
        .assert_status_bad_request();

    server
        .get("/donations")
        .add_query_param("limit", 101)
        .await
        .assert_status_bad_request();

    server
        .get("/donations")
        .add_query_param("page", "abc")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_donations_by_blood_type() {
    let server = common::make_server();
    common::create_donation(&server, "user-1", "B-").await;
    common::create_donation(&server, "user-2", "A+").await;

    let response = server.get("/donations/blood-type/B-").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["bloodType"], "B-");
}

#[tokio::test]
async fn test_donations_by_blood_type_none_found() {
    let server = common::make_server();
    common::create_donation(&server, "user-1", "A+").await;

    server
        .get("/donations/blood-type/O-")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_count_donations() {
    let server = common::make_server();
    common::create_donation(&server, "user-1", "A+").await;
    common::create_donation(&server, "user-2", "A+").await;

    let response = server.get("/donations/count").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 2);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_status_any_transition() {
    let server = common::make_server();
    let id = common::create_donation(&server, "user-1", "A+").await;

    for status in ["COMPLETED", "PENDING", "CANCELED", "APPROVED"] {
        let response = server
            .put(&format!("/donations/{id}/status"))
            .json(&json!({ "status": status }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], status);
    }
}

#[tokio::test]
async fn test_update_status_invalid_value() {
    let server = common::make_server();
    let id = common::create_donation(&server, "user-1", "A+").await;

    let response = server
        .put(&format!("/donations/{id}/status"))
        .json(&json!({ "status": "ARCHIVED" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_status_not_found() {
    let server = common::make_server();

    server
        .put("/donations/missing/status")
        .json(&json!({ "status": "APPROVED" }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_full_update() {
    let server = common::make_server();
    let id = common::create_donation(&server, "user-1", "A+").await;

    let mut body = common::donation_body("user-1", "O-");
    body["content"] = json!("Updated need");
    body["status"] = json!("APPROVED");
    body["name"] = json!("City Hospital");

    let response = server.put(&format!("/donations/{id}")).json(&body).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["content"], "Updated need");
    assert_eq!(json["bloodType"], "O-");
    assert_eq!(json["status"], "APPROVED");
    assert_eq!(json["name"], "City Hospital");
}

#[tokio::test]
async fn test_full_update_not_found() {
    let server = common::make_server();

    server
        .put("/donations/missing")
        .json(&common::donation_body("user-1", "A+"))
        .await
        .assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_donation() {
    let server = common::make_server();
    let id = common::create_donation(&server, "user-1", "A+").await;

    let response = server.delete(&format!("/donations/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Donation deleted successfully"
    );

    server
        .get(&format!("/donations/{id}"))
        .await
        .assert_status_not_found();

    // Second delete returns 404.
    server
        .delete(&format!("/donations/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_donations_by_user() {
    let server = common::make_server();
    common::create_donation(&server, "user-1", "A+").await;
    common::create_donation(&server, "user-1", "B+").await;
    common::create_donation(&server, "user-2", "B+").await;

    let response = server.delete("/donations/user/user-1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["deletedCount"], 2);
    assert_eq!(
        json["message"],
        "Successfully deleted 2 donation(s) for user user-1"
    );

    let count = server.get("/donations/count").await.json::<Value>();
    assert_eq!(count["count"], 1);
}

#[tokio::test]
async fn test_delete_donations_by_user_with_none() {
    let server = common::make_server();

    let response = server.delete("/donations/user/nobody").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["deletedCount"], 0);
}
