//! Integration tests for the single-record CRUD surface: login, listing,
//! create, update, soft delete, status toggle, and profile image.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::fixtures::valid_user_payload;
use common::harness::TestHarness;
use roster_model::Role;
use roster_persistence::core::UserStore;

#[tokio::test]
async fn test_health_endpoints() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "sqlite");

    assert_eq!(
        harness.server.get("/_liveness").await.status_code(),
        StatusCode::OK
    );
    assert_eq!(
        harness.server.get("/_readiness").await.status_code(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_login_roundtrip() {
    let harness = TestHarness::new().await;
    harness.seed_user("ada@gmail.com", Role::Admin).await;

    let response = harness
        .server
        .post("/login")
        .json(&json!({ "email": "ada@gmail.com", "password": "Seed@123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["email"], "ada@gmail.com");
    assert_eq!(body["role"], "admin");
    // Passwords never serialize outward.
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let harness = TestHarness::new().await;
    harness.seed_user("ada@gmail.com", Role::User).await;

    let response = harness
        .server
        .post("/login")
        .json(&json!({ "email": "ada@gmail.com", "password": "nope" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_create_user_as_admin() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .post("/users")
        .json(&valid_user_payload("ada@gmail.com"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert!(response.headers().contains_key("location"));

    let body: Value = response.json();
    assert_eq!(body["email"], "ada@gmail.com");
    assert_eq!(body["is_active"], true);
    assert_eq!(harness.user_count().await, 1);
}

#[tokio::test]
async fn test_create_user_requires_admin() {
    let harness = TestHarness::new().await;

    let mut payload = valid_user_payload("ada@gmail.com");
    payload["user_role"] = json!("user");

    let response = harness.server.post("/users").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(harness.user_count().await, 0);
}

#[tokio::test]
async fn test_create_user_validation_failure_lists_every_rule() {
    let harness = TestHarness::new().await;

    let mut payload = valid_user_payload("ada@example.com");
    payload["contact"] = json!("12345");

    let response = harness.server.post("/users").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "Contact must be exactly 10 digits");
    assert_eq!(errors[1], "Email must be a valid @gmail.com address");
    assert_eq!(harness.user_count().await, 0);
}

#[tokio::test]
async fn test_create_duplicate_email_conflicts() {
    let harness = TestHarness::new().await;
    harness.seed_user("ada@gmail.com", Role::User).await;

    let response = harness
        .server
        .post("/users")
        .json(&valid_user_payload("ada@gmail.com"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn test_list_search_filter_sort_paginate() {
    let harness = TestHarness::new().await;
    harness.seed_user("ada@gmail.com", Role::User).await;
    harness.seed_user("grace@gmail.com", Role::User).await;
    let alan = harness.seed_user("alan@gmail.com", Role::User).await;
    harness.toggle_status(alan.id, "admin").await;

    // Plain listing carries totals.
    let body: Value = harness.server.get("/users").await.json();
    assert_eq!(body["total"], 3);
    assert_eq!(body["users"].as_array().unwrap().len(), 3);

    // Substring search.
    let body: Value = harness
        .server
        .get("/users")
        .add_query_param("search", "grace")
        .await
        .json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["users"][0]["email"], "grace@gmail.com");

    // Status filter.
    let body: Value = harness
        .server
        .get("/users")
        .add_query_param("status", "inactive")
        .await
        .json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["users"][0]["email"], "alan@gmail.com");

    // Email sort descending, one row per page.
    let body: Value = harness
        .server
        .get("/users")
        .add_query_param("sort_by", "email")
        .add_query_param("order", "desc")
        .add_query_param("_count", "1")
        .await
        .json();
    assert_eq!(body["total"], 3);
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
    assert_eq!(body["users"][0]["email"], "grace@gmail.com");

    // Second page.
    let body: Value = harness
        .server
        .get("/users")
        .add_query_param("sort_by", "email")
        .add_query_param("order", "desc")
        .add_query_param("_count", "1")
        .add_query_param("_offset", "1")
        .await
        .json();
    assert_eq!(body["users"][0]["email"], "alan@gmail.com");
}

#[tokio::test]
async fn test_update_user() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;

    let response = harness
        .server
        .put(&format!("/users/{}", user.id))
        .json(&json!({
            "first_name": "Augusta",
            "last_name": "King",
            "contact": "9876543299",
            "address": "Ockham Park",
            "role": "admin",
            "user_role": "admin"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["first_name"], "Augusta");
    assert_eq!(body["role"], "admin");
    // Email is immutable through update.
    assert_eq!(body["email"], "ada@gmail.com");
}

#[tokio::test]
async fn test_update_validates_editable_fields() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;

    let response = harness
        .server
        .put(&format!("/users/{}", user.id))
        .json(&json!({
            "first_name": "Augusta",
            "last_name": "King",
            "contact": "123",
            "address": "Ockham Park",
            "user_role": "admin"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"][0], "Contact must be exactly 10 digits");
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .put(&format!("/users/{}", uuid::Uuid::new_v4()))
        .json(&json!({
            "first_name": "A",
            "last_name": "B",
            "contact": "9876543210",
            "address": "x",
            "user_role": "admin"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_tombstoned_is_404() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;
    harness.delete_user(user.id, "admin").await;

    let response = harness
        .server
        .put(&format!("/users/{}", user.id))
        .json(&json!({
            "first_name": "A",
            "last_name": "B",
            "contact": "9876543210",
            "address": "x",
            "user_role": "admin"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_soft_delete_hides_user_from_listing() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;
    harness.seed_user("grace@gmail.com", Role::User).await;

    let response = harness.delete_user(user.id, "admin").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    assert_eq!(harness.listed_emails().await, vec!["grace@gmail.com"]);
}

#[tokio::test]
async fn test_delete_requires_admin() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;

    let response = harness.delete_user(user.id, "user").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(harness.user_count().await, 1);
}

#[tokio::test]
async fn test_toggle_status_roundtrip() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;

    let response = harness.toggle_status(user.id, "admin").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["is_active"], false);

    let body: Value = harness.toggle_status(user.id, "admin").await.json();
    assert_eq!(body["is_active"], true);
}

#[tokio::test]
async fn test_toggle_status_requires_admin() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;

    let response = harness.toggle_status(user.id, "viewer").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_profile_image_upload() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;

    let response = harness
        .server
        .patch(&format!("/users/{}/profile-image", user.id))
        .json(&json!({ "profile_image": "data:image/png;base64,iVBORw0KGgo=" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let stored = harness.store.read(user.id).await.unwrap().unwrap();
    assert!(stored.profile_image.unwrap().starts_with("data:image/png"));
}

#[tokio::test]
async fn test_profile_image_rejects_non_image_payloads() {
    let harness = TestHarness::new().await;
    let user = harness.seed_user("ada@gmail.com", Role::User).await;

    for bad in [
        "not-a-data-url",
        "data:text/plain;base64,aGVsbG8=",
        "data:image/png;base64,%%%not-base64%%%",
    ] {
        let response = harness
            .server
            .patch(&format!("/users/{}/profile-image", user.id))
            .json(&json!({ "profile_image": bad }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{bad}");
    }
}

#[tokio::test]
async fn test_custom_admin_role_name_is_honored() {
    let mut config = roster_rest::ServerConfig::for_testing();
    config.admin_role = "superuser".to_string();
    let harness = TestHarness::with_config(config).await;

    // The default name no longer grants privilege.
    let response = harness
        .server
        .post("/users")
        .json(&valid_user_payload("ada@gmail.com"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let mut payload = valid_user_payload("ada@gmail.com");
    payload["user_role"] = json!("superuser");
    let response = harness.server.post("/users").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}
