//! REST API test harness.
//!
//! Provides a configured test server backed by an in-memory SQLite store,
//! with the store handle kept around for seeding and direct assertions.

use std::sync::Arc;

use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};
use uuid::Uuid;

use roster_model::{CandidateUser, Role, StoredUser};
use roster_persistence::backends::sqlite::SqliteStore;
use roster_persistence::core::UserStore;
use roster_rest::{AppState, ServerConfig};

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// let harness = TestHarness::new().await;
/// let user = harness.seed_user("ada@gmail.com", Role::User).await;
/// let response = harness.server.get("/users").await;
/// assert_eq!(response.status_code(), 200);
/// ```
pub struct TestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend, shared with the server.
    pub store: Arc<SqliteStore>,

    /// Server configuration.
    pub config: ServerConfig,
}

impl TestHarness {
    /// Creates a harness over a fresh in-memory database.
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::for_testing()).await
    }

    /// Creates a harness with a custom configuration.
    pub async fn with_config(config: ServerConfig) -> Self {
        let store = SqliteStore::in_memory().expect("Failed to create store");
        store.init_schema().expect("Failed to init schema");
        let store = Arc::new(store);

        let state = AppState::new(Arc::clone(&store), config.clone());
        let router = roster_rest::routing::routes::create_routes(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            store,
            config,
        }
    }

    /// Seeds one user directly through the store.
    pub async fn seed_user(&self, email: &str, role: Role) -> StoredUser {
        self.store
            .create(
                CandidateUser::new(
                    "Seeded",
                    "User",
                    "9876500000",
                    email,
                    "1 Fixture Lane",
                    "Seed@123",
                ),
                role,
            )
            .await
            .expect("Failed to seed user")
    }

    /// Number of non-deleted users in the store.
    pub async fn user_count(&self) -> u64 {
        self.store.count().await.expect("Failed to count users")
    }

    /// Sends a bulk upload with the given role and CSV body.
    pub async fn bulk_upload(&self, role: &str, csv: &str) -> axum_test::TestResponse {
        let form = MultipartForm::new().add_text("role", role.to_string()).add_part(
            "file",
            Part::bytes(csv.as_bytes().to_vec())
                .file_name("users.csv")
                .mime_type("text/csv"),
        );
        self.server.post("/users/bulk-upload").multipart(form).await
    }

    /// DELETE `/users/{id}` acting as the given role.
    pub async fn delete_user(&self, id: Uuid, role: &str) -> axum_test::TestResponse {
        self.server
            .delete(&format!("/users/{id}"))
            .json(&json!({ "user_role": role }))
            .await
    }

    /// PATCH `/users/status/{id}` acting as the given role.
    pub async fn toggle_status(&self, id: Uuid, role: &str) -> axum_test::TestResponse {
        self.server
            .patch(&format!("/users/status/{id}"))
            .json(&json!({ "user_role": role }))
            .await
    }

    /// The ids of users returned by `GET /users`, in listing order.
    pub async fn listed_emails(&self) -> Vec<String> {
        let body: Value = self.server.get("/users").await.json();
        body["users"]
            .as_array()
            .expect("users array")
            .iter()
            .map(|u| u["email"].as_str().expect("email").to_string())
            .collect()
    }
}
