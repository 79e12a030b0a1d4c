//! Typed facade over the request pipeline for the admin console endpoints.
//!
//! Each method builds exactly one request envelope and delegates to
//! [`ApiClient::send`]; there is no logic here beyond request construction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::ApiClient;
use super::envelope::RequestEnvelope;
use super::failure::ApiFailure;

/// Login request payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Plaintext password; transported over TLS only.
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
}

/// Admin console API surface.
pub struct AdminApi {
    client: Arc<ApiClient>,
}

impl AdminApi {
    /// Wrap an existing pipeline client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // Authentication ------------------------------------------------------

    /// Authenticate and obtain a bearer token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiFailure> {
        let body = serde_json::to_value(request)
            .map_err(|err| ApiFailure::invalid_payload(format!("unserializable login: {err}")))?;

        self.client.send_as(RequestEnvelope::post("/api/auth/login").json_body(body)).await
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::post("/api/user/logout")).await
    }

    /// Fetch the profile associated with a token.
    pub async fn user_info(&self, token: &str) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::get("/api/user/info").query("token", token)).await
    }

    // User management ------------------------------------------------------

    /// List all users.
    pub async fn list_users(&self) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::get("/api/users")).await
    }

    /// Create a user.
    pub async fn create_user(&self, user: Value) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::post("/api/users").json_body(user)).await
    }

    /// Update an existing user.
    pub async fn update_user(&self, user_id: u64, user: Value) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::put(format!("/api/users/{user_id}")).json_body(user)).await
    }

    /// Delete a user.
    pub async fn delete_user(&self, user_id: u64) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::delete(format!("/api/users/{user_id}"))).await
    }

    // Department management ------------------------------------------------

    /// List the users of a department's subtree.
    pub async fn sub_department_users(&self, department_id: u64) -> Result<Value, ApiFailure> {
        self.client
            .send(RequestEnvelope::get(format!("/api/departments/{department_id}/sub-users")))
            .await
    }

    /// List a department's direct sub-departments.
    pub async fn list_sub_departments(&self, department_id: u64) -> Result<Value, ApiFailure> {
        self.client
            .send(RequestEnvelope::get(format!(
                "/api/departments/{department_id}/sub-departments"
            )))
            .await
    }

    /// Create a department.
    pub async fn create_department(&self, department: Value) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::post("/api/departments").json_body(department)).await
    }

    /// Update an existing department.
    pub async fn update_department(
        &self,
        department_id: u64,
        department: Value,
    ) -> Result<Value, ApiFailure> {
        self.client
            .send(
                RequestEnvelope::put(format!("/api/departments/{department_id}"))
                    .json_body(department),
            )
            .await
    }

    /// Delete a department.
    pub async fn delete_department(&self, department_id: u64) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::delete(format!("/api/departments/{department_id}"))).await
    }

    // Role management ------------------------------------------------------

    /// List all roles.
    pub async fn list_roles(&self) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::get("/api/roles")).await
    }

    /// Create a role.
    pub async fn create_role(&self, role: Value) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::post("/api/roles").json_body(role)).await
    }

    /// Update an existing role.
    pub async fn update_role(&self, role_id: u64, role: Value) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::put(format!("/api/roles/{role_id}")).json_body(role)).await
    }

    /// Delete a role.
    pub async fn delete_role(&self, role_id: u64) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::delete(format!("/api/roles/{role_id}"))).await
    }

    /// List the permissions assignable to roles.
    pub async fn list_permissions(&self) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::get("/api/roles/permissions")).await
    }

    // Important items --------------------------------------------------------

    /// List the company-level important items.
    pub async fn list_items(&self) -> Result<Value, ApiFailure> {
        // The console only ever shows the company-scoped list.
        self.client.send(RequestEnvelope::get("/api/items").query("isCompany", "1")).await
    }

    /// Create an important item.
    pub async fn create_item(&self, item: Value) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::post("/api/items").json_body(item)).await
    }

    /// Update an existing important item.
    pub async fn update_item(&self, item_id: u64, item: Value) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::put(format!("/api/items/{item_id}")).json_body(item)).await
    }

    /// Delete an important item.
    pub async fn delete_item(&self, item_id: u64) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::delete(format!("/api/items/{item_id}"))).await
    }

    /// Reorder the important items.
    pub async fn adjust_item_order(&self, display_orders: Value) -> Result<Value, ApiFailure> {
        self.client
            .send(
                RequestEnvelope::patch("/api/items")
                    .json_body(serde_json::json!({ "displayOrders": display_orders })),
            )
            .await
    }

    // Dashboard -------------------------------------------------------------

    /// Aggregate dashboard statistics.
    pub async fn dashboard_stats(&self) -> Result<Value, ApiFailure> {
        self.stats("").await
    }

    /// User statistics.
    pub async fn user_stats(&self) -> Result<Value, ApiFailure> {
        self.stats("/users").await
    }

    /// Department statistics.
    pub async fn department_stats(&self) -> Result<Value, ApiFailure> {
        self.stats("/departments").await
    }

    /// Role statistics.
    pub async fn role_stats(&self) -> Result<Value, ApiFailure> {
        self.stats("/roles").await
    }

    /// Important-item statistics.
    pub async fn item_stats(&self) -> Result<Value, ApiFailure> {
        self.stats("/items").await
    }

    async fn stats(&self, section: &str) -> Result<Value, ApiFailure> {
        self.client.send(RequestEnvelope::get(format!("/api/dashboard/stats{section}"))).await
    }
}
