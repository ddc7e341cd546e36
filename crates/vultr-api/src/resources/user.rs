//! Account users.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// User with access to the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Whether API access is enabled.
    pub api_enabled: bool,
    /// Granted permissions.
    pub acls: Vec<String>,
}

/// Body of a user create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserCreate {
    /// E-mail address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Initial password.
    pub password: String,
    /// Whether API access is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_enabled: Option<bool>,
    /// Granted permissions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub acls: Vec<String>,
}

/// Body of a user update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    /// New e-mail address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Whether API access is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_enabled: Option<bool>,
    /// Replacement permission set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acls: Option<Vec<String>>,
}

impl<T: Transport> ApiClient<T> {
    /// List users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_users(&self, options: &ListOptions) -> Result<Page<User>, ApiError> {
        self.list("/users", "users", options).await
    }

    /// Get a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.fetch(&format!("/users/{}", segment(id)), "user").await
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_user(&self, request: &UserCreate) -> Result<User, ApiError> {
        self.submit(Method::Post, "/users", request, "user").await
    }

    /// Update a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_user(&self, id: &str, request: &UserUpdate) -> Result<(), ApiError> {
        self.submit_empty(Method::Patch, &format!("/users/{}", segment(id)), request)
            .await
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", segment(id))).await
    }
}
