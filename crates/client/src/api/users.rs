//! User management operations.

use planora_core::{User, UserId, UserPatch, UserRole};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::envelope::{self, Page};
use super::params::{PageParams, UserFilters};
use super::ApiClient;
use crate::error::ApiError;

/// Input for creating a user. The backend assigns the identifier.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
}

impl ApiClient {
    /// Get a user by ID.
    ///
    /// Returns `Ok(None)` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: &UserId) -> Result<Option<User>, ApiError> {
        let Some(value) = self.get_optional_value(&format!("users/{id}")).await? else {
            return Ok(None);
        };

        envelope::unwrap_entity(value, "user")
    }

    /// Get a paginated, filtered list of users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self))]
    pub async fn list_users(
        &self,
        filters: &UserFilters,
        page: PageParams,
    ) -> Result<Page<User>, ApiError> {
        let mut query = filters.to_query();
        page.push_query(&mut query);

        let value = self.get_value("users", &query).await?;
        envelope::parse_list(value, "users")
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no user is returned.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: &NewUser) -> Result<User, ApiError> {
        let value = self.send_value(Method::POST, "users", input).await?;
        envelope::unwrap_entity(value, "user")?.ok_or(ApiError::MissingEntity("user"))
    }

    /// Update an existing user. Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no user is returned.
    #[instrument(skip(self, patch), fields(user_id = %id))]
    pub async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError> {
        let value = self
            .send_value(Method::PATCH, &format!("users/{id}"), patch)
            .await?;
        envelope::unwrap_entity(value, "user")?.ok_or(ApiError::MissingEntity("user"))
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        self.delete(&format!("users/{id}")).await
    }
}
