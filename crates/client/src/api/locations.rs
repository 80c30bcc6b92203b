//! Location management operations.

use planora_core::{Address, Coordinates, Location, LocationId, LocationPatch, WeekHours};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::envelope::{self, Page};
use super::params::{LocationFilters, PageParams};
use super::ApiClient;
use crate::error::ApiError;

/// Input for creating a location.
#[derive(Debug, Clone, Serialize)]
pub struct NewLocation {
    pub name: String,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub opening_hours: WeekHours,
}

impl ApiClient {
    /// Get a location by ID.
    ///
    /// Returns `Ok(None)` when the location does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(location_id = %id))]
    pub async fn get_location(&self, id: &LocationId) -> Result<Option<Location>, ApiError> {
        let Some(value) = self.get_optional_value(&format!("locations/{id}")).await? else {
            return Ok(None);
        };

        envelope::unwrap_entity(value, "location")
    }

    /// Get a paginated, filtered list of locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self))]
    pub async fn list_locations(
        &self,
        filters: &LocationFilters,
        page: PageParams,
    ) -> Result<Page<Location>, ApiError> {
        let mut query = filters.to_query();
        page.push_query(&mut query);

        let value = self.get_value("locations", &query).await?;
        envelope::parse_list(value, "locations")
    }

    /// Create a new location.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no location is returned.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_location(&self, input: &NewLocation) -> Result<Location, ApiError> {
        let value = self.send_value(Method::POST, "locations", input).await?;
        envelope::unwrap_entity(value, "location")?.ok_or(ApiError::MissingEntity("location"))
    }

    /// Update an existing location. Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no location is returned.
    #[instrument(skip(self, patch), fields(location_id = %id))]
    pub async fn update_location(
        &self,
        id: &LocationId,
        patch: &LocationPatch,
    ) -> Result<Location, ApiError> {
        let value = self
            .send_value(Method::PATCH, &format!("locations/{id}"), patch)
            .await?;
        envelope::unwrap_entity(value, "location")?.ok_or(ApiError::MissingEntity("location"))
    }

    /// Delete a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(location_id = %id))]
    pub async fn delete_location(&self, id: &LocationId) -> Result<(), ApiError> {
        self.delete(&format!("locations/{id}")).await
    }
}
