//! Service and category management operations.

use futures::future::try_join_all;
use planora_core::{Category, CategoryId, Price, Service, ServiceId, ServicePatch};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::envelope::{self, Page};
use super::params::{PageParams, ServiceFilters};
use super::ApiClient;
use crate::error::ApiError;

/// Input for creating a service.
#[derive(Debug, Clone, Serialize)]
pub struct NewService {
    pub name: String,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ApiClient {
    /// Get a service by ID.
    ///
    /// Returns `Ok(None)` when the service does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(service_id = %id))]
    pub async fn get_service(&self, id: &ServiceId) -> Result<Option<Service>, ApiError> {
        let Some(value) = self.get_optional_value(&format!("services/{id}")).await? else {
            return Ok(None);
        };

        envelope::unwrap_entity(value, "service")
    }

    /// Fetch several services by ID, one request per ID, in parallel.
    ///
    /// Results come back in the order of the input IDs; IDs the backend does
    /// not know are skipped. A single failing request fails the whole batch
    /// (no partial results are returned).
    ///
    /// # Errors
    ///
    /// Returns the first error encountered by any of the parallel requests.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn get_services_by_ids(&self, ids: &[ServiceId]) -> Result<Vec<Service>, ApiError> {
        let fetches = ids.iter().map(|id| self.get_service(id));
        let services = try_join_all(fetches).await?;

        Ok(services.into_iter().flatten().collect())
    }

    /// Get a paginated, filtered list of services.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self))]
    pub async fn list_services(
        &self,
        filters: &ServiceFilters,
        page: PageParams,
    ) -> Result<Page<Service>, ApiError> {
        let mut query = filters.to_query();
        page.push_query(&mut query);

        let value = self.get_value("services", &query).await?;
        envelope::parse_list(value, "services")
    }

    /// Get all service categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let value = self.get_value("categories", &[]).await?;
        envelope::parse_list(value, "categories").map(|page| page.items)
    }

    /// Create a new service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no service is returned.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_service(&self, input: &NewService) -> Result<Service, ApiError> {
        let value = self.send_value(Method::POST, "services", input).await?;
        envelope::unwrap_entity(value, "service")?.ok_or(ApiError::MissingEntity("service"))
    }

    /// Update an existing service. Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no service is returned.
    #[instrument(skip(self, patch), fields(service_id = %id))]
    pub async fn update_service(
        &self,
        id: &ServiceId,
        patch: &ServicePatch,
    ) -> Result<Service, ApiError> {
        let value = self
            .send_value(Method::PATCH, &format!("services/{id}"), patch)
            .await?;
        envelope::unwrap_entity(value, "service")?.ok_or(ApiError::MissingEntity("service"))
    }

    /// Delete a service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(service_id = %id))]
    pub async fn delete_service(&self, id: &ServiceId) -> Result<(), ApiError> {
        self.delete(&format!("services/{id}")).await
    }
}
