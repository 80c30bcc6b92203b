//! Booking management operations.

use chrono::{DateTime, Utc};
use planora_core::{
    AgentId, Booking, BookingId, BookingPatch, BookingStatus, ClientId, LocationId, Price,
    ServiceId,
};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::envelope::{self, Page};
use super::params::{BookingFilters, PageParams};
use super::ApiClient;
use crate::error::ApiError;

/// Input for creating a booking.
///
/// References are sent as plain identifiers; the backend resolves them and
/// embeds the display snapshots in the booking it returns.
#[derive(Debug, Clone, Serialize)]
pub struct NewBooking {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub service_id: ServiceId,
    pub agent_id: AgentId,
    pub client_id: ClientId,
    pub location_id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Price>,
}

impl ApiClient {
    /// Get a booking by ID.
    ///
    /// Returns `Ok(None)` when the booking does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn get_booking(&self, id: &BookingId) -> Result<Option<Booking>, ApiError> {
        let Some(value) = self.get_optional_value(&format!("bookings/{id}")).await? else {
            return Ok(None);
        };

        envelope::unwrap_entity(value, "booking")
    }

    /// Get a paginated, filtered list of bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self))]
    pub async fn list_bookings(
        &self,
        filters: &BookingFilters,
        page: PageParams,
    ) -> Result<Page<Booking>, ApiError> {
        let mut query = filters.to_query();
        page.push_query(&mut query);

        let value = self.get_value("bookings", &query).await?;
        envelope::parse_list(value, "bookings")
    }

    /// Create a new booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no booking is returned.
    #[instrument(skip(self, input), fields(agent_id = %input.agent_id, service_id = %input.service_id))]
    pub async fn create_booking(&self, input: &NewBooking) -> Result<Booking, ApiError> {
        let value = self.send_value(Method::POST, "bookings", input).await?;
        envelope::unwrap_entity(value, "booking")?.ok_or(ApiError::MissingEntity("booking"))
    }

    /// Update an existing booking. Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no booking is returned.
    #[instrument(skip(self, patch), fields(booking_id = %id))]
    pub async fn update_booking(
        &self,
        id: &BookingId,
        patch: &BookingPatch,
    ) -> Result<Booking, ApiError> {
        let value = self
            .send_value(Method::PATCH, &format!("bookings/{id}"), patch)
            .await?;
        envelope::unwrap_entity(value, "booking")?.ok_or(ApiError::MissingEntity("booking"))
    }

    /// Cancel a booking, keeping its record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no booking is returned.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn cancel_booking(&self, id: &BookingId) -> Result<Booking, ApiError> {
        let patch = BookingPatch {
            status: Some(BookingStatus::Cancelled),
            ..BookingPatch::default()
        };
        self.update_booking(id, &patch).await
    }

    /// Delete a booking record entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn delete_booking(&self, id: &BookingId) -> Result<(), ApiError> {
        self.delete(&format!("bookings/{id}")).await
    }
}
