//! Booking records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

use super::id::BookingId;
use super::price::Price;
use super::refs::{AgentRef, ClientRef, LocationRef, ServiceRef};
use super::status::BookingStatus;

/// A booking mirrored from the backend.
///
/// The service, agent, client, and location fields are denormalized
/// snapshots taken when the booking was created or last updated, not live
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub amount: Option<Price>,
    pub service: ServiceRef,
    pub agent: AgentRef,
    pub client: ClientRef,
    pub location: LocationRef,
}

impl Booking {
    /// Duration of the booked slot.
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.ends_at - self.starts_at
    }
}

/// Partial update for a [`Booking`]. Only provided fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationRef>,
}

impl Entity for Booking {
    type Id = BookingId;
    type Patch = BookingPatch;

    fn id(&self) -> &BookingId {
        &self.id
    }

    fn apply_patch(&mut self, patch: BookingPatch) {
        if let Some(starts_at) = patch.starts_at {
            self.starts_at = starts_at;
        }
        if let Some(ends_at) = patch.ends_at {
            self.ends_at = ends_at;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(amount) = patch.amount {
            self.amount = Some(amount);
        }
        if let Some(service) = patch.service {
            self.service = service;
        }
        if let Some(agent) = patch.agent {
            self.agent = agent;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
    }
}
