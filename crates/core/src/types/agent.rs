//! Agent records.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

use super::hours::WeekHours;
use super::id::AgentId;
use super::refs::{LocationRef, ServiceRef};
use super::status::AgentStatus;

/// A bookable agent mirrored from the backend.
///
/// Assigned locations and services are snapshot references; they are not
/// revalidated against the location/service stores after fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub first_name: String,
    pub last_name: String,
    /// Public-facing name shown in the booking flow, when different from
    /// the legal name parts.
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Weekly availability.
    #[serde(default)]
    pub working_hours: WeekHours,
    /// Short marketing tags shown on the agent card.
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub status: AgentStatus,
    #[serde(default)]
    pub on_leave: bool,
    #[serde(default)]
    pub locations: Vec<LocationRef>,
    #[serde(default)]
    pub services: Vec<ServiceRef>,
}

impl Agent {
    /// Name to show in lists: the display name when set, the name parts
    /// otherwise.
    #[must_use]
    pub fn list_name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.first_name, self.last_name))
    }

    /// Whether the agent can currently take bookings.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        matches!(self.status, AgentStatus::Active) && !self.on_leave
    }
}

/// Partial update for an [`Agent`]. Only provided fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WeekHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AgentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_leave: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LocationRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceRef>>,
}

impl Entity for Agent {
    type Id = AgentId;
    type Patch = AgentPatch;

    fn id(&self) -> &AgentId {
        &self.id
    }

    fn apply_patch(&mut self, patch: AgentPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(display_name) = patch.display_name {
            self.display_name = Some(display_name);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(working_hours) = patch.working_hours {
            self.working_hours = working_hours;
        }
        if let Some(highlights) = patch.highlights {
            self.highlights = highlights;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(on_leave) = patch.on_leave {
            self.on_leave = on_leave;
        }
        if let Some(locations) = patch.locations {
            self.locations = locations;
        }
        if let Some(services) = patch.services {
            self.services = services;
        }
    }
}
