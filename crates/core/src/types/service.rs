//! Service and category records.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

use super::id::{CategoryId, ServiceId};
use super::price::Price;
use super::refs::AgentRef;

/// A service category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A bookable service mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    /// Slot length in minutes.
    pub duration_minutes: u32,
    pub price: Option<Price>,
    /// Maximum simultaneous attendees; 1 for individual appointments.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    pub category: Option<Category>,
    /// Calendar display color, as a CSS hex string.
    pub color: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub agents: Vec<AgentRef>,
}

const fn default_capacity() -> u32 {
    1
}

const fn default_active() -> bool {
    true
}

/// Partial update for a [`Service`]. Only provided fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentRef>>,
}

impl Entity for Service {
    type Id = ServiceId;
    type Patch = ServicePatch;

    fn id(&self) -> &ServiceId {
        &self.id
    }

    fn apply_patch(&mut self, patch: ServicePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            self.duration_minutes = duration_minutes;
        }
        if let Some(price) = patch.price {
            self.price = Some(price);
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(agents) = patch.agents {
            self.agents = agents;
        }
    }
}
