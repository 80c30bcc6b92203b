//! Location records.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

use super::hours::WeekHours;
use super::id::LocationId;
use super::refs::AgentRef;

/// Geographic coordinates of a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Postal address of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A bookable location mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub address: Address,
    pub coordinates: Option<Coordinates>,
    /// Opening hours per weekday.
    #[serde(default)]
    pub opening_hours: WeekHours,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub agents: Vec<AgentRef>,
}

const fn default_active() -> bool {
    true
}

/// Partial update for a [`Location`]. Only provided fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<WeekHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentRef>>,
}

impl Entity for Location {
    type Id = LocationId;
    type Patch = LocationPatch;

    fn id(&self) -> &LocationId {
        &self.id
    }

    fn apply_patch(&mut self, patch: LocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(coordinates) = patch.coordinates {
            self.coordinates = Some(coordinates);
        }
        if let Some(opening_hours) = patch.opening_hours {
            self.opening_hours = opening_hours;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(agents) = patch.agents {
            self.agents = agents;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_location() {
        let json = r#"{"id":"l-1","name":"Downtown"}"#;
        let location: Location = serde_json::from_str(json).expect("valid location json");
        assert!(location.active);
        assert!(location.agents.is_empty());
        assert_eq!(location.address, Address::default());
        assert!(location.coordinates.is_none());
    }

    #[test]
    fn test_patch_updates_address() {
        let mut location: Location =
            serde_json::from_str(r#"{"id":"l-1","name":"Downtown"}"#).expect("valid json");

        location.apply_patch(LocationPatch {
            address: Some(Address {
                street: Some("12 rue de la Paix".to_string()),
                city: Some("Lyon".to_string()),
                postal_code: Some("69002".to_string()),
                country: Some("FR".to_string()),
            }),
            ..LocationPatch::default()
        });

        assert_eq!(location.address.city.as_deref(), Some("Lyon"));
        assert_eq!(location.name, "Downtown");
    }
}
