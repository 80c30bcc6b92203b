//! Snapshot reference types.
//!
//! Relationships between entities are expressed as embedded copies of the
//! referenced entity's id and display fields, taken at fetch time. They are
//! denormalized on the backend and are **not** kept in sync afterwards: if
//! the referenced entity changes, the snapshot goes stale until the owning
//! record is fetched again.

use serde::{Deserialize, Serialize};

use super::id::{AgentId, ClientId, LocationId, ServiceId};

/// Snapshot of an agent assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRef {
    pub id: AgentId,
    /// Display name at the time the snapshot was taken.
    pub name: String,
}

/// Snapshot of a service assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub id: ServiceId,
    pub name: String,
}

/// Snapshot of a location assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: LocationId,
    pub name: String,
}

/// Snapshot of the client who placed a booking.
///
/// Carries contact fields in addition to the display name so a booking row
/// can be rendered without a second fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: ClientId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
