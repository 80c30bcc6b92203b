//! The process-wide store registry.

use std::sync::Arc;

use planora_core::{Agent, Booking, Location, Service, User};

use super::EntityStore;
use crate::api::params::{
    AgentFilters, BookingFilters, LocationFilters, ServiceFilters, UserFilters,
};

/// One [`EntityStore`] per entity kind, shared across the application.
///
/// # Lifecycle
///
/// The registry is created once at application start and handed around by
/// cloning (all clones share the same stores). It lives for the whole
/// process; the only teardown is [`reset_all`](Self::reset_all), called on
/// explicit sign-out so the next session starts from empty state. Nothing
/// is persisted - store contents are transient copies of backend data.
#[derive(Clone, Default)]
pub struct StoreRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    users: EntityStore<User, UserFilters>,
    agents: EntityStore<Agent, AgentFilters>,
    bookings: EntityStore<Booking, BookingFilters>,
    locations: EntityStore<Location, LocationFilters>,
    services: EntityStore<Service, ServiceFilters>,
}

impl StoreRegistry {
    /// Create a registry with empty stores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The user store.
    #[must_use]
    pub fn users(&self) -> &EntityStore<User, UserFilters> {
        &self.inner.users
    }

    /// The agent store.
    #[must_use]
    pub fn agents(&self) -> &EntityStore<Agent, AgentFilters> {
        &self.inner.agents
    }

    /// The booking store.
    #[must_use]
    pub fn bookings(&self) -> &EntityStore<Booking, BookingFilters> {
        &self.inner.bookings
    }

    /// The location store.
    #[must_use]
    pub fn locations(&self) -> &EntityStore<Location, LocationFilters> {
        &self.inner.locations
    }

    /// The service store.
    #[must_use]
    pub fn services(&self) -> &EntityStore<Service, ServiceFilters> {
        &self.inner.services
    }

    /// Reset every store to its initial state (sign-out teardown).
    pub fn reset_all(&self) {
        self.inner.users.reset();
        self.inner.agents.reset();
        self.inner.bookings.reset();
        self.inner.locations.reset();
        self.inner.services.reset();
    }
}
