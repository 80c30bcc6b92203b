//! Ready-made loaders for every entity kind.
//!
//! Each function wires a [`FetchLoader`] to one remote accessor and to the
//! fixed localized message shown when that accessor fails. Detail loaders
//! are keyed by the entity ID; list loaders are keyed by a
//! `(filters, page)` pair so changing either re-runs the load.

use futures::FutureExt;
use planora_core::{
    Agent, AgentId, Booking, BookingId, Category, Location, LocationId, Service, ServiceId, User,
    UserId,
};

use crate::api::params::{
    AgentFilters, BookingFilters, LocationFilters, PageParams, ServiceFilters, UserFilters,
};
use crate::api::{ApiClient, Page};
use crate::fetch::FetchLoader;

/// Localized messages held by failed loaders.
pub mod messages {
    pub const USER: &str = "Erreur lors du chargement de l'utilisateur";
    pub const USERS: &str = "Erreur lors du chargement des utilisateurs";
    pub const AGENT: &str = "Erreur lors du chargement de l'agent";
    pub const AGENTS: &str = "Erreur lors du chargement des agents";
    pub const BOOKING: &str = "Erreur lors du chargement de la réservation";
    pub const BOOKINGS: &str = "Erreur lors du chargement des réservations";
    pub const LOCATION: &str = "Erreur lors du chargement de l'emplacement";
    pub const LOCATIONS: &str = "Erreur lors du chargement des emplacements";
    pub const SERVICE: &str = "Erreur lors du chargement du service";
    pub const SERVICES: &str = "Erreur lors du chargement des services";
    pub const CATEGORIES: &str = "Erreur lors du chargement des catégories";
}

/// Loader for a single user.
#[must_use]
pub fn user(api: &ApiClient) -> FetchLoader<UserId, Option<User>> {
    let api = api.clone();
    FetchLoader::with_absent_when(
        messages::USER,
        UserId::is_empty,
        move |id: UserId| {
            let api = api.clone();
            async move { api.get_user(&id).await }.boxed()
        },
    )
}

/// Loader for a filtered user list.
#[must_use]
pub fn users(api: &ApiClient) -> FetchLoader<(UserFilters, PageParams), Page<User>> {
    let api = api.clone();
    FetchLoader::new(messages::USERS, move |(filters, page)| {
        let api = api.clone();
        async move { api.list_users(&filters, page).await }.boxed()
    })
}

/// Loader for a single agent.
#[must_use]
pub fn agent(api: &ApiClient) -> FetchLoader<AgentId, Option<Agent>> {
    let api = api.clone();
    FetchLoader::with_absent_when(
        messages::AGENT,
        AgentId::is_empty,
        move |id: AgentId| {
            let api = api.clone();
            async move { api.get_agent(&id).await }.boxed()
        },
    )
}

/// Loader for a filtered agent list.
#[must_use]
pub fn agents(api: &ApiClient) -> FetchLoader<(AgentFilters, PageParams), Page<Agent>> {
    let api = api.clone();
    FetchLoader::new(messages::AGENTS, move |(filters, page)| {
        let api = api.clone();
        async move { api.list_agents(&filters, page).await }.boxed()
    })
}

/// Loader for a single booking.
#[must_use]
pub fn booking(api: &ApiClient) -> FetchLoader<BookingId, Option<Booking>> {
    let api = api.clone();
    FetchLoader::with_absent_when(
        messages::BOOKING,
        BookingId::is_empty,
        move |id: BookingId| {
            let api = api.clone();
            async move { api.get_booking(&id).await }.boxed()
        },
    )
}

/// Loader for a filtered booking list.
#[must_use]
pub fn bookings(api: &ApiClient) -> FetchLoader<(BookingFilters, PageParams), Page<Booking>> {
    let api = api.clone();
    FetchLoader::new(messages::BOOKINGS, move |(filters, page)| {
        let api = api.clone();
        async move { api.list_bookings(&filters, page).await }.boxed()
    })
}

/// Loader for a single location.
#[must_use]
pub fn location(api: &ApiClient) -> FetchLoader<LocationId, Option<Location>> {
    let api = api.clone();
    FetchLoader::with_absent_when(
        messages::LOCATION,
        LocationId::is_empty,
        move |id: LocationId| {
            let api = api.clone();
            async move { api.get_location(&id).await }.boxed()
        },
    )
}

/// Loader for a filtered location list.
#[must_use]
pub fn locations(api: &ApiClient) -> FetchLoader<(LocationFilters, PageParams), Page<Location>> {
    let api = api.clone();
    FetchLoader::new(messages::LOCATIONS, move |(filters, page)| {
        let api = api.clone();
        async move { api.list_locations(&filters, page).await }.boxed()
    })
}

/// Loader for a single service.
#[must_use]
pub fn service(api: &ApiClient) -> FetchLoader<ServiceId, Option<Service>> {
    let api = api.clone();
    FetchLoader::with_absent_when(
        messages::SERVICE,
        ServiceId::is_empty,
        move |id: ServiceId| {
            let api = api.clone();
            async move { api.get_service(&id).await }.boxed()
        },
    )
}

/// Loader for a filtered service list.
#[must_use]
pub fn services(api: &ApiClient) -> FetchLoader<(ServiceFilters, PageParams), Page<Service>> {
    let api = api.clone();
    FetchLoader::new(messages::SERVICES, move |(filters, page)| {
        let api = api.clone();
        async move { api.list_services(&filters, page).await }.boxed()
    })
}

/// Bulk loader for a set of services, keyed by the ID list.
///
/// Fetches every ID individually and in parallel; a single failing ID fails
/// the whole batch, so the loader reports the list-level localized error
/// and empty data in that case.
#[must_use]
pub fn services_by_ids(api: &ApiClient) -> FetchLoader<Vec<ServiceId>, Vec<Service>> {
    let api = api.clone();
    FetchLoader::with_absent_when(
        messages::SERVICES,
        |ids: &Vec<ServiceId>| ids.is_empty(),
        move |ids: Vec<ServiceId>| {
            let api = api.clone();
            async move { api.get_services_by_ids(&ids).await }.boxed()
        },
    )
}

/// Loader for the category list, keyed by `()`.
///
/// Call `set_key(Some(()))` once to trigger the load and `refetch()` to
/// reload.
#[must_use]
pub fn categories(api: &ApiClient) -> FetchLoader<(), Vec<Category>> {
    let api = api.clone();
    FetchLoader::new(messages::CATEGORIES, move |()| {
        let api = api.clone();
        async move { api.list_categories().await }.boxed()
    })
}
