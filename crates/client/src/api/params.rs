//! Filter and pagination parameters for list accessors.
//!
//! Each entity kind has its own filter object. `Default` means unfiltered;
//! the stores keep the active filter object verbatim, and the accessors
//! encode it into query-string pairs.

use chrono::{DateTime, Utc};
use planora_core::{
    AgentId, AgentStatus, BookingStatus, CategoryId, ClientId, LocationId, ServiceId, UserRole,
};

/// Pagination window for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageParams {
    /// 1-based page index.
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl PageParams {
    pub(crate) fn push_query(&self, query: &mut Vec<(String, String)>) {
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
    }
}

/// Filters for the user list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilters {
    pub role: Option<UserRole>,
    pub active: Option<bool>,
    /// Free-text search over name and email.
    pub search: Option<String>,
}

impl UserFilters {
    /// Whether no filter is set (the unfiltered default).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(role) = self.role {
            query.push(("role".to_string(), role.to_string()));
        }
        if let Some(active) = self.active {
            query.push(("active".to_string(), active.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        query
    }
}

/// Filters for the agent list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AgentFilters {
    pub status: Option<AgentStatus>,
    pub on_leave: Option<bool>,
    pub location_id: Option<LocationId>,
    pub service_id: Option<ServiceId>,
    pub search: Option<String>,
}

impl AgentFilters {
    /// Whether no filter is set (the unfiltered default).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(on_leave) = self.on_leave {
            query.push(("on_leave".to_string(), on_leave.to_string()));
        }
        if let Some(location_id) = &self.location_id {
            query.push(("location_id".to_string(), location_id.to_string()));
        }
        if let Some(service_id) = &self.service_id {
            query.push(("service_id".to_string(), service_id.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        query
    }
}

/// Filters for the booking list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingFilters {
    pub status: Option<BookingStatus>,
    pub agent_id: Option<AgentId>,
    pub location_id: Option<LocationId>,
    pub client_id: Option<ClientId>,
    /// Only bookings starting at or after this instant.
    pub from: Option<DateTime<Utc>>,
    /// Only bookings starting before this instant.
    pub to: Option<DateTime<Utc>>,
}

impl BookingFilters {
    /// Whether no filter is set (the unfiltered default).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(agent_id) = &self.agent_id {
            query.push(("agent_id".to_string(), agent_id.to_string()));
        }
        if let Some(location_id) = &self.location_id {
            query.push(("location_id".to_string(), location_id.to_string()));
        }
        if let Some(client_id) = &self.client_id {
            query.push(("client_id".to_string(), client_id.to_string()));
        }
        if let Some(from) = self.from {
            query.push(("from".to_string(), from.to_rfc3339()));
        }
        if let Some(to) = self.to {
            query.push(("to".to_string(), to.to_rfc3339()));
        }
        query
    }
}

/// Filters for the location list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationFilters {
    pub active: Option<bool>,
    pub search: Option<String>,
}

impl LocationFilters {
    /// Whether no filter is set (the unfiltered default).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(active) = self.active {
            query.push(("active".to_string(), active.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        query
    }
}

/// Filters for the service list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceFilters {
    pub category_id: Option<CategoryId>,
    pub agent_id: Option<AgentId>,
    pub active: Option<bool>,
    pub search: Option<String>,
}

impl ServiceFilters {
    /// Whether no filter is set (the unfiltered default).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(category_id) = &self.category_id {
            query.push(("category_id".to_string(), category_id.to_string()));
        }
        if let Some(agent_id) = &self.agent_id {
            query.push(("agent_id".to_string(), agent_id.to_string()));
        }
        if let Some(active) = self.active {
            query.push(("active".to_string(), active.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_are_empty() {
        assert!(UserFilters::default().is_empty());
        assert!(BookingFilters::default().is_empty());
        assert!(UserFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_user_filters_encoding() {
        let filters = UserFilters {
            role: Some(UserRole::Manager),
            active: Some(true),
            search: Some("ana".to_string()),
        };
        assert!(!filters.is_empty());
        assert_eq!(
            filters.to_query(),
            vec![
                ("role".to_string(), "manager".to_string()),
                ("active".to_string(), "true".to_string()),
                ("search".to_string(), "ana".to_string()),
            ]
        );
    }

    #[test]
    fn test_booking_filters_encode_rfc3339_range() {
        let from: DateTime<Utc> = "2025-03-01T00:00:00Z".parse().expect("valid datetime");
        let filters = BookingFilters {
            status: Some(BookingStatus::Confirmed),
            from: Some(from),
            ..BookingFilters::default()
        };

        let query = filters.to_query();
        assert!(query.contains(&("status".to_string(), "confirmed".to_string())));
        assert!(
            query
                .iter()
                .any(|(k, v)| k == "from" && v.starts_with("2025-03-01T00:00:00"))
        );
    }

    #[test]
    fn test_page_params_encoding() {
        let mut query = Vec::new();
        PageParams {
            page: Some(2),
            per_page: Some(25),
        }
        .push_query(&mut query);
        assert_eq!(
            query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "25".to_string()),
            ]
        );
    }
}
