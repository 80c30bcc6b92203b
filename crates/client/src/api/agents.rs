//! Agent management operations.

use planora_core::{Agent, AgentId, AgentPatch, AgentStatus, WeekHours};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::envelope::{self, Page};
use super::params::{AgentFilters, PageParams};
use super::ApiClient;
use crate::error::ApiError;

/// Input for creating an agent. The backend assigns the identifier;
/// location and service assignments are made with later updates.
#[derive(Debug, Clone, Serialize)]
pub struct NewAgent {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub working_hours: WeekHours,
    pub status: AgentStatus,
}

impl ApiClient {
    /// Get an agent by ID.
    ///
    /// Returns `Ok(None)` when the agent does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(agent_id = %id))]
    pub async fn get_agent(&self, id: &AgentId) -> Result<Option<Agent>, ApiError> {
        let Some(value) = self.get_optional_value(&format!("agents/{id}")).await? else {
            return Ok(None);
        };

        envelope::unwrap_entity(value, "agent")
    }

    /// Get a paginated, filtered list of agents.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self))]
    pub async fn list_agents(
        &self,
        filters: &AgentFilters,
        page: PageParams,
    ) -> Result<Page<Agent>, ApiError> {
        let mut query = filters.to_query();
        page.push_query(&mut query);

        let value = self.get_value("agents", &query).await?;
        envelope::parse_list(value, "agents")
    }

    /// Create a new agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no agent is returned.
    #[instrument(skip(self, input))]
    pub async fn create_agent(&self, input: &NewAgent) -> Result<Agent, ApiError> {
        let value = self.send_value(Method::POST, "agents", input).await?;
        envelope::unwrap_entity(value, "agent")?.ok_or(ApiError::MissingEntity("agent"))
    }

    /// Update an existing agent. Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or no agent is returned.
    #[instrument(skip(self, patch), fields(agent_id = %id))]
    pub async fn update_agent(&self, id: &AgentId, patch: &AgentPatch) -> Result<Agent, ApiError> {
        let value = self
            .send_value(Method::PATCH, &format!("agents/{id}"), patch)
            .await?;
        envelope::unwrap_entity(value, "agent")?.ok_or(ApiError::MissingEntity("agent"))
    }

    /// Delete an agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    #[instrument(skip(self), fields(agent_id = %id))]
    pub async fn delete_agent(&self, id: &AgentId) -> Result<(), ApiError> {
        self.delete(&format!("agents/{id}")).await
    }
}
