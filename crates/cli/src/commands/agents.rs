//! Agent commands.

use clap::Subcommand;
use planora_client::ApiClient;
use planora_client::api::params::{AgentFilters, PageParams};
use planora_core::{AgentId, AgentStatus, LocationId, ServiceId};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum AgentAction {
    /// Fetch a single agent by ID
    Get {
        /// Agent ID
        id: String,
    },
    /// List agents
    List {
        /// Filter by status (`active`, `inactive`)
        #[arg(long)]
        status: Option<String>,

        /// Filter by on-leave flag
        #[arg(long)]
        on_leave: Option<bool>,

        /// Filter by assigned location
        #[arg(long)]
        location: Option<String>,

        /// Filter by assigned service
        #[arg(long)]
        service: Option<String>,

        /// Free-text search over names
        #[arg(long)]
        search: Option<String>,

        /// 1-based page index
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        per_page: Option<u32>,
    },
}

pub async fn run(api: &ApiClient, action: AgentAction) -> Result<(), CommandError> {
    match action {
        AgentAction::Get { id } => {
            let agent = api
                .get_agent(&AgentId::new(&id))
                .await?
                .ok_or(CommandError::NotFound(id))?;
            print_json(&agent)
        }
        AgentAction::List {
            status,
            on_leave,
            location,
            service,
            search,
            page,
            per_page,
        } => {
            let status = status
                .map(|raw| {
                    AgentStatus::from_str_param(&raw).ok_or(CommandError::InvalidArgument(raw))
                })
                .transpose()?;

            let filters = AgentFilters {
                status,
                on_leave,
                location_id: location.map(LocationId::new),
                service_id: service.map(ServiceId::new),
                search,
            };
            let page = api
                .list_agents(&filters, PageParams { page, per_page })
                .await?;

            if let Some(total) = page.total {
                tracing::info!(total, fetched = page.items.len(), "agent list");
            }
            print_json(&page.items)
        }
    }
}
