//! Service and category commands.

use clap::Subcommand;
use planora_client::ApiClient;
use planora_client::api::params::{PageParams, ServiceFilters};
use planora_core::{AgentId, CategoryId, ServiceId};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum ServiceAction {
    /// Fetch a single service by ID
    Get {
        /// Service ID
        id: String,
    },
    /// Fetch several services by ID in one parallel batch
    GetMany {
        /// Service IDs
        ids: Vec<String>,
    },
    /// List services
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Filter by assigned agent
        #[arg(long)]
        agent: Option<String>,

        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,

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
    /// List all service categories
    Categories,
}

pub async fn run(api: &ApiClient, action: ServiceAction) -> Result<(), CommandError> {
    match action {
        ServiceAction::Get { id } => {
            let service = api
                .get_service(&ServiceId::new(&id))
                .await?
                .ok_or(CommandError::NotFound(id))?;
            print_json(&service)
        }
        ServiceAction::GetMany { ids } => {
            let ids: Vec<ServiceId> = ids.into_iter().map(ServiceId::new).collect();
            let services = api.get_services_by_ids(&ids).await?;
            print_json(&services)
        }
        ServiceAction::List {
            category,
            agent,
            active,
            search,
            page,
            per_page,
        } => {
            let filters = ServiceFilters {
                category_id: category.map(CategoryId::new),
                agent_id: agent.map(AgentId::new),
                active,
                search,
            };
            let page = api
                .list_services(&filters, PageParams { page, per_page })
                .await?;

            if let Some(total) = page.total {
                tracing::info!(total, fetched = page.items.len(), "service list");
            }
            print_json(&page.items)
        }
        ServiceAction::Categories => {
            let categories = api.list_categories().await?;
            print_json(&categories)
        }
    }
}
