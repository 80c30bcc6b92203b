//! Location commands.

use clap::Subcommand;
use planora_client::ApiClient;
use planora_client::api::params::{LocationFilters, PageParams};
use planora_core::LocationId;

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum LocationAction {
    /// Fetch a single location by ID
    Get {
        /// Location ID
        id: String,
    },
    /// List locations
    List {
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
}

pub async fn run(api: &ApiClient, action: LocationAction) -> Result<(), CommandError> {
    match action {
        LocationAction::Get { id } => {
            let location = api
                .get_location(&LocationId::new(&id))
                .await?
                .ok_or(CommandError::NotFound(id))?;
            print_json(&location)
        }
        LocationAction::List {
            active,
            search,
            page,
            per_page,
        } => {
            let filters = LocationFilters { active, search };
            let page = api
                .list_locations(&filters, PageParams { page, per_page })
                .await?;

            if let Some(total) = page.total {
                tracing::info!(total, fetched = page.items.len(), "location list");
            }
            print_json(&page.items)
        }
    }
}
