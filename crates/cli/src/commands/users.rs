//! User commands.

use clap::Subcommand;
use planora_client::ApiClient;
use planora_client::api::params::{PageParams, UserFilters};
use planora_core::{UserId, UserRole};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum UserAction {
    /// Fetch a single user by ID
    Get {
        /// User ID
        id: String,
    },
    /// List users
    List {
        /// Filter by role (`admin`, `manager`, `default`)
        #[arg(long)]
        role: Option<UserRole>,

        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,

        /// Free-text search over name and email
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

pub async fn run(api: &ApiClient, action: UserAction) -> Result<(), CommandError> {
    match action {
        UserAction::Get { id } => {
            let user = api
                .get_user(&UserId::new(&id))
                .await?
                .ok_or(CommandError::NotFound(id))?;
            print_json(&user)
        }
        UserAction::List {
            role,
            active,
            search,
            page,
            per_page,
        } => {
            let filters = UserFilters {
                role,
                active,
                search,
            };
            let page = api
                .list_users(&filters, PageParams { page, per_page })
                .await?;

            if let Some(total) = page.total {
                tracing::info!(total, fetched = page.items.len(), "user list");
            }
            print_json(&page.items)
        }
    }
}
