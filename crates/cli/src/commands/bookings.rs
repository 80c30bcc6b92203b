//! Booking commands.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use planora_client::ApiClient;
use planora_client::api::params::{BookingFilters, PageParams};
use planora_core::{AgentId, BookingId, BookingStatus, ClientId, LocationId};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum BookingAction {
    /// Fetch a single booking by ID
    Get {
        /// Booking ID
        id: String,
    },
    /// List bookings
    List {
        /// Filter by status (`confirmed`, `pending`, `completed`, `cancelled`)
        #[arg(long)]
        status: Option<String>,

        /// Filter by agent
        #[arg(long)]
        agent: Option<String>,

        /// Filter by location
        #[arg(long)]
        location: Option<String>,

        /// Filter by client
        #[arg(long)]
        client: Option<String>,

        /// Only bookings starting at or after this instant (RFC 3339)
        #[arg(long)]
        from: Option<DateTime<Utc>>,

        /// Only bookings starting before this instant (RFC 3339)
        #[arg(long)]
        to: Option<DateTime<Utc>>,

        /// 1-based page index
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        per_page: Option<u32>,
    },
}

pub async fn run(api: &ApiClient, action: BookingAction) -> Result<(), CommandError> {
    match action {
        BookingAction::Get { id } => {
            let booking = api
                .get_booking(&BookingId::new(&id))
                .await?
                .ok_or(CommandError::NotFound(id))?;
            print_json(&booking)
        }
        BookingAction::List {
            status,
            agent,
            location,
            client,
            from,
            to,
            page,
            per_page,
        } => {
            let status = status
                .map(|raw| {
                    BookingStatus::from_str_param(&raw).ok_or(CommandError::InvalidArgument(raw))
                })
                .transpose()?;

            let filters = BookingFilters {
                status,
                agent_id: agent.map(AgentId::new),
                location_id: location.map(LocationId::new),
                client_id: client.map(ClientId::new),
                from,
                to,
            };
            let page = api
                .list_bookings(&filters, PageParams { page, per_page })
                .await?;

            if let Some(total) = page.total {
                tracing::info!(total, fetched = page.items.len(), "booking list");
            }
            print_json(&page.items)
        }
    }
}
