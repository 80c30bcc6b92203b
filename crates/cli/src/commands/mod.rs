//! CLI command implementations, one module per entity kind.

pub mod agents;
pub mod bookings;
pub mod locations;
pub mod services;
pub mod users;

use serde::Serialize;

/// Errors that can occur while running a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Backend call failed.
    #[error(transparent)]
    Api(#[from] planora_client::ApiError),

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An argument did not parse.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let rendered = serde_json::to_string_pretty(value)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{rendered}");
    }

    Ok(())
}
