//! Planora client data layer.
//!
//! # Architecture
//!
//! This crate is the layer between a Planora dashboard (or tool) and the
//! Planora backend. The backend is the source of truth; everything held
//! here is a transient copy, overwritten wholesale on each fetch or
//! mutation.
//!
//! Three pieces compose the layer:
//!
//! - [`api::ApiClient`] - typed remote accessors per entity, over a single
//!   shared `reqwest` client. Response shapes are normalized once, at the
//!   envelope boundary; nothing above it guesses at payload structure.
//! - [`fetch::FetchLoader`] - keyed loaders exposing
//!   `{ data, loading, error }` snapshots for detail and list views, with
//!   request-generation tokens so overlapping loads resolve to the newest
//!   request. Ready-made loaders for each entity live in [`loaders`].
//! - [`store::EntityStore`] - process-wide entity collection stores with a
//!   single dispatch path, instantiated per entity kind by
//!   [`store::registry::StoreRegistry`].
//!
//! # Example
//!
//! ```rust,ignore
//! use planora_client::{api::ApiClient, config::BackendConfig, loaders};
//! use planora_core::UserId;
//!
//! let config = BackendConfig::from_env()?;
//! let api = ApiClient::new(&config);
//!
//! let loader = loaders::user(&api);
//! loader.set_key(Some(UserId::new("u-42"))).await;
//!
//! let state = loader.state();
//! if let Some(message) = &state.error {
//!     eprintln!("{message}");
//! }
//! ```
//!
//! There is no offline caching, no optimistic-update reconciliation, no
//! request de-duplication, and no retry logic here: loads are best-effort
//! "fetch and replace", and failures stay confined to the loader or store
//! slice they happened in.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod loaders;
pub mod store;

pub use api::{ApiClient, Page};
pub use config::{BackendConfig, ConfigError};
pub use error::ApiError;
pub use fetch::{FetchLoader, FetchState};
pub use store::registry::StoreRegistry;
pub use store::{EntityStore, StoreAction, StoreState};
