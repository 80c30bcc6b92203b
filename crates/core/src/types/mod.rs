//! Core types for Planora.
//!
//! Entity records are plain mirrors of backend documents: no invariants are
//! enforced client-side beyond optional-field presence, and every record is
//! overwritten wholesale on each fetch.

pub mod agent;
pub mod booking;
pub mod hours;
pub mod id;
pub mod location;
pub mod price;
pub mod refs;
pub mod service;
pub mod status;
pub mod user;

pub use agent::{Agent, AgentPatch};
pub use booking::{Booking, BookingPatch};
pub use hours::{DayHours, WeekHours};
pub use id::*;
pub use location::{Address, Coordinates, Location, LocationPatch};
pub use price::{CurrencyCode, Price};
pub use refs::{AgentRef, ClientRef, LocationRef, ServiceRef};
pub use service::{Category, Service, ServicePatch};
pub use status::{AgentStatus, BookingStatus, UserRole};
pub use user::{User, UserPatch};
