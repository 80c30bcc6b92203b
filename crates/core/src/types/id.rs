//! Newtype IDs for type-safe entity references.
//!
//! Backend document IDs are opaque strings assigned remotely. Use the
//! `define_id!` macro to create type-safe wrappers that prevent accidentally
//! mixing IDs from different entity types.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
/// - An `is_empty()` check, since an empty identifier is treated as
///   "no entity requested"
///
/// # Example
///
/// ```rust
/// # use planora_core::define_id;
/// define_id!(UserId);
/// define_id!(BookingId);
///
/// let user_id = UserId::new("u-42");
/// let booking_id = BookingId::new("b-7");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = booking_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the identifier is empty (treated as absent).
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(AgentId);
define_id!(BookingId);
define_id!(LocationId);
define_id!(ServiceId);
define_id!(CategoryId);
define_id!(ClientId);

/// A generic untyped entity ID.
///
/// Prefer using specific ID types like `UserId`, `BookingId`, etc. This type
/// exists for code that routes identifiers without knowing the entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        let id = UserId::new("u-42");
        assert_eq!(id.as_str(), "u-42");
        assert_eq!(id.to_string(), "u-42");
        assert_eq!(String::from(id), "u-42");
    }

    #[test]
    fn test_empty_id_is_absent() {
        assert!(UserId::new("").is_empty());
        assert!(!UserId::new("u-1").is_empty());
    }

    #[test]
    fn test_serde_transparent() {
        let id: BookingId = serde_json::from_str("\"b-7\"").expect("valid id json");
        assert_eq!(id, BookingId::new("b-7"));
        assert_eq!(serde_json::to_string(&id).expect("serializable"), "\"b-7\"");
    }
}
