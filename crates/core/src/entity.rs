//! The [`Entity`] trait.
//!
//! Ties a domain record to its typed identifier and its patch type. The
//! generic collection store in the client crate is parameterized over this
//! trait instead of being hand-copied per entity type.

/// A domain record mirrored from the remote backend.
///
/// Implementors are plain data: cloning is cheap relative to a network
/// round-trip, and none of the trait methods can fail.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Typed identifier for this entity kind.
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static;

    /// Partial-update type: all fields optional, provided fields replace the
    /// current value, absent fields are left untouched.
    type Patch: Clone + std::fmt::Debug + Send + Sync + 'static;

    /// The entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Shallow-merge a patch into this record.
    fn apply_patch(&mut self, patch: Self::Patch);
}
