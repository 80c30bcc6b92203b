//! In-memory entity collection stores.
//!
//! An [`EntityStore`] holds one entity collection plus the transient UI
//! state that goes with it: a selected entity, the active filter object, a
//! loading flag, and an error slot. Stores are process-wide, app-lifetime
//! containers (see [`registry`]); they never talk to the backend. Callers
//! run the remote mutation through the [`ApiClient`](crate::api::ApiClient)
//! first and then reflect the result here.
//!
//! All mutation goes through a single dispatch path ([`EntityStore::dispatch`]),
//! so every state transition is one enum value - easy to log, easy to test,
//! and the only place a consistency check would ever need to live.
//! Transitions are synchronous, infallible replace/merge operations; the
//! watch channel re-notifies subscribers after each one.

pub mod registry;

use planora_core::Entity;
use tokio::sync::watch;

/// Snapshot of a store's state.
#[derive(Debug, Clone)]
pub struct StoreState<T, F> {
    /// The held collection, in backend order.
    pub items: Vec<T>,
    /// The currently selected entity, if any.
    pub selected: Option<T>,
    /// Active filters; `F::default()` means unfiltered.
    pub filters: F,
    /// Whether a caller is currently loading this collection.
    pub loading: bool,
    /// Error slot surfaced to the UI, if any.
    pub error: Option<String>,
}

impl<T, F: Default> Default for StoreState<T, F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            filters: F::default(),
            loading: false,
            error: None,
        }
    }
}

/// A state transition applied through [`EntityStore::dispatch`].
#[derive(Debug, Clone)]
pub enum StoreAction<T: Entity, F> {
    /// Replace the entire collection.
    ReplaceAll(Vec<T>),
    /// Replace the selected slot.
    Select(Option<T>),
    /// Append one entity to the end of the collection. No duplicate-id
    /// check is performed.
    Add(T),
    /// Shallow-merge a patch into the entity with the given id. Silent
    /// no-op when the id is absent; untouched entries are left in place.
    Update(T::Id, T::Patch),
    /// Drop the entity with the given id. Silent no-op when absent.
    Remove(T::Id),
    /// Replace the active filters.
    SetFilters(F),
    /// Set the loading flag.
    SetLoading(bool),
    /// Set or clear the error slot.
    SetError(Option<String>),
    /// Reset the store to its initial state.
    Reset,
}

/// A process-wide, in-memory store for one entity collection.
///
/// Cheap to clone; all clones share the same state. Mutation is serialized
/// by the dispatch path, and subscribers observe each transition through
/// the watch channel.
pub struct EntityStore<T: Entity, F = ()> {
    state: std::sync::Arc<watch::Sender<StoreState<T, F>>>,
}

impl<T: Entity, F> Clone for EntityStore<T, F> {
    fn clone(&self) -> Self {
        Self {
            state: std::sync::Arc::clone(&self.state),
        }
    }
}

impl<T, F> Default for EntityStore<T, F>
where
    T: Entity,
    F: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> EntityStore<T, F>
where
    T: Entity,
    F: Clone + Default + Send + Sync + 'static,
{
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            state: std::sync::Arc::new(state),
        }
    }

    /// Apply one state transition and notify subscribers.
    pub fn dispatch(&self, action: StoreAction<T, F>) {
        self.state.send_modify(|state| Self::reduce(state, action));
    }

    fn reduce(state: &mut StoreState<T, F>, action: StoreAction<T, F>) {
        match action {
            StoreAction::ReplaceAll(items) => state.items = items,
            StoreAction::Select(selected) => state.selected = selected,
            StoreAction::Add(item) => state.items.push(item),
            StoreAction::Update(id, patch) => {
                if let Some(item) = state.items.iter_mut().find(|item| *item.id() == id) {
                    item.apply_patch(patch);
                }
            }
            StoreAction::Remove(id) => state.items.retain(|item| *item.id() != id),
            StoreAction::SetFilters(filters) => state.filters = filters,
            StoreAction::SetLoading(loading) => state.loading = loading,
            StoreAction::SetError(error) => state.error = error,
            StoreAction::Reset => *state = StoreState::default(),
        }
    }

    /// Subscribe to state snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState<T, F>> {
        self.state.subscribe()
    }

    /// The current state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StoreState<T, F> {
        self.state.borrow().clone()
    }

    /// Look up an entity by id in the current collection.
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Number of entities currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    // Convenience wrappers over the dispatch path.

    /// Replace the entire collection.
    pub fn set_all(&self, items: Vec<T>) {
        self.dispatch(StoreAction::ReplaceAll(items));
    }

    /// Replace the selected slot.
    pub fn select(&self, selected: Option<T>) {
        self.dispatch(StoreAction::Select(selected));
    }

    /// Append one entity.
    pub fn add(&self, item: T) {
        self.dispatch(StoreAction::Add(item));
    }

    /// Shallow-merge a patch into the entity with the given id.
    pub fn update(&self, id: T::Id, patch: T::Patch) {
        self.dispatch(StoreAction::Update(id, patch));
    }

    /// Drop the entity with the given id.
    pub fn remove(&self, id: T::Id) {
        self.dispatch(StoreAction::Remove(id));
    }

    /// Replace the active filters.
    pub fn set_filters(&self, filters: F) {
        self.dispatch(StoreAction::SetFilters(filters));
    }

    /// Set the loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.dispatch(StoreAction::SetLoading(loading));
    }

    /// Set or clear the error slot.
    pub fn set_error(&self, error: Option<String>) {
        self.dispatch(StoreAction::SetError(error));
    }

    /// Reset the store to its initial state.
    pub fn reset(&self) {
        self.dispatch(StoreAction::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planora_core::{User, UserId, UserPatch, UserRole};

    use crate::api::params::UserFilters;

    fn user(id: &str, first_name: &str) -> User {
        User {
            id: UserId::new(id),
            first_name: first_name.to_string(),
            last_name: "Test".to_string(),
            email: format!("{first_name}@example.com").to_lowercase(),
            phone: None,
            role: UserRole::Default,
            active: true,
            last_login_at: None,
        }
    }

    fn seeded_store() -> EntityStore<User, UserFilters> {
        let store = EntityStore::new();
        store.set_all(vec![user("u-1", "Ana"), user("u-2", "Leo"), user("u-3", "Mia")]);
        store
    }

    #[test]
    fn test_new_store_is_empty_and_unfiltered() {
        let store: EntityStore<User, UserFilters> = EntityStore::new();
        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert!(state.selected.is_none());
        assert!(state.filters.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_update_changes_only_target_preserving_length_and_order() {
        let store = seeded_store();

        store.update(
            UserId::new("u-2"),
            UserPatch {
                first_name: Some("Léo".to_string()),
                ..UserPatch::default()
            },
        );

        let state = store.snapshot();
        assert_eq!(state.items.len(), 3);
        let names: Vec<&str> = state
            .items
            .iter()
            .map(|user| user.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ana", "Léo", "Mia"]);
        // Untouched entries keep every field intact.
        assert_eq!(
            state.items.first().map(|user| user.email.as_str()),
            Some("ana@example.com")
        );
    }

    #[test]
    fn test_update_with_absent_id_is_a_no_op() {
        let store = seeded_store();
        let before = store.snapshot();

        store.update(
            UserId::new("u-404"),
            UserPatch {
                first_name: Some("Ghost".to_string()),
                ..UserPatch::default()
            },
        );

        let after = store.snapshot();
        assert_eq!(after.items.len(), before.items.len());
        assert!(
            after
                .items
                .iter()
                .zip(before.items.iter())
                .all(|(a, b)| a == b)
        );
    }

    #[test]
    fn test_remove_decreases_length_by_exactly_one_when_present() {
        let store = seeded_store();

        store.remove(UserId::new("u-2"));
        assert_eq!(store.len(), 2);
        assert!(store.get(&UserId::new("u-2")).is_none());

        store.remove(UserId::new("u-404"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_appends_without_duplicate_check() {
        let store = seeded_store();
        store.add(user("u-1", "Ana"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_selected_slot_replacement() {
        let store = seeded_store();
        store.select(Some(user("u-2", "Leo")));
        assert_eq!(
            store.snapshot().selected.map(|user| user.id),
            Some(UserId::new("u-2"))
        );

        store.select(None);
        assert!(store.snapshot().selected.is_none());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let store = seeded_store();
        store.set_loading(true);
        store.set_error(Some("Erreur lors du chargement des utilisateurs".to_string()));
        store.set_filters(UserFilters {
            active: Some(true),
            ..UserFilters::default()
        });

        store.reset();

        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_subscribers_observe_transitions() {
        let store: EntityStore<User, UserFilters> = EntityStore::new();
        let mut receiver = store.subscribe();
        assert!(!receiver.has_changed().expect("channel open"));

        store.add(user("u-1", "Ana"));
        assert!(receiver.has_changed().expect("channel open"));
        assert_eq!(receiver.borrow_and_update().items.len(), 1);
    }

    #[test]
    fn test_dispatch_applies_in_call_order() {
        let store = seeded_store();

        // Two back-to-back writers on the same field: last one wins.
        store.update(
            UserId::new("u-1"),
            UserPatch {
                phone: Some("+33 1 00 00 00 01".to_string()),
                ..UserPatch::default()
            },
        );
        store.update(
            UserId::new("u-1"),
            UserPatch {
                phone: Some("+33 1 00 00 00 02".to_string()),
                ..UserPatch::default()
            },
        );

        assert_eq!(
            store
                .get(&UserId::new("u-1"))
                .and_then(|user| user.phone),
            Some("+33 1 00 00 00 02".to_string())
        );
    }
}
