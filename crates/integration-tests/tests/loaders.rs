//! Loader tests: the fetch-on-key-change contract over real HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use planora_client::loaders::{self, messages};
use planora_core::{ServiceId, UserId};
use serde_json::json;

use planora_integration_tests::{api_path, client_for, spawn_backend};

#[tokio::test]
async fn test_empty_user_id_yields_empty_state_without_network() {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in_route = Arc::clone(&hits);

    let router = Router::new().route(
        &api_path("users/{id}"),
        get(move || {
            let hits = Arc::clone(&hits_in_route);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "user": null }))
            }
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let loader = loaders::user(&api);
    loader.set_key(Some(UserId::new(""))).await;

    let state = loader.state();
    assert_eq!(state.data, None);
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(hits.load(Ordering::SeqCst), 0, "no remote call for empty id");
}

#[tokio::test]
async fn test_user_loader_exposes_unwrapped_entity() {
    let router = Router::new().route(
        &api_path("users/{id}"),
        get(|| async {
            Json(json!({
                "user": { "id": "42", "first_name": "Ana", "last_name": "Petit",
                          "email": "ana@example.com" }
            }))
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let loader = loaders::user(&api);
    loader.set_key(Some(UserId::new("42"))).await;

    let state = loader.state();
    let user = state.data.expect("user present");
    assert_eq!(user.id, UserId::new("42"));
    assert_eq!(user.first_name, "Ana");
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_user_loader_failure_yields_localized_error_and_empty_data() {
    let router = Router::new().route(
        &api_path("users/{id}"),
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let api = client_for(spawn_backend(router).await);

    let loader = loaders::user(&api);
    loader.set_key(Some(UserId::new("42"))).await;

    let state = loader.state();
    assert_eq!(state.data, None, "no stale value survives a failure");
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Erreur lors du chargement de l'utilisateur")
    );
}

#[tokio::test]
async fn test_refetch_observes_backend_changes() {
    let version = Arc::new(AtomicUsize::new(0));
    let version_in_route = Arc::clone(&version);

    let router = Router::new().route(
        &api_path("users/{id}"),
        get(move || {
            let version = Arc::clone(&version_in_route);
            async move {
                let n = version.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "user": { "id": "42", "first_name": format!("Ana v{n}"),
                              "last_name": "Petit", "email": "ana@example.com" }
                }))
            }
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let loader = loaders::user(&api);
    loader.set_key(Some(UserId::new("42"))).await;
    assert_eq!(
        loader.state().data.map(|u| u.first_name).as_deref(),
        Some("Ana v0")
    );

    loader.refetch().await;
    assert_eq!(
        loader.state().data.map(|u| u.first_name).as_deref(),
        Some("Ana v1")
    );
}

#[tokio::test]
async fn test_subscribers_observe_loading_then_data() {
    let router = Router::new().route(
        &api_path("categories"),
        get(|| async {
            Json(json!({
                "success": true,
                "categories": [
                    { "id": "cat-1", "name": "Hair" },
                    { "id": "cat-2", "name": "Nails" }
                ]
            }))
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let loader = loaders::categories(&api);
    let mut receiver = loader.subscribe();

    loader.set_key(Some(())).await;

    // The final snapshot holds the data with loading cleared.
    let state = receiver.borrow_and_update().clone();
    assert_eq!(state.data.len(), 2);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_bulk_loader_failure_resets_to_empty_batch() {
    let router = Router::new().route(
        &api_path("services/{id}"),
        get(|axum::extract::Path(id): axum::extract::Path<String>| async move {
            if id == "s-2" {
                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            }
            Ok(Json(json!({ "id": id, "name": "Service", "duration_minutes": 30 })))
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let loader = loaders::services_by_ids(&api);
    loader
        .set_key(Some(vec![ServiceId::new("s-1"), ServiceId::new("s-2")]))
        .await;

    let state = loader.state();
    assert!(state.data.is_empty(), "all-or-nothing batch");
    assert_eq!(state.error.as_deref(), Some(messages::SERVICES));
}

#[tokio::test]
async fn test_bulk_loader_empty_id_list_is_absent() {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in_route = Arc::clone(&hits);

    let router = Router::new().route(
        &api_path("services/{id}"),
        get(move || {
            let hits = Arc::clone(&hits_in_route);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "id": "s-1", "name": "Service", "duration_minutes": 30 }))
            }
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let loader = loaders::services_by_ids(&api);
    loader.set_key(Some(Vec::new())).await;

    assert!(loader.state().data.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
