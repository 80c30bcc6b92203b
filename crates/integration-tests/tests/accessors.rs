//! Accessor tests: response-shape tolerance, envelopes, and the bulk batch.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, patch, post};
use planora_client::ApiError;
use planora_client::api::params::{PageParams, UserFilters};
use planora_core::{ServiceId, UserId, UserPatch, UserRole};
use serde_json::{Value, json};

use planora_integration_tests::{api_path, client_for, spawn_backend};

fn ana_json() -> Value {
    json!({
        "id": "42",
        "first_name": "Ana",
        "last_name": "Petit",
        "email": "ana@example.com"
    })
}

// ============================================================================
// Single-entity shape tolerance
// ============================================================================

#[tokio::test]
async fn test_get_user_wrapped_shape() {
    let router = Router::new().route(
        &api_path("users/{id}"),
        get(|| async { Json(json!({ "user": ana_json() })) }),
    );
    let api = client_for(spawn_backend(router).await);

    let user = api
        .get_user(&UserId::new("42"))
        .await
        .expect("request succeeds")
        .expect("user present");

    assert_eq!(user.id, UserId::new("42"));
    assert_eq!(user.first_name, "Ana");
}

#[tokio::test]
async fn test_get_user_bare_shape() {
    let router = Router::new().route(
        &api_path("users/{id}"),
        get(|| async { Json(ana_json()) }),
    );
    let api = client_for(spawn_backend(router).await);

    let user = api
        .get_user(&UserId::new("42"))
        .await
        .expect("request succeeds")
        .expect("user present");

    assert_eq!(user.first_name, "Ana");
}

#[tokio::test]
async fn test_get_user_missing_is_none() {
    let router = Router::new().route(
        &api_path("users/{id}"),
        get(|| async { (StatusCode::NOT_FOUND, "no such user") }),
    );
    let api = client_for(spawn_backend(router).await);

    let user = api
        .get_user(&UserId::new("404"))
        .await
        .expect("404 is not an error for lookups");
    assert!(user.is_none());
}

// ============================================================================
// List envelopes
// ============================================================================

#[tokio::test]
async fn test_list_users_envelope_and_query_encoding() {
    let router = Router::new().route(
        &api_path("users"),
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("role").map(String::as_str), Some("manager"));
            assert_eq!(params.get("active").map(String::as_str), Some("true"));
            assert_eq!(params.get("page").map(String::as_str), Some("2"));
            Json(json!({
                "success": true,
                "users": [ana_json()],
                "total": 41
            }))
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let filters = UserFilters {
        role: Some(UserRole::Manager),
        active: Some(true),
        search: None,
    };
    let page = api
        .list_users(
            &filters,
            PageParams {
                page: Some(2),
                per_page: None,
            },
        )
        .await
        .expect("request succeeds");

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, Some(41));
}

#[tokio::test]
async fn test_list_users_reported_failure() {
    let router = Router::new().route(
        &api_path("users"),
        get(|| async { Json(json!({ "success": false, "error": "quota exceeded" })) }),
    );
    let api = client_for(spawn_backend(router).await);

    let err = api
        .list_users(&UserFilters::default(), PageParams::default())
        .await
        .expect_err("failure envelope must error");

    assert!(matches!(err, ApiError::Backend(message) if message == "quota exceeded"));
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_create_and_update_user_round_trip() {
    let router = Router::new()
        .route(
            &api_path("users"),
            post(|Json(body): Json<Value>| async move {
                // The backend assigns the id and echoes the record, wrapped.
                let mut user = body;
                user["id"] = json!("u-new");
                user["active"] = json!(true);
                Json(json!({ "user": user }))
            }),
        )
        .route(
            &api_path("users/{id}"),
            patch(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                let mut user = ana_json();
                user["id"] = json!(id);
                if let Some(first_name) = body.get("first_name") {
                    user["first_name"] = first_name.clone();
                }
                Json(user)
            }),
        );
    let api = client_for(spawn_backend(router).await);

    let created = api
        .create_user(&planora_client::api::NewUser {
            first_name: "Leo".to_string(),
            last_name: "Marchand".to_string(),
            email: "leo@example.com".to_string(),
            phone: None,
            role: UserRole::Default,
        })
        .await
        .expect("create succeeds");
    assert_eq!(created.id, UserId::new("u-new"));
    assert_eq!(created.first_name, "Leo");

    let updated = api
        .update_user(
            &UserId::new("42"),
            &UserPatch {
                first_name: Some("Anaïs".to_string()),
                ..UserPatch::default()
            },
        )
        .await
        .expect("update succeeds");
    assert_eq!(updated.first_name, "Anaïs");
}

#[tokio::test]
async fn test_delete_user_failure_envelope() {
    let router = Router::new().route(
        &api_path("users/{id}"),
        delete(|| async { Json(json!({ "success": false, "error": "user has bookings" })) }),
    );
    let api = client_for(spawn_backend(router).await);

    let err = api
        .delete_user(&UserId::new("42"))
        .await
        .expect_err("failure envelope must error");
    assert!(matches!(err, ApiError::Backend(message) if message == "user has bookings"));
}

// ============================================================================
// Bulk fetch: all-or-nothing batch
// ============================================================================

fn service_json(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "duration_minutes": 45 })
}

#[tokio::test]
async fn test_bulk_fetch_preserves_input_order() {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in_route = Arc::clone(&hits);

    let router = Router::new().route(
        &api_path("services/{id}"),
        get(move |Path(id): Path<String>| {
            let hits = Arc::clone(&hits_in_route);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "service": service_json(&id, &format!("Service {id}")) }))
            }
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let ids = vec![
        ServiceId::new("s-3"),
        ServiceId::new("s-1"),
        ServiceId::new("s-2"),
    ];
    let services = api
        .get_services_by_ids(&ids)
        .await
        .expect("batch succeeds");

    let fetched: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(fetched, vec!["s-3", "s-1", "s-2"]);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_bulk_fetch_single_failure_fails_the_batch() {
    let router = Router::new().route(
        &api_path("services/{id}"),
        get(|Path(id): Path<String>| async move {
            if id == "s-2" {
                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            }
            Ok(Json(service_json(&id, "Service")))
        }),
    );
    let api = client_for(spawn_backend(router).await);

    let ids = vec![
        ServiceId::new("s-1"),
        ServiceId::new("s-2"),
        ServiceId::new("s-3"),
    ];
    let err = api
        .get_services_by_ids(&ids)
        .await
        .expect_err("one failing id fails the whole batch");
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}
