//! Integration tests for the Planora client data layer.
//!
//! Each test spins up an in-process stub backend (`axum` on an ephemeral
//! port) serving canned JSON payloads, then drives the real `ApiClient`,
//! loaders, and stores against it over HTTP. Nothing external is required.
//!
//! The stub serves responses in *both* shapes the backend contract allows
//! (wrapped and bare entities, `success` envelopes for lists), so the tests
//! pin down the tolerant response boundary as well as the loader and store
//! behavior built on top of it.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use planora_client::{ApiClient, BackendConfig};
use secrecy::SecretString;
use url::Url;

/// Project id the stub backend is mounted under.
pub const TEST_PROJECT: &str = "test-project";

/// Bind the router on an ephemeral port and serve it in the background.
///
/// # Panics
///
/// Panics when the listener cannot be bound; tests have no recovery path.
pub async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub backend");
    });

    addr
}

/// An [`ApiClient`] pointed at the stub backend.
#[must_use]
pub fn client_for(addr: SocketAddr) -> ApiClient {
    let config = BackendConfig {
        base_url: Url::parse(&format!("http://{addr}")).expect("stub backend url"),
        api_key: SecretString::from("sk_test_0123456789abcdef".to_string()),
        project_id: TEST_PROJECT.to_string(),
        timeout: Duration::from_secs(5),
    };

    ApiClient::new(&config)
}

/// Path prefix for an entity collection under the test project.
#[must_use]
pub fn api_path(rest: &str) -> String {
    format!("/v1/projects/{TEST_PROJECT}/{rest}")
}
