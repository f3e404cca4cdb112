//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use opsdash_client::testing::load_fixture;

#[allow(unused_imports)]
pub use opsdash_client::{ClientError, OpsClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> OpsClient {
    OpsClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}
