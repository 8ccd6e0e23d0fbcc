/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for auth-center-client tests

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use wiremock::MockServer;

use auth_center_client::{AuthCenterClient, ClientConfig};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> AuthCenterClient {
    AuthCenterClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Fabricate an unsigned JWT carrying the given subject
#[allow(dead_code)]
pub fn make_test_jwt(sub: &str) -> String {
    let header = serde_json::json!({"alg": "none", "typ": "JWT"});
    let payload = serde_json::json!({"sub": sub, "aud": "mfa-verification"});

    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
    let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());

    format!("{header_b64}.{payload_b64}.signature")
}
