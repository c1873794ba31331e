//! Shared helpers for integration tests against a stubbed gateway.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use member_client::cache::{MemoryStorage, SessionCache};
use member_client::{Config, HttpClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub use wiremock::matchers::{body_json, header, method, path, query_param};
pub use wiremock::{Mock, ResponseTemplate};

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Client with the default pipeline pointing at the mock server.
pub fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(Config::new(server.uri())).expect("client should build")
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> HttpClient {
    HttpClient::new(Config::new(server.uri()).with_timeout(timeout)).expect("client should build")
}

pub fn memory_cache() -> SessionCache {
    SessionCache::new(Arc::new(MemoryStorage::new()))
}

/// Standard `{ data, message }` success body.
pub fn envelope(data: Value) -> Value {
    json!({ "code": 200, "message": null, "data": data })
}

pub fn ok_json(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}
