#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a JSON body, failing the test with the raw text when it is not JSON.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "response body is not JSON ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// `x-trace-id` of a response; panics when missing.
pub fn trace_id_header(resp: &ServiceResponse<BoxBody>) -> String {
    resp.headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present")
        .to_string()
}
