#![cfg(test)]

//! Unit-test logging; same setup as the integration tests.

/// Idempotent; level from `TEST_LOG`, then `RUST_LOG`, default `warn`.
pub fn init() {
    backend_test_support::logging::init();
}
