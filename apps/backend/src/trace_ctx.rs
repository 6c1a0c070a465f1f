//! Task-local trace context for web requests.
//!
//! `RequestTrace` establishes the scope; error rendering and extractors read
//! the id back so problem-details bodies carry the same id as the
//! `x-trace-id` header.

use std::cell::RefCell;

use tokio::task_local;

/// Returned when no request scope is active (background tasks, unit tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id of the current request, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

/// Run a synchronous closure within a trace context.
pub fn with_trace_id_sync<F, R>(trace_id: String, f: F) -> R
where
    F: FnOnce() -> R,
{
    TRACE_ID.sync_scope(RefCell::new(Some(trace_id)), f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn outside_scope_is_unknown() {
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }

    #[tokio::test]
    async fn scope_is_visible_and_restored() {
        let outer = with_trace_id("outer-1".to_string(), async {
            assert_eq!(trace_id(), "outer-1");

            let inner = with_trace_id("inner-2".to_string(), async { trace_id() }).await;
            assert_eq!(inner, "inner-2");

            trace_id()
        })
        .await;

        assert_eq!(outer, "outer-1");
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }

    #[test]
    fn sync_scope_is_visible() {
        assert_eq!(with_trace_id_sync("sync-3".to_string(), trace_id), "sync-3");
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }
}
