use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a security-relevant login failure event.
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// Log an authenticated user being refused an operation on a resource.
pub fn access_denied(user_id: i32, operation: &str, resource: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ACCESS_DENIED",
        %trace_id,
        user_id,
        operation,
        resource,
        "Authorization failure"
    );
}
