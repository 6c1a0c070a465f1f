//! Problem Details assertions that do not depend on backend types.

use std::collections::BTreeMap;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's error body.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDetailsLike {
    /// Messages recorded for `field`, empty when there are none.
    pub fn field_messages(&self, field: &str) -> Vec<String> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .cloned()
            .unwrap_or_default()
    }
}

/// Assert the stable error contract on raw response parts and return the
/// parsed body for further checks.
///
/// Checks the status, the `application/problem+json` content type, that
/// `x-trace-id` matches the body's `trace_id`, and the code.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "unexpected content-type '{content_type}'"
    );

    let problem: ProblemDetailsLike = serde_json::from_slice(body_bytes)
        .expect("Response body should be valid ProblemDetails JSON");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    problem
}

/// Same as [`assert_problem_details_from_parts`], reading a test service
/// response.
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(status, &headers, &body, expected_code, expected_status)
}

/// Assert a 400 `VALIDATION_ERROR` naming `field`.
pub async fn assert_field_error(resp: ServiceResponse<BoxBody>, field: &str) -> ProblemDetailsLike {
    let problem = assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert!(
        !problem.field_messages(field).is_empty(),
        "expected a failure for '{field}', got {:?}",
        problem.errors
    );
    problem
}
