//! Error responses share one problem-details shape.

mod common;
mod support;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, HttpResponse};
use restaurant_api::errors::ErrorCode;
use restaurant_api::AppError;
use support::{create_test_app, TestState};

async fn always_conflict() -> Result<HttpResponse, AppError> {
    Err(AppError::conflict(ErrorCode::UniqueEmail, "Email already registered"))
}

#[actix_web::test]
async fn problem_details_carry_the_response_trace_id() {
    let ts = TestState::new().await;
    let app = create_test_app(ts.state)
        .with_routes(|cfg| {
            cfg.route("/_conflict", web::get().to(always_conflict));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_conflict").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    let trace_id = common::trace_id_header(&resp);
    let body = common::read_json(resp).await;

    assert_eq!(body["trace_id"], trace_id.as_str());
    assert_eq!(body["code"], "UNIQUE_EMAIL");
    assert_eq!(body["title"], "Unique Email");
    assert_eq!(body["status"], 409);
    assert_eq!(body["detail"], "Email already registered");
    assert_eq!(body["type"], "https://restaurant-api.dev/errors/UNIQUE_EMAIL");
    assert!(body.get("errors").is_none());
}

#[actix_web::test]
async fn extractor_failures_use_the_same_shape() {
    let ts = TestState::new().await;
    let app = create_test_app(ts.state).with_prod_routes().build().await;

    let req = test::TestRequest::put()
        .uri("/api/restaurant/1")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    let trace_id = common::trace_id_header(&resp);
    let body = common::read_json(resp).await;
    assert_eq!(body["code"], "UNAUTHORIZED_INVALID_JWT");
    assert_eq!(body["trace_id"], trace_id.as_str());
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let ts = TestState::new().await;
    let app = create_test_app(ts.state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/account/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    backend_test_support::problem_details::assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[actix_web::test]
async fn every_response_gets_a_fresh_trace_id() {
    let ts = TestState::new().await;
    let app = create_test_app(ts.state).with_prod_routes().build().await;

    let first = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let second =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_ne!(
        common::trace_id_header(&first),
        common::trace_id_header(&second)
    );
}
