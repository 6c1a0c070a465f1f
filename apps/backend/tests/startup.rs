//! Every route in the public surface is wired into the app.

mod common;
mod support;

use actix_web::http::{Method, StatusCode};
use actix_web::test;
use restaurant_api::routes::ROUTES;
use support::fixtures::{bearer, manager, seed_restaurants, OWNER_ID};
use support::{create_test_app, TestState};

#[actix_web::test]
async fn every_route_is_registered() {
    let ts = TestState::new().await;
    seed_restaurants(&ts.store, 1, OWNER_ID);
    let auth = bearer(&manager(OWNER_ID), &ts.security);
    let app = create_test_app(ts.state).with_prod_routes().build().await;

    for (method, path) in ROUTES {
        let method = Method::from_bytes(method.as_bytes()).expect("valid method");
        let uri = path.replace("{id}", "1");
        let req = test::TestRequest::default()
            .method(method.clone())
            .uri(&uri)
            .insert_header(auth.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_ne!(
            resp.status(),
            StatusCode::NOT_FOUND,
            "{method} {uri} is not routed"
        );
        assert_ne!(
            resp.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} {uri} has no handler for its method"
        );
    }
}

#[actix_web::test]
async fn unknown_paths_are_not_found() {
    let ts = TestState::new().await;
    let app = create_test_app(ts.state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/restaurants").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_reports_the_memory_store() {
    let ts = TestState::new().await;
    let app = create_test_app(ts.state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));

    let body = common::read_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "memory");
    assert!(body["app_version"].is_string());
}
