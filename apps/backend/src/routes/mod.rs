use actix_web::web;

pub mod account;
pub mod health;
pub mod restaurants;

/// Every (method, path) pair the API serves; `{id}` stands for any id.
pub const ROUTES: [(&str, &str); 8] = [
    ("POST", "/api/account/register"),
    ("POST", "/api/account/login"),
    ("GET", "/api/restaurant"),
    ("POST", "/api/restaurant"),
    ("GET", "/api/restaurant/{id}"),
    ("PUT", "/api/restaurant/{id}"),
    ("DELETE", "/api/restaurant/{id}"),
    ("GET", "/health"),
];

/// Configure application routes. Used by `main.rs` and the test harness,
/// so both serve the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Account routes: /api/account/**
    cfg.service(web::scope("/api/account").configure(account::configure_routes));

    // Restaurant routes: /api/restaurant/**
    cfg.service(web::scope("/api/restaurant").configure(restaurants::configure_routes));
}
