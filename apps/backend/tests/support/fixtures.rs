//! Users, tokens and restaurants for route tests.

use std::time::{Duration, SystemTime};

use actix_web::http::header;
use restaurant_api::repos::{Restaurant, Role, User};
use restaurant_api::{mint_access_token, InMemoryStore, SecurityConfig};

pub const OWNER_ID: i32 = 1;
pub const OTHER_ID: i32 = 2;

pub fn user(id: i32, role: Role) -> User {
    User {
        id,
        email: format!("user{id}@example.test"),
        password_hash: String::new(),
        nationality: None,
        role,
    }
}

pub fn manager(id: i32) -> User {
    user(id, Role::Manager)
}

pub fn bearer(user: &User, security: &SecurityConfig) -> (header::HeaderName, String) {
    let token =
        mint_access_token(user, SystemTime::now(), security).expect("should mint token");
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

pub fn expired_bearer(user: &User, security: &SecurityConfig) -> (header::HeaderName, String) {
    let past = SystemTime::now()
        .checked_sub(Duration::from_secs(2 * 60 * 60))
        .expect("clock is past 1970");
    let token = mint_access_token(user, past, security).expect("should mint token");
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

pub fn restaurant(id: i32, name: &str, owner: Option<i32>) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        description: Some(format!("{name} description")),
        category: Some("Italian".to_string()),
        has_delivery: false,
        contact_email: None,
        contact_number: None,
        city: "Krakow".to_string(),
        street: "Dluga 1".to_string(),
        postal_code: None,
        created_by_id: owner,
    }
}

/// Seeds restaurants `1..=count`, all owned by `owner`.
pub fn seed_restaurants(store: &InMemoryStore, count: i32, owner: i32) {
    for id in 1..=count {
        store.seed_restaurant(restaurant(id, &format!("Restaurant {id}"), Some(owner)));
    }
}
