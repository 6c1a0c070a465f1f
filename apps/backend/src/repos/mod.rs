//! Storage capabilities the services depend on.
//!
//! Handlers and services only ever see these traits; the SeaORM adapters and
//! the in-memory store in `crate::adapters` implement them.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

pub mod restaurants;
pub mod users;

pub use restaurants::{
    NewRestaurant, Page, PageRequest, Restaurant, RestaurantPatch, SortBy, SortDirection,
};
pub use users::{NewUser, Role, User};

/// Account persistence: the email -> account mapping used for uniqueness
/// checks and login.
#[async_trait]
pub trait AccountRepo: Send + Sync {
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Fails with `Conflict(UniqueEmail)` if the email is already registered.
    async fn create_user(&self, user: NewUser) -> Result<User, DomainError>;
}

#[async_trait]
pub trait RestaurantRepo: Send + Sync {
    async fn list(&self, request: &PageRequest) -> Result<Page<Restaurant>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DomainError>;

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, DomainError>;

    /// `None` when no restaurant has this id.
    async fn update(
        &self,
        id: i32,
        patch: RestaurantPatch,
    ) -> Result<Option<Restaurant>, DomainError>;

    /// Deletes in one step and reports whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
