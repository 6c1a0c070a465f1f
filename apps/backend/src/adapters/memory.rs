//! In-memory store backing both repositories.
//!
//! Used by the integration harness and by the server when no database is
//! configured.
//! Each operation takes the lock once, so every call is atomic with respect
//! to the others.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering as AtomicOrdering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::{
    AccountRepo, NewRestaurant, NewUser, Page, PageRequest, Restaurant, RestaurantPatch,
    RestaurantRepo, SortBy, SortDirection, User,
};

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    restaurants: RwLock<BTreeMap<i32, Restaurant>>,
    next_user_id: AtomicI32,
    next_restaurant_id: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a restaurant as-is, keeping its id. Seeds fixtures in tests.
    pub fn seed_restaurant(&self, restaurant: Restaurant) {
        self.next_restaurant_id
            .fetch_max(restaurant.id, AtomicOrdering::SeqCst);
        self.restaurants.write().insert(restaurant.id, restaurant);
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants.read().len()
    }

    pub fn contains_restaurant(&self, id: i32) -> bool {
        self.restaurants.read().contains_key(&id)
    }
}

fn sort_key(restaurant: &Restaurant, column: SortBy) -> Option<&str> {
    match column {
        SortBy::Name => Some(restaurant.name.as_str()),
        SortBy::Category => restaurant.category.as_deref(),
        SortBy::Description => restaurant.description.as_deref(),
    }
}

/// Missing values sort after every present one, so they come last on
/// ascending and first on descending, matching the SQL adapter.
fn compare_keys(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn matches_phrase(restaurant: &Restaurant, phrase: &str) -> bool {
    restaurant.name.to_lowercase().contains(phrase)
        || restaurant
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(phrase))
}

#[async_trait]
impl AccountRepo for InMemoryStore {
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.users.read().iter().any(|u| u.email == email))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueEmail,
                "Email already registered",
            ));
        }
        let created = User {
            id: self.next_user_id.fetch_add(1, AtomicOrdering::SeqCst) + 1,
            email: user.email,
            password_hash: user.password_hash,
            nationality: user.nationality,
            role: user.role,
        };
        users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl RestaurantRepo for InMemoryStore {
    async fn list(&self, request: &PageRequest) -> Result<Page<Restaurant>, DomainError> {
        let phrase = request.normalized_phrase();
        let mut matched: Vec<Restaurant> = self
            .restaurants
            .read()
            .values()
            .filter(|r| phrase.as_deref().is_none_or(|p| matches_phrase(r, p)))
            .cloned()
            .collect();

        if let Some((column, direction)) = request.sort {
            // Stable sort keeps id order among equal keys.
            matched.sort_by(|a, b| {
                let ord = compare_keys(sort_key(a, column), sort_key(b, column));
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        let total_items = matched.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = matched
            .into_iter()
            .skip(offset)
            .take(request.page_size as usize)
            .collect();

        Ok(Page { items, total_items })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DomainError> {
        Ok(self.restaurants.read().get(&id).cloned())
    }

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, DomainError> {
        let id = self.next_restaurant_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        let created = Restaurant {
            id,
            name: restaurant.name,
            description: restaurant.description,
            category: restaurant.category,
            has_delivery: restaurant.has_delivery,
            contact_email: restaurant.contact_email,
            contact_number: restaurant.contact_number,
            city: restaurant.city,
            street: restaurant.street,
            postal_code: restaurant.postal_code,
            created_by_id: restaurant.created_by_id,
        };
        self.restaurants.write().insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        patch: RestaurantPatch,
    ) -> Result<Option<Restaurant>, DomainError> {
        let mut restaurants = self.restaurants.write();
        Ok(restaurants.get_mut(&id).map(|existing| {
            existing.apply(patch);
            existing.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.restaurants.write().remove(&id).is_some())
    }
}
