use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repos::{NewRestaurant, Restaurant, RestaurantPatch};

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 25, message = "'name' is required and must be at most 25 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub has_delivery: bool,
    #[serde(default)]
    #[validate(email(message = "'contactEmail' is not a valid email address"))]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "'city' is required and must be at most 50 characters"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "'street' is required and must be at most 50 characters"))]
    pub street: String,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl CreateRestaurantDto {
    pub fn into_new_restaurant(self, created_by_id: i32) -> NewRestaurant {
        NewRestaurant {
            name: self.name,
            description: self.description,
            category: self.category,
            has_delivery: self.has_delivery,
            contact_email: self.contact_email,
            contact_number: self.contact_number,
            city: self.city,
            street: self.street,
            postal_code: self.postal_code,
            created_by_id: Some(created_by_id),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 25, message = "'name' is required and must be at most 25 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub has_delivery: bool,
}

impl From<UpdateRestaurantDto> for RestaurantPatch {
    fn from(dto: UpdateRestaurantDto) -> Self {
        RestaurantPatch {
            name: dto.name,
            description: dto.description,
            has_delivery: dto.has_delivery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
}

impl From<Restaurant> for RestaurantDto {
    fn from(r: Restaurant) -> Self {
        RestaurantDto {
            id: r.id,
            name: r.name,
            description: r.description,
            category: r.category,
            has_delivery: r.has_delivery,
            contact_email: r.contact_email,
            contact_number: r.contact_number,
            city: r.city,
            street: r.street,
            postal_code: r.postal_code,
        }
    }
}

/// Raw list-query parameters.
///
/// Kept as strings so a non-numeric `pageSize` becomes a field error from
/// the guard instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantQuery {
    pub page_size: Option<String>,
    pub page_number: Option<String>,
    pub search_phrase: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_pages: u64,
    pub items_from: u64,
    pub items_to: u64,
    pub total_items_count: u64,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_items_count: u64, page_size: u32, page_number: u32) -> Self {
        let page_size = u64::from(page_size.max(1));
        let items_from = page_size * u64::from(page_number.saturating_sub(1)) + 1;
        Self {
            items,
            total_pages: total_items_count.div_ceil(page_size),
            items_from,
            items_to: items_from + page_size - 1,
            total_items_count,
        }
    }
}
