//! Restaurant use cases over the injected repository and policy.

use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::logging::security;
use crate::models::restaurant::{CreateRestaurantDto, PagedResult, RestaurantDto};
use crate::repos::{PageRequest, Restaurant, RestaurantPatch, RestaurantRepo};
use crate::services::authorization::{Actor, AuthorizationPolicy, ResourceOperation};

fn not_found(id: i32) -> AppError {
    DomainError::not_found(NotFoundKind::Restaurant, format!("Restaurant {id} not found")).into()
}

fn authorize(
    policy: &dyn AuthorizationPolicy,
    actor: &Actor,
    restaurant: &Restaurant,
    operation: ResourceOperation,
) -> Result<(), AppError> {
    if policy.authorize(actor, restaurant, operation) {
        return Ok(());
    }
    security::access_denied(actor.id, &operation.to_string(), "restaurant");
    Err(AppError::forbidden(
        ErrorCode::NotResourceOwner,
        format!("Not allowed to {operation} restaurant {}", restaurant.id),
    ))
}

pub async fn list(
    repo: &dyn RestaurantRepo,
    request: &PageRequest,
) -> Result<PagedResult<RestaurantDto>, AppError> {
    let page = repo.list(request).await?;
    Ok(PagedResult::new(
        page.items.into_iter().map(RestaurantDto::from).collect(),
        page.total_items,
        request.page_size,
        request.page_number,
    ))
}

pub async fn get(repo: &dyn RestaurantRepo, id: i32) -> Result<RestaurantDto, AppError> {
    repo.find_by_id(id)
        .await?
        .map(RestaurantDto::from)
        .ok_or_else(|| not_found(id))
}

/// Returns the new restaurant's id.
pub async fn create(
    repo: &dyn RestaurantRepo,
    actor: &Actor,
    dto: CreateRestaurantDto,
) -> Result<i32, AppError> {
    if !actor.role.can_create_restaurants() {
        security::access_denied(actor.id, "create", "restaurant");
        return Err(AppError::forbidden(
            ErrorCode::InsufficientRole,
            "Only managers and admins can create restaurants",
        ));
    }

    let created = repo.create(dto.into_new_restaurant(actor.id)).await?;
    info!(restaurant_id = created.id, user_id = actor.id, "Restaurant created");
    Ok(created.id)
}

pub async fn update(
    repo: &dyn RestaurantRepo,
    policy: &dyn AuthorizationPolicy,
    actor: &Actor,
    id: i32,
    patch: RestaurantPatch,
) -> Result<RestaurantDto, AppError> {
    let existing = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    authorize(policy, actor, &existing, ResourceOperation::Update)?;

    let updated = repo.update(id, patch).await?.ok_or_else(|| not_found(id))?;
    info!(restaurant_id = id, user_id = actor.id, "Restaurant updated");
    Ok(RestaurantDto::from(updated))
}

/// Missing -> not found; present but not permitted -> forbidden. The
/// removal itself is one store call, so a concurrent delete still surfaces
/// as not found.
pub async fn delete(
    repo: &dyn RestaurantRepo,
    policy: &dyn AuthorizationPolicy,
    actor: &Actor,
    id: i32,
) -> Result<(), AppError> {
    let existing = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    authorize(policy, actor, &existing, ResourceOperation::Delete)?;

    if !repo.delete(id).await? {
        return Err(not_found(id));
    }
    info!(restaurant_id = id, user_id = actor.id, "Restaurant deleted");
    Ok(())
}
