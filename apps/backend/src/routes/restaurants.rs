use actix_web::http::header;
use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::{CurrentUser, RestaurantId, ValidatedJson, ValidatedQuery};
use crate::models::restaurant::{CreateRestaurantDto, RestaurantQuery, UpdateRestaurantDto};
use crate::services::restaurants;
use crate::state::app_state::AppState;
use crate::validation::{ensure_valid, validate_restaurant_query};

async fn get_all(
    query: ValidatedQuery<RestaurantQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = validate_restaurant_query(&query).map_err(AppError::invalid)?;
    let page = restaurants::list(app_state.restaurants.as_ref(), &request).await?;
    Ok(HttpResponse::Ok().json(page))
}

async fn get_one(
    id: RestaurantId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let restaurant = restaurants::get(app_state.restaurants.as_ref(), id.0).await?;
    Ok(HttpResponse::Ok().json(restaurant))
}

async fn create(
    user: CurrentUser,
    body: ValidatedJson<CreateRestaurantDto>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner();
    ensure_valid(&dto)?;

    let id = restaurants::create(app_state.restaurants.as_ref(), &user.actor(), dto).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/restaurant/{id}")))
        .finish())
}

async fn update(
    user: CurrentUser,
    id: RestaurantId,
    body: ValidatedJson<UpdateRestaurantDto>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner();
    ensure_valid(&dto)?;

    let updated = restaurants::update(
        app_state.restaurants.as_ref(),
        app_state.authorization.as_ref(),
        &user.actor(),
        id.0,
        dto.into(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(updated))
}

async fn delete(
    user: CurrentUser,
    id: RestaurantId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    restaurants::delete(
        app_state.restaurants.as_ref(),
        app_state.authorization.as_ref(),
        &user.actor(),
        id.0,
    )
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(get_all))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_one))
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}
