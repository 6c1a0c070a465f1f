use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::models::account::{LoginDto, LoginResponse, RegisterUserDto};
use crate::state::app_state::AppState;
use crate::validation::{ensure_valid, RegisterUserValidator};

/// Validate, then hand the request to the account service. 200 with no body.
async fn register(
    body: ValidatedJson<RegisterUserDto>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner();
    RegisterUserValidator::new(app_state.accounts.as_ref())
        .ensure_valid(&dto)
        .await?;

    app_state.account_service.register_user(dto).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Returns the account service's token unchanged.
async fn login(
    body: ValidatedJson<LoginDto>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner();
    ensure_valid(&dto)?;

    let token = app_state.account_service.generate_jwt(dto).await?;
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)));
}
