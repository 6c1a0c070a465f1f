use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use super::auth_token::AuthToken;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::repos::Role;
use crate::services::authorization::Actor;
use crate::state::app_state::AppState;

/// Authenticated user, taken from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
    pub nationality: Option<String>,
}

impl CurrentUser {
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            role: self.role,
        }
    }

    fn from_http(req: &HttpRequest) -> Result<Self, AppError> {
        let token = AuthToken::from_request_headers(req)?;
        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))?;

        let claims = verify_access_token(&token.token, &app_state.security)?;
        let id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AppError::unauthorized_invalid_jwt())?;

        Ok(CurrentUser {
            id,
            email: claims.email,
            role: claims.role,
            nationality: claims.nationality,
        })
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_http(req))
    }
}
