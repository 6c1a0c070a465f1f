use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::AppError;

/// Bearer token extracted from the Authorization header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    pub fn from_request_headers(req: &HttpRequest) -> Result<Self, AppError> {
        let auth_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(AppError::unauthorized_missing_bearer)?
            .to_str()
            .map_err(|_| AppError::unauthorized_missing_bearer())?;

        // Parse "Bearer <token>" format
        let mut parts = auth_value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => {
                Ok(AuthToken {
                    token: token.to_string(),
                })
            }
            _ => Err(AppError::unauthorized_missing_bearer()),
        }
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_request_headers(req))
    }
}
