use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Restaurant id from the `{id}` path segment. Existence is checked by the
/// service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantId(pub i32);

fn parse(raw: Option<&str>) -> Result<RestaurantId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidRestaurantId, "Missing id parameter")
    })?;
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(RestaurantId(id)),
        Ok(id) => Err(AppError::bad_request(
            ErrorCode::InvalidRestaurantId,
            format!("Restaurant id must be positive, got: {id}"),
        )),
        Err(_) => Err(AppError::bad_request(
            ErrorCode::InvalidRestaurantId,
            format!("Invalid restaurant id: {raw}"),
        )),
    }
}

impl FromRequest for RestaurantId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.match_info().get("id")))
    }
}
