use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Bodies larger than this are rejected before parsing.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// JSON body whose shape failures render as `400 BAD_REQUEST` problems.
///
/// Only the shape is checked here. Field rules (`validator` derives,
/// uniqueness) run in the handlers and report as `VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

fn bad_body(detail: impl Into<String>) -> AppError {
    AppError::bad_request(ErrorCode::BadRequest, detail)
}

async fn read_body(mut payload: Payload) -> Result<BytesMut, AppError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(trace_id = %trace_ctx::trace_id(), error = %e, "Failed to read request body");
            bad_body("Failed to read request body")
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            warn!(trace_id = %trace_ctx::trace_id(), limit = MAX_BODY_BYTES, "Request body too large");
            return Err(bad_body(format!(
                "Request body exceeds {MAX_BODY_BYTES} bytes"
            )));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Client-facing description of a parse failure; never echoes the body.
fn describe(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => "Invalid JSON: wrong types for one or more fields".to_string(),
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

fn parse<T: DeserializeOwned>(body: &[u8], content_type: &str) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(
            trace_id = %trace_ctx::trace_id(),
            error = %Redacted(&e.to_string()),
            content_type,
            body_size = body.len(),
            "JSON body rejected"
        );
        bad_body(describe(&e))
    })
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let payload = payload.take();

        Box::pin(async move {
            let body = read_body(payload).await?;
            parse(&body, &content_type).map(ValidatedJson)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::models::restaurant::UpdateRestaurantDto;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        seats: u32,
    }

    async fn extract<T: DeserializeOwned + 'static>(
        body: impl Into<bytes::Bytes>,
    ) -> Result<ValidatedJson<T>, AppError> {
        let (req, mut payload) = actix_web::test::TestRequest::post()
            .insert_header(("content-type", "application/json"))
            .set_payload(body.into())
            .to_http_parts();
        ValidatedJson::<T>::from_request(&req, &mut payload).await
    }

    #[actix_web::test]
    async fn extracts_camel_case_dto() {
        let dto = extract::<UpdateRestaurantDto>(r#"{"name":"Bistro","hasDelivery":true}"#)
            .await
            .unwrap()
            .into_inner();
        assert_eq!(dto.name, "Bistro");
        assert!(dto.has_delivery);
        assert_eq!(dto.description, None);
    }

    #[actix_web::test]
    async fn rejects_oversized_body() {
        let big = format!(r#"{{"name":"{}","seats":1}}"#, "x".repeat(MAX_BODY_BYTES));
        let err = extract::<Sample>(big).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn empty_body_is_a_bad_request() {
        let err = extract::<Sample>("").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }

    #[test]
    fn describes_each_failure_category() {
        let syntax = serde_json::from_str::<Sample>(r#"{"name": "x", "seats": }"#).unwrap_err();
        assert!(describe(&syntax).starts_with("Invalid JSON at line"));

        let eof = serde_json::from_str::<Sample>(r#"{"name": "x""#).unwrap_err();
        assert!(describe(&eof).contains("unexpected end of input"));

        let data = serde_json::from_str::<Sample>(r#"{"name": 1, "seats": "many"}"#).unwrap_err();
        assert!(describe(&data).contains("wrong types"));
    }

    #[test]
    fn derefs_to_the_payload() {
        let mut wrapped = ValidatedJson(Sample {
            name: "Bistro".into(),
            seats: 12,
        });
        wrapped.seats += 1;
        assert_eq!(wrapped.name, "Bistro");
        assert_eq!(wrapped.into_inner().seats, 13);
    }
}
