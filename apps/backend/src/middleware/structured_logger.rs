use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::trace_ctx::UNKNOWN_TRACE_ID;

/// Emits one `request_completed` event per request; 5xx log at error, 4xx
/// at warn, the rest at info.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

fn log_completion(method: &str, path: &str, status: StatusCode, duration_us: u64, trace_id: &str) {
    let status_code = status.as_u16();
    if status.is_server_error() {
        error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
    } else if status.is_client_error() {
        warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
    } else {
        info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            log_completion(
                &method,
                &path,
                status,
                start.elapsed().as_micros() as u64,
                &trace_id,
            );

            result
        })
    }
}
