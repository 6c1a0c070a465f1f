use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use restaurant_api::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use restaurant_api::routes;
use restaurant_api::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
    route_config: Option<RouteConfigFn>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route_config: None,
        }
    }

    /// Serve the same routes as `main.rs`.
    pub fn with_prod_routes(mut self) -> Self {
        self.route_config = Some(Box::new(routes::configure) as RouteConfigFn);
        self
    }

    /// Configure the app with custom routes
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Some(Box::new(config_fn) as RouteConfigFn);
        self
    }

    /// Build the test service. CORS is left out; every other middleware
    /// matches production order.
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let route_config = self.route_config;

        test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| {
                    if let Some(config_fn) = &route_config {
                        config_fn(cfg);
                    }
                }),
        )
        .await
    }
}

/// Create a new test app builder with the given AppState
pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
