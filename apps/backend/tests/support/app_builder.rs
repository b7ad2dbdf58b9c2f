use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error, HttpMessage};
use beqst::db::txn::SharedTxn;
use beqst::middleware::request_trace::RequestTrace;
use beqst::middleware::security_headers::SecurityHeaders;
use beqst::middleware::structured_logger::StructuredLogger;
use beqst::middleware::trace_span::TraceSpan;
use beqst::routes;
use beqst::state::app_state::AppState;

type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builds a test service with the production middleware stack minus rate
/// limiting and CORS.
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

    pub fn with_prod_routes(mut self) -> Self {
        self.route_config = Some(Box::new(routes::configure) as RouteConfigFn);
        self
    }

    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Some(Box::new(config_fn) as RouteConfigFn);
        self
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let route_config = self.route_config;

        test::init_service(
            App::new()
                .wrap(SecurityHeaders)
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

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}

/// Sends `req` through `app` inside the test-owned transaction.
///
/// The clone placed in the request extensions is taken back out before the
/// response is returned, so the caller can still roll back while holding it.
pub async fn call_in_txn<S>(app: &S, shared: &SharedTxn, req: test::TestRequest) -> ServiceResponse
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = req.to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(app, req).await;
    resp.request().extensions_mut().remove::<SharedTxn>();
    resp
}
