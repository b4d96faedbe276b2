//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use dormitory::Trace;
#[cfg(debug_assertions)]
use dormitory::doc::ApiDoc;
use dormitory::inbound::http::configure_api;
use dormitory::inbound::http::health::{HealthState, live, ready};
use dormitory::inbound::http::state::HttpState;
use state_builders::build_http_state;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server and mark the instance ready once bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when metrics registration or binding fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    #[cfg(feature = "metrics")]
    let prometheus = metrics::build_metrics()?;

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());
        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());
        app
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use dormitory::outbound::memory::InMemoryStore;
    use mockable::DefaultClock;
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn app_serves_api_probes_and_trace_header() {
        let store = Arc::new(InMemoryStore::with_fixtures());
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let state = web::Data::new(state_builders::in_memory_state(
            &store,
            Arc::new(DefaultClock),
        ));
        let app = actix_test::init_service(build_app(health, state)).await;

        let probe =
            actix_test::TestRequest::get().uri("/health/ready").to_request();
        assert_eq!(actix_test::call_service(&app, probe).await.status(), StatusCode::OK);

        let rooms = actix_test::TestRequest::get()
            .uri("/api/manager/100/rooms")
            .to_request();
        let response = actix_test::call_service(&app, rooms).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("trace-id"));
    }
}
