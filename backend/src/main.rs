//! Backend entry-point: wires settings, migrations, the connection pool,
//! REST endpoints, and OpenAPI docs.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::ports::FixtureTokenVerifier;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::server::{Settings, build_http_state, configure_api};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    run_pending_migrations(settings.database_url())
        .await
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(settings.database_url()))
        .await
        .map_err(std::io::Error::other)?;

    // The bearer token is trusted as the subject id; deployments put a
    // JWT-verifying gateway in front and swap this implementation there.
    let state = web::Data::new(build_http_state(
        pool,
        Arc::new(DefaultClock),
        Arc::new(FixtureTokenVerifier),
    ));

    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(state.clone())
            .wrap(Trace)
            .configure(configure_api)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .bind(settings.bind_addr())?;

    health_state.mark_ready();
    server.run().await
}
