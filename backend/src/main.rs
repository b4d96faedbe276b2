//! Backend entry-point: loads settings, prepares storage and runs the server.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dormitory::inbound::http::health::HealthState;
use dormitory::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, ServerSettings, create_server};

fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}

async fn server_config(settings: &ServerSettings) -> Result<ServerConfig> {
    let bind_addr = settings.bind_addr().wrap_err("invalid DORMITORY_HOST")?;
    let config = ServerConfig::new(bind_addr);
    let Some(url) = settings.database_url() else {
        return Ok(config);
    };

    if settings.skip_migrations {
        info!("skipping database migrations");
    } else {
        run_migrations(url)
            .await
            .wrap_err("failed to apply database migrations")?;
    }
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
        .await
        .wrap_err("failed to build database pool")?;
    Ok(config.with_db_pool(pool))
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let config = server_config(&settings).await?;
    let bind_addr = config.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "dormitory server listening");

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            health_state.mark_draining();
            handle.stop(true).await;
        }
    });

    server.await.wrap_err("server terminated with an error")
}
