//! Backend entry-point: loads settings, prepares the contingent store and
//! serves the HTTP API.

mod server;

use std::path::Path;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, run_pending_migrations};
use server::{AppSettings, ServerConfig, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn load_session_key(path: &Path, allow_ephemeral: bool) -> Result<Key> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) if cfg!(debug_assertions) || allow_ephemeral => {
            warn!(path = %path.display(), error = %e, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(e) => Err(eyre!(
            "failed to read session key at {}: {e}",
            path.display()
        )),
    }
}

async fn build_config(settings: &AppSettings) -> Result<ServerConfig> {
    let key = load_session_key(&settings.session_key_file(), settings.allow_ephemeral_key())?;
    let bind_addr = settings.bind_addr().wrap_err("invalid bind address")?;
    let config = ServerConfig::new(key, settings.cookie_secure(), SameSite::Lax, bind_addr);

    let Some(pool_config) = settings.pool_config() else {
        warn!("no database url configured; contingents are kept in memory");
        return Ok(config);
    };
    if settings.run_migrations() {
        run_pending_migrations(pool_config.database_url().to_owned())
            .await
            .wrap_err("failed to apply migrations")?;
    }
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build database pool")?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    let config = build_config(&settings).await?;
    let bind_addr = config.bind_addr;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "roster backend listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result.map_err(Into::into)
}
