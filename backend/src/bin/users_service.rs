//! Users service entry-point.

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use storefront::inbound::http::health::HealthState;
use storefront::server::{
    DRAIN_GRACE, UsersServiceSettings, create_users_server, drain_on, shutdown_signal,
};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = UsersServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load users service settings: {error}"))?;
    let bind_addr = settings.bind_addr()?;

    let health_state = web::Data::new(HealthState::new());
    let running = create_users_server(health_state.clone(), bind_addr)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %running.addr, "users service listening");

    actix_web::rt::spawn(drain_on(
        shutdown_signal(),
        health_state,
        running.server.handle(),
        DRAIN_GRACE,
    ));
    running.server.await?;
    Ok(())
}
