//! Products service entry-point.

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use storefront::inbound::http::health::HealthState;
use storefront::outbound::users_service::HttpUserDirectory;
use storefront::server::{
    DRAIN_GRACE, ProductsServiceSettings, create_products_server, drain_on, shutdown_signal,
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

    let settings = ProductsServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load products service settings: {error}"))?;
    let bind_addr = settings.bind_addr()?;
    let users_service_url = settings.users_service_url()?;
    let timeout = settings.users_service_timeout()?;
    let directory = HttpUserDirectory::new(users_service_url, timeout)
        .wrap_err("failed to build users service client")?;

    let health_state = web::Data::new(HealthState::new());
    let running = create_products_server(health_state.clone(), bind_addr, directory)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(
        addr = %running.addr,
        users_service = %settings.users_service_url()?,
        timeout_ms = timeout.as_millis(),
        "products service listening"
    );

    actix_web::rt::spawn(drain_on(
        shutdown_signal(),
        health_state,
        running.server.handle(),
        DRAIN_GRACE,
    ));
    running.server.await?;
    Ok(())
}
