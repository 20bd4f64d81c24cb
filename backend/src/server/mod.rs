//! Server construction and middleware wiring for both services.

mod config;
mod shutdown;

pub use config::{ProductsServiceSettings, SettingsError, UsersServiceSettings};
pub use shutdown::{DRAIN_GRACE, drain_on, shutdown_signal};

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::{ProductsApiDoc, UsersApiDoc};
use crate::domain::{ProductService, UserService};
use crate::inbound::http::error::{json_config, path_config};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::{ProductsState, UsersState};
use crate::inbound::http::{products, users};
use crate::outbound::persistence::{InMemoryProductRepository, InMemoryUserRepository};
use crate::outbound::users_service::HttpUserDirectory;

/// A started server together with the address its listener is bound to.
///
/// Binding to port `0` picks an ephemeral port; `addr` reports the real one.
pub struct RunningServer {
    pub server: Server,
    pub addr: SocketAddr,
}

fn build_products_app(
    health_state: web::Data<HealthState>,
    state: web::Data<ProductsState>,
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
        .app_data(state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(web::scope("/api").configure(products::configure))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ProductsApiDoc::openapi()),
    );

    app
}

fn build_users_app(
    health_state: web::Data<HealthState>,
    state: web::Data<UsersState>,
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
        .app_data(state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(web::scope("/api").configure(users::configure))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", UsersApiDoc::openapi()),
    );

    app
}

fn first_addr(addrs: &[SocketAddr]) -> std::io::Result<SocketAddr> {
    addrs
        .first()
        .copied()
        .ok_or_else(|| std::io::Error::other("server bound no listeners"))
}

/// Construct the products service.
///
/// The product store is created here and shared by every worker. Owner
/// lookups go through `directory`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_products_server(
    health_state: web::Data<HealthState>,
    bind_addr: SocketAddr,
    directory: HttpUserDirectory,
) -> std::io::Result<RunningServer> {
    let service = Arc::new(ProductService::new(
        Arc::new(InMemoryProductRepository::new()),
        Arc::new(directory),
    ));
    let state = web::Data::new(ProductsState::new(service.clone(), service));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_products_app(server_health_state.clone(), state.clone())
    })
    .disable_signals()
    .bind(bind_addr)?;
    let addr = first_addr(&server.addrs())?;
    let server = server.run();

    health_state.mark_ready();
    Ok(RunningServer { server, addr })
}

/// Construct the users service.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_users_server(
    health_state: web::Data<HealthState>,
    bind_addr: SocketAddr,
) -> std::io::Result<RunningServer> {
    let service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
    let state = web::Data::new(UsersState::new(service.clone(), service));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_users_app(server_health_state.clone(), state.clone())
    })
    .disable_signals()
    .bind(bind_addr)?;
    let addr = first_addr(&server.addrs())?;
    let server = server.run();

    health_state.mark_ready();
    Ok(RunningServer { server, addr })
}
