//! Shared helpers for the service integration tests.
//!
//! Every server binds `127.0.0.1:0` and is driven over a real socket. The
//! servers run on the Actix system owned by `#[actix_web::test]`.

#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpResponse, HttpServer, web};
use awc::Client;
use serde_json::Value;
use storefront::inbound::http::health::HealthState;
use storefront::outbound::users_service::HttpUserDirectory;
use storefront::server::{RunningServer, create_products_server, create_users_server};
use url::Url;

/// Users service lookup timeout used by the products service under test.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_millis(300);

fn loopback() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

/// A server spawned onto the current Actix system.
pub struct TestServer {
    base_url: String,
    handle: ServerHandle,
}

impl TestServer {
    fn spawn(running: RunningServer) -> Self {
        let RunningServer { server, addr } = running;
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Stop without waiting for in-flight requests, so stalled stubs do not
    /// hold up the test.
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Start a real users service.
pub fn users_service() -> TestServer {
    let running = create_users_server(web::Data::new(HealthState::new()), loopback())
        .expect("users service binds");
    TestServer::spawn(running)
}

/// Start a real products service resolving owners against `users_base_url`.
pub fn products_service(users_base_url: &str) -> TestServer {
    let base = Url::parse(users_base_url).expect("valid users service URL");
    let directory = HttpUserDirectory::new(base, LOOKUP_TIMEOUT).expect("client builds");
    let running = create_products_server(web::Data::new(HealthState::new()), loopback(), directory)
        .expect("products service binds");
    TestServer::spawn(running)
}

/// A URL on a loopback port nothing listens on.
pub fn refused_users_url() -> String {
    let listener = TcpListener::bind(loopback()).expect("ephemeral port");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{addr}/api/users/")
}

/// How a stub users service answers `GET /api/users/{id}`.
#[derive(Debug, Clone, Copy)]
pub enum StubBehaviour {
    Respond(StatusCode, &'static str),
    Stall(Duration),
    /// Answer 302 pointing at `/real/{id}`, which serves a valid user.
    Redirect,
}

/// A users service double that counts lookups.
pub struct StubUsersService {
    pub server: TestServer,
    hits: Arc<AtomicUsize>,
}

impl StubUsersService {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn users_url(&self) -> String {
        self.server.url("/api/users/")
    }
}

async fn stub_user(
    hits: web::Data<AtomicUsize>,
    behaviour: web::Data<StubBehaviour>,
    id: web::Path<i64>,
) -> HttpResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    match **behaviour {
        StubBehaviour::Respond(status, body) => HttpResponse::build(status)
            .content_type("application/json")
            .body(body),
        StubBehaviour::Stall(delay) => {
            actix_web::rt::time::sleep(delay).await;
            HttpResponse::Ok()
                .content_type("application/json")
                .body(r#"{"id":9,"name":"Late","email":"late@example.com"}"#)
        }
        StubBehaviour::Redirect => HttpResponse::Found()
            .insert_header((header::LOCATION, format!("/real/{}", id.into_inner())))
            .finish(),
    }
}

async fn redirected_user() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(r#"{"id":9,"name":"Ada","email":"ada@example.com"}"#)
}

/// Start a stub users service.
pub fn stub_users_service(behaviour: StubBehaviour) -> StubUsersService {
    let hits = Arc::new(AtomicUsize::new(0));
    let app_hits = web::Data::from(hits.clone());
    let app_behaviour = web::Data::new(behaviour);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_hits.clone())
            .app_data(app_behaviour.clone())
            .route("/api/users/{id}", web::get().to(stub_user))
            .route("/real/{id}", web::get().to(redirected_user))
    })
    .workers(1)
    .bind(loopback())
    .expect("stub binds");
    let addr = server.addrs()[0];
    let server = TestServer::spawn(RunningServer {
        server: server.run(),
        addr,
    });
    StubUsersService { server, hits }
}

/// Send a JSON request and return the status plus the decoded body
/// (`Value::Null` when empty).
pub async fn send_json(
    method: actix_web::http::Method,
    url: String,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let request = Client::default().request(method, url);
    let mut response = match payload {
        Some(payload) => request.send_json(&payload).await.expect("json request"),
        None => request.send().await.expect("request"),
    };
    let status = response.status();
    let body = response.body().await.expect("body");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, json)
}
