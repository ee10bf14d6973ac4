//! Maanushi JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use maanushi_app::context::AppContext;

use crate::{
    auth::cookies::ADMIN_TOKEN_COOKIE,
    config::ServerConfig,
    observability::{Observability, request_logging},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod admins;
mod auth;
mod carts;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod products;
mod reports;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod users;

#[expect(
    clippy::print_stderr,
    reason = "logging not initialized yet, must use eprintln for startup errors"
)]
fn exit_before_logging(message: &str) -> ! {
    eprintln!("{message}");

    process::exit(1);
}

/// Maanushi JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load()
        .unwrap_or_else(|e| exit_before_logging(&format!("Configuration error: {e}")));

    let observability = Observability::init(&config)
        .unwrap_or_else(|e| exit_before_logging(&format!("Logging error: {e}")));

    let session_secret = match config.auth.session_secret() {
        Ok(secret) => secret,
        Err(secret_error) => {
            error!("invalid session secret: {secret_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(
        log_format = observability.log_format(),
        "Starting server on {addr}"
    );

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.database_max_connections,
        session_secret,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(State::from_app_context(
            app,
            config.auth.session_cookie_secure,
        )))
        .push(router::app_router());

    let doc = OpenApi::new("Maanushi API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "admin_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(ADMIN_TOKEN_COOKIE))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
