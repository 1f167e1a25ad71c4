//! Taproom JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use thiserror::Error;
use tracing::{error, info};

use taproom_app::{
    auth::{AuthService, BasicUser, ConfiguredAuthService, Secret, TokenSettings},
    context::{AppContext, AppInitError, StartupOptions},
};

use crate::{
    config::{ServerConfig, storage::StorageBackend},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod beers;
mod categories;
mod config;
mod customers;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[derive(Debug, Error)]
enum StartupError {
    #[error("DATABASE_URL is required for postgres storage")]
    MissingDatabaseUrl,

    #[error(transparent)]
    App(#[from] AppInitError),
}

async fn build_app_context(config: &ServerConfig) -> Result<AppContext, StartupError> {
    let auth: Arc<dyn AuthService> = Arc::new(ConfiguredAuthService::new(
        &BasicUser {
            username: config.auth.username.clone(),
            password: Secret::new(config.auth.password.as_str()),
        },
        TokenSettings::new(
            Secret::new(config.auth.jwt_secret.as_str()),
            config.auth.jwt_issuer.as_str(),
        ),
    ));

    let storage = &config.storage;

    match storage.backend {
        StorageBackend::Postgres => {
            let url = storage
                .database_url
                .as_deref()
                .ok_or(StartupError::MissingDatabaseUrl)?;

            let options = StartupOptions {
                run_migrations: storage.run_migrations,
                seed_data: storage.seed_data,
            };

            Ok(AppContext::from_database_url(url, auth, options).await?)
        }
        StorageBackend::Memory => Ok(AppContext::in_memory(auth, storage.seed_data)),
    }
}

/// Taproom JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_logging(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let app = match build_app_context(&config).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(storage = ?config.storage.backend, "starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(router::app_router());

    let doc = OpenApi::new("Taproom API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        )
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}
