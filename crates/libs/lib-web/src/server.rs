//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! External capabilities (session verification, wallet lookup) are injected
//! into [`AppState`] as trait objects, so tests can swap the real service
//! clients for in-memory fakes.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, stamp_req};
use axum::routing::{get, post};
use axum::Router;
use lib_auth::{IdentityClient, SessionVerifier};
use lib_core::Config;
use lib_wallet::{SmartWalletClient, WalletDirectory};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub verifier: Arc<dyn SessionVerifier>,
    pub wallets: Arc<dyn WalletDirectory>,
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<dyn SessionVerifier> {
    fn from_ref(state: &AppState) -> Self {
        state.verifier.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<dyn WalletDirectory> {
    fn from_ref(state: &AppState) -> Self {
        state.wallets.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration.
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:4000")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:4000".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration loading/validation fails or the
/// listener cannot bind.
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(" KELO SESSION API STARTING");

    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    let config = Config::from_env()?;
    config.validate()?;

    let verifier: Arc<dyn SessionVerifier> =
        Arc::new(IdentityClient::new(config.identity_service_url.as_str()));
    let wallets: Arc<dyn WalletDirectory> =
        Arc::new(SmartWalletClient::new(config.wallet_service_url.as_str()));

    let state = AppState {
        config,
        verifier,
        wallets,
    };

    let app = create_router(state, server_config.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(&server_config.bind_address).await?;

    info!(" SERVER READY: http://{}", server_config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the main application router with all routes.
pub fn create_router(state: AppState, allowed_origins: Vec<String>) -> Router {
    use axum::http::{HeaderValue, Method};

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentials are allowed so the browser sends/clears the session cookie.
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ])
        .allow_credentials(true);

    Router::new()
        .route("/api/auth/verify", post(handlers::auth::verify))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/health", get(|| async { "OK" }))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "Route not found") })
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(log_requests))
        // Layers added later run first; stamping goes last so the request ID
        // exists before any logging runs.
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information.
fn log_server_info() {
    info!(" AUTH:");
    info!("   • POST /api/auth/verify");
    info!("   • POST /api/auth/logout");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
