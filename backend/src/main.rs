//! # Kelo Session API
//!
//! Binary entry point. All server logic lives in `lib-web`; this crate only
//! loads the environment and starts the server.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig {
        bind_address: "127.0.0.1:4000".to_string(),
        ..Default::default()
    };

    start_server(config).await
}
