mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    // Loaded before the subscriber so `.env` can set `RUST_LOG`.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = routes::app(config.leptos_options);
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.addr, "portfolio listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
