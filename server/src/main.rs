#![recursion_limit = "256"]

mod config;
mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,monmatos=debug")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;

    let pool = db::init_pool(&config).await.expect("database init failed");
    let state = state::AppState::from_config(pool, config);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "monmatos listening");
    axum::serve(listener, app).await.expect("server failed");
}
