use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

use crate::config::{read_config, read_environment};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let environment = read_environment();
    let config = read_config().expect("Failed to read configuration");

    // Lazy pool: missing or wrong record-store configuration surfaces on
    // first use, not at startup.
    let connection_pool = PgPoolOptions::new().connect_lazy_with(config.database.with_db());

    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind server address");
    tracing::info!("listening on {address} ({environment})");

    let app = router::create(connection_pool, config, environment);
    axum::serve(listener, app)
        .await
        .expect("Server crashed");
}
