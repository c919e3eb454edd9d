mod app;
mod config;
mod error;
mod handlers;
mod routes;

use config::Config;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("demo-site starting");

    let config = Config::from_env()?;
    config.log_startup();

    let listener =
        TcpListener::bind((config.service_host.as_str(), config.service_port)).await?;

    axum::serve(listener, app::router())
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
