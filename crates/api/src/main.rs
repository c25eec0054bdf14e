use anyhow::Context;

use rackline_api::app::{build_app, services::build_services};
use rackline_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rackline_observability::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let app = build_app(build_services(config.ledger));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        max_conflict_retries = config.ledger.max_conflict_retries,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
