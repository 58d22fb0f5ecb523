//! Invoice service entry point

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use acme_invoices::config::AppConfig;
use acme_invoices::server;
use acme_invoices::storage::PostgresInvoiceStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store = PostgresInvoiceStore::connect(&config.database_url).await?;
    store.migrate().await?;

    let app = server::router(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "invoice service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
