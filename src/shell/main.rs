use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use registration_ledger::shared::config::LedgerConfig;
use registration_ledger::shared::infrastructure::notifier::logging::TracingNotifier;
use registration_ledger::shell::{bootstrap, build_store, http, workers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = LedgerConfig::from_env()?;
    let store = build_store(&config.store);
    let state = match bootstrap(&config, store.clone(), Arc::new(TracingNotifier)).await {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("ledger failed to start: {error:#}");
            return Err(error);
        }
    };

    if let Some(period) = config.backup_interval {
        workers::spawn_backup_worker(store, period);
    }

    let app = http::router(state);
    tracing::info!(addr = %config.http_addr, store = ?config.store, "registration ledger listening");
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;
    Ok(())
}
