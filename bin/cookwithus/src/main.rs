//! # CookWithUs Binary
//!
//! The entry point that assembles the application from configuration.

use std::sync::Arc;

use anyhow::Context;
use cw_api::{router, AppState};
use cw_config::{IdStrategy, LogFormat, LogSettings, Settings};
use cw_core::IdGenerator;
use cw_services::Kitchen;
use cw_store_memory::{MemoryKitchenRepo, SequentialIds, UuidIds};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading configuration")?;
    init_tracing(&settings.log);

    // 1. Storage and identity
    let ids: Arc<dyn IdGenerator> = match settings.ids.strategy {
        IdStrategy::Uuid => Arc::new(UuidIds),
        IdStrategy::Sequential => Arc::new(SequentialIds::default()),
    };
    let kitchen = Kitchen::new(Arc::new(MemoryKitchenRepo::new()), ids);

    // 2. HTTP surface
    let app = router(AppState::new(kitchen), settings.api.mount_point());

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(
        %addr,
        base_path = %settings.api.base_path,
        ids = ?settings.ids.strategy,
        "CookWithUs listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

fn init_tracing(log: &LogSettings) {
    // RUST_LOG wins over the configured filter.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("ctrl-c received, draining connections");
}
