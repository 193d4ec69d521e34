// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use anyhow::Result;
use dd_catalog::adapters::grpc::CatalogGrpcService;
use dd_catalog::config::CatalogdConfig;
use dd_catalog::infrastructure::InMemoryCatalog;
use dd_catalog::transport;
use std::future::Future;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = CatalogdConfig::load()?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?config.transport_mode,
        "dd-catalogd starting"
    );

    let catalog = Arc::new(InMemoryCatalog::new());
    if let Some(seed) = &config.seed_file {
        catalog.load_seed(seed)?;
    }

    let service = CatalogGrpcService::new(catalog);
    transport::serve(&config, service, shutdown_signal()?).await?;

    info!("dd-catalogd shutting down");
    Ok(())
}

#[cfg(unix)]
fn shutdown_signal() -> Result<impl Future<Output = ()> + Send + 'static> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    Ok(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("received SIGTERM"),
            _ = sigint.recv() => info!("received SIGINT"),
        }
    })
}

#[cfg(not(unix))]
fn shutdown_signal() -> Result<impl Future<Output = ()> + Send + 'static> {
    Ok(async {
        let _ = tokio::signal::ctrl_c().await;
        info!("received Ctrl-C");
    })
}
