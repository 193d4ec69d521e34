// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Serving and dialing the catalog over TCP or a Unix domain socket.

use crate::adapters::grpc::{CatalogGrpcService, DeadlineLayer};
use crate::config::{CatalogdConfig, TransportMode};
use crate::domain::CatalogService;
use anyhow::{Context, Result};
use std::future::Future;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Server};
use tracing::info;

#[cfg(unix)]
use hyper_util::rt::TokioIo;
#[cfg(unix)]
use std::path::Path;
#[cfg(unix)]
use tokio::net::{UnixListener, UnixStream};
#[cfg(unix)]
use tokio_stream::wrappers::UnixListenerStream;
#[cfg(unix)]
use tonic::transport::{Endpoint, Uri};
#[cfg(unix)]
use tower::service_fn;
#[cfg(unix)]
use tracing::warn;

/// Serve `service` on the configured transport until `shutdown` resolves.
pub async fn serve<C, F>(
    config: &CatalogdConfig,
    service: CatalogGrpcService<C>,
    shutdown: F,
) -> Result<()>
where
    C: CatalogService + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    match config.transport_mode {
        TransportMode::Tcp => {
            let addr = config.socket_addr()?;
            let listener = TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {addr}"))?;
            serve_with_listener(listener, service, shutdown).await
        }
        TransportMode::Unix => serve_on_unix_socket(&config.grpc_socket, service, shutdown).await,
    }
}

/// Serve on an already bound TCP listener.
pub async fn serve_with_listener<C, F>(
    listener: TcpListener,
    service: CatalogGrpcService<C>,
    shutdown: F,
) -> Result<()>
where
    C: CatalogService + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "gRPC server listening on tcp");

    Server::builder()
        .layer(DeadlineLayer)
        .add_service(service.into_server())
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .context("gRPC server terminated with an error")?;

    info!(%addr, "gRPC server stopped");
    Ok(())
}

#[cfg(unix)]
pub async fn serve_on_unix_socket<C, F>(
    socket_path: &str,
    service: CatalogGrpcService<C>,
    shutdown: F,
) -> Result<()>
where
    C: CatalogService + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let path = Path::new(socket_path);

    // Remove socket file if it already exists
    if path.exists() {
        info!(socket = %socket_path, "Removing existing socket file");
        std::fs::remove_file(path)
            .with_context(|| format!("removing stale socket {socket_path}"))?;
    }

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        info!(dir = %parent.display(), "Creating socket directory");
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let listener =
        UnixListener::bind(path).with_context(|| format!("binding unix socket {socket_path}"))?;

    // 0660: owner and group can read/write
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o660);
        std::fs::set_permissions(path, permissions)
            .with_context(|| format!("setting permissions on {socket_path}"))?;
    }

    info!(socket = %socket_path, "gRPC server listening on unix socket");

    let served = Server::builder()
        .layer(DeadlineLayer)
        .add_service(service.into_server())
        .serve_with_incoming_shutdown(UnixListenerStream::new(listener), shutdown)
        .await;

    if path.exists() {
        warn!(socket = %socket_path, "Cleaning up socket file");
        let _ = std::fs::remove_file(path);
    }

    served.context("gRPC server terminated with an error")?;
    Ok(())
}

#[cfg(not(unix))]
pub async fn serve_on_unix_socket<C, F>(
    _socket_path: &str,
    _service: CatalogGrpcService<C>,
    _shutdown: F,
) -> Result<()>
where
    C: CatalogService + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    anyhow::bail!("unix sockets are not supported on this platform; use the tcp transport")
}

/// Open a client channel to a catalog daemon using the same transport settings.
pub async fn connect(config: &CatalogdConfig) -> Result<Channel> {
    match config.transport_mode {
        TransportMode::Tcp => {
            let endpoint = format!("http://{}", config.grpc_addr);
            let channel = Channel::from_shared(endpoint.clone())
                .with_context(|| format!("invalid endpoint {endpoint}"))?
                .connect()
                .await
                .with_context(|| format!("connecting to {endpoint}"))?;
            Ok(channel)
        }
        TransportMode::Unix => connect_unix(&config.grpc_socket).await,
    }
}

#[cfg(unix)]
async fn connect_unix(socket_path: &str) -> Result<Channel> {
    let socket_path = socket_path.to_string();
    let target = socket_path.clone();
    // The URI is required by the endpoint but ignored by the connector.
    let channel = Endpoint::try_from("http://[::]:50052")?
        .connect_with_connector(service_fn(move |_: Uri| {
            let target = target.clone();
            async move { Ok::<_, std::io::Error>(TokioIo::new(UnixStream::connect(target).await?)) }
        }))
        .await
        .with_context(|| format!("connecting to unix://{socket_path}"))?;
    Ok(channel)
}

#[cfg(not(unix))]
async fn connect_unix(_socket_path: &str) -> Result<Channel> {
    anyhow::bail!("unix sockets are not supported on this platform; use the tcp transport")
}
