// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use async_trait::async_trait;
use dd_catalog::adapters::grpc::CatalogGrpcService;
use dd_catalog::domain::{
    CallContext, CatalogError, CatalogService, ListQuery, Product, ProductDraft, ProductPage,
    ProductUpdate,
};
use dd_catalog::proto::product_catalog_service_client::ProductCatalogServiceClient;
use dd_catalog::transport;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tonic::transport::Channel;

/// A catalog daemon served on an ephemeral loopback port for the duration of a test.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<anyhow::Result<()>>>,
}

impl TestServer {
    pub async fn start<C>(catalog: Arc<C>) -> Self
    where
        C: CatalogService + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind loopback listener");
        let addr = listener.local_addr().expect("listener has no local addr");
        let (tx, rx) = oneshot::channel::<()>();

        let service = CatalogGrpcService::new(catalog);
        let handle = tokio::spawn(transport::serve_with_listener(listener, service, async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    pub async fn client(&self) -> ProductCatalogServiceClient<Channel> {
        ProductCatalogServiceClient::connect(format!("http://{}", self.addr))
            .await
            .expect("failed to connect to test server")
    }

    /// Stop the server and wait for it to exit cleanly.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .expect("server task panicked")
                .expect("server returned an error");
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Catalog whose every call fails with the same condition.
pub struct FailingCatalog(pub CatalogError);

#[async_trait]
impl CatalogService for FailingCatalog {
    async fn find_by_id(&self, _: &CallContext, _: &str) -> Result<Product, CatalogError> {
        Err(self.0.clone())
    }

    async fn list(&self, _: &CallContext, _: &ListQuery) -> Result<ProductPage, CatalogError> {
        Err(self.0.clone())
    }

    async fn create(&self, _: &CallContext, _: ProductDraft) -> Result<Product, CatalogError> {
        Err(self.0.clone())
    }

    async fn update(&self, _: &CallContext, _: ProductUpdate) -> Result<Product, CatalogError> {
        Err(self.0.clone())
    }

    async fn delete(&self, _: &CallContext, _: &str) -> Result<(), CatalogError> {
        Err(self.0.clone())
    }

    async fn find_by_sku(&self, _: &CallContext, _: &str) -> Result<Product, CatalogError> {
        Err(self.0.clone())
    }
}

/// Catalog that answers every call only after `delay`.
pub struct SlowCatalog {
    pub delay: Duration,
}

impl SlowCatalog {
    async fn stall(&self) -> CatalogError {
        tokio::time::sleep(self.delay).await;
        CatalogError::unclassified("slow catalog finished")
    }
}

#[async_trait]
impl CatalogService for SlowCatalog {
    async fn find_by_id(&self, _: &CallContext, _: &str) -> Result<Product, CatalogError> {
        Err(self.stall().await)
    }

    async fn list(&self, _: &CallContext, _: &ListQuery) -> Result<ProductPage, CatalogError> {
        Err(self.stall().await)
    }

    async fn create(&self, _: &CallContext, _: ProductDraft) -> Result<Product, CatalogError> {
        Err(self.stall().await)
    }

    async fn update(&self, _: &CallContext, _: ProductUpdate) -> Result<Product, CatalogError> {
        Err(self.stall().await)
    }

    async fn delete(&self, _: &CallContext, _: &str) -> Result<(), CatalogError> {
        Err(self.stall().await)
    }

    async fn find_by_sku(&self, _: &CallContext, _: &str) -> Result<Product, CatalogError> {
        Err(self.stall().await)
    }
}

pub fn widget(sku: &str) -> dd_catalog::proto::Product {
    dd_catalog::proto::Product {
        sku: sku.to_string(),
        name: "Widget".to_string(),
        description: "A very useful widget".to_string(),
        price: 9.99,
        stock_quantity: 5,
        category: "tools".to_string(),
        image_url: "https://img.example.com/widget.png".to_string(),
        is_active: true,
        attributes: [("color".to_string(), "red".to_string())].into(),
        ..Default::default()
    }
}
