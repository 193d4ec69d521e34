// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! gRPC ProductCatalogService implementation
//! Driving adapter that forwards each RPC to the catalog port

use crate::domain::{CatalogService, ListQuery, ProductDraft, ProductUpdate};
use crate::proto::product_catalog_service_server::{
    ProductCatalogService, ProductCatalogServiceServer,
};
use crate::proto::{
    CreateProductRequest, CreateProductResponse, DeleteProductRequest, DeleteProductResponse,
    GetProductBySkuRequest, GetProductBySkuResponse, GetProductRequest, GetProductResponse,
    ListProductsRequest, ListProductsResponse, UpdateProductRequest, UpdateProductResponse,
};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use super::context::{bounded, call_context};
use super::mappers::{page_to_proto, product_to_proto};
use super::status::{Operation, to_status};

/// gRPC service implementation
///
/// Stateless apart from the shared catalog handle; safe to call concurrently.
pub struct CatalogGrpcService<C> {
    catalog: Arc<C>,
}

impl<C> CatalogGrpcService<C>
where
    C: CatalogService + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn into_server(self) -> ProductCatalogServiceServer<Self> {
        ProductCatalogServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl<C> ProductCatalogService for CatalogGrpcService<C>
where
    C: CatalogService + 'static,
{
    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<GetProductResponse>, Status> {
        let ctx = call_context(&request);
        let req = request.into_inner();

        info!(id = %req.id, "gRPC GetProduct request received");

        let product = bounded(&ctx, self.catalog.find_by_id(&ctx, &req.id))
            .await
            .map_err(|e| to_status(Operation::GetProduct, e))?;

        debug!(id = %product.id, sku = %product.sku, "Product fetched");

        Ok(Response::new(GetProductResponse {
            product: Some(product_to_proto(&product)),
        }))
    }

    async fn list_products(
        &self,
        request: Request<ListProductsRequest>,
    ) -> Result<Response<ListProductsResponse>, Status> {
        let ctx = call_context(&request);
        let query = ListQuery::from(request.into_inner());

        info!(
            filter = %query.filter,
            page = query.page,
            page_size = query.page_size,
            "gRPC ListProducts request received"
        );

        let page = bounded(&ctx, self.catalog.list(&ctx, &query))
            .await
            .map_err(|e| to_status(Operation::ListProducts, e))?;

        debug!(
            count = page.products.len(),
            next_page = %page.next_page,
            "Products listed"
        );

        Ok(Response::new(page_to_proto(page)))
    }

    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let ctx = call_context(&request);
        let draft = ProductDraft::from(request.into_inner());

        info!(sku = %draft.sku, name = %draft.name, "gRPC CreateProduct request received");

        let product = bounded(&ctx, self.catalog.create(&ctx, draft))
            .await
            .map_err(|e| to_status(Operation::CreateProduct, e))?;

        debug!(id = %product.id, sku = %product.sku, "Product created");

        Ok(Response::new(CreateProductResponse {
            product: Some(product_to_proto(&product)),
        }))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<UpdateProductResponse>, Status> {
        let ctx = call_context(&request);
        let update = ProductUpdate::from(request.into_inner());

        info!(id = %update.id, "gRPC UpdateProduct request received");

        let product = bounded(&ctx, self.catalog.update(&ctx, update))
            .await
            .map_err(|e| to_status(Operation::UpdateProduct, e))?;

        debug!(id = %product.id, "Product updated");

        Ok(Response::new(UpdateProductResponse {
            product: Some(product_to_proto(&product)),
        }))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status> {
        let ctx = call_context(&request);
        let req = request.into_inner();

        info!(id = %req.id, "gRPC DeleteProduct request received");

        bounded(&ctx, self.catalog.delete(&ctx, &req.id))
            .await
            .map_err(|e| to_status(Operation::DeleteProduct, e))?;

        debug!(id = %req.id, "Product deleted");

        Ok(Response::new(DeleteProductResponse {}))
    }

    async fn get_product_by_sku(
        &self,
        request: Request<GetProductBySkuRequest>,
    ) -> Result<Response<GetProductBySkuResponse>, Status> {
        let ctx = call_context(&request);
        let req = request.into_inner();

        info!(sku = %req.sku, "gRPC GetProductBySKU request received");

        let product = bounded(&ctx, self.catalog.find_by_sku(&ctx, &req.sku))
            .await
            .map_err(|e| to_status(Operation::GetProductBySku, e))?;

        debug!(id = %product.id, sku = %product.sku, "Product fetched by sku");

        Ok(Response::new(GetProductBySkuResponse {
            product: Some(product_to_proto(&product)),
        }))
    }
}
