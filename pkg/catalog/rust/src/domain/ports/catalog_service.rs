// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Catalog collaborator port.
//! The gRPC adapter only ever talks to the catalog through this trait; storage and
//! business validation live behind it.

use crate::domain::{
    CallContext, CatalogError, ListQuery, Product, ProductDraft, ProductPage, ProductUpdate,
};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Look up by external id. Fails with `NotFound` or `Unclassified`.
    async fn find_by_id(&self, ctx: &CallContext, id: &str) -> Result<Product, CatalogError>;

    /// Filtered, paginated listing. Fails with `Unclassified` only.
    async fn list(&self, ctx: &CallContext, query: &ListQuery) -> Result<ProductPage, CatalogError>;

    /// Validate and persist a new product. Fails with one of the four validation
    /// conditions or `Unclassified`.
    async fn create(&self, ctx: &CallContext, draft: ProductDraft) -> Result<Product, CatalogError>;

    /// Apply a partial update. Fails with `NotFound`, a validation condition, or
    /// `Unclassified`.
    async fn update(
        &self,
        ctx: &CallContext,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError>;

    /// Fails with `NotFound` or `Unclassified`.
    async fn delete(&self, ctx: &CallContext, id: &str) -> Result<(), CatalogError>;

    /// Look up by business key. Fails with `NotFound` or `Unclassified`.
    async fn find_by_sku(&self, ctx: &CallContext, sku: &str) -> Result<Product, CatalogError>;
}
