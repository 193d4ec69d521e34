// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! In-Memory Catalog
//! Thread-safe implementation of the CatalogService port

use crate::domain::{
    CallContext, CatalogError, CatalogService, ListQuery, Product, ProductDraft, ProductId,
    ProductPage, ProductUpdate, ProductValidator,
};
use anyhow::Context;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Thread-safe in-memory product catalog
///
/// Enforces the catalog's business rules (see `ProductValidator`) and SKU uniqueness.
/// Suitable for single-instance deployments and tests.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a YAML list of product drafts and create each one.
    /// Returns the number of products created.
    pub fn load_seed(&self, path: &Path) -> anyhow::Result<usize> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let drafts: Vec<ProductDraft> = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing seed file {}", path.display()))?;

        let count = drafts.len();
        for draft in drafts {
            let sku = draft.sku.clone();
            self.insert_draft(draft)
                .with_context(|| format!("seeding product '{sku}'"))?;
        }

        info!(path = %path.display(), count, "Seeded catalog");
        Ok(count)
    }

    pub fn len(&self) -> Result<usize, CatalogError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CatalogError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ProductId, Product>>, CatalogError> {
        self.products
            .read()
            .map_err(|_| CatalogError::unclassified("catalog storage lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ProductId, Product>>, CatalogError> {
        self.products
            .write()
            .map_err(|_| CatalogError::unclassified("catalog storage lock poisoned"))
    }

    fn insert_draft(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        ProductValidator::validate_draft(&draft)?;

        let mut products = self.write()?;
        if products.values().any(|p| p.sku == draft.sku) {
            return Err(CatalogError::unclassified(format!(
                "product with sku '{}' already exists",
                draft.sku
            )));
        }

        let product = Product::from_draft(ProductId::generate(), draft);
        products.insert(product.id, product.clone());

        info!(
            id = %product.id,
            sku = %product.sku,
            total_products = products.len(),
            "Product saved"
        );

        Ok(product)
    }
}

fn parse_id(id: &str) -> Result<ProductId, CatalogError> {
    id.parse::<ProductId>()
        .map_err(|e| CatalogError::unclassified(e.to_string()))
}

fn check_deadline(ctx: &CallContext) -> Result<(), CatalogError> {
    if ctx.is_expired() {
        return Err(CatalogError::DeadlineExceeded);
    }
    Ok(())
}

fn matches_filter(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &product.sku,
        &product.name,
        &product.description,
        &product.category,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn find_by_id(&self, ctx: &CallContext, id: &str) -> Result<Product, CatalogError> {
        check_deadline(ctx)?;
        let id = parse_id(id)?;
        self.read()?
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_hex()))
    }

    async fn list(
        &self,
        ctx: &CallContext,
        query: &ListQuery,
    ) -> Result<ProductPage, CatalogError> {
        check_deadline(ctx)?;

        let page = query.page.max(1);
        let page_size = if query.page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            query.page_size.min(MAX_PAGE_SIZE)
        };
        let needle = query.filter.trim().to_lowercase();

        let mut matching: Vec<Product> = self
            .read()?
            .values()
            .filter(|p| matches_filter(p, &needle))
            .cloned()
            .collect();
        matching.sort_by_key(|p| p.id);

        let skip = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let take = page_size as usize;
        let has_more = matching.len() > skip.saturating_add(take);
        let products: Vec<Product> = matching.into_iter().skip(skip).take(take).collect();

        debug!(
            filter = %needle,
            page,
            page_size,
            returned = products.len(),
            has_more,
            "Listed products"
        );

        Ok(ProductPage {
            products,
            next_page: if has_more {
                (page + 1).to_string()
            } else {
                String::new()
            },
        })
    }

    async fn create(
        &self,
        ctx: &CallContext,
        draft: ProductDraft,
    ) -> Result<Product, CatalogError> {
        check_deadline(ctx)?;
        self.insert_draft(draft)
    }

    async fn update(
        &self,
        ctx: &CallContext,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        check_deadline(ctx)?;
        let id = parse_id(&update.id)?;

        let mut products = self.write()?;
        let current = products
            .get(&id)
            .ok_or_else(|| CatalogError::NotFound(id.to_hex()))?;

        let candidate = current.merged_with(&update);
        ProductValidator::validate_product(&candidate)?;

        if candidate.sku != current.sku
            && products
                .values()
                .any(|p| p.id != id && p.sku == candidate.sku)
        {
            return Err(CatalogError::unclassified(format!(
                "product with sku '{}' already exists",
                candidate.sku
            )));
        }

        products.insert(id, candidate.clone());
        debug!(id = %id, "Product replaced");
        Ok(candidate)
    }

    async fn delete(&self, ctx: &CallContext, id: &str) -> Result<(), CatalogError> {
        check_deadline(ctx)?;
        let id = parse_id(id)?;

        let mut products = self.write()?;
        products
            .remove(&id)
            .ok_or_else(|| CatalogError::NotFound(id.to_hex()))?;

        info!(
            id = %id,
            remaining_products = products.len(),
            "Product deleted"
        );
        Ok(())
    }

    async fn find_by_sku(&self, ctx: &CallContext, sku: &str) -> Result<Product, CatalogError> {
        check_deadline(ctx)?;
        self.read()?
            .values()
            .find(|p| p.sku == sku)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("with sku '{sku}'")))
    }
}
