// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Business rules a product must satisfy before the catalog stores it.

use crate::domain::{CatalogError, Product, ProductDraft};

const MAX_SKU_LEN: usize = 64;
const MAX_NAME_LEN: usize = 200;

pub struct ProductValidator;

impl ProductValidator {
    pub fn validate_draft(draft: &ProductDraft) -> Result<(), CatalogError> {
        Self::validate_fields(&draft.sku, &draft.name, draft.price, draft.stock_quantity)
    }

    pub fn validate_product(product: &Product) -> Result<(), CatalogError> {
        Self::validate_fields(
            &product.sku,
            &product.name,
            product.price,
            product.stock_quantity,
        )
    }

    fn validate_fields(
        sku: &str,
        name: &str,
        price: f64,
        stock_quantity: i32,
    ) -> Result<(), CatalogError> {
        Self::validate_sku(sku)?;
        Self::validate_name(name)?;
        Self::validate_price(price)?;
        Self::validate_stock_quantity(stock_quantity)
    }

    pub fn validate_sku(sku: &str) -> Result<(), CatalogError> {
        if sku.trim().is_empty() {
            return Err(CatalogError::InvalidSku("must not be empty".to_string()));
        }
        if sku.len() > MAX_SKU_LEN {
            return Err(CatalogError::InvalidSku(format!(
                "'{sku}' exceeds {MAX_SKU_LEN} characters"
            )));
        }
        if let Some(c) = sku
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(CatalogError::InvalidSku(format!(
                "'{sku}' contains invalid character '{c}'"
            )));
        }
        Ok(())
    }

    pub fn validate_name(name: &str) -> Result<(), CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidName("must not be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CatalogError::InvalidName(format!(
                "exceeds {MAX_NAME_LEN} characters"
            )));
        }
        Ok(())
    }

    pub fn validate_price(price: f64) -> Result<(), CatalogError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(CatalogError::InvalidPrice(format!(
                "{price} must be greater than zero"
            )));
        }
        Ok(())
    }

    pub fn validate_stock_quantity(qty: i32) -> Result<(), CatalogError> {
        if qty < 0 {
            return Err(CatalogError::InvalidStockQuantity(format!(
                "{qty} must not be negative"
            )));
        }
        Ok(())
    }
}
