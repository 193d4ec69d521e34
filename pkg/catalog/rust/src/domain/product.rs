// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Product entity and the inputs that create or modify one.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 12-byte object identifier. Its canonical string form is 24 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId([u8; 12]);

static ID_COUNTER: AtomicU32 = AtomicU32::new(0);
static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();

impl ProductId {
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Timestamp (4 bytes, big endian) + per-process random (5 bytes) + counter (3 bytes).
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        let unique = PROCESS_UNIQUE.get_or_init(|| {
            let random = uuid::Uuid::new_v4();
            let mut out = [0u8; 5];
            out.copy_from_slice(&random.as_bytes()[..5]);
            out
        });
        let count = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(unique);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProductIdError(String);

impl fmt::Display for ParseProductIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid product id '{}': expected 24 hex digits", self.0)
    }
}

impl std::error::Error for ParseProductIdError {}

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 24 {
            return Err(ParseProductIdError(s.to_string()));
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| ParseProductIdError(s.to_string()))?;
        Ok(Self(bytes))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub category: String,
    pub image_url: String,
    pub is_active: bool,
    pub attributes: HashMap<String, String>,
}

impl Product {
    /// Materialize a draft under a freshly assigned id.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            sku: draft.sku,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock_quantity: draft.stock_quantity,
            category: draft.category,
            image_url: draft.image_url,
            is_active: draft.is_active,
            attributes: draft.attributes,
        }
    }

    /// Apply the set fields of `update`. The result is a candidate; callers validate it
    /// before persisting.
    pub fn merged_with(&self, update: &ProductUpdate) -> Self {
        let mut next = self.clone();
        if let Some(sku) = &update.sku {
            next.sku = sku.clone();
        }
        if let Some(name) = &update.name {
            next.name = name.clone();
        }
        if let Some(description) = &update.description {
            next.description = description.clone();
        }
        if let Some(price) = update.price {
            next.price = price;
        }
        if let Some(qty) = update.stock_quantity {
            next.stock_quantity = qty;
        }
        if let Some(category) = &update.category {
            next.category = category.clone();
        }
        if let Some(image_url) = &update.image_url {
            next.image_url = image_url.clone();
        }
        if let Some(is_active) = update.is_active {
            next.is_active = is_active;
        }
        if let Some(attributes) = &update.attributes {
            next.attributes = attributes.clone();
        }
        next
    }
}

/// Fields supplied by a caller creating a product. The id is always assigned by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub category: String,
    pub image_url: String,
    pub is_active: bool,
    pub attributes: HashMap<String, String>,
}

/// Partial update addressed by external id. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub id: String,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub attributes: Option<HashMap<String, String>>,
}
