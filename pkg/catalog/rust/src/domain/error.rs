// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Failure conditions reported by the catalog collaborator.
//!
//! The set is closed: the gRPC adapter classifies on the variant alone and never
//! inspects the message text.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("product {0} does not exist")]
    NotFound(String),

    #[error("invalid sku: {0}")]
    InvalidSku(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid price: {0}")]
    InvalidPrice(String),

    #[error("invalid stock quantity: {0}")]
    InvalidStockQuantity(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// Anything the collaborator does not name: storage faults, conflicts, bad ids.
    #[error("{0}")]
    Unclassified(String),
}

impl CatalogError {
    pub fn unclassified(msg: impl Into<String>) -> Self {
        CatalogError::Unclassified(msg.into())
    }

    /// True for the four business validation conditions.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidSku(_)
                | CatalogError::InvalidName(_)
                | CatalogError::InvalidPrice(_)
                | CatalogError::InvalidStockQuantity(_)
        )
    }
}
