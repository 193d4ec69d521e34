// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Classification of catalog failures into gRPC status codes.
//!
//! This is the only place where a `CatalogError` becomes a `Status`. Every RPC goes
//! through `to_status`, so a given condition always surfaces the same way:
//!
//! | condition                               | status                                  |
//! |-----------------------------------------|-----------------------------------------|
//! | `NotFound`                              | `NOT_FOUND`                             |
//! | `InvalidSku` / `InvalidName` /          | `INVALID_ARGUMENT` on Create and Update,|
//! | `InvalidPrice` / `InvalidStockQuantity` | `INTERNAL` elsewhere                    |
//! | `Cancelled`                             | `CANCELLED`                             |
//! | `DeadlineExceeded`                      | `DEADLINE_EXCEEDED`                     |
//! | `Unclassified`                          | `INTERNAL`                              |

use crate::domain::CatalogError;
use std::fmt;
use tonic::{Code, Status};
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetProduct,
    ListProducts,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    GetProductBySku,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::GetProduct,
        Operation::ListProducts,
        Operation::CreateProduct,
        Operation::UpdateProduct,
        Operation::DeleteProduct,
        Operation::GetProductBySku,
    ];

    pub fn rpc_name(self) -> &'static str {
        match self {
            Operation::GetProduct => "GetProduct",
            Operation::ListProducts => "ListProducts",
            Operation::CreateProduct => "CreateProduct",
            Operation::UpdateProduct => "UpdateProduct",
            Operation::DeleteProduct => "DeleteProduct",
            Operation::GetProductBySku => "GetProductBySKU",
        }
    }

    /// Only operations that carry product field values can fail validation.
    fn accepts_product_fields(self) -> bool {
        matches!(self, Operation::CreateProduct | Operation::UpdateProduct)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rpc_name())
    }
}

/// Status code for `err` raised during `op`.
pub fn classify(op: Operation, err: &CatalogError) -> Code {
    match err {
        CatalogError::NotFound(_) => Code::NotFound,
        e if e.is_validation() && op.accepts_product_fields() => Code::InvalidArgument,
        CatalogError::Cancelled => Code::Cancelled,
        CatalogError::DeadlineExceeded => Code::DeadlineExceeded,
        _ => Code::Internal,
    }
}

/// Convert a catalog failure into the status returned to the caller. The message is
/// the catalog's own description of the failure.
pub fn to_status(op: Operation, err: CatalogError) -> Status {
    let code = classify(op, &err);
    let message = err.to_string();
    match code {
        Code::Internal => error!(rpc = %op, error = %message, "catalog call failed"),
        Code::Cancelled | Code::DeadlineExceeded => {
            warn!(rpc = %op, code = ?code, "catalog call did not complete")
        }
        _ => debug!(rpc = %op, code = ?code, error = %message, "catalog call rejected"),
    }
    Status::new(code, message)
}
