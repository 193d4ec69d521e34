// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

pub mod context;
pub mod error;
pub mod ports;
pub mod product;
pub mod query;
pub mod services;

pub use context::CallContext;
pub use error::CatalogError;
pub use ports::CatalogService;
pub use product::{Product, ProductDraft, ProductId, ProductUpdate};
pub use query::{ListQuery, ProductPage};
pub use services::ProductValidator;
