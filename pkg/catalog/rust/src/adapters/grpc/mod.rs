// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! gRPC Driving Adapter
//!
//! Exposes the catalog port as `product.v1.ProductCatalogService`.

pub mod context;
pub mod mappers;
pub mod proto_conversions;
pub mod service;
pub mod status;

pub use context::DeadlineLayer;
pub use service::CatalogGrpcService;
pub use status::{Operation, classify, to_status};
