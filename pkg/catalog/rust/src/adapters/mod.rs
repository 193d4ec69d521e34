// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Driving Adapters Layer
//!
//! Adapters accept external requests, translate them into calls on the catalog port,
//! and translate the outcome back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dd_catalog::adapters::grpc::CatalogGrpcService;
//! use dd_catalog::infrastructure::InMemoryCatalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(InMemoryCatalog::new());
//! let server = CatalogGrpcService::new(catalog).into_server();
//! ```

pub mod grpc;
