// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Product catalog gRPC adapter.
//!
//! Exposes a catalog service over `product.v1.ProductCatalogService`:
//! - `domain`: the product entity, the collaborator port and its error taxonomy
//! - `adapters::grpc`: the driving adapter translating wire calls and failures
//! - `infrastructure`: an in-memory reference catalog
//! - `transport`: TCP / Unix socket serving and client channels

pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod proto;
pub mod transport;

pub const DEFAULT_GRPC_ADDR: &str = "127.0.0.1:50052";
pub const DEFAULT_GRPC_SOCKET: &str = "/var/run/datadog/product-catalog.sock";
