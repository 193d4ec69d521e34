// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Driven adapters: concrete implementations of the catalog port.

pub mod in_memory_catalog;

pub use in_memory_catalog::InMemoryCatalog;
