// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Generates the `product.v1.ProductCatalogService` client and server stubs.
//!
//! Message types are hand-maintained prost structs in `src/proto.rs`, so only the
//! service plumbing is generated here and no `protoc` is required.

use tonic_build::manual::{Builder, Method, Service};

const CODEC: &str = "tonic_prost::ProstCodec";

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::proto::{input}"))
        .output_type(format!("crate::proto::{output}"))
        .codec_path(CODEC)
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let service = Service::builder()
        .name("ProductCatalogService")
        .package("product.v1")
        .method(unary(
            "get_product",
            "GetProduct",
            "GetProductRequest",
            "GetProductResponse",
        ))
        .method(unary(
            "list_products",
            "ListProducts",
            "ListProductsRequest",
            "ListProductsResponse",
        ))
        .method(unary(
            "create_product",
            "CreateProduct",
            "CreateProductRequest",
            "CreateProductResponse",
        ))
        .method(unary(
            "update_product",
            "UpdateProduct",
            "UpdateProductRequest",
            "UpdateProductResponse",
        ))
        .method(unary(
            "delete_product",
            "DeleteProduct",
            "DeleteProductRequest",
            "DeleteProductResponse",
        ))
        .method(unary(
            "get_product_by_sku",
            "GetProductBySKU",
            "GetProductBySkuRequest",
            "GetProductBySkuResponse",
        ))
        .build();

    Builder::new().compile(&[service]);
}
