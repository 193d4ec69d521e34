// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Wire types for `product.v1.ProductCatalogService`.
//!
//! Mirrors `proto/product/v1/product_catalog.proto`. The service client and server
//! modules are generated by `build.rs` and included at the bottom of this file.

use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub sku: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(double, tag = "5")]
    pub price: f64,
    #[prost(int32, tag = "6")]
    pub stock_quantity: i32,
    #[prost(string, tag = "7")]
    pub category: String,
    #[prost(string, tag = "8")]
    pub image_url: String,
    #[prost(bool, tag = "9")]
    pub is_active: bool,
    #[prost(map = "string, string", tag = "10")]
    pub attributes: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductResponse {
    #[prost(message, optional, tag = "1")]
    pub product: Option<Product>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListProductsRequest {
    #[prost(string, optional, tag = "1")]
    pub filter: Option<String>,
    #[prost(int64, tag = "2")]
    pub page: i64,
    #[prost(int64, tag = "3")]
    pub page_size: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListProductsResponse {
    #[prost(message, repeated, tag = "1")]
    pub products: Vec<Product>,
    #[prost(string, tag = "2")]
    pub next_page: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductRequest {
    #[prost(message, optional, tag = "1")]
    pub product: Option<Product>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductResponse {
    #[prost(message, optional, tag = "1")]
    pub product: Option<Product>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, optional, tag = "2")]
    pub sku: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub description: Option<String>,
    #[prost(double, optional, tag = "5")]
    pub price: Option<f64>,
    #[prost(int32, optional, tag = "6")]
    pub stock_quantity: Option<i32>,
    #[prost(string, optional, tag = "7")]
    pub category: Option<String>,
    #[prost(string, optional, tag = "8")]
    pub image_url: Option<String>,
    #[prost(bool, optional, tag = "9")]
    pub is_active: Option<bool>,
    #[prost(map = "string, string", tag = "10")]
    pub attributes: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProductResponse {
    #[prost(message, optional, tag = "1")]
    pub product: Option<Product>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProductResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductBySkuRequest {
    #[prost(string, tag = "1")]
    pub sku: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductBySkuResponse {
    #[prost(message, optional, tag = "1")]
    pub product: Option<Product>,
}

include!(concat!(
    env!("OUT_DIR"),
    "/product.v1.ProductCatalogService.rs"
));
