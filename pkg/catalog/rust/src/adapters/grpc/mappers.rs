// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Mappers from domain types to protobuf messages.
//!
//! Every success path goes through `product_to_proto`, so the six RPCs always
//! project a product the same way.

use crate::domain::{Product, ProductPage};
use crate::proto::{ListProductsResponse, Product as ProtoProduct};

/// Map a domain Product to the wire Product.
///
/// The id is rendered in its canonical hex form; every other field is copied by name.
/// Attributes are cloned so the response never shares state with the entity.
pub fn product_to_proto(product: &Product) -> ProtoProduct {
    ProtoProduct {
        id: product.id.to_hex(),
        sku: product.sku.clone(),
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        stock_quantity: product.stock_quantity,
        category: product.category.clone(),
        image_url: product.image_url.clone(),
        is_active: product.is_active,
        attributes: product.attributes.clone(),
    }
}

/// Map a result page; the continuation token is republished untouched.
pub fn page_to_proto(page: ProductPage) -> ListProductsResponse {
    ListProductsResponse {
        products: page.products.iter().map(product_to_proto).collect(),
        next_page: page.next_page,
    }
}
