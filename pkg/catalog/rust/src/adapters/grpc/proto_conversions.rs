// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Proto-to-Domain conversions.
//!
//! The adapter performs no validation of its own, so these are plain `From` impls:
//! whatever the caller sent reaches the catalog, and the catalog decides.

use crate::domain::{ListQuery, ProductDraft, ProductUpdate};
use crate::proto::{
    CreateProductRequest, ListProductsRequest, Product as ProtoProduct, UpdateProductRequest,
};

/// The wire id is ignored; ids are assigned by the catalog.
impl From<ProtoProduct> for ProductDraft {
    fn from(p: ProtoProduct) -> Self {
        Self {
            sku: p.sku,
            name: p.name,
            description: p.description,
            price: p.price,
            stock_quantity: p.stock_quantity,
            category: p.category,
            image_url: p.image_url,
            is_active: p.is_active,
            attributes: p.attributes,
        }
    }
}

/// A request without a product body becomes an empty draft.
impl From<CreateProductRequest> for ProductDraft {
    fn from(req: CreateProductRequest) -> Self {
        req.product.map(ProductDraft::from).unwrap_or_default()
    }
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            id: req.id,
            sku: req.sku,
            name: req.name,
            description: req.description,
            price: req.price,
            stock_quantity: req.stock_quantity,
            category: req.category,
            image_url: req.image_url,
            is_active: req.is_active,
            // proto maps have no presence; empty means "leave unchanged"
            attributes: (!req.attributes.is_empty()).then_some(req.attributes),
        }
    }
}

impl From<ListProductsRequest> for ListQuery {
    fn from(req: ListProductsRequest) -> Self {
        Self {
            filter: req.filter.unwrap_or_default(),
            page: req.page,
            page_size: req.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_create_request_ignores_wire_id() {
        let req = CreateProductRequest {
            product: Some(ProtoProduct {
                id: "651f00aa010203040500002a".into(),
                sku: "".into(),
                name: "Widget".into(),
                price: 9.99,
                stock_quantity: 5,
                ..Default::default()
            }),
        };
        let draft = ProductDraft::from(req);
        assert_eq!(draft.sku, "");
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.stock_quantity, 5);
    }

    #[test]
    fn test_create_request_without_product() {
        let draft = ProductDraft::from(CreateProductRequest { product: None });
        assert_eq!(draft, ProductDraft::default());
    }

    #[test]
    fn test_update_request_keeps_presence() {
        let req = UpdateProductRequest {
            id: "651f00aa010203040500002a".into(),
            price: Some(-1.0),
            ..Default::default()
        };
        let update = ProductUpdate::from(req);
        assert_eq!(update.id, "651f00aa010203040500002a");
        assert_eq!(update.price, Some(-1.0));
        assert!(update.sku.is_none());
        assert!(update.name.is_none());
        assert!(update.stock_quantity.is_none());
        assert!(update.attributes.is_none());
    }

    #[test]
    fn test_update_request_attributes() {
        let req = UpdateProductRequest {
            id: "x".into(),
            attributes: HashMap::from([("k".to_string(), "v".to_string())]),
            ..Default::default()
        };
        let update = ProductUpdate::from(req);
        assert_eq!(update.attributes.unwrap().get("k").unwrap(), "v");
    }

    #[test]
    fn test_list_request_defaults_filter() {
        let query = ListQuery::from(ListProductsRequest {
            filter: None,
            page: 3,
            page_size: 7,
        });
        assert_eq!(query.filter, "");
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 7);

        let query = ListQuery::from(ListProductsRequest {
            filter: Some("widget".into()),
            page: 0,
            page_size: 0,
        });
        assert_eq!(query.filter, "widget");
        assert_eq!(query.page, 0);
        assert_eq!(query.page_size, 0);
    }
}
