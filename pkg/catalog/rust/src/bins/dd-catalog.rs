// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Command-line client for dd-catalogd.
//!
//! Uses the daemon's transport settings (`DD_CATALOG_TRANSPORT_MODE`,
//! `DD_CATALOG_GRPC_ADDR`, `DD_CATALOG_GRPC_SOCKET`) to locate the server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dd_catalog::config::CatalogdConfig;
use dd_catalog::proto::product_catalog_service_client::ProductCatalogServiceClient;
use dd_catalog::proto::{
    CreateProductRequest, DeleteProductRequest, GetProductBySkuRequest, GetProductRequest,
    ListProductsRequest, Product, UpdateProductRequest,
};
use dd_catalog::transport;
use std::collections::HashMap;
use std::time::Duration;
use tonic::transport::Channel;
use tonic::{Request, Status};

#[derive(Parser)]
#[command(name = "dd-catalog", version, about = "Manage products in a dd-catalogd instance")]
struct Cli {
    /// Per-request deadline in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a product by id
    Get { id: String },
    /// Show a product by SKU
    GetBySku { sku: String },
    /// List products
    List {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = 20)]
        page_size: i64,
    },
    /// Create a product
    Create {
        #[arg(long)]
        sku: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        stock: i32,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        image_url: String,
        #[arg(long)]
        active: bool,
        /// KEY=VALUE, repeatable
        #[arg(long = "attr", value_parser = parse_attr)]
        attributes: Vec<(String, String)>,
    },
    /// Update fields of an existing product
    Update {
        id: String,
        #[arg(long)]
        sku: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        stock: Option<i32>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        /// KEY=VALUE, repeatable; replaces all attributes
        #[arg(long = "attr", value_parser = parse_attr)]
        attributes: Vec<(String, String)>,
    },
    /// Delete a product by id
    Delete { id: String },
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("invalid attribute '{s}' (use KEY=VALUE)")),
    }
}

fn print_product(p: &Product) {
    println!("ID:          {}", p.id);
    println!("SKU:         {}", p.sku);
    println!("Name:        {}", p.name);
    println!("Description: {}", p.description);
    println!("Price:       {:.2}", p.price);
    println!("Stock:       {}", p.stock_quantity);
    println!("Category:    {}", p.category);
    println!("Image URL:   {}", p.image_url);
    println!("Active:      {}", p.is_active);
    if !p.attributes.is_empty() {
        let mut attrs: Vec<_> = p.attributes.iter().collect();
        attrs.sort();
        println!("Attributes:");
        for (k, v) in attrs {
            println!("  {k}={v}");
        }
    }
}

fn print_missing() {
    println!("(no product in response)");
}

async fn run(
    client: &mut ProductCatalogServiceClient<Channel>,
    command: Command,
    timeout: Duration,
) -> Result<(), Status> {
    fn with_timeout<T>(msg: T, timeout: Duration) -> Request<T> {
        let mut request = Request::new(msg);
        request.set_timeout(timeout);
        request
    }

    match command {
        Command::Get { id } => {
            let resp = client
                .get_product(with_timeout(GetProductRequest { id }, timeout))
                .await?
                .into_inner();
            resp.product.as_ref().map_or_else(print_missing, print_product);
        }
        Command::GetBySku { sku } => {
            let resp = client
                .get_product_by_sku(with_timeout(GetProductBySkuRequest { sku }, timeout))
                .await?
                .into_inner();
            resp.product.as_ref().map_or_else(print_missing, print_product);
        }
        Command::List {
            filter,
            page,
            page_size,
        } => {
            let resp = client
                .list_products(with_timeout(
                    ListProductsRequest {
                        filter,
                        page,
                        page_size,
                    },
                    timeout,
                ))
                .await?
                .into_inner();
            if resp.products.is_empty() {
                println!("No products found");
            }
            for (i, p) in resp.products.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_product(p);
            }
            if !resp.next_page.is_empty() {
                println!("\nNext page: {}", resp.next_page);
            }
        }
        Command::Create {
            sku,
            name,
            description,
            price,
            stock,
            category,
            image_url,
            active,
            attributes,
        } => {
            let product = Product {
                id: String::new(),
                sku,
                name,
                description,
                price,
                stock_quantity: stock,
                category,
                image_url,
                is_active: active,
                attributes: attributes.into_iter().collect(),
            };
            let resp = client
                .create_product(with_timeout(
                    CreateProductRequest {
                        product: Some(product),
                    },
                    timeout,
                ))
                .await?
                .into_inner();
            resp.product.as_ref().map_or_else(print_missing, print_product);
        }
        Command::Update {
            id,
            sku,
            name,
            description,
            price,
            stock,
            category,
            image_url,
            active,
            attributes,
        } => {
            let req = UpdateProductRequest {
                id,
                sku,
                name,
                description,
                price,
                stock_quantity: stock,
                category,
                image_url,
                is_active: active,
                attributes: attributes.into_iter().collect::<HashMap<_, _>>(),
            };
            let resp = client
                .update_product(with_timeout(req, timeout))
                .await?
                .into_inner();
            resp.product.as_ref().map_or_else(print_missing, print_product);
        }
        Command::Delete { id } => {
            client
                .delete_product(with_timeout(DeleteProductRequest { id: id.clone() }, timeout))
                .await?;
            println!("Deleted product {id}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CatalogdConfig::load()?;
    let channel = transport::connect(&config).await?;
    let mut client = ProductCatalogServiceClient::new(channel);

    if let Err(status) = run(&mut client, cli.command, Duration::from_secs(cli.timeout)).await {
        eprintln!("Error: {} ({:?})", status.message(), status.code());
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attr() {
        assert_eq!(
            parse_attr("color=red").unwrap(),
            ("color".to_string(), "red".to_string())
        );
        assert_eq!(
            parse_attr("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_attr("empty=").unwrap().1, "");
        assert!(parse_attr("novalue").is_err());
        assert!(parse_attr("=red").is_err());
    }

    #[test]
    fn test_cli_parses_update() {
        let cli = Cli::try_parse_from([
            "dd-catalog",
            "update",
            "651f00aa010203040500002a",
            "--price",
            "-1",
            "--attr",
            "color=blue",
        ])
        .unwrap();
        match cli.command {
            Command::Update {
                id,
                price,
                attributes,
                sku,
                ..
            } => {
                assert_eq!(id, "651f00aa010203040500002a");
                assert_eq!(price, Some(-1.0));
                assert!(sku.is_none());
                assert_eq!(attributes, vec![("color".to_string(), "blue".to_string())]);
            }
            _ => panic!("expected update"),
        }
    }
}
