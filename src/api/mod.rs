//! REST API client module for OpenSea.
//!
//! This module provides a type-safe HTTP client for the OpenSea orderbook
//! (orders) and asset API (assets, bundles, fungible tokens).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use opensea_api::api::{ApiConfig, OpenSeaApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenSeaApiClient::new(ApiConfig {
//!         api_key: Some("my-key".to_string()),
//!         ..Default::default()
//!     })?;
//!
//!     let asset = client
//!         .get_asset("0x06012c8cf97bead5deae237070f9587f8e7a266d", "1")
//!         .await?;
//!     println!("Asset: {:?}", asset.and_then(|a| a.name));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder for custom configuration:
//!
//! ```rust,ignore
//! use opensea_api::api::OpenSeaApiClient;
//! use opensea_api::network::Network;
//! use std::time::Duration;
//!
//! let client = OpenSeaApiClient::builder()
//!     .network(Network::Rinkeby)
//!     .page_size(50)
//!     .timeout(Duration::from_secs(60))
//!     .logger(|line| eprintln!("[opensea] {}", line))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`.
//! Single-item lookups return `Ok(None)` for unknown items instead of an error:
//!
//! ```rust,ignore
//! use opensea_api::api::ApiError;
//!
//! match client.post_order(&order).await {
//!     Ok(order) => println!("Posted {:?}", order.hash),
//!     Err(ApiError::Validation(msg)) => println!("Order rejected: {}", msg),
//!     Err(e) if e.is_retryable() => println!("Service unavailable: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod query;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiConfig, Logger, OpenSeaApiClient, OpenSeaApiClientBuilder, RequestOptions};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use query::Pagination;
pub use types::*;
