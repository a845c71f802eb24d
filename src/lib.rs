//! # OpenSea API Rust SDK
//!
//! A typed asynchronous client for the OpenSea REST API: the Wyvern
//! orderbook plus asset, bundle and fungible token lookups.
//!
//! ## Modules
//!
//! - [`api`]: REST client, request/response types and errors
//! - [`network`]: network selector and URL constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opensea_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = OpenSeaApiClient::builder()
//!         .network(Network::Main)
//!         .api_key(std::env::var("OPENSEA_API_KEY")?)
//!         .build()?;
//!
//!     let page = api
//!         .get_assets(&AssetQuery::new().with_owner("0x5b3256965e7c3cf26e11fcaf296dfc8807c01073"), 1)
//!         .await?;
//!     for asset in page.assets {
//!         println!("{} #{}", asset.token_address(), asset.token_id);
//!     }
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network selector and URL constants.
pub mod network;

/// REST API client module for orders, assets, bundles and tokens.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use opensea_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiConfig, ApiError, ApiResult, OpenSeaApiClient, OpenSeaApiClientBuilder, RequestOptions,
        // Domain types
        Account, Asset, AssetBundle, AssetContract, FungibleToken, Order, OrderJson,
        OrderMetadata,
        // Enums
        FeeMethod, HowToCall, OrderSide, SaleKind,
        // Queries and pages
        AssetQuery, AssetsPage, BundleQuery, BundlesPage, OrderQuery, OrdersPage, TokenQuery,
        TokensPage,
    };

    pub use crate::network::{Network, API_BASE_MAINNET, API_BASE_RINKEBY};
}
