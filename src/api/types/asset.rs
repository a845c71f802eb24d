//! Asset types for the OpenSea REST API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::order::Order;
use super::token::FungibleToken;

/// Contract an asset belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetContract {
    /// Contract address
    pub address: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    /// Token standard, e.g. "ERC721"
    pub schema_name: Option<String>,
    /// "fungible", "non-fungible" or "semi-fungible"
    pub asset_contract_type: Option<String>,
    pub buyer_fee_basis_points: Option<u32>,
    pub seller_fee_basis_points: Option<u32>,
    pub opensea_buyer_fee_basis_points: Option<u32>,
    pub opensea_seller_fee_basis_points: Option<u32>,
    pub dev_buyer_fee_basis_points: Option<u32>,
    pub dev_seller_fee_basis_points: Option<u32>,
}

/// Collection summary embedded in asset responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub external_url: Option<String>,
    /// Tokens accepted as payment in this collection
    pub payment_tokens: Option<Vec<FungibleToken>>,
}

/// Asset metadata as cached by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Database ID
    pub id: Option<i64>,
    /// Token ID as a decimal string
    pub token_id: String,
    pub asset_contract: AssetContract,
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub permalink: Option<String>,
    pub image_url: Option<String>,
    pub image_preview_url: Option<String>,
    pub image_thumbnail_url: Option<String>,
    pub image_original_url: Option<String>,
    pub animation_url: Option<String>,
    pub background_color: Option<String>,
    pub owner: Option<Account>,
    pub creator: Option<Account>,
    pub collection: Option<Collection>,
    pub num_sales: Option<u64>,
    /// Free-form trait objects; their shape is collection specific
    pub traits: Option<Vec<serde_json::Value>>,
    pub last_sale: Option<serde_json::Value>,
    /// Open sell orders, when the endpoint includes them
    pub sell_orders: Option<Vec<Order>>,
    /// All open orders (single-asset endpoint only)
    pub orders: Option<Vec<Order>>,
    pub transfer_fee: Option<String>,
    pub transfer_fee_payment_token: Option<FungibleToken>,
}

impl Asset {
    /// Contract address of the asset.
    pub fn token_address(&self) -> &str {
        &self.asset_contract.address
    }
}

/// Query parameters for GET /api/v1/assets/.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetQuery {
    /// Assets owned by this address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_ids: Vec<String>,
    /// Free-text search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Sort field, e.g. "sale_count"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// "asc" or "desc"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<String>,
    /// Explicit page size (overrides the client's page size)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Explicit record offset (overrides the page number)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Additional filters passed through as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AssetQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_asset_contract_address(mut self, address: impl Into<String>) -> Self {
        self.asset_contract_address = Some(address.into());
        self
    }

    pub fn with_token_ids<I, S>(mut self, token_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.token_ids = token_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set sort field and direction.
    pub fn with_order(mut self, order_by: impl Into<String>, direction: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self.order_direction = Some(direction.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add a filter this crate does not model.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Result of [`get_assets`](crate::api::OpenSeaApiClient::get_assets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsPage {
    /// Assets on the requested page
    pub assets: Vec<Asset>,
    /// Service-side estimate of the total number of matches
    pub estimated_count: Option<u64>,
}
