//! Asset bundle types for the OpenSea REST API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::asset::{Asset, AssetContract};
use super::order::Order;

/// Named group of assets sold together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetBundle {
    /// URL-friendly identifier
    pub slug: String,
    pub name: String,
    pub assets: Vec<Asset>,
    pub maker: Option<Account>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub permalink: Option<String>,
    /// Shared contract, when every asset comes from the same one
    pub asset_contract: Option<AssetContract>,
    pub sell_orders: Option<Vec<Order>>,
}

/// Query parameters for GET /api/v1/bundles/.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleQuery {
    /// Only bundles with an open sell order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_ids: Vec<String>,
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

impl BundleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = Some(on_sale);
        self
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

/// Result of [`get_bundles`](crate::api::OpenSeaApiClient::get_bundles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundlesPage {
    /// Bundles on the requested page
    pub bundles: Vec<AssetBundle>,
    /// Service-side estimate of the total number of matches
    pub estimated_count: Option<u64>,
}
