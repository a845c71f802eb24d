//! Fungible token types for the OpenSea REST API.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ERC20-like token used for payment and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FungibleToken {
    /// Database ID
    pub id: Option<i64>,
    /// Contract address
    pub address: String,
    /// Ticker symbol
    pub symbol: String,
    /// Token decimals
    pub decimals: u8,
    /// Human-readable name
    pub name: Option<String>,
    /// Logo URL
    pub image_url: Option<String>,
    /// Price in ETH as reported by the service
    pub eth_price: Option<Decimal>,
    /// Price in USD as reported by the service
    pub usd_price: Option<Decimal>,
}

/// Query parameters for GET /api/v1/tokens/.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenQuery {
    /// Filter by ticker symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Filter by contract address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Filter by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
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

impl TokenQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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

/// Result of [`get_tokens`](crate::api::OpenSeaApiClient::get_tokens).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokensPage {
    /// Matching tokens
    pub tokens: Vec<FungibleToken>,
}
