//! Order-related types for the OpenSea orderbook API.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::asset::Asset;
use super::bundle::AssetBundle;
use super::token::FungibleToken;

/// Error returned when an integer code does not name a known enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEnumValueError {
    /// Name of the field being decoded
    pub kind: &'static str,
    /// Offending value
    pub value: u32,
}

impl std::fmt::Display for InvalidEnumValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} value: {}", self.kind, self.value)
    }
}

impl std::error::Error for InvalidEnumValueError {}

/// Order side (serializes as integer: 0=Buy, 1=Sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum OrderSide {
    /// Offer to buy
    Buy = 0,
    /// Listing for sale
    Sell = 1,
}

impl TryFrom<u32> for OrderSide {
    type Error = InvalidEnumValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Buy),
            1 => Ok(Self::Sell),
            _ => Err(InvalidEnumValueError { kind: "order side", value }),
        }
    }
}

impl From<OrderSide> for u32 {
    fn from(side: OrderSide) -> Self {
        side as u32
    }
}

/// Sale kind (0=FixedPrice, 1=DutchAuction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum SaleKind {
    FixedPrice = 0,
    DutchAuction = 1,
}

impl TryFrom<u32> for SaleKind {
    type Error = InvalidEnumValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::FixedPrice),
            1 => Ok(Self::DutchAuction),
            _ => Err(InvalidEnumValueError { kind: "sale kind", value }),
        }
    }
}

impl From<SaleKind> for u32 {
    fn from(kind: SaleKind) -> Self {
        kind as u32
    }
}

/// How the exchange proxy invokes the target (0=Call, 1=DelegateCall).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum HowToCall {
    Call = 0,
    DelegateCall = 1,
}

impl TryFrom<u32> for HowToCall {
    type Error = InvalidEnumValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Call),
            1 => Ok(Self::DelegateCall),
            _ => Err(InvalidEnumValueError { kind: "how to call", value }),
        }
    }
}

impl From<HowToCall> for u32 {
    fn from(how: HowToCall) -> Self {
        how as u32
    }
}

/// Fee method (0=ProtocolFee, 1=SplitFee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum FeeMethod {
    ProtocolFee = 0,
    SplitFee = 1,
}

impl TryFrom<u32> for FeeMethod {
    type Error = InvalidEnumValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ProtocolFee),
            1 => Ok(Self::SplitFee),
            _ => Err(InvalidEnumValueError { kind: "fee method", value }),
        }
    }
}

impl From<FeeMethod> for u32 {
    fn from(method: FeeMethod) -> Self {
        method as u32
    }
}

/// Asset reference inside order metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WyvernAsset {
    /// Token ID as a decimal string
    pub id: String,
    /// Contract address
    pub address: String,
    /// Amount for semi-fungible assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

/// Bundle reference inside order metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WyvernBundle {
    pub assets: Vec<WyvernAsset>,
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
}

/// What an order trades: a single asset or a bundle, plus its token schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<WyvernAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<WyvernBundle>,
    /// Token schema name (e.g. "ERC721")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Address credited with the referral fee
    #[serde(
        default,
        rename = "referrerAddress",
        alias = "referrer_address",
        skip_serializing_if = "Option::is_none"
    )]
    pub referrer_address: Option<String>,
}

/// Signed order payload for POST /wyvern/v1/orders/post/.
///
/// Amounts and timestamps are decimal strings so that 256-bit values
/// survive unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderJson {
    /// Exchange contract address
    pub exchange: String,
    /// Order creator
    pub maker: String,
    /// Counterparty (zero address for anyone)
    pub taker: String,
    pub maker_relayer_fee: String,
    pub taker_relayer_fee: String,
    pub maker_protocol_fee: String,
    pub taker_protocol_fee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker_referrer_fee: Option<String>,
    pub fee_recipient: String,
    pub fee_method: FeeMethod,
    pub side: OrderSide,
    pub sale_kind: SaleKind,
    /// Target contract of the call
    pub target: String,
    pub how_to_call: HowToCall,
    pub calldata: String,
    pub replacement_pattern: String,
    pub static_target: String,
    pub static_extradata: String,
    /// Payment token address (zero address for ETH)
    pub payment_token: String,
    pub base_price: String,
    /// Auction extra parameter (ending price delta for dutch auctions)
    pub extra: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    pub listing_time: String,
    pub expiration_time: String,
    pub salt: String,
    pub metadata: OrderMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_auction_reserve_price: Option<String>,
    /// Order hash (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// ECDSA signature components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
}

/// Order as stored in the orderbook.
///
/// Fields the service fills in after posting are optional; they are never
/// defaulted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Database ID
    pub id: Option<i64>,
    /// Order hash (hex)
    #[serde(alias = "order_hash")]
    pub hash: Option<String>,
    pub created_date: Option<NaiveDateTime>,
    pub closing_date: Option<NaiveDateTime>,
    pub closing_extendable: Option<bool>,
    pub exchange: String,
    pub maker: Account,
    pub taker: Account,
    /// Current price as a decimal string in base units
    pub current_price: Option<String>,
    pub current_bounty: Option<String>,
    pub bounty_multiple: Option<String>,
    pub maker_relayer_fee: String,
    pub taker_relayer_fee: String,
    pub maker_protocol_fee: String,
    pub taker_protocol_fee: String,
    pub maker_referrer_fee: Option<String>,
    pub fee_recipient: Account,
    pub fee_method: FeeMethod,
    pub side: OrderSide,
    pub sale_kind: SaleKind,
    pub target: String,
    pub how_to_call: HowToCall,
    pub calldata: String,
    pub replacement_pattern: String,
    pub static_target: String,
    pub static_extradata: String,
    pub payment_token: String,
    /// Resolved payment token details
    pub payment_token_contract: Option<FungibleToken>,
    pub base_price: String,
    pub extra: String,
    pub quantity: Option<String>,
    pub listing_time: u64,
    pub expiration_time: u64,
    pub salt: String,
    pub v: Option<u8>,
    pub r: Option<String>,
    pub s: Option<String>,
    pub metadata: Option<OrderMetadata>,
    /// Asset the order is for (single-asset orders)
    pub asset: Option<Box<Asset>>,
    /// Bundle the order is for (bundle orders)
    pub asset_bundle: Option<Box<AssetBundle>>,
    pub approved_on_chain: Option<bool>,
    pub cancelled: Option<bool>,
    pub finalized: Option<bool>,
    pub marked_invalid: Option<bool>,
}

impl Order {
    /// Whether the order can no longer be filled.
    ///
    /// Returns `None` when the service did not report the state.
    pub fn is_closed(&self) -> Option<bool> {
        match (self.cancelled, self.finalized, self.marked_invalid) {
            (None, None, None) => None,
            (c, f, m) => Some(c.unwrap_or(false) || f.unwrap_or(false) || m.unwrap_or(false)),
        }
    }
}

/// Query parameters for GET /wyvern/v1/orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderQuery {
    /// Orders for assets owned by this address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_kind: Option<SaleKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_contract_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_english: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expired: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_invalid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_ids: Vec<String>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_after: Option<u64>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_before: Option<u64>,
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

impl OrderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_maker(mut self, maker: impl Into<String>) -> Self {
        self.maker = Some(maker.into());
        self
    }

    pub fn with_taker(mut self, taker: impl Into<String>) -> Self {
        self.taker = Some(taker.into());
        self
    }

    pub fn with_side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_sale_kind(mut self, sale_kind: SaleKind) -> Self {
        self.sale_kind = Some(sale_kind);
        self
    }

    /// Restrict to a single asset.
    pub fn with_asset(mut self, contract_address: impl Into<String>, token_id: impl Into<String>) -> Self {
        self.asset_contract_address = Some(contract_address.into());
        self.token_id = Some(token_id.into());
        self
    }

    pub fn with_asset_contract_address(mut self, address: impl Into<String>) -> Self {
        self.asset_contract_address = Some(address.into());
        self
    }

    pub fn with_payment_token_address(mut self, address: impl Into<String>) -> Self {
        self.payment_token_address = Some(address.into());
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

    pub fn with_bundled(mut self, bundled: bool) -> Self {
        self.bundled = Some(bundled);
        self
    }

    pub fn with_include_invalid(mut self, include_invalid: bool) -> Self {
        self.include_invalid = Some(include_invalid);
        self
    }

    /// Set listing time range (unix seconds).
    pub fn with_listed_between(mut self, after: u64, before: u64) -> Self {
        self.listed_after = Some(after);
        self.listed_before = Some(before);
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

/// Result of [`get_orders`](crate::api::OpenSeaApiClient::get_orders).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    /// Orders on the requested page
    pub orders: Vec<Order>,
    /// Total number of matching orders (may exceed `orders.len()`)
    pub count: u64,
}
