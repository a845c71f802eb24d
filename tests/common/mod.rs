//! Common test utilities: mock server setup and JSON fixtures.

#![allow(dead_code)]

use opensea_api::api::OpenSeaApiClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const KITTY_CONTRACT: &str = "0x06012c8cf97bead5deae237070f9587f8e7a266d";
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
pub const MAKER: &str = "0x5b3256965e7c3cf26e11fcaf296dfc8807c01073";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without an API key.
pub fn client_for(server: &MockServer) -> OpenSeaApiClient {
    OpenSeaApiClient::builder()
        .api_base_url(server.uri())
        .build()
        .expect("client should build")
}

pub fn account_json(address: &str) -> Value {
    json!({
        "address": address,
        "profile_img_url": "https://storage.googleapis.com/opensea-static/opensea-profile/1.png",
        "user": { "username": "alice" },
        "config": ""
    })
}

pub fn eth_token_json() -> Value {
    json!({
        "id": 1,
        "symbol": "ETH",
        "address": ZERO_ADDRESS,
        "image_url": "https://storage.opensea.io/files/6f8e2979d428180222796ff4a33ab929.svg",
        "name": "Ether",
        "decimals": 18,
        "eth_price": "1.000000000000000",
        "usd_price": "1800.120000000000000"
    })
}

pub fn order_json() -> Value {
    json!({
        "id": 1,
        "order_hash": "0x5e2a5a4b2e7ba4d5d8e0f3c0b1f2a9d7c6e5b4a3928170f6e5d4c3b2a1908f7e",
        "created_date": "2021-03-01T12:00:00.123456",
        "closing_date": null,
        "closing_extendable": false,
        "exchange": "0x5206e78b21ce315ce284fb24cf05e0585a93b1d9",
        "maker": account_json(MAKER),
        "taker": account_json(ZERO_ADDRESS),
        "current_price": "1000000000000000000",
        "current_bounty": "0",
        "bounty_multiple": "0",
        "maker_relayer_fee": "250",
        "taker_relayer_fee": "0",
        "maker_protocol_fee": "0",
        "taker_protocol_fee": "0",
        "maker_referrer_fee": "0",
        "fee_recipient": account_json("0x5b3256965e7c3cf26e11fcaf296dfc8807c01073"),
        "fee_method": 1,
        "side": 1,
        "sale_kind": 0,
        "target": KITTY_CONTRACT,
        "how_to_call": 0,
        "calldata": "0x23b872dd",
        "replacement_pattern": "0x00000000ffffffff",
        "static_target": ZERO_ADDRESS,
        "static_extradata": "0x",
        "payment_token": ZERO_ADDRESS,
        "payment_token_contract": eth_token_json(),
        "base_price": "1000000000000000000",
        "extra": "0",
        "quantity": "1",
        "listing_time": 1614600000u64,
        "expiration_time": 0,
        "salt": "83930350784532998462018834138063425123745946582103651294227233290428862451",
        "v": 27,
        "r": "0x1d7ad6e0f4b0f7f5b4a3a2f1e0d9c8b7a6f5e4d3c2b1a0f9e8d7c6b5a4f3e2d1",
        "s": "0x2c8b9a0f1e2d3c4b5a69788796a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e9f8a7",
        "metadata": {
            "asset": { "id": "1", "address": KITTY_CONTRACT },
            "schema": "ERC721"
        },
        "asset": null,
        "asset_bundle": null,
        "approved_on_chain": false,
        "cancelled": false,
        "finalized": false,
        "marked_invalid": false
    })
}

pub fn asset_json(token_id: &str) -> Value {
    json!({
        "id": 42,
        "token_id": token_id,
        "name": "Genesis",
        "description": "The first kitty",
        "external_link": null,
        "permalink": format!("https://opensea.io/assets/{}/{}", KITTY_CONTRACT, token_id),
        "image_url": "https://img.cryptokitties.co/1.png",
        "image_preview_url": null,
        "image_thumbnail_url": null,
        "image_original_url": null,
        "animation_url": null,
        "background_color": "f0f0f0",
        "asset_contract": {
            "address": KITTY_CONTRACT,
            "name": "CryptoKitties",
            "symbol": "CKITTY",
            "schema_name": "ERC721",
            "asset_contract_type": "non-fungible",
            "seller_fee_basis_points": 250,
            "opensea_seller_fee_basis_points": 250,
            "dev_seller_fee_basis_points": 0
        },
        "owner": account_json(MAKER),
        "collection": { "name": "CryptoKitties", "slug": "cryptokitties" },
        "num_sales": 3,
        "traits": [{ "trait_type": "fur", "value": "calico" }],
        "last_sale": null,
        "sell_orders": null
    })
}

pub fn bundle_json(slug: &str) -> Value {
    json!({
        "slug": slug,
        "name": "Kitty pair",
        "assets": [asset_json("1"), asset_json("2")],
        "maker": account_json(MAKER),
        "description": "Two kitties",
        "external_link": null,
        "permalink": format!("https://opensea.io/bundles/{}", slug),
        "asset_contract": null,
        "sell_orders": []
    })
}
