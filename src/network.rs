//! Network selection and URL constants for the OpenSea API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Version segment of the orderbook (`/wyvern/v{N}`) paths.
pub const ORDERBOOK_VERSION: u32 = 1;

/// Version segment of the asset API (`/api/v{N}`) paths.
pub const API_VERSION: u32 = 1;

/// REST API base URL for mainnet.
pub const API_BASE_MAINNET: &str = "https://api.opensea.io";

/// REST API base URL for the Rinkeby test network.
pub const API_BASE_RINKEBY: &str = "https://rinkeby-api.opensea.io";

/// Website host for mainnet.
pub const SITE_HOST_MAINNET: &str = "https://opensea.io";

/// Website host for the Rinkeby test network.
pub const SITE_HOST_RINKEBY: &str = "https://rinkeby.opensea.io";

/// Path prefix for orderbook endpoints.
pub fn orderbook_path() -> String {
    format!("/wyvern/v{}", ORDERBOOK_VERSION)
}

/// Path prefix for asset, bundle and token endpoints.
pub fn api_path() -> String {
    format!("/api/v{}", API_VERSION)
}

/// Ethereum network the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Ethereum mainnet
    #[default]
    Main,
    /// Rinkeby test network
    Rinkeby,
}

impl Network {
    /// Default REST API base URL for this network.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Network::Main => API_BASE_MAINNET,
            Network::Rinkeby => API_BASE_RINKEBY,
        }
    }

    /// Website host URL for this network.
    pub fn host_url(&self) -> &'static str {
        match self {
            Network::Main => SITE_HOST_MAINNET,
            Network::Rinkeby => SITE_HOST_RINKEBY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Rinkeby => "rinkeby",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown network name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetworkError(pub String);

impl fmt::Display for UnknownNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown network '{}' (expected 'main' or 'rinkeby')", self.0)
    }
}

impl std::error::Error for UnknownNetworkError {}

impl FromStr for Network {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "rinkeby" => Ok(Network::Rinkeby),
            _ => Err(UnknownNetworkError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_urls() {
        assert_eq!(Network::Main.api_base_url(), API_BASE_MAINNET);
        assert_eq!(Network::Main.host_url(), SITE_HOST_MAINNET);
        assert_eq!(Network::Rinkeby.api_base_url(), API_BASE_RINKEBY);
        assert_eq!(Network::Rinkeby.host_url(), SITE_HOST_RINKEBY);
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("main".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("rinkeby".parse::<Network>().unwrap(), Network::Rinkeby);
        assert!("goerli".parse::<Network>().is_err());
    }

    #[test]
    fn test_paths() {
        assert_eq!(orderbook_path(), "/wyvern/v1");
        assert_eq!(api_path(), "/api/v1");
    }
}
