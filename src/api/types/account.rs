//! Account types shared by orders, assets and bundles.

use serde::{Deserialize, Serialize};

/// Marketplace user attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    /// Display name, if the user set one
    pub username: Option<String>,
}

/// An Ethereum account as the service describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Wallet address (0x-prefixed hex)
    pub address: String,
    /// Avatar URL
    pub profile_img_url: Option<String>,
    /// Linked marketplace user
    pub user: Option<AccountUser>,
    /// Account flag such as "verified" or "moderator"
    pub config: Option<String>,
}

impl Account {
    /// Username of the linked user, if any.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.username.as_deref())
    }
}
