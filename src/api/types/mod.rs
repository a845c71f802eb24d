//! API response and request types for the OpenSea REST API.
//!
//! This module contains all the type definitions used by the API client,
//! organized by category.

pub mod account;
pub mod asset;
pub mod bundle;
pub mod order;
pub mod token;

// Re-export all types for convenience
pub use account::*;
pub use asset::*;
pub use bundle::*;
pub use order::*;
pub use token::*;
