//! # Shared Data Transfer Objects Library
//!
//! This library defines the data contract between the NFT web frontend, the
//! Sui transaction library and the browser wallet glue.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::mint`]**: Mint form input and mint receipts
//!   - **[`dto::wallet`]**: Wallet Standard payloads (detected wallets, accounts, execution results)
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! Mint DTOs use snake_case field names. Wallet DTOs mirror the Wallet Standard
//! JavaScript objects and therefore use camelCase.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::mint::MintNftRequest;
//! use shared::utils::truncate_address;
//!
//! let request = MintNftRequest::new("Cat", "A cute cat", "https://example.com/cat.png");
//! assert_eq!(request.name, "Cat");
//!
//! let display = truncate_address("0x7a3f5c2e9b1d4a6f8c0e2b4d6f8a0c2e4b6d8f0a2c4e6b8d0f2a4c6e8b0d2f41");
//! assert_eq!(display, "0x7a3f...2f41");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
