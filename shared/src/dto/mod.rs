//! # Data Transfer Objects (DTOs)
//!
//! - [`mint`] - Mint form input and the receipt shown after execution
//! - [`wallet`] - Objects exchanged with Wallet Standard wallets through JS glue
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "name": "Cat",
//!   "description": "A cute cat",
//!   "url": "https://example.com/cat.png"
//! }
//! ```

pub mod mint;
pub mod wallet;

pub use mint::*;
pub use wallet::*;
