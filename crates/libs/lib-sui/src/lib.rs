//! # Sui Library
//!
//! Unsigned Sui transaction descriptors and the NFT example package calls.
//!
//! ```text
//! PackageConfig ──► mint_nft_tx(name, description, url)
//!                        │
//!                        ▼
//!                   Transaction { inputs: [Pure, Pure, Pure],
//!                                 commands: [MoveCall <pkg>::nft_example::mint_nft_to_sender] }
//!                        │
//!                        ▼  to_json()
//!                   wallet (sign + execute, outside this crate)
//! ```
//!
//! The crate never signs or submits anything. Callers hand the descriptor to a
//! wallet.

pub mod config;
pub mod error;
pub mod nft;
pub mod pure;
pub mod transaction;
pub mod types;

pub use config::{Network, PackageConfig};
pub use error::{Result, SuiError};
pub use nft::mint_nft_tx;
pub use pure::PureArg;
pub use transaction::{Argument, CallArg, Command, MoveCall, Transaction};
pub use types::{MoveCallTarget, ObjectId};
