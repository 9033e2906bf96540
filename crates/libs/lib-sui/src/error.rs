//! # Error Handling
//!
//! [`SuiError`] is the single error type of this crate. Descriptor construction
//! itself never fails; errors come from parsing configuration and from encoding
//! a descriptor for the wallet.

use thiserror::Error;

/// Convenience type alias for `Result<T, SuiError>`.
pub type Result<T> = std::result::Result<T, SuiError>;

#[derive(Debug, Error)]
pub enum SuiError {
    /// Address or package id that is not up to 32 bytes of hex.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Move call target not of the form `package::module::function`.
    #[error("Invalid move call target: {0}")]
    InvalidTarget(String),

    /// Module or function name that is not a Move identifier.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// BCS encoding of a pure value failed.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// JSON serialization of a transaction failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transaction has more inputs or commands than a programmable transaction allows.
    #[error("Transaction limit exceeded: {0}")]
    Limit(String),
}

impl From<bcs::Error> for SuiError {
    fn from(err: bcs::Error) -> Self {
        SuiError::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for SuiError {
    fn from(err: serde_json::Error) -> Self {
        SuiError::Serialization(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for SuiError {
    fn from(err: lib_utils::envs::Error) -> Self {
        SuiError::Config(err.to_string())
    }
}
