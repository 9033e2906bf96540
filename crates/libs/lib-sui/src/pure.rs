//! # Pure Arguments
//!
//! Typed Move values passed by value to a Move call. Values stay typed inside a
//! [`Transaction`](crate::Transaction) and are BCS-encoded only when the
//! transaction is serialized for a wallet.

use crate::error::Result;
use crate::types::ObjectId;

/// A pure (non-object) Move call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PureArg {
    /// `std::string::String`
    String(String),
    /// `vector<u8>`
    U8Vector(Vec<u8>),
    /// `address`
    Address(ObjectId),
    /// `u64`
    U64(u64),
    /// `bool`
    Bool(bool),
}

impl PureArg {
    pub fn string(value: impl Into<String>) -> Self {
        PureArg::String(value.into())
    }

    /// UTF-8 bytes of `value` as a `vector<u8>`.
    pub fn utf8_bytes(value: &str) -> Self {
        PureArg::U8Vector(value.as_bytes().to_vec())
    }

    /// Move type name, for logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PureArg::String(_) => "0x1::string::String",
            PureArg::U8Vector(_) => "vector<u8>",
            PureArg::Address(_) => "address",
            PureArg::U64(_) => "u64",
            PureArg::Bool(_) => "bool",
        }
    }

    /// Canonical BCS bytes of the value.
    ///
    /// Strings and byte vectors are a ULEB128 length followed by the bytes;
    /// addresses are their 32 raw bytes.
    pub fn to_bcs_bytes(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            PureArg::String(s) => bcs::to_bytes(s)?,
            PureArg::U8Vector(v) => bcs::to_bytes(v)?,
            PureArg::Address(id) => bcs::to_bytes(id.as_bytes())?,
            PureArg::U64(n) => bcs::to_bytes(n)?,
            PureArg::Bool(b) => bcs::to_bytes(b)?,
        };
        Ok(bytes)
    }
}
