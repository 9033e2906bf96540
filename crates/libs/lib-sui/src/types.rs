//! # Sui Identifiers
//!
//! - [`ObjectId`]: 32-byte account address or package id
//! - [`MoveCallTarget`]: `package::module::function`

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SuiError};

/// Length of a Sui address in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// A Sui address or object/package id.
///
/// Parses `0x`-prefixed or bare hex with up to 64 digits. Short forms are
/// left-padded, so `0x2` is the framework package `0x000…002`.
///
/// ```rust
/// use lib_sui::ObjectId;
///
/// let id: ObjectId = "0x2".parse().unwrap();
/// assert_eq!(
///     id.to_string(),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectId([u8; ADDRESS_LENGTH]);

impl ObjectId {
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Full `0x` + 64 hex digit form.
    pub fn to_hex_literal(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for ObjectId {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() || digits.len() > ADDRESS_LENGTH * 2 {
            return Err(SuiError::InvalidAddress(format!(
                "expected 1 to {} hex digits, got '{}'",
                ADDRESS_LENGTH * 2,
                s
            )));
        }

        let padded = format!("{:0>width$}", digits, width = ADDRESS_LENGTH * 2);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| SuiError::InvalidAddress(format!("'{}': {}", s, e)))?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_literal())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex_literal())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Whether `name` is a valid Move identifier.
///
/// `[a-zA-Z][a-zA-Z0-9_]*`, or `_` followed by at least one `[a-zA-Z0-9_]`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        Some('_') => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Fully qualified Move function: `package::module::function`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveCallTarget {
    package: ObjectId,
    module: String,
    function: String,
}

impl MoveCallTarget {
    pub fn new(package: ObjectId, module: &str, function: &str) -> Result<Self> {
        for name in [module, function] {
            if !is_valid_identifier(name) {
                return Err(SuiError::InvalidIdentifier(name.to_string()));
            }
        }
        Ok(Self::from_parts_unchecked(package, module, function))
    }

    /// For module/function names known to be valid identifiers.
    pub(crate) fn from_parts_unchecked(package: ObjectId, module: &str, function: &str) -> Self {
        Self {
            package,
            module: module.to_string(),
            function: function.to_string(),
        }
    }

    pub fn package(&self) -> ObjectId {
        self.package
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

impl FromStr for MoveCallTarget {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split("::").collect();
        let [package, module, function] = parts.as_slice() else {
            return Err(SuiError::InvalidTarget(format!(
                "expected package::module::function, got '{}'",
                s
            )));
        };

        let package: ObjectId = package.parse()?;
        Self::new(package, module, function)
    }
}

impl fmt::Display for MoveCallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.function)
    }
}
