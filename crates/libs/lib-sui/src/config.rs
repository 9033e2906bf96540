//! # Package Configuration
//!
//! Where the NFT example package lives. The configuration is a value passed to
//! the builders rather than a global, so builders run without a network.
//!
//! ## Environment Variables
//!
//! - `NFT_PACKAGE_ID` (required): published package id, `0x`-prefixed hex
//! - `SUI_NETWORK` (optional, default `testnet`): `mainnet`, `testnet`, `devnet` or `localnet`

use std::fmt;
use std::str::FromStr;

use lib_utils::envs::{get_env, get_env_or};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SuiError};
use crate::types::ObjectId;

pub const PACKAGE_ID_ENV: &str = "NFT_PACKAGE_ID";
pub const NETWORK_ENV: &str = "SUI_NETWORK";

/// Sui network the package is published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        }
    }

    /// Wallet Standard chain id, e.g. `sui:testnet`.
    pub fn chain_id(&self) -> &'static str {
        match self {
            Network::Mainnet => "sui:mainnet",
            Network::Testnet => "sui:testnet",
            Network::Devnet => "sui:devnet",
            Network::Localnet => "sui:localnet",
        }
    }

    /// Public fullnode JSON-RPC endpoint.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Localnet => "http://127.0.0.1:9000",
        }
    }

    /// Explorer page for a transaction digest. Localnet has no public explorer.
    pub fn explorer_tx_url(&self, digest: &str) -> Option<String> {
        match self {
            Network::Localnet => None,
            network => Some(format!(
                "https://suiscan.xyz/{}/tx/{}",
                network.as_str(),
                digest
            )),
        }
    }
}

impl FromStr for Network {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "localnet" | "local" => Ok(Network::Localnet),
            other => Err(SuiError::Config(format!("unknown network '{}'", other))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of the NFT example package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    pub package_id: ObjectId,
    pub network: Network,
}

impl PackageConfig {
    /// Parse a package id and network name.
    pub fn new(package_id: &str, network: &str) -> Result<Self> {
        let package_id: ObjectId = package_id
            .parse()
            .map_err(|e| SuiError::Config(format!("{}: {}", PACKAGE_ID_ENV, e)))?;
        let network = network.parse()?;
        Ok(Self {
            package_id,
            network,
        })
    }

    /// Load from `NFT_PACKAGE_ID` and `SUI_NETWORK`.
    pub fn from_env() -> Result<Self> {
        let package_id = get_env(PACKAGE_ID_ENV)?;
        let network = get_env_or(NETWORK_ENV, Network::default().as_str());
        let config = Self::new(&package_id, &network)?;
        info!(package = %config.package_id, network = %config.network, "loaded package config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parse() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(" Testnet ".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("local".parse::<Network>().unwrap(), Network::Localnet);
        assert!(matches!("moonnet".parse::<Network>(), Err(SuiError::Config(_))));
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(Network::Mainnet.chain_id(), "sui:mainnet");
        assert_eq!(Network::default().chain_id(), "sui:testnet");
        assert_eq!(Network::Localnet.rpc_url(), "http://127.0.0.1:9000");
        assert_eq!(Network::Devnet.to_string(), "devnet");
    }

    #[test]
    fn test_explorer_url() {
        assert_eq!(
            Network::Testnet.explorer_tx_url("8Hq3"),
            Some("https://suiscan.xyz/testnet/tx/8Hq3".to_string())
        );
        assert_eq!(Network::Localnet.explorer_tx_url("8Hq3"), None);
    }

    #[test]
    fn test_package_config_new() {
        let config = PackageConfig::new("0xabc", "devnet").unwrap();
        assert_eq!(config.package_id, "0xabc".parse::<ObjectId>().unwrap());
        assert_eq!(config.network, Network::Devnet);

        let err = PackageConfig::new("0xnothex", "devnet").unwrap_err();
        assert!(err.to_string().contains(PACKAGE_ID_ENV));
    }

    #[test]
    fn test_package_config_from_env() {
        // Only test that touches these variables
        std::env::set_var(PACKAGE_ID_ENV, "0x42");
        std::env::remove_var(NETWORK_ENV);
        let config = PackageConfig::from_env().unwrap();
        assert_eq!(config.package_id, "0x42".parse::<ObjectId>().unwrap());
        assert_eq!(config.network, Network::Testnet);

        std::env::remove_var(PACKAGE_ID_ENV);
        assert!(matches!(PackageConfig::from_env(), Err(SuiError::Config(_))));
    }
}
