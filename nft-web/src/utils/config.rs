//! Package configuration for the browser bundle
//!
//! The wasm bundle has no process environment, so the package id and network
//! are read at compile time and parsed once when the app mounts.

use leptos::prelude::*;
use lib_sui::{PackageConfig, Result, SuiError};

use crate::utils::constants::{BUILD_NETWORK, BUILD_PACKAGE_ID, DEFAULT_NETWORK};

/// Parsed configuration, or the message to show instead of the mint form
#[derive(Clone, Debug)]
pub struct AppConfig(pub std::result::Result<PackageConfig, String>);

/// Parse a package id and optional network name.
pub fn parse_config(package_id: Option<&str>, network: Option<&str>) -> Result<PackageConfig> {
    let package_id = package_id.ok_or_else(|| {
        SuiError::Config("NFT_PACKAGE_ID was not set when the app was built".to_string())
    })?;
    PackageConfig::new(package_id, network.unwrap_or(DEFAULT_NETWORK))
}

pub fn provide_app_config() -> AppConfig {
    let config = AppConfig(parse_config(BUILD_PACKAGE_ID, BUILD_NETWORK).map_err(|e| e.to_string()));
    match &config.0 {
        Ok(c) => log::info!("Package {} on {}", c.package_id, c.network),
        Err(e) => log::error!("Invalid package configuration: {}", e),
    }
    provide_context(config.clone());
    config
}

pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}
