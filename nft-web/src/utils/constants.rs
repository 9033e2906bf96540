//! Application constants

/// Id of the loading placeholder in index.html
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

/// Package id baked in at build time (`NFT_PACKAGE_ID=0x… trunk build`)
pub const BUILD_PACKAGE_ID: Option<&str> = option_env!("NFT_PACKAGE_ID");

/// Network baked in at build time, `testnet` when unset
pub const BUILD_NETWORK: Option<&str> = option_env!("SUI_NETWORK");

pub const DEFAULT_NETWORK: &str = "testnet";

// Form limits (bytes)
pub const MAX_NAME_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 1024;
pub const MAX_URL_LEN: usize = 2048;
