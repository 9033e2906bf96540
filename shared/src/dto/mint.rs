use serde::{Deserialize, Serialize};

/// NFT mint input, as entered in the mint form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MintNftRequest {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl MintNftRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

/// Result of a mint transaction executed by the wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MintNftReceipt {
    pub digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}
