use serde::{Deserialize, Serialize};

/// A wallet registered through the Wallet Standard that supports Sui
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetectedWallet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub chains: Vec<String>,
}

impl DetectedWallet {
    /// Whether the wallet advertises the given chain id (e.g. `sui:testnet`)
    pub fn supports_chain(&self, chain: &str) -> bool {
        self.chains.iter().any(|c| c == chain)
    }
}

/// The account returned by `standard:connect`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Output of `sui:signAndExecuteTransaction`
///
/// Wallets disagree on the shape of `effects` (base64 BCS string or a JSON
/// object), so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedTransaction {
    pub digest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_wallet_from_js_shape() {
        let wallet: DetectedWallet = serde_json::from_str(
            r#"{"name":"Sui Wallet","icon":"data:image/svg+xml;base64,AA==","chains":["sui:mainnet","sui:testnet"]}"#,
        )
        .unwrap();
        assert!(wallet.supports_chain("sui:testnet"));
        assert!(!wallet.supports_chain("sui:devnet"));
    }

    #[test]
    fn test_wallet_account_without_label() {
        let account: WalletAccount = serde_json::from_str(r#"{"address":"0x2"}"#).unwrap();
        assert_eq!(account.address, "0x2");
        assert_eq!(account.label, None);
    }

    #[test]
    fn test_executed_transaction_effects_any_shape() {
        let encoded: ExecutedTransaction =
            serde_json::from_str(r#"{"digest":"8Hq3","effects":"AQID"}"#).unwrap();
        assert_eq!(encoded.effects, Some(serde_json::json!("AQID")));

        let object: ExecutedTransaction = serde_json::from_str(
            r#"{"digest":"8Hq3","effects":{"status":{"status":"success"},"gasUsed":{"computationCost":"1000"}}}"#,
        )
        .unwrap();
        assert_eq!(object.digest, "8Hq3");
        assert_eq!(object.effects.unwrap()["status"]["status"], "success");

        let missing: ExecutedTransaction = serde_json::from_str(r#"{"digest":"8Hq3","effects":null}"#).unwrap();
        assert_eq!(missing.effects, None);
    }
}
