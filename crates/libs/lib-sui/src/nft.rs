//! # NFT Example Package Calls
//!
//! Transaction builders for the `nft_example` Move module.

use tracing::debug;

use crate::config::PackageConfig;
use crate::pure::PureArg;
use crate::transaction::Transaction;
use crate::types::MoveCallTarget;

/// Move module of the NFT example package.
pub const NFT_MODULE: &str = "nft_example";

/// Entry point minting an NFT and transferring it to the transaction sender.
pub const MINT_NFT_TO_SENDER: &str = "mint_nft_to_sender";

/// `<package>::nft_example::mint_nft_to_sender`
pub fn mint_target(config: &PackageConfig) -> MoveCallTarget {
    MoveCallTarget::from_parts_unchecked(config.package_id, NFT_MODULE, MINT_NFT_TO_SENDER)
}

/// Build an unsigned transaction minting an NFT to the sender.
///
/// `name` and `description` are passed as Move strings, `url` as the
/// `vector<u8>` of its UTF-8 bytes. Inputs are not validated here; the chain
/// rejects what the Move function does not accept.
///
/// ```rust
/// use lib_sui::{mint_nft_tx, PackageConfig, PureArg};
///
/// let config = PackageConfig::new("0x2", "testnet").unwrap();
/// let tx = mint_nft_tx(&config, "Cat", "A cute cat", "https://example.com/cat.png");
///
/// let call = tx.move_calls().next().unwrap();
/// assert_eq!(call.target.function(), "mint_nft_to_sender");
/// assert_eq!(
///     tx.pure_input(&call.arguments[2]),
///     Some(&PureArg::U8Vector(b"https://example.com/cat.png".to_vec()))
/// );
/// ```
pub fn mint_nft_tx(config: &PackageConfig, name: &str, description: &str, url: &str) -> Transaction {
    let mut tx = Transaction::new();

    let arguments = vec![
        tx.pure(PureArg::string(name)),
        tx.pure(PureArg::string(description)),
        tx.pure(PureArg::utf8_bytes(url)),
    ];
    tx.move_call(mint_target(config), Vec::new(), arguments);

    debug!(nft_name = name, url_len = url.len(), "built mint_nft_to_sender transaction");
    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;
    use crate::transaction::{Argument, Command};
    use crate::types::is_valid_identifier;
    use serde_json::Value;

    const PACKAGE: &str = "0x9f1e3b5d7c2a4e6f8b0d2c4a6e8f0b2d4c6a8e0f2b4d6c8a0e2f4b6d8c0a2e49";

    fn config() -> PackageConfig {
        PackageConfig::new(PACKAGE, "testnet").unwrap()
    }

    fn pure_args(tx: &Transaction) -> Vec<PureArg> {
        let call = tx.move_calls().next().unwrap();
        call.arguments
            .iter()
            .map(|arg| tx.pure_input(arg).cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_entry_point_names_are_identifiers() {
        assert!(is_valid_identifier(NFT_MODULE));
        assert!(is_valid_identifier(MINT_NFT_TO_SENDER));
    }

    #[test]
    fn test_mint_cat_example() {
        let tx = mint_nft_tx(&config(), "Cat", "A cute cat", "https://example.com/cat.png");

        assert_eq!(tx.commands().len(), 1);
        let Command::MoveCall(call) = &tx.commands()[0];
        assert_eq!(
            call.target.to_string(),
            format!("{}::nft_example::mint_nft_to_sender", PACKAGE)
        );
        assert!(call.type_arguments.is_empty());
        assert_eq!(
            call.arguments,
            vec![Argument::Input(0), Argument::Input(1), Argument::Input(2)]
        );
        assert_eq!(
            pure_args(&tx),
            vec![
                PureArg::String("Cat".to_string()),
                PureArg::String("A cute cat".to_string()),
                PureArg::U8Vector(b"https://example.com/cat.png".to_vec()),
            ]
        );
    }

    #[test]
    fn test_mint_passes_inputs_unchanged() {
        let name = "  Ünïcødé 🐈 ";
        let description = "";
        let url = "not a url at all";
        let tx = mint_nft_tx(&config(), name, description, url);

        let args = pure_args(&tx);
        assert_eq!(args[0], PureArg::String(name.to_string()));
        assert_eq!(args[1], PureArg::String(String::new()));
        assert_eq!(args[2], PureArg::U8Vector(url.as_bytes().to_vec()));
    }

    #[test]
    fn test_mint_url_is_utf8_bytes() {
        let url = "https://example.com/ねこ.png";
        let tx = mint_nft_tx(&config(), "Neko", "cat", url);
        match &pure_args(&tx)[2] {
            PureArg::U8Vector(bytes) => {
                assert_eq!(bytes.as_slice(), url.as_bytes());
                assert_eq!(std::str::from_utf8(bytes).unwrap(), url);
            }
            other => panic!("expected vector<u8>, got {:?}", other),
        }
    }

    #[test]
    fn test_mint_fresh_transaction_each_call() {
        let config = config();
        let mut first = mint_nft_tx(&config, "Cat", "A cute cat", "https://example.com/cat.png");
        let second = mint_nft_tx(&config, "Cat", "A cute cat", "https://example.com/cat.png");
        assert_eq!(first, second);

        // Mutating one descriptor leaves the other untouched
        first.set_gas_budget(5_000_000);
        first.pure(PureArg::Bool(true));
        assert_ne!(first, second);
        assert_eq!(second.inputs().len(), 3);
        assert_eq!(second.gas_budget(), None);
    }

    #[test]
    fn test_mint_target_follows_config() {
        let other = PackageConfig {
            package_id: "0x2".parse().unwrap(),
            network: Network::Devnet,
        };
        let tx = mint_nft_tx(&other, "a", "b", "c");
        let call = tx.move_calls().next().unwrap();
        assert_eq!(call.target.package(), other.package_id);
        assert_eq!(call.target, mint_target(&other));
    }

    #[test]
    fn test_mint_json_for_wallet() {
        let tx = mint_nft_tx(&config(), "Cat", "A cute cat", "https://example.com/cat.png");
        let doc: Value = serde_json::from_str(&tx.to_json().unwrap()).unwrap();

        assert_eq!(doc["version"], 2);
        assert_eq!(doc["inputs"].as_array().unwrap().len(), 3);
        assert_eq!(doc["inputs"][0]["Pure"]["bytes"], "A0NhdA==");

        let call = &doc["commands"][0]["MoveCall"];
        assert_eq!(call["package"], PACKAGE);
        assert_eq!(call["module"], NFT_MODULE);
        assert_eq!(call["function"], MINT_NFT_TO_SENDER);
        assert_eq!(
            call["arguments"],
            serde_json::json!([{"Input": 0}, {"Input": 1}, {"Input": 2}])
        );

        let url_bytes = lib_utils::b64_decode(doc["inputs"][2]["Pure"]["bytes"].as_str().unwrap()).unwrap();
        assert_eq!(url_bytes[0] as usize, "https://example.com/cat.png".len());
        assert_eq!(&url_bytes[1..], b"https://example.com/cat.png");
    }
}
