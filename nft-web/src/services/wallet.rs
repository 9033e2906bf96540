//! Sui wallet integration via wasm-bindgen
//!
//! Wallets register themselves with the page through the Wallet Standard
//! (`wallet-standard:register-wallet` / `wallet-standard:app-ready` events).
//! This module keeps a registry of the ones that speak Sui and exposes
//! connect, current account, disconnect and sign-and-execute.

use lib_sui::{Network, Transaction};
use serde::de::DeserializeOwned;
use shared::dto::wallet::{DetectedWallet, ExecutedTransaction, WalletAccount};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// WALLET STANDARD REGISTRY (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
const registered = new Map();
let initialized = false;

function isSuiWallet(wallet) {
    if (!wallet || !wallet.features || !wallet.features['standard:connect']) {
        return false;
    }
    const chains = Array.from(wallet.chains || []);
    return chains.some((chain) => chain.startsWith('sui:'));
}

function register(...wallets) {
    for (const wallet of wallets) {
        if (isSuiWallet(wallet)) {
            registered.set(wallet.name, wallet);
        }
    }
    return () => {
        for (const wallet of wallets) {
            registered.delete(wallet.name);
        }
    };
}

function init() {
    if (initialized) {
        return;
    }
    initialized = true;
    const api = Object.freeze({ register });
    window.addEventListener('wallet-standard:register-wallet', (event) => {
        try {
            event.detail(api);
        } catch (error) {
            console.error('Wallet registration failed:', error);
        }
    });
    window.dispatchEvent(new CustomEvent('wallet-standard:app-ready', { detail: api }));
}

function getWallet(name) {
    init();
    const wallet = registered.get(name);
    if (!wallet) {
        throw new Error(name + ' wallet not found');
    }
    return wallet;
}

function toAccount(account) {
    return account ? { address: account.address, label: account.label || null } : null;
}

export function detectWallets() {
    init();
    return Array.from(registered.values()).map((wallet) => ({
        name: wallet.name,
        icon: wallet.icon || null,
        chains: Array.from(wallet.chains || []),
    }));
}

export async function connectWallet(name) {
    const wallet = getWallet(name);
    const output = await wallet.features['standard:connect'].connect();
    const accounts = (output && output.accounts) || wallet.accounts || [];
    if (accounts.length === 0) {
        throw new Error(name + ' returned no accounts');
    }
    return toAccount(accounts[0]);
}

export function currentAccount(name) {
    init();
    const wallet = registered.get(name);
    if (!wallet || !wallet.accounts || wallet.accounts.length === 0) {
        return null;
    }
    return toAccount(wallet.accounts[0]);
}

export function watchAccounts(name, callback) {
    init();
    const wallet = registered.get(name);
    const feature = wallet && wallet.features['standard:events'];
    if (!feature) {
        return false;
    }
    feature.on('change', (properties) => {
        if (properties && properties.accounts) {
            callback(toAccount(properties.accounts[0]));
        }
    });
    return true;
}

export async function disconnectWallet(name) {
    const wallet = getWallet(name);
    const feature = wallet.features['standard:disconnect'];
    if (feature) {
        await feature.disconnect();
    }
}

export async function signAndExecuteTransaction(name, transactionJson, chain) {
    const wallet = getWallet(name);
    const account = wallet.accounts && wallet.accounts[0];
    if (!account) {
        throw new Error(name + ' is not connected');
    }
    const feature = wallet.features['sui:signAndExecuteTransaction'];
    if (!feature) {
        throw new Error(name + ' does not support sui:signAndExecuteTransaction');
    }
    const transaction = { toJSON: async () => transactionJson };
    const result = await feature.signAndExecuteTransaction({ transaction, account, chain });
    return { digest: result.digest, effects: result.effects || null };
}
")]
extern "C" {
    #[wasm_bindgen(js_name = detectWallets)]
    fn detect_wallets() -> JsValue;

    #[wasm_bindgen(js_name = connectWallet, catch)]
    async fn connect_wallet_js(name: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = currentAccount)]
    fn current_account_js(name: &str) -> JsValue;

    #[wasm_bindgen(js_name = watchAccounts)]
    fn watch_accounts_js(name: &str, callback: &Closure<dyn FnMut(JsValue)>) -> bool;

    #[wasm_bindgen(js_name = disconnectWallet, catch)]
    async fn disconnect_wallet_js(name: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signAndExecuteTransaction, catch)]
    async fn sign_and_execute_js(
        name: &str,
        transaction_json: &str,
        chain: &str,
    ) -> Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet connection state
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String, wallet: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn wallet_name(&self) -> Option<&str> {
        match self {
            WalletState::Connected { wallet, .. } => Some(wallet),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WalletState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Readable message from a rejected JS promise
fn js_error_message(err: JsValue) -> String {
    if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(js_err.message());
    }
    err.as_string()
        .unwrap_or_else(|| format!("Wallet error: {:?}", err))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, String> {
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Unexpected wallet response: {}", e))
}

/// Wallets registered with the page that support Sui
pub fn get_available_wallets() -> Vec<DetectedWallet> {
    from_js(detect_wallets()).unwrap_or_else(|e| {
        log::warn!("Failed to read registered wallets: {}", e);
        Vec::new()
    })
}

/// Connect to a wallet by name and return its first account
pub async fn connect_wallet(name: &str) -> Result<WalletAccount, String> {
    let account = connect_wallet_js(name).await.map_err(js_error_message)?;
    from_js(account)
}

/// Account currently exposed by a wallet, if any
pub fn current_account(name: &str) -> Option<WalletAccount> {
    let account = current_account_js(name);
    if account.is_null() || account.is_undefined() {
        return None;
    }
    from_js(account).ok()
}

/// Call `on_change` whenever the wallet reports a different account
/// (`standard:events`). `None` means the wallet no longer exposes any.
/// The listener lives as long as the page.
pub fn watch_accounts(name: &str, mut on_change: impl FnMut(Option<WalletAccount>) + 'static) {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        let account = if value.is_null() || value.is_undefined() {
            None
        } else {
            from_js(value).ok()
        };
        on_change(account);
    });

    if !watch_accounts_js(name, &callback) {
        log::debug!("{} does not emit standard:events", name);
    }
    callback.forget();
}

/// Disconnect from a wallet. Wallets without `standard:disconnect` are a no-op.
pub async fn disconnect_wallet(name: &str) -> Result<(), String> {
    disconnect_wallet_js(name)
        .await
        .map(|_| ())
        .map_err(js_error_message)
}

/// Ask a wallet to sign and execute a transaction on `network`
pub async fn sign_and_execute_transaction(
    name: &str,
    transaction: &Transaction,
    network: Network,
) -> Result<ExecutedTransaction, String> {
    let transaction_json = transaction.to_json().map_err(|e| e.to_string())?;
    log::debug!("Sending transaction to {} on {}", name, network.chain_id());

    let result = sign_and_execute_js(name, &transaction_json, network.chain_id())
        .await
        .map_err(js_error_message)?;
    from_js(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_state_disconnected() {
        let state = WalletState::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert_eq!(state.wallet_name(), None);
    }

    #[test]
    fn test_wallet_state_connected() {
        let state = WalletState::Connected {
            address: "0x42".to_string(),
            wallet: "Sui Wallet".to_string(),
        };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some("0x42"));
        assert_eq!(state.wallet_name(), Some("Sui Wallet"));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_wallet_state_error() {
        let state = WalletState::Error("User rejected the request".to_string());
        assert!(!state.is_connected());
        assert_eq!(state.error(), Some("User rejected the request"));
    }
}
