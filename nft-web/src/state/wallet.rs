//! Wallet state management

use leptos::prelude::*;
use crate::services::wallet::WalletState;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn wallet_name(&self) -> Option<String> {
        self.wallet.with(|state| state.wallet_name().map(|s| s.to_string()))
    }

    pub fn error(&self) -> Option<String> {
        self.wallet.with(|state| state.error().map(|s| s.to_string()))
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, wallet: String) {
        self.wallet.set(WalletState::Connected { address, wallet });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }

    /// Follow an account switch reported by `wallet`. Ignored unless that
    /// wallet is the connected one.
    pub fn account_changed(&self, wallet: &str, address: Option<String>) {
        self.wallet.update(|state| {
            if state.wallet_name() != Some(wallet) {
                return;
            }
            *state = match address {
                Some(address) => WalletState::Connected {
                    address,
                    wallet: wallet.to_string(),
                },
                None => WalletState::Disconnected,
            };
        });
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_connect_then_disconnect() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = WalletContext::new();
            assert!(!ctx.is_connected());

            ctx.set_connecting();
            assert!(!ctx.is_connected());

            ctx.set_connected("0x42".to_string(), "Sui Wallet".to_string());
            assert!(ctx.is_connected());
            assert_eq!(ctx.address().as_deref(), Some("0x42"));
            assert_eq!(ctx.wallet_name().as_deref(), Some("Sui Wallet"));

            ctx.disconnect();
            assert_eq!(ctx.address(), None);
        });
    }

    #[test]
    fn test_error_is_not_connected() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = WalletContext::new();
            ctx.set_error("No accounts".to_string());
            assert!(!ctx.is_connected());
            assert_eq!(ctx.error().as_deref(), Some("No accounts"));
        });
    }

    #[test]
    fn test_account_switch_follows_wallet() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = WalletContext::new();
            ctx.set_connected("0x42".to_string(), "Sui Wallet".to_string());

            ctx.account_changed("Sui Wallet", Some("0x43".to_string()));
            assert_eq!(ctx.address().as_deref(), Some("0x43"));
            assert_eq!(ctx.wallet_name().as_deref(), Some("Sui Wallet"));

            // Another wallet's events do not touch the connection
            ctx.account_changed("Other Wallet", Some("0x99".to_string()));
            assert_eq!(ctx.address().as_deref(), Some("0x43"));

            ctx.account_changed("Sui Wallet", None);
            assert!(!ctx.is_connected());
        });
    }

    #[test]
    fn test_account_change_ignored_when_disconnected() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = WalletContext::new();
            ctx.account_changed("Sui Wallet", Some("0x43".to_string()));
            assert_eq!(ctx.wallet.get_untracked(), WalletState::Disconnected);
        });
    }
}
