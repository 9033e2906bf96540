//! Wallet connect control
//!
//! Disconnected: "Connect Wallet" opens a picker of detected Sui wallets.
//! Connected: shows the short address and follows account switches made in
//! the wallet; clicking disconnects.

use leptos::logging::log;
use leptos::prelude::*;
use shared::dto::wallet::DetectedWallet;
use shared::utils::truncate_address;

use crate::services::wallet::{
    connect_wallet, disconnect_wallet, get_available_wallets, watch_accounts, WalletState,
};
use crate::state::wallet::use_wallet_context;

/// Label and enabled state of the connect button for a wallet state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonFace {
    pub label: String,
    pub disabled: bool,
}

impl ButtonFace {
    pub fn for_state(state: &WalletState) -> Self {
        match state {
            WalletState::Connected { address, .. } => Self {
                label: truncate_address(address),
                disabled: false,
            },
            WalletState::Connecting => Self {
                label: "Connecting...".to_string(),
                disabled: true,
            },
            WalletState::Disconnected | WalletState::Error(_) => Self {
                label: "Connect Wallet".to_string(),
                disabled: false,
            },
        }
    }
}

#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let (show_picker, set_show_picker) = signal(false);
    let (wallets, set_wallets) = signal(Vec::<DetectedWallet>::new());

    let open_picker = move |_| {
        set_wallets.set(get_available_wallets());
        set_show_picker.set(true);
    };

    let connect = move |name: String| {
        set_show_picker.set(false);
        wallet_ctx.set_connecting();

        leptos::task::spawn_local(async move {
            match connect_wallet(&name).await {
                Ok(account) => {
                    log!("{} connected: {}", name, account.address);
                    let watched = name.clone();
                    watch_accounts(&name, move |account| {
                        wallet_ctx.account_changed(&watched, account.map(|account| account.address));
                    });
                    wallet_ctx.set_connected(account.address, name);
                }
                Err(e) => {
                    log!("Failed to connect {}: {}", name, e);
                    wallet_ctx.set_error(e);
                }
            }
        });
    };

    let disconnect = move |_| {
        if let Some(name) = wallet_ctx.wallet_name() {
            leptos::task::spawn_local(async move {
                if let Err(e) = disconnect_wallet(&name).await {
                    log!("Failed to disconnect {}: {}", name, e);
                }
            });
        }
        wallet_ctx.disconnect();
    };

    view! {
        <div class="wallet-container">
            {move || {
                let state = wallet_ctx.wallet.get();
                let face = ButtonFace::for_state(&state);
                match state {
                    WalletState::Connected { address, wallet } => view! {
                        <button
                            class="connect-button connected"
                            title=format!("{} ({}) - click to disconnect", address, wallet)
                            on:click=disconnect
                        >
                            {face.label}
                        </button>
                    }.into_any(),
                    _ => view! {
                        <button class="connect-button" disabled=face.disabled on:click=open_picker>
                            {face.label}
                        </button>
                    }.into_any(),
                }
            }}

            {move || wallet_ctx.error().map(|err| view! {
                <span class="wallet-error">{err}</span>
            })}

            {move || show_picker.get().then(|| {
                let detected = wallets.get();
                view! {
                    <div class="wallet-picker">
                        {if detected.is_empty() {
                            view! {
                                <p class="wallet-picker-empty">
                                    "No Sui wallet detected. Install a Wallet Standard compatible wallet and reload."
                                </p>
                            }.into_any()
                        } else {
                            detected.into_iter().map(move |wallet| {
                                let name = wallet.name.clone();
                                view! {
                                    <button
                                        class="wallet-button"
                                        on:click=move |_| connect(name.clone())
                                    >
                                        {wallet.icon.map(|icon| view! {
                                            <img src=icon alt="" class="wallet-icon"/>
                                        })}
                                        <span>{wallet.name}</span>
                                    </button>
                                }
                            }).collect::<Vec<_>>().into_any()
                        }}
                        <button class="wallet-picker-close" on:click=move |_| set_show_picker.set(false)>
                            "Cancel"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
