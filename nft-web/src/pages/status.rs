//! Wallet Status Page - connected account and package details

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::services::wallet::{current_account, disconnect_wallet};
use crate::state::wallet::use_wallet_context;
use crate::utils::config::use_app_config;

#[component]
pub fn StatusPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let app_config = use_app_config();
    let navigate = use_navigate();

    let on_disconnect = move |_| {
        if let Some(name) = wallet_ctx.wallet_name() {
            leptos::task::spawn_local(async move {
                if let Err(e) = disconnect_wallet(&name).await {
                    log::warn!("Failed to disconnect {}: {}", name, e);
                }
            });
        }
        wallet_ctx.disconnect();
        navigate("/", Default::default());
    };

    let package_line = match &app_config.0 {
        Ok(config) => format!("{} ({})", config.package_id, config.network),
        Err(err) => err.clone(),
    };

    view! {
        <main class="page">
            <div class="card">
                <h1 class="card-title">"Wallet Status"</h1>

                <p class="label">"Package"</p>
                <p class="mono">{package_line}</p>

                {move || {
                    let disconnect = on_disconnect.clone();

                    match (wallet_ctx.wallet_name(), wallet_ctx.address()) {
                        (Some(wallet), Some(address)) => {
                            // Re-read on every context change, account switches included
                            let label = current_account(&wallet).and_then(|account| account.label);
                            view! {
                                <div>
                                    <p class="label">"Wallet"</p>
                                    <p>{wallet}</p>

                                    <p class="label">"Address"</p>
                                    <p class="mono">{address}</p>
                                    {label.map(|label| view! { <p class="hint">{label}</p> })}

                                    <button class="btn btn-danger" on:click=disconnect>
                                        "Disconnect Wallet"
                                    </button>
                                </div>
                            }.into_any()
                        }
                        _ => view! {
                            <div>
                                <p class="hint">"No wallet connected"</p>
                                <A href="/">
                                    <span class="btn">"Back to mint"</span>
                                </A>
                            </div>
                        }.into_any(),
                    }
                }}
            </div>
        </main>
    }
}
