//! Mint page
//!
//! Collects name, description and image URL, builds the
//! `mint_nft_to_sender` transaction and asks the connected wallet to sign and
//! execute it.

use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;
use lib_sui::mint_nft_tx;
use lib_utils::validation::{validate_http_url, validate_max_length, validate_not_empty};
use shared::dto::mint::{MintNftReceipt, MintNftRequest};

use crate::services::wallet::sign_and_execute_transaction;
use crate::state::wallet::use_wallet_context;
use crate::utils::config::use_app_config;
use crate::utils::constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN};

/// Check the form before building a transaction. The transaction builder
/// itself accepts anything; these checks only spare the user a failed
/// wallet round trip.
pub fn validate_form(request: &MintNftRequest) -> Result<(), String> {
    validate_not_empty(&request.name, "Name")?;
    validate_max_length(&request.name, MAX_NAME_LEN, "Name")?;
    validate_max_length(&request.description, MAX_DESCRIPTION_LEN, "Description")?;
    validate_http_url(request.url.trim(), "Image URL")?;
    validate_max_length(&request.url, MAX_URL_LEN, "Image URL")?;
    Ok(())
}

#[component]
pub fn MintPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let app_config = use_app_config();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (url, set_url) = signal(String::new());

    let (error, set_error) = signal(None::<String>);
    let (minting, set_minting) = signal(false);
    let (receipt, set_receipt) = signal(None::<MintNftReceipt>);

    let config_error = app_config.0.clone().err();
    let package_config = app_config.0.ok();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = MintNftRequest::new(name.get(), description.get(), url.get().trim());
        if let Err(msg) = validate_form(&request) {
            set_error.set(Some(msg));
            return;
        }

        let Some(config) = package_config else {
            set_error.set(Some("The app has no package configured".to_string()));
            return;
        };

        let Some(wallet) = wallet_ctx.wallet_name() else {
            set_error.set(Some("Connect a wallet to mint".to_string()));
            return;
        };

        set_error.set(None);
        set_receipt.set(None);
        set_minting.set(true);

        leptos::task::spawn_local(async move {
            let tx = mint_nft_tx(&config, &request.name, &request.description, &request.url);

            match sign_and_execute_transaction(&wallet, &tx, config.network).await {
                Ok(executed) => {
                    log!("Mint executed: {}", executed.digest);
                    let explorer_url = config.network.explorer_tx_url(&executed.digest);
                    set_receipt.set(Some(MintNftReceipt {
                        digest: executed.digest,
                        explorer_url,
                    }));
                }
                Err(e) => {
                    log!("Mint failed: {}", e);
                    set_error.set(Some(format!("Mint failed: {}", e)));
                }
            }
            set_minting.set(false);
        });
    };

    view! {
        <main class="page">
            <div class="card">
                <h1 class="card-title">"Mint an NFT"</h1>

                {config_error.map(|err| view! {
                    <div class="error">
                        <p>{err}</p>
                    </div>
                })}

                {move || (!wallet_ctx.is_connected()).then(|| view! {
                    <div class="info">
                        <p>"Connect a wallet to mint"</p>
                    </div>
                })}

                <form class="mint-form" on:submit=on_submit>
                    <label for="nft-name">"Name"</label>
                    <input
                        id="nft-name"
                        type="text"
                        placeholder="Cat"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label for="nft-description">"Description"</label>
                    <input
                        id="nft-description"
                        type="text"
                        placeholder="A cute cat"
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />

                    <label for="nft-url">"Image URL"</label>
                    <input
                        id="nft-url"
                        type="url"
                        placeholder="https://example.com/cat.png"
                        prop:value=url
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />

                    <button
                        class="btn"
                        type="submit"
                        disabled=move || minting.get() || !wallet_ctx.is_connected()
                    >
                        {move || if minting.get() { "Minting..." } else { "Mint" }}
                    </button>
                </form>

                {move || minting.get().then(|| view! {
                    <p class="hint">"Please approve the transaction in your wallet..."</p>
                })}

                {move || error.get().map(|err| view! {
                    <div class="error">
                        <p>{err}</p>
                    </div>
                })}

                {move || receipt.get().map(|receipt| view! {
                    <div class="success">
                        <p>"NFT minted"</p>
                        <p class="digest">{receipt.digest.clone()}</p>
                        {receipt.explorer_url.map(|href| view! {
                            <a href=href target="_blank" rel="noopener noreferrer">"View on explorer"</a>
                        })}
                    </div>
                })}
            </div>
        </main>
    }
}
