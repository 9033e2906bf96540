//! NFT Example web frontend
//!
//! Navigation header with a Sui wallet connect control, and a mint page that
//! builds the `mint_nft_to_sender` transaction and hands it to the wallet.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages to the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("NFT Example frontend starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, loading screen left in place");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(utils::constants::LOADING_ELEMENT_ID) else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }
}
