//! Navigation header: home link and wallet connect control

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::ConnectButton;

/// Route the title links to.
pub const HOME_PATH: &str = "/";

pub const SITE_TITLE: &str = "NFT Example";

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <A href=HOME_PATH>
                    <span class="nav-title">{SITE_TITLE}</span>
                </A>

                <div class="site-header-actions">
                    <ConnectButton/>
                </div>
            </div>
        </header>
    }
}
