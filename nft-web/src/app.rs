//! NFT Example web app - Leptos frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{MintPage, StatusPage};
use crate::state::wallet::provide_wallet_context;
use crate::utils::config::provide_app_config;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();
    provide_app_config();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=MintPage/>
                    <Route path=path!("/status") view=StatusPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="page">
            <div class="card">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </main>
    }
}
