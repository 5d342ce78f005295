//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    login::LoginPage, merchant::MerchantPage, transactions::TransactionsPage, wallet::WalletPage,
};
use crate::state::{
    auth::AuthState, merchant::MerchantState, transactions::TransactionsState, wallet::WalletState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing. The
/// auth context is seeded from the persisted login session so a page reload
/// lands back on the dashboard instead of the login screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        session: crate::util::session::load(),
        profile: None,
        loading: false,
    });
    let wallet = RwSignal::new(WalletState::default());
    let merchant = RwSignal::new(MerchantState::default());
    let transactions = RwSignal::new(TransactionsState::default());

    provide_context(auth);
    provide_context(wallet);
    provide_context(merchant);
    provide_context(transactions);

    view! {
        <Stylesheet id="leptos" href="/pkg/bluemint-ui.css"/>
        <Title text="BlueMint Wallet"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=WalletPage/>
                <Route path=StaticSegment("merchant") view=MerchantPage/>
                <Route path=StaticSegment("transactions") view=TransactionsPage/>
            </Routes>
        </Router>
    }
}
