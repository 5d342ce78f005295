//! Home-screen status cards fed by the transaction service.

use leptos::prelude::*;

use crate::state::wallet::WalletState;
use crate::util::format::format_inr;

/// Pending-settlement count and incoming total for the dashboard.
#[component]
pub fn StatusCards() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let pending = move || {
        wallet
            .get()
            .status
            .map_or_else(|| "\u{2014}".to_owned(), |s| s.pending_settlements.to_string())
    };
    let incoming = move || {
        wallet
            .get()
            .status
            .map_or_else(|| "\u{2014}".to_owned(), |s| format_inr(s.incoming_amount))
    };

    view! {
        <div class="status-cards">
            <div class="status-cards__card">
                <span class="status-cards__label">"Pending Settlements"</span>
                <span class="status-cards__value">{pending}</span>
            </div>
            <div class="status-cards__card">
                <span class="status-cards__label">"Incoming"</span>
                <span class="status-cards__value">{incoming}</span>
            </div>
        </div>
    }
}
