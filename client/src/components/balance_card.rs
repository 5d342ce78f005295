//! Balance card showing the spendable/escrow split.

use leptos::prelude::*;

use crate::state::wallet::WalletState;
use crate::util::format::format_inr;

/// The two headline amounts of the wallet dashboard.
///
/// Renders em-dash placeholders until the first balance fetch lands so the
/// card keeps its shape while loading.
#[component]
pub fn BalanceCard() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let spendable = move || {
        wallet
            .get()
            .balance
            .map_or_else(|| "\u{2014}".to_owned(), |b| format_inr(b.spendable_balance))
    };
    let locked = move || {
        wallet
            .get()
            .balance
            .map_or_else(|| "\u{2014}".to_owned(), |b| format_inr(b.escrow_locked))
    };

    view! {
        <div class="balance-card">
            <div class="balance-card__cell">
                <span class="balance-card__label">"Spendable Balance"</span>
                <span class="balance-card__amount">{spendable}</span>
            </div>
            <div class="balance-card__cell balance-card__cell--locked">
                <span class="balance-card__label">"Locked in Escrow"</span>
                <span class="balance-card__amount">{locked}</span>
            </div>
        </div>
    }
}
