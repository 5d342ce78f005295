//! Transactions page: full feed or settled-only history.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::transaction_row::TransactionRow;
use crate::state::auth::AuthState;
use crate::state::transactions::{HistoryFilter, TransactionsState};
use crate::util::auth::install_unauth_redirect;

fn empty_line(filter: HistoryFilter) -> &'static str {
    match filter {
        HistoryFilter::All => "No transactions yet.",
        HistoryFilter::SettledOnly => "No settled transactions yet.",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn feed_failed_line(error: &str) -> String {
    format!("Could not load transactions ({error}).")
}

fn load_feed(transactions: RwSignal<TransactionsState>, wallet_id: String, filter: HistoryFilter) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        transactions.update(|t| t.loading = true);
        let result = match filter {
            HistoryFilter::All => crate::net::api::fetch_transactions(&wallet_id).await,
            HistoryFilter::SettledOnly => crate::net::api::fetch_history(&wallet_id).await,
        };
        match result {
            Ok(items) => transactions.update(|t| {
                t.items = items;
                t.error = None;
                t.loading = false;
            }),
            Err(e) => transactions.update(|t| {
                t.error = Some(feed_failed_line(&e));
                t.loading = false;
            }),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (transactions, wallet_id, filter);
    }
}

/// Transactions page — the wallet's feed with an All / Settled toggle.
/// Redirects to `/login` without a session.
#[component]
pub fn TransactionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let transactions = expect_context::<RwSignal<TransactionsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let requested_load = RwSignal::new(false);
    Effect::new(move || {
        if requested_load.get() {
            return;
        }
        let Some(wallet_id) = auth.get().wallet_id() else {
            return;
        };
        load_feed(transactions, wallet_id, transactions.get_untracked().filter);
        requested_load.set(true);
    });

    let select_filter = move |filter: HistoryFilter| {
        if transactions.get_untracked().filter == filter {
            return;
        }
        transactions.update(|t| t.filter = filter);
        if let Some(wallet_id) = auth.get_untracked().wallet_id() {
            load_feed(transactions, wallet_id, filter);
        }
    };
    let on_all = move |_| select_filter(HistoryFilter::All);
    let on_settled = move |_| select_filter(HistoryFilter::SettledOnly);

    let filter_class = move |filter: HistoryFilter| {
        if transactions.get().filter == filter {
            "btn btn--active"
        } else {
            "btn"
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().session.is_some()
            fallback=move || {
                view! {
                    <div class="txns-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="txns-page">
                <header class="txns-page__header toolbar">
                    <span class="toolbar__title">"Transactions"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <button class=move || filter_class(HistoryFilter::All) on:click=on_all>
                        "All"
                    </button>
                    <button class=move || filter_class(HistoryFilter::SettledOnly) on:click=on_settled>
                        "Settled"
                    </button>

                    <span class="toolbar__spacer"></span>
                    <a class="toolbar__link" href="/">"Wallet"</a>
                </header>

                <Show when=move || transactions.get().error.is_some()>
                    <p class="txns-page__error">
                        {move || transactions.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !transactions.get().loading
                    fallback=move || view! { <p>"Loading transactions..."</p> }
                >
                    <div class="txns-page__list">
                        {move || {
                            let state = transactions.get();
                            if state.items.is_empty() {
                                view! { <p class="txns-page__empty">{empty_line(state.filter)}</p> }
                                    .into_any()
                            } else {
                                state
                                    .items
                                    .into_iter()
                                    .map(|record| view! { <TransactionRow record=record/> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}
