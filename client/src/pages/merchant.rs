//! Merchant view polling aggregated earnings from the settlement ledger.
//!
//! SYSTEM CONTEXT
//! ==============
//! The merchant surface is deliberately session-free: the original demo
//! watched a fixed merchant id with no login. The id stays editable so a
//! different merchant can be watched mid-demo; each poll tick reads the
//! current value.

#[cfg(test)]
#[path = "merchant_test.rs"]
mod merchant_test;

use leptos::prelude::*;

use crate::state::merchant::MerchantState;
use crate::util::format::format_inr;

/// Poll cadence of the original merchant page.
#[cfg(any(test, feature = "hydrate"))]
const POLL_INTERVAL_SECS: u64 = 3;

#[cfg(any(test, feature = "hydrate"))]
const SYNCED_LINE: &str = "Earnings synced with ledger.";

#[cfg(any(test, feature = "hydrate"))]
fn sync_failed_line(error: &str) -> String {
    format!("Sync failed: service unreachable ({error}).")
}

fn refresh_merchant(merchant: RwSignal<MerchantState>) {
    #[cfg(feature = "hydrate")]
    {
        let merchant_id = merchant.get_untracked().merchant_id;
        if merchant_id.trim().is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_merchant_earnings(&merchant_id).await {
                Ok(earnings) => merchant.update(|m| {
                    m.earnings = Some(earnings.total_earnings);
                    m.sync_line = SYNCED_LINE.to_owned();
                    m.loading = false;
                }),
                Err(e) => merchant.update(|m| {
                    m.sync_line = sync_failed_line(&e);
                    m.loading = false;
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = merchant;
    }
}

/// Merchant page — earnings total refreshed on load and every few seconds.
#[component]
pub fn MerchantPage() -> impl IntoView {
    let merchant = expect_context::<RwSignal<MerchantState>>();

    refresh_merchant(merchant);

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let merchant_poll = merchant;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_merchant(merchant_poll);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let earnings = move || {
        merchant
            .get()
            .earnings
            .map_or_else(|| "\u{2014}".to_owned(), format_inr)
    };

    view! {
        <div class="merchant-page">
            <header class="merchant-page__header toolbar">
                <span class="toolbar__title">"Merchant Ledger"</span>
                <span class="toolbar__spacer"></span>
                <a class="toolbar__link" href="/">"Wallet"</a>
            </header>

            <label class="merchant-page__id">
                "Merchant ID"
                <input
                    class="merchant-page__id-input"
                    type="text"
                    prop:value=move || merchant.get().merchant_id
                    on:input=move |ev| merchant.update(|m| m.merchant_id = event_target_value(&ev))
                />
            </label>

            <div class="merchant-page__earnings-card">
                <span class="merchant-page__label">"Total Earnings"</span>
                <span class="merchant-page__amount">
                    {move || {
                        if merchant.get().loading {
                            "Syncing...".to_owned()
                        } else {
                            earnings()
                        }
                    }}
                </span>
            </div>

            <p class="merchant-page__log">{move || merchant.get().sync_line}</p>
        </div>
    }
}
