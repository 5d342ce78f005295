//! Wallet dashboard page: balance, status cards, and the prepare-offline flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The dashboard refreshes on load
//! and on user action; a successful gateway round-trip re-fetches the
//! balance after the escrow lock, matching the original page's behavior.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::balance_card::BalanceCard;
use crate::components::status_cards::StatusCards;
use crate::components::token_list::TokenList;
use crate::state::auth::AuthState;
use crate::state::wallet::WalletState;
use crate::util::auth::install_unauth_redirect;

#[cfg(any(test, feature = "hydrate"))]
const BALANCE_REFRESHED_LINE: &str = "Dashboard updated.";
const GATEWAY_PENDING_LINE: &str = "Requesting Gateway...";

#[cfg(any(test, feature = "hydrate"))]
fn balance_failed_line(error: &str) -> String {
    format!("Error connecting to Escrow Service ({error}).")
}

#[cfg(any(test, feature = "hydrate"))]
fn gateway_failed_line(error: &str) -> String {
    format!("Gateway connection failed ({error}).")
}

/// Map a gateway response to the status line it earns, or the failure text
/// for anything other than a ready session.
#[cfg(any(test, feature = "hydrate"))]
fn prepare_result_line(response: &wire::PrepareOfflineResponse) -> Result<String, String> {
    if response.status == "ready" {
        Ok(format!(
            "Tokens minted: {} worth {}. Check the token terminal.",
            response.tokens.len(),
            crate::util::format::format_inr_whole(wire::token_bundle_total(&response.tokens))
        ))
    } else {
        Err(format!("gateway returned status \"{}\"", response.status))
    }
}

fn validate_amount_input(raw: &str) -> Result<f64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter an amount first.");
    }
    let Ok(amount) = trimmed.parse::<f64>() else {
        return Err("Amount must be a number.");
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be positive.");
    }
    Ok(amount)
}

fn refresh_dashboard(wallet: RwSignal<WalletState>, wallet_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        wallet.update(|w| w.loading = true);
        match crate::net::api::fetch_wallet_balance(&wallet_id).await {
            Ok(balance) => wallet.update(|w| {
                w.balance = Some(balance);
                w.status_line = BALANCE_REFRESHED_LINE.to_owned();
            }),
            Err(e) => wallet.update(|w| w.status_line = balance_failed_line(&e)),
        }
        // Status cards are best-effort; on failure they stay empty and the
        // balance keeps the status line.
        if let Ok(status) = crate::net::api::fetch_dashboard_status(&wallet_id).await {
            wallet.update(|w| w.status = Some(status));
        }
        wallet.update(|w| w.loading = false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (wallet, wallet_id);
    }
}

fn load_profile(auth: RwSignal<AuthState>, wallet_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(profile) = crate::net::api::fetch_profile(&wallet_id).await {
            auth.update(|a| a.profile = Some(profile));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, wallet_id);
    }
}

fn send_prepare_offline(wallet: RwSignal<WalletState>, user: wire::VerifiedUser, amount: f64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let request = wire::PrepareOfflineRequest {
            wallet_id: user.wallet_id.clone(),
            phone: user.phone.clone(),
            amount,
            integrity_report: crate::util::integrity::browser_report(),
        };
        let outcome = match crate::net::api::prepare_offline(&request).await {
            Ok(response) => prepare_result_line(&response).map(|line| (line, response.tokens)),
            Err(e) => Err(e),
        };
        match outcome {
            Ok((line, tokens)) => {
                wallet.update(|w| {
                    w.prepare_pending = false;
                    w.minted_tokens = tokens;
                    w.status_line = line;
                });
                // Refresh the balance after locking, as the original page did.
                refresh_dashboard(wallet, user.wallet_id);
            }
            Err(e) => wallet.update(|w| {
                w.prepare_pending = false;
                w.status_line = gateway_failed_line(&e);
            }),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (wallet, user, amount);
    }
}

/// Wallet dashboard — balance, status cards, token terminal, and the
/// "Go Offline" action. Redirects to `/login` without a session.
#[component]
pub fn WalletPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();
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
        refresh_dashboard(wallet, wallet_id.clone());
        load_profile(auth, wallet_id);
        requested_load.set(true);
    });

    let show_prepare = RwSignal::new(false);
    let amount_input = RwSignal::new(String::new());
    let on_prepare_open = move |_| {
        show_prepare.set(true);
        amount_input.set(String::new());
    };
    let on_prepare_cancel = Callback::new(move |_| show_prepare.set(false));

    let on_refresh = move |_| {
        if let Some(wallet_id) = auth.get_untracked().wallet_id() {
            refresh_dashboard(wallet, wallet_id);
        }
    };

    let on_logout = move |_| {
        crate::util::session::clear();
        auth.update(|a| {
            a.session = None;
            a.profile = None;
        });
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    let self_identity = move || {
        auth.get()
            .session
            .map(|user| (user.wallet_id, user.phone))
            .unwrap_or_else(|| ("\u{2014}".to_owned(), String::new()))
    };
    let verified_badge = move || {
        auth.get().profile.map(|profile| {
            if profile.is_verified { "verified" } else { "unverified" }
        })
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().session.is_some()
            fallback=move || {
                view! {
                    <div class="wallet-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="wallet-page">
                <header class="wallet-page__header toolbar">
                    <span class="toolbar__title">"BlueMint Wallet"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <a class="toolbar__link" href="/transactions">"Transactions"</a>
                    <a class="toolbar__link" href="/merchant">"Merchant View"</a>

                    <span class="toolbar__spacer"></span>

                    <span class="toolbar__self">
                        {move || self_identity().0}
                        " ("
                        <span class="toolbar__self-phone">{move || self_identity().1}</span>
                        ")"
                    </span>
                    <Show when=move || verified_badge().is_some()>
                        <span class="toolbar__badge">{move || verified_badge().unwrap_or_default()}</span>
                    </Show>

                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <BalanceCard/>
                <StatusCards/>

                <p class="wallet-page__status">{move || wallet.get().status_line}</p>

                <div class="wallet-page__actions">
                    <button class="btn" on:click=on_refresh disabled=move || wallet.get().loading>
                        "Refresh"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=on_prepare_open
                        disabled=move || wallet.get().prepare_pending
                    >
                        "Go Offline"
                    </button>
                </div>

                <Show when=move || !wallet.get().minted_tokens.is_empty()>
                    <TokenList/>
                </Show>

                <Show when=move || show_prepare.get()>
                    <PrepareOfflineDialog amount=amount_input on_cancel=on_prepare_cancel/>
                </Show>
            </div>
        </Show>
    }
}

/// Modal dialog collecting the amount to lock into escrow.
#[component]
fn PrepareOfflineDialog(amount: RwSignal<String>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();
    let error = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let value = match validate_amount_input(&amount.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let Some(user) = auth.get_untracked().session else {
            return;
        };
        wallet.update(|w| {
            w.prepare_pending = true;
            w.status_line = GATEWAY_PENDING_LINE.to_owned();
        });
        send_prepare_offline(wallet, user, value);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Go Offline"</h2>
                <label class="dialog__label">
                    "Amount to lock"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        placeholder="500"
                        prop:value=move || amount.get()
                        on:input=move |ev| {
                            amount.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__danger">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Mint Tokens"
                    </button>
                </div>
            </div>
        </div>
    }
}
