//! Token terminal listing the minted offline bundle.

use leptos::prelude::*;
use wire::token_bundle_total;

use crate::state::wallet::WalletState;
use crate::util::format::{format_inr_whole, short_timestamp, shorten_id};

/// Token terminal: one row per minted token plus a bundle summary.
///
/// Signatures and ids are previews only; the full values never matter to the
/// UI and stay inside the wire payload.
#[component]
pub fn TokenList() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let summary = move || {
        let tokens = wallet.get().minted_tokens;
        format!(
            "{} tokens \u{b7} {}",
            tokens.len(),
            format_inr_whole(token_bundle_total(&tokens))
        )
    };

    view! {
        <div class="token-terminal">
            <div class="token-terminal__header">
                <span class="token-terminal__title">"Token Terminal"</span>
                <span class="token-terminal__summary">{summary}</span>
            </div>
            <div class="token-terminal__rows">
                {move || {
                    wallet
                        .get()
                        .minted_tokens
                        .into_iter()
                        .map(|token| {
                            view! {
                                <div class="token-terminal__row">
                                    <span class="token-terminal__denomination">
                                        {format_inr_whole(token.denomination)}
                                    </span>
                                    <span class="token-terminal__expiry">
                                        "expires " {short_timestamp(&token.expiry_time)}
                                    </span>
                                    <span class="token-terminal__id">{shorten_id(&token.token_id)}</span>
                                    <span class="token-terminal__sig">{shorten_id(&token.signature)}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
