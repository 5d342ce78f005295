//! Wallet-dashboard state: balance, status cards, and the minted bundle.
//!
//! DESIGN
//! ======
//! The status line mirrors the single status element of the original wallet
//! page: every outcome — refresh, gateway round-trip, failure — collapses
//! into one user-facing string here.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use wire::{DashboardStatus, Token, WalletBalance};

/// View state for the wallet dashboard.
#[derive(Clone, Debug, Default)]
pub struct WalletState {
    /// Last balance fetched from the escrow service.
    pub balance: Option<WalletBalance>,
    /// Last status-card payload fetched from the transaction service.
    pub status: Option<DashboardStatus>,
    /// Whether a dashboard refresh is in flight.
    pub loading: bool,
    /// Single status element under the balance card.
    pub status_line: String,
    /// Whether a prepare-offline round-trip is in flight.
    pub prepare_pending: bool,
    /// Tokens minted by the most recent offline session.
    pub minted_tokens: Vec<Token>,
}
