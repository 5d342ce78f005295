//! Service base URLs and endpoint path builders.
//!
//! DESIGN
//! ======
//! Each backing service runs on its own port in the demo deployment. The
//! builders take the base explicitly so URL assembly stays testable; the
//! constants record where the demo stack listens.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Auth service: OTP login, device integrity, profiles.
pub const AUTH_BASE: &str = "http://localhost:8000";
/// Escrow service: wallet balances.
pub const ESCROW_BASE: &str = "http://localhost:8001";
/// Gateway: offline-session orchestration (integrity, lock, mint).
pub const GATEWAY_BASE: &str = "http://localhost:8080";
/// Settlement ledger: aggregated merchant earnings.
pub const LEDGER_BASE: &str = "http://localhost:8003";
/// Transaction service: feed, history, dashboard status cards.
pub const TRANSACTIONS_BASE: &str = "http://localhost:8004";

fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// `GET /wallet/{wallet_id}/balance` on the escrow service.
pub fn wallet_balance_url(base: &str, wallet_id: &str) -> String {
    join(base, &format!("/wallet/{wallet_id}/balance"))
}

/// `POST /gateway/prepare-offline` on the gateway.
pub fn prepare_offline_url(base: &str) -> String {
    join(base, "/gateway/prepare-offline")
}

/// `GET /merchant/{merchant_id}/earnings` on the settlement ledger.
pub fn merchant_earnings_url(base: &str, merchant_id: &str) -> String {
    join(base, &format!("/merchant/{merchant_id}/earnings"))
}

/// `POST /auth/request-otp` on the auth service.
pub fn request_otp_url(base: &str) -> String {
    join(base, "/auth/request-otp")
}

/// `POST /auth/verify-otp` on the auth service.
pub fn verify_otp_url(base: &str) -> String {
    join(base, "/auth/verify-otp")
}

/// `GET /auth/profile/{wallet_id}` on the auth service.
pub fn profile_url(base: &str, wallet_id: &str) -> String {
    join(base, &format!("/auth/profile/{wallet_id}"))
}

/// `GET /transactions/{wallet_id}` on the transaction service.
pub fn transactions_url(base: &str, wallet_id: &str) -> String {
    join(base, &format!("/transactions/{wallet_id}"))
}

/// `GET /history/{wallet_id}` on the transaction service.
pub fn history_url(base: &str, wallet_id: &str) -> String {
    join(base, &format!("/history/{wallet_id}"))
}

/// `GET /status/{wallet_id}` on the transaction service.
pub fn status_url(base: &str, wallet_id: &str) -> String {
    join(base, &format!("/status/{wallet_id}"))
}
