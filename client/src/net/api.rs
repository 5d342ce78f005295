//! REST API helpers for the external BlueMint services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since the demo services
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a dead service
//! degrades into a status-line message without crashing hydration. Failure
//! strings carry the HTTP status, plus the FastAPI `detail` when the error
//! body has one, so transport faults and service refusals read differently.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use wire::VerifyOtpResponse;
use wire::{
    DashboardStatus, MerchantEarnings, OtpRequested, PrepareOfflineRequest, PrepareOfflineResponse,
    Profile, TransactionRecord, VerifiedUser, WalletBalance,
};

#[cfg(feature = "hydrate")]
use super::endpoints;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("{what} failed: {status} ({detail})"),
        None => format!("{what} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(what: &str, url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body = resp.text().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(
            what,
            resp.status(),
            wire::error_detail(&body).as_deref(),
        ));
    }
    wire::decode_body(&body).map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    what: &str,
    url: &str,
    payload: &impl serde::Serialize,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body = resp.text().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(
            what,
            resp.status(),
            wire::error_detail(&body).as_deref(),
        ));
    }
    wire::decode_body(&body).map_err(|e| e.to_string())
}

/// Fetch the spendable/escrow split for a wallet from the escrow service.
///
/// # Errors
///
/// Returns a display-ready error string when the request or decode fails.
pub async fn fetch_wallet_balance(wallet_id: &str) -> Result<WalletBalance, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::wallet_balance_url(endpoints::ESCROW_BASE, wallet_id);
        get_json("balance request", &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = wallet_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the home-screen status cards from the transaction service.
///
/// # Errors
///
/// Returns a display-ready error string when the request or decode fails.
pub async fn fetch_dashboard_status(wallet_id: &str) -> Result<DashboardStatus, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::status_url(endpoints::TRANSACTIONS_BASE, wallet_id);
        get_json("status request", &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = wallet_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregated merchant earnings from the settlement ledger.
///
/// # Errors
///
/// Returns a display-ready error string when the request or decode fails.
pub async fn fetch_merchant_earnings(merchant_id: &str) -> Result<MerchantEarnings, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::merchant_earnings_url(endpoints::LEDGER_BASE, merchant_id);
        get_json("earnings request", &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = merchant_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the full transaction feed for a wallet.
///
/// # Errors
///
/// Returns a display-ready error string when the request or decode fails.
pub async fn fetch_transactions(wallet_id: &str) -> Result<Vec<TransactionRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::transactions_url(endpoints::TRANSACTIONS_BASE, wallet_id);
        get_json("transactions request", &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = wallet_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the settled-only history for a wallet.
///
/// # Errors
///
/// Returns a display-ready error string when the request or decode fails.
pub async fn fetch_history(wallet_id: &str) -> Result<Vec<TransactionRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::history_url(endpoints::TRANSACTIONS_BASE, wallet_id);
        get_json("history request", &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = wallet_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the profile behind a wallet id.
/// Returns `None` when the profile is missing or on the server.
pub async fn fetch_profile(wallet_id: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::profile_url(endpoints::AUTH_BASE, wallet_id);
        get_json("profile request", &url).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = wallet_id;
        None
    }
}

/// Ask the auth service to send an OTP to a phone number.
///
/// The demo backend echoes the code in `debug_otp` while SMS delivery is
/// stubbed; the login page surfaces it when present.
///
/// # Errors
///
/// Returns a display-ready error string when the request or decode fails.
pub async fn request_otp(phone: &str) -> Result<OtpRequested, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::request_otp_url(endpoints::AUTH_BASE);
        let payload = serde_json::json!({ "phone": phone });
        post_json("OTP request", &url, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = phone;
        Err("not available on server".to_owned())
    }
}

/// Verify an OTP and return the identity it establishes.
///
/// # Errors
///
/// Returns a display-ready error string when the request fails or the auth
/// service does not report success.
pub async fn verify_otp(phone: &str, otp: &str) -> Result<VerifiedUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::verify_otp_url(endpoints::AUTH_BASE);
        let payload = serde_json::json!({ "phone": phone, "otp": otp });
        let response: VerifyOtpResponse = post_json("OTP verification", &url, &payload).await?;
        if response.status != "success" {
            return Err(format!("OTP verification refused: {}", response.status));
        }
        Ok(response.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (phone, otp);
        Err("not available on server".to_owned())
    }
}

/// Open an offline session via the gateway: integrity check, escrow lock,
/// token mint. The caller decides what `status != "ready"` means for the UI.
///
/// # Errors
///
/// Returns a display-ready error string when the request or decode fails.
pub async fn prepare_offline(
    request: &PrepareOfflineRequest,
) -> Result<PrepareOfflineResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::prepare_offline_url(endpoints::GATEWAY_BASE);
        post_json("gateway request", &url, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
