//! Shared REST DTO schema for the BlueMint wallet frontends.
//!
//! This crate owns the wire representation of every external-service JSON
//! body consumed by both `client` and `cli`. The services themselves (auth,
//! escrow, gateway, settlement ledger, transactions) are external black
//! boxes; these types mirror their payloads field-for-field so serde
//! round-trips stay lossless across both surfaces.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_body`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The response body could not be decoded as the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Wallet funds split as reported by `GET /wallet/{wallet_id}/balance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    /// Funds available for online spending.
    pub spendable_balance: f64,
    /// Funds locked into escrow backing minted offline tokens.
    pub escrow_locked: f64,
}

/// Client-attested device posture forwarded to the gateway.
///
/// The gateway fails closed: any adverse flag aborts the offline session
/// before funds are locked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Caller-chosen device identifier.
    pub device_id: String,
    /// Whether the device appears rooted/jailbroken.
    pub is_rooted: bool,
    /// Whether the installed app signature verified.
    pub app_signature_valid: bool,
    /// Whether a debugger is attached.
    pub has_debugger: bool,
    /// Whether the app is running inside an emulator.
    pub is_emulator: bool,
}

/// Request body for `POST /gateway/prepare-offline`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrepareOfflineRequest {
    /// Wallet whose funds are locked into escrow.
    pub wallet_id: String,
    /// Phone number the wallet is registered under.
    pub phone: String,
    /// Amount to lock and mint as offline tokens.
    pub amount: f64,
    /// Device posture report checked before any funds move.
    pub integrity_report: IntegrityReport,
}

/// Response body for `POST /gateway/prepare-offline`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrepareOfflineResponse {
    /// `"ready"` once escrow is locked and tokens are minted.
    pub status: String,
    /// The minted token bundle, largest denominations first.
    #[serde(default)]
    pub tokens: Vec<Token>,
    /// Human-readable summary from the gateway.
    #[serde(default)]
    pub message: String,
}

/// A single minted offline token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Unique token identifier (UUID string).
    pub token_id: String,
    /// Wallet whose escrow backs this token.
    pub issuer_wallet_id: String,
    /// Face value in whole rupees.
    pub denomination: i64,
    /// ISO 8601 expiry timestamp.
    pub expiry_time: String,
    /// Hex-encoded Ed25519 signature over the token payload.
    pub signature: String,
}

/// Aggregated merchant takings from `GET /merchant/{merchant_id}/earnings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MerchantEarnings {
    /// Sum of settled ledger entries for the merchant.
    pub total_earnings: f64,
}

/// Response body for `POST /auth/request-otp`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OtpRequested {
    /// Human-readable confirmation from the auth service.
    pub message: String,
    /// OTP echoed back by the demo backend when SMS delivery is stubbed.
    #[serde(default)]
    pub debug_otp: Option<String>,
}

/// Response body for `POST /auth/verify-otp`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    /// `"success"` on a correct code.
    pub status: String,
    /// The verified identity.
    pub user: VerifiedUser,
}

/// The identity established by OTP verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifiedUser {
    /// Phone number the OTP was sent to.
    pub phone: String,
    /// Wallet assigned to this phone number.
    pub wallet_id: String,
}

/// User profile from `GET /auth/profile/{wallet_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Registered phone number.
    pub phone: String,
    /// Wallet identifier.
    pub wallet_id: String,
    /// Whether the phone number completed OTP verification.
    pub is_verified: bool,
}

/// Direction of a transaction relative to the wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    /// Outgoing payment to a merchant or peer.
    Payment,
    /// Incoming transfer.
    Receive,
    /// Balance added from a bank source.
    Topup,
}

/// Settlement state of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnStatus {
    /// Spent offline, not yet cashed in by the merchant.
    Pending,
    /// Confirmed on the settlement ledger.
    Settled,
}

/// One entry in the transaction feed from `GET /transactions/{wallet_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction identifier.
    pub id: String,
    /// Wallet this entry belongs to.
    pub wallet_id: String,
    /// Counterparty or source label.
    pub name: String,
    /// Signed amount in rupees; negative for outgoing payments.
    pub amount: f64,
    /// Transaction direction. Serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: TxnKind,
    /// Settlement state.
    pub status: TxnStatus,
    /// ISO 8601 timestamp of the transaction.
    pub timestamp: String,
    /// Transport the payment travelled over (e.g. `"Bluetooth"`, `"QR Code"`).
    pub method: String,
}

/// Home-screen status card data from `GET /status/{wallet_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatus {
    /// Count of transactions awaiting settlement.
    pub pending_settlements: i64,
    /// Sum of pending incoming transfers.
    pub incoming_amount: f64,
    /// ISO currency code for the amounts above.
    pub currency: String,
}

/// Decode a raw response body into a typed DTO.
///
/// # Errors
///
/// Returns [`SchemaError::Decode`] when the body is not valid JSON or does
/// not match the expected shape.
pub fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, SchemaError> {
    Ok(serde_json::from_str(body)?)
}

/// Extract the FastAPI-style `{ "detail": ... }` message from an error body.
///
/// Returns `None` when the body is not JSON, carries no `detail` field, or
/// the detail is structured validation output rather than a plain string.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    value
        .get("detail")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}

/// Sum of face values across a minted token bundle.
#[must_use]
pub fn token_bundle_total(tokens: &[Token]) -> i64 {
    tokens.iter().map(|token| token.denomination).sum()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
