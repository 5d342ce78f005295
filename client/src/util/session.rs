//! Login-session persistence in browser storage.
//!
//! The original wallet page pinned the wallet id as a page constant; here
//! the OTP flow stores the established `{ wallet_id, phone }` pair so a
//! reload lands back on the dashboard. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely no-op
//! so server rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use wire::VerifiedUser;

#[cfg(any(test, feature = "hydrate"))]
const STORAGE_KEY: &str = "bluemint_session";

/// Load the persisted session, if any.
#[must_use]
pub fn load() -> Option<VerifiedUser> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        decode_session(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session established by OTP verification.
pub fn store(session: &VerifiedUser) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, &encode_session(session));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Drop the persisted session on logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_session(session: &VerifiedUser) -> String {
    serde_json::to_string(session).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_session(raw: &str) -> Option<VerifiedUser> {
    serde_json::from_str(raw).ok()
}
