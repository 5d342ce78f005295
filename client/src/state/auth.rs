//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the wallet header to coordinate login redirects
//! and identity-dependent rendering. The session itself is just the
//! `{ wallet_id, phone }` pair the OTP flow established.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use wire::{Profile, VerifiedUser};

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Identity established by OTP login, restored from storage on reload.
    pub session: Option<VerifiedUser>,
    /// Profile fetched for the session wallet, when available.
    pub profile: Option<Profile>,
    /// Whether a session restore or profile fetch is still in flight.
    pub loading: bool,
}

impl AuthState {
    /// Wallet id of the signed-in session, if any.
    #[must_use]
    pub fn wallet_id(&self) -> Option<String> {
        self.session.as_ref().map(|user| user.wallet_id.clone())
    }
}
