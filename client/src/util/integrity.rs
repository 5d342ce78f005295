//! Device-posture report for the browser surface.

#[cfg(test)]
#[path = "integrity_test.rs"]
mod integrity_test;

use wire::IntegrityReport;

/// Device identifier the web client reports to the gateway.
pub const WEB_DEVICE_ID: &str = "web_browser_test";

/// Build the integrity report sent alongside prepare-offline.
///
/// The browser surface always attests a clean posture. The gateway fails
/// closed on any adverse flag; tampered postures are exercised through the
/// CLI, which lets each flag be set explicitly.
#[must_use]
pub fn browser_report() -> IntegrityReport {
    IntegrityReport {
        device_id: WEB_DEVICE_ID.to_owned(),
        is_rooted: false,
        app_signature_valid: true,
        has_debugger: false,
        is_emulator: false,
    }
}
