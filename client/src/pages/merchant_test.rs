use super::*;

#[test]
fn poll_cadence_matches_original_demo() {
    assert_eq!(POLL_INTERVAL_SECS, 3);
}

#[test]
fn synced_line_is_stable() {
    assert_eq!(SYNCED_LINE, "Earnings synced with ledger.");
}

#[test]
fn sync_failed_line_carries_classified_error() {
    assert_eq!(
        sync_failed_line("earnings request failed: 503"),
        "Sync failed: service unreachable (earnings request failed: 503)."
    );
}
