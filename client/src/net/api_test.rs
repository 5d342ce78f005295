use super::*;

#[test]
fn request_failed_message_formats_status_only() {
    assert_eq!(
        request_failed_message("balance request", 502, None),
        "balance request failed: 502"
    );
}

#[test]
fn request_failed_message_appends_service_detail() {
    assert_eq!(
        request_failed_message("gateway request", 403, Some("Device integrity compromised.")),
        "gateway request failed: 403 (Device integrity compromised.)"
    );
}

#[test]
fn request_failed_message_carries_insufficient_balance_detail() {
    assert_eq!(
        request_failed_message("gateway request", 400, Some("Insufficient balance")),
        "gateway request failed: 400 (Insufficient balance)"
    );
}
