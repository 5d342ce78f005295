use super::*;

#[test]
fn wallet_balance_url_formats_expected_path() {
    assert_eq!(
        wallet_balance_url(ESCROW_BASE, "WLT-8F3A-92KD"),
        "http://localhost:8001/wallet/WLT-8F3A-92KD/balance"
    );
}

#[test]
fn builders_trim_trailing_slash_on_base() {
    assert_eq!(
        wallet_balance_url("http://localhost:8001/", "w1"),
        "http://localhost:8001/wallet/w1/balance"
    );
    assert_eq!(
        prepare_offline_url("http://gateway.local/"),
        "http://gateway.local/gateway/prepare-offline"
    );
}

#[test]
fn merchant_earnings_url_targets_ledger_service() {
    assert_eq!(
        merchant_earnings_url(LEDGER_BASE, "MCH-CAFE-X"),
        "http://localhost:8003/merchant/MCH-CAFE-X/earnings"
    );
}

#[test]
fn auth_urls_format_expected_paths() {
    assert_eq!(request_otp_url(AUTH_BASE), "http://localhost:8000/auth/request-otp");
    assert_eq!(verify_otp_url(AUTH_BASE), "http://localhost:8000/auth/verify-otp");
    assert_eq!(
        profile_url(AUTH_BASE, "WLT-1"),
        "http://localhost:8000/auth/profile/WLT-1"
    );
}

#[test]
fn transaction_urls_format_expected_paths() {
    assert_eq!(
        transactions_url(TRANSACTIONS_BASE, "w1"),
        "http://localhost:8004/transactions/w1"
    );
    assert_eq!(history_url(TRANSACTIONS_BASE, "w1"), "http://localhost:8004/history/w1");
    assert_eq!(status_url(TRANSACTIONS_BASE, "w1"), "http://localhost:8004/status/w1");
}
