use super::*;

#[test]
fn merchant_state_default_watches_demo_merchant() {
    let state = MerchantState::default();
    assert_eq!(state.merchant_id, "MCH-CAFE-X");
}

#[test]
fn merchant_state_default_is_loading_with_no_earnings() {
    let state = MerchantState::default();
    assert!(state.loading);
    assert!(state.earnings.is_none());
    assert!(state.sync_line.is_empty());
}
