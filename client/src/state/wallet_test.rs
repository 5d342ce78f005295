use super::*;

#[test]
fn wallet_state_default_has_no_balance() {
    let state = WalletState::default();
    assert!(state.balance.is_none());
    assert!(state.status.is_none());
}

#[test]
fn wallet_state_default_is_idle() {
    let state = WalletState::default();
    assert!(!state.loading);
    assert!(!state.prepare_pending);
}

#[test]
fn wallet_state_default_has_empty_terminal() {
    let state = WalletState::default();
    assert!(state.minted_tokens.is_empty());
    assert!(state.status_line.is_empty());
}
