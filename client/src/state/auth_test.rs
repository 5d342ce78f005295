use super::*;

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(state.profile.is_none());
    assert!(!state.loading);
}

#[test]
fn wallet_id_is_none_without_session() {
    assert_eq!(AuthState::default().wallet_id(), None);
}

#[test]
fn wallet_id_comes_from_session() {
    let state = AuthState {
        session: Some(VerifiedUser {
            phone: "919876543210".to_owned(),
            wallet_id: "WLT-8F3A-92KD".to_owned(),
        }),
        profile: None,
        loading: false,
    };
    assert_eq!(state.wallet_id().as_deref(), Some("WLT-8F3A-92KD"));
}
