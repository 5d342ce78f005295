use super::*;

fn sample_session() -> VerifiedUser {
    VerifiedUser {
        phone: "919876543210".to_owned(),
        wallet_id: "WLT-8F3A-92KD".to_owned(),
    }
}

#[test]
fn session_encoding_round_trips() {
    let session = sample_session();
    let decoded = decode_session(&encode_session(&session)).expect("decode");
    assert_eq!(decoded, session);
}

#[test]
fn decode_session_rejects_garbage() {
    assert_eq!(decode_session("not json"), None);
    assert_eq!(decode_session(r#"{"wallet_id": "w"}"#), None);
}

#[test]
fn storage_key_is_stable() {
    // Persisted sessions survive deploys only if this never changes.
    assert_eq!(STORAGE_KEY, "bluemint_session");
}
