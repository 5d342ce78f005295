use super::*;

fn sample_token(denomination: i64) -> Token {
    Token {
        token_id: format!("tok-{denomination}"),
        issuer_wallet_id: "WLT-8F3A-92KD".to_owned(),
        denomination,
        expiry_time: "2025-12-27T14:05:00".to_owned(),
        signature: "ab12cd34".to_owned(),
    }
}

#[test]
fn wallet_balance_decodes_service_body() {
    let balance: WalletBalance =
        decode_body(r#"{"spendable_balance": 2450.0, "escrow_locked": 0.0}"#).expect("decode");
    assert_eq!(
        balance,
        WalletBalance {
            spendable_balance: 2450.0,
            escrow_locked: 0.0,
        }
    );
}

#[test]
fn prepare_offline_request_serializes_nested_integrity_report() {
    let request = PrepareOfflineRequest {
        wallet_id: "WLT-8F3A-92KD".to_owned(),
        phone: "919876543210".to_owned(),
        amount: 500.0,
        integrity_report: IntegrityReport {
            device_id: "web_browser_test".to_owned(),
            is_rooted: false,
            app_signature_valid: true,
            has_debugger: false,
            is_emulator: false,
        },
    };

    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["wallet_id"], "WLT-8F3A-92KD");
    assert_eq!(value["amount"], 500.0);
    assert_eq!(value["integrity_report"]["device_id"], "web_browser_test");
    assert_eq!(value["integrity_report"]["is_rooted"], false);
}

#[test]
fn prepare_offline_response_defaults_missing_tokens_and_message() {
    let response: PrepareOfflineResponse = decode_body(r#"{"status": "ready"}"#).expect("decode");
    assert_eq!(response.status, "ready");
    assert!(response.tokens.is_empty());
    assert!(response.message.is_empty());
}

#[test]
fn prepare_offline_response_round_trips_token_bundle() {
    let response = PrepareOfflineResponse {
        status: "ready".to_owned(),
        tokens: vec![sample_token(500), sample_token(100)],
        message: "Offline session initialized.".to_owned(),
    };

    let body = serde_json::to_string(&response).expect("serialize");
    let decoded: PrepareOfflineResponse = decode_body(&body).expect("decode");
    assert_eq!(decoded, response);
}

#[test]
fn otp_requested_tolerates_absent_debug_otp() {
    let parsed: OtpRequested = decode_body(r#"{"message": "OTP sent successfully"}"#).expect("decode");
    assert_eq!(parsed.debug_otp, None);

    let echoed: OtpRequested =
        decode_body(r#"{"message": "OTP sent successfully", "debug_otp": "482913"}"#).expect("decode");
    assert_eq!(echoed.debug_otp.as_deref(), Some("482913"));
}

#[test]
fn verify_otp_response_exposes_verified_user() {
    let parsed: VerifyOtpResponse = decode_body(
        r#"{"status": "success", "user": {"phone": "919876543210", "wallet_id": "WLT-8F3A-92KD"}}"#,
    )
    .expect("decode");
    assert_eq!(parsed.status, "success");
    assert_eq!(parsed.user.wallet_id, "WLT-8F3A-92KD");
}

#[test]
fn transaction_record_maps_wire_type_field_to_kind() {
    let record: TransactionRecord = decode_body(
        r#"{
            "id": "TXN-2512-449AF",
            "wallet_id": "WLT-8F3A-92KD",
            "name": "CafeX Store",
            "amount": -450.0,
            "type": "payment",
            "status": "pending",
            "timestamp": "2025-12-25T14:30:00",
            "method": "Bluetooth"
        }"#,
    )
    .expect("decode");

    assert_eq!(record.kind, TxnKind::Payment);
    assert_eq!(record.status, TxnStatus::Pending);
    assert_eq!(record.amount, -450.0);
}

#[test]
fn transaction_record_serializes_kind_back_as_type() {
    let record = TransactionRecord {
        id: "TXN-2012-111CC".to_owned(),
        wallet_id: "WLT-8F3A-92KD".to_owned(),
        name: "Added balance".to_owned(),
        amount: 2000.0,
        kind: TxnKind::Topup,
        status: TxnStatus::Settled,
        timestamp: "2025-12-20T10:15:00".to_owned(),
        method: "Bank".to_owned(),
    };

    let value = serde_json::to_value(&record).expect("serialize");
    assert_eq!(value["type"], "topup");
    assert_eq!(value["status"], "settled");
    assert!(value.get("kind").is_none());
}

#[test]
fn txn_enums_reject_non_lowercase_wire_values() {
    assert!(serde_json::from_str::<TxnKind>("\"Payment\"").is_err());
    assert!(serde_json::from_str::<TxnStatus>("\"SETTLED\"").is_err());
}

#[test]
fn dashboard_status_decodes_status_cards() {
    let status: DashboardStatus =
        decode_body(r#"{"pending_settlements": 1, "incoming_amount": 0.0, "currency": "INR"}"#)
            .expect("decode");
    assert_eq!(status.pending_settlements, 1);
    assert_eq!(status.currency, "INR");
}

#[test]
fn decode_body_rejects_malformed_json() {
    let err = decode_body::<WalletBalance>("not json").expect_err("body should fail");
    assert!(matches!(err, SchemaError::Decode(_)));
}

#[test]
fn decode_body_rejects_shape_mismatch() {
    let err = decode_body::<WalletBalance>(r#"{"spendable_balance": "lots"}"#)
        .expect_err("body should fail");
    assert!(matches!(err, SchemaError::Decode(_)));
}

#[test]
fn error_detail_extracts_plain_string_detail() {
    assert_eq!(
        error_detail(r#"{"detail": "Insufficient balance"}"#).as_deref(),
        Some("Insufficient balance")
    );
}

#[test]
fn error_detail_ignores_structured_validation_detail() {
    assert_eq!(error_detail(r#"{"detail": [{"loc": ["body"], "msg": "required"}]}"#), None);
}

#[test]
fn error_detail_ignores_non_json_and_unrelated_bodies() {
    assert_eq!(error_detail("<html>Bad Gateway</html>"), None);
    assert_eq!(error_detail(r#"{"message": "nope"}"#), None);
}

#[test]
fn token_bundle_total_sums_denominations() {
    let tokens = vec![sample_token(1000), sample_token(500), sample_token(100)];
    assert_eq!(token_bundle_total(&tokens), 1600);
}

#[test]
fn token_bundle_total_of_empty_bundle_is_zero() {
    assert_eq!(token_bundle_total(&[]), 0);
}
