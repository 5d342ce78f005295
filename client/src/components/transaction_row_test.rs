use super::*;

#[test]
fn amount_class_splits_on_sign() {
    assert_eq!(amount_class(-450.0), "txn-row__amount--debit");
    assert_eq!(amount_class(1200.0), "txn-row__amount--credit");
    assert_eq!(amount_class(0.0), "txn-row__amount--credit");
}

#[test]
fn status_class_tracks_settlement_state() {
    assert_eq!(status_class(TxnStatus::Pending), "txn-row__status--pending");
    assert_eq!(status_class(TxnStatus::Settled), "txn-row__status--settled");
}

#[test]
fn status_label_is_lowercase_wire_value() {
    assert_eq!(status_label(TxnStatus::Pending), "pending");
    assert_eq!(status_label(TxnStatus::Settled), "settled");
}

#[test]
fn kind_label_is_human_readable() {
    assert_eq!(kind_label(TxnKind::Payment), "Payment");
    assert_eq!(kind_label(TxnKind::Receive), "Received");
    assert_eq!(kind_label(TxnKind::Topup), "Top-up");
}
