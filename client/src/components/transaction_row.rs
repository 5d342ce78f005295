//! One row of the transaction feed.

#[cfg(test)]
#[path = "transaction_row_test.rs"]
mod transaction_row_test;

use leptos::prelude::*;
use wire::{TransactionRecord, TxnKind, TxnStatus};

use crate::util::format::{format_signed_inr, short_timestamp};

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "txn-row__amount--debit"
    } else {
        "txn-row__amount--credit"
    }
}

fn status_class(status: TxnStatus) -> &'static str {
    match status {
        TxnStatus::Pending => "txn-row__status--pending",
        TxnStatus::Settled => "txn-row__status--settled",
    }
}

fn status_label(status: TxnStatus) -> &'static str {
    match status {
        TxnStatus::Pending => "pending",
        TxnStatus::Settled => "settled",
    }
}

fn kind_label(kind: TxnKind) -> &'static str {
    match kind {
        TxnKind::Payment => "Payment",
        TxnKind::Receive => "Received",
        TxnKind::Topup => "Top-up",
    }
}

/// Transaction entry: counterparty, transport, time, amount, settlement state.
#[component]
pub fn TransactionRow(record: TransactionRecord) -> impl IntoView {
    let amount = format_signed_inr(record.amount);
    let when = short_timestamp(&record.timestamp);

    view! {
        <div class="txn-row">
            <div class="txn-row__main">
                <span class="txn-row__name">{record.name.clone()}</span>
                <span class="txn-row__meta">
                    {when} " \u{b7} " {record.method.clone()} " \u{b7} " {kind_label(record.kind)}
                </span>
            </div>
            <div class="txn-row__side">
                <span class=format!("txn-row__amount {}", amount_class(record.amount))>{amount}</span>
                <span class=format!("txn-row__status {}", status_class(record.status))>
                    {status_label(record.status)}
                </span>
            </div>
        </div>
    }
}
