//! Merchant-view state for the earnings poll.

#[cfg(test)]
#[path = "merchant_test.rs"]
mod merchant_test;

/// View state for the merchant earnings page.
#[derive(Clone, Debug)]
pub struct MerchantState {
    /// Merchant being watched; editable on the page.
    pub merchant_id: String,
    /// Last earnings total fetched from the settlement ledger.
    pub earnings: Option<f64>,
    /// Single sync-log element mirroring the original merchant page.
    pub sync_line: String,
    /// Whether the very first fetch has not completed yet.
    pub loading: bool,
}

impl Default for MerchantState {
    fn default() -> Self {
        Self {
            merchant_id: DEMO_MERCHANT_ID.to_owned(),
            earnings: None,
            sync_line: String::new(),
            loading: true,
        }
    }
}

/// Merchant identifier the demo flow settles against.
pub const DEMO_MERCHANT_ID: &str = "MCH-CAFE-X";
