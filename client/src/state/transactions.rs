//! Transaction-feed state with the all/settled filter.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use wire::TransactionRecord;

/// Which transaction endpoint feeds the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryFilter {
    /// Everything from `GET /transactions/{wallet_id}`.
    #[default]
    All,
    /// Settled entries only, from `GET /history/{wallet_id}`.
    SettledOnly,
}

/// View state for the transactions page.
#[derive(Clone, Debug, Default)]
pub struct TransactionsState {
    /// Entries for the active filter, newest first as the service returns them.
    pub items: Vec<TransactionRecord>,
    /// Whether a feed fetch is in flight.
    pub loading: bool,
    /// One error line for the page, cleared on the next successful fetch.
    pub error: Option<String>,
    /// Active feed filter.
    pub filter: HistoryFilter,
}
