use super::*;

#[test]
fn history_filter_default_is_all() {
    assert_eq!(HistoryFilter::default(), HistoryFilter::All);
}

#[test]
fn history_filter_variants_are_distinct() {
    assert_ne!(HistoryFilter::All, HistoryFilter::SettledOnly);
}

#[test]
fn transactions_state_default_is_empty_and_idle() {
    let state = TransactionsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.filter, HistoryFilter::All);
}
