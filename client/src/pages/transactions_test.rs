use super::*;

#[test]
fn empty_line_names_the_active_filter() {
    assert_eq!(empty_line(HistoryFilter::All), "No transactions yet.");
    assert_eq!(empty_line(HistoryFilter::SettledOnly), "No settled transactions yet.");
}

#[test]
fn feed_failed_line_carries_classified_error() {
    assert_eq!(
        feed_failed_line("transactions request failed: 500"),
        "Could not load transactions (transactions request failed: 500)."
    );
}
