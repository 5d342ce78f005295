use super::*;

#[test]
fn format_inr_renders_two_decimals() {
    assert_eq!(format_inr(2450.0), "₹2,450.00");
    assert_eq!(format_inr(0.0), "₹0.00");
    assert_eq!(format_inr(500.5), "₹500.50");
}

#[test]
fn format_inr_uses_indian_grouping() {
    assert_eq!(format_inr(123_456.5), "₹1,23,456.50");
    assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678.00");
    assert_eq!(format_inr(1_000.0), "₹1,000.00");
}

#[test]
fn format_inr_marks_negative_amounts() {
    assert_eq!(format_inr(-450.0), "-₹450.00");
}

#[test]
fn format_inr_drops_sign_when_rounding_to_zero() {
    assert_eq!(format_inr(-0.001), "₹0.00");
}

#[test]
fn format_inr_whole_groups_like_float_variant() {
    assert_eq!(format_inr_whole(500), "₹500.00");
    assert_eq!(format_inr_whole(1600), "₹1,600.00");
    assert_eq!(format_inr_whole(150_000), "₹1,50,000.00");
    assert_eq!(format_inr_whole(-200), "-₹200.00");
}

#[test]
fn format_signed_inr_marks_both_directions() {
    assert_eq!(format_signed_inr(1200.0), "+₹1,200.00");
    assert_eq!(format_signed_inr(-450.0), "-₹450.00");
}

#[test]
fn short_timestamp_trims_seconds() {
    assert_eq!(short_timestamp("2025-12-25T14:30:00"), "2025-12-25 14:30");
}

#[test]
fn short_timestamp_passes_through_unseparated_values() {
    assert_eq!(short_timestamp("yesterday"), "yesterday");
}

#[test]
fn shorten_id_previews_long_identifiers() {
    assert_eq!(
        shorten_id("9f7c2d1e-55aa-4b7e-8f00-aa11bb22cc33"),
        "9f7c2d1e…cc33"
    );
}

#[test]
fn shorten_id_keeps_short_identifiers_whole() {
    assert_eq!(shorten_id("TXN-1"), "TXN-1");
    assert_eq!(shorten_id("123456789012"), "123456789012");
}
