//! Display formatting for rupee amounts, timestamps, and long identifiers.
//!
//! DESIGN
//! ======
//! Amounts render with Indian digit grouping (last three digits, then
//! pairs). Timestamps stay strings end-to-end; shortening is string surgery,
//! not date math.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a rupee amount with grouping and two decimals, e.g. `₹1,23,456.50`.
#[must_use]
pub fn format_inr(amount: f64) -> String {
    let magnitude = grouped_abs(amount);
    let sign = if amount < 0.0 && magnitude != "0.00" { "-" } else { "" };
    format!("{sign}\u{20b9}{magnitude}")
}

/// Format a transaction amount with an explicit sign, e.g. `+₹1,200.00`.
#[must_use]
pub fn format_signed_inr(amount: f64) -> String {
    let magnitude = grouped_abs(amount);
    let sign = if amount < 0.0 && magnitude != "0.00" { "-" } else { "+" };
    format!("{sign}\u{20b9}{magnitude}")
}

/// Format a whole-rupee value (token denominations, bundle totals).
#[must_use]
pub fn format_inr_whole(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!(
        "{sign}\u{20b9}{}.00",
        group_indian(&value.unsigned_abs().to_string())
    )
}

fn grouped_abs(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (integral, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}.{decimals}", group_indian(integral))
}

/// Indian grouping: `"123456"` becomes `"1,23,456"`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut index = head.len();
    while index > 2 {
        groups.push(&head[index - 2..index]);
        index -= 2;
    }
    groups.push(&head[..index]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Shorten an ISO 8601 timestamp to `YYYY-MM-DD HH:MM` for list rows.
/// Values without a `T` separator pass through unchanged.
#[must_use]
pub fn short_timestamp(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, time)) => {
            let clock: String = time.chars().take(5).collect();
            format!("{date} {clock}")
        }
        None => timestamp.to_owned(),
    }
}

/// Truncate a long identifier (token id, signature) to a head…tail preview.
#[must_use]
pub fn shorten_id(id: &str) -> String {
    const HEAD: usize = 8;
    const TAIL: usize = 4;

    let length = id.chars().count();
    if length <= HEAD + TAIL {
        return id.to_owned();
    }
    let head: String = id.chars().take(HEAD).collect();
    let tail: String = id.chars().skip(length - TAIL).collect();
    format!("{head}\u{2026}{tail}")
}
