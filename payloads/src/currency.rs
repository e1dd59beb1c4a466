//! Rupee formatting for prices, booking amounts and dashboard figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole rupees, halves away from zero.
pub fn whole_rupees(amount: Decimal) -> Decimal {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc()
}

/// Format an amount as whole rupees with Indian digit grouping, e.g.
/// `₹1,02,650`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = whole_rupees(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().to_string();
    format!("{sign}₹{}", group_indian(&digits))
}

/// Groups the last three digits, then every two: `1234567` -> `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
