//! Prices are stored in US cents. Two renderings exist and must not be
//! mixed up: [`format_price`] for display (always two decimals, with the
//! currency prefix) and [`format_link_amount`] for provider URLs (bare
//! number, trailing zeros trimmed).

/// Display formatting: "US $10.00".
pub fn format_price(price_cents: u64) -> String {
    format!("US ${}.{:02}", price_cents / 100, price_cents % 100)
}

/// Amount segment for payment links: no currency symbol, no trailing
/// zeros. 1000 cents -> "10", 1050 -> "10.5", 1099 -> "10.99".
pub fn format_link_amount(price_cents: u64) -> String {
    let dollars = price_cents / 100;
    let cents = price_cents % 100;
    if cents == 0 {
        format!("{dollars}")
    } else if cents % 10 == 0 {
        format!("{dollars}.{}", cents / 10)
    } else {
        format!("{dollars}.{cents:02}")
    }
}

/// Parse a free-text price ("10", "10.5", "10.50") into cents.
///
/// The admin add path never blocks on validation: anything non-numeric,
/// negative or otherwise malformed is coerced to 0 rather than rejected.
/// Fractional digits beyond the second are dropped.
pub fn parse_price(input: &str) -> u64 {
    let s = input.trim();
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return 0;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }

    let dollars: u64 = whole.parse().unwrap_or(0);
    let cents: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().unwrap_or(0) * 10,
        _ => frac[..2].parse::<u64>().unwrap_or(0),
    };
    dollars.saturating_mul(100).saturating_add(cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_price_always_has_two_decimals() {
        assert_eq!(format_price(0), "US $0.00");
        assert_eq!(format_price(1000), "US $10.00");
        assert_eq!(format_price(1050), "US $10.50");
        assert_eq!(format_price(999), "US $9.99");
    }

    #[test]
    fn link_amount_trims_trailing_zeros() {
        assert_eq!(format_link_amount(1000), "10");
        assert_eq!(format_link_amount(1050), "10.5");
        assert_eq!(format_link_amount(1099), "10.99");
        assert_eq!(format_link_amount(0), "0");
        assert_eq!(format_link_amount(50), "0.5");
        assert_eq!(format_link_amount(5), "0.05");
    }

    #[test]
    fn parse_accepts_plain_and_decimal_input() {
        assert_eq!(parse_price("10"), 1000);
        assert_eq!(parse_price(" 10.5 "), 1050);
        assert_eq!(parse_price("10.50"), 1050);
        assert_eq!(parse_price("10.99"), 1099);
        assert_eq!(parse_price(".5"), 50);
        assert_eq!(parse_price("0.05"), 5);
    }

    #[test]
    fn parse_truncates_excess_fraction_digits() {
        assert_eq!(parse_price("10.999"), 1099);
    }

    #[test]
    fn parse_coerces_malformed_input_to_zero() {
        assert_eq!(parse_price(""), 0);
        assert_eq!(parse_price("   "), 0);
        assert_eq!(parse_price("abc"), 0);
        assert_eq!(parse_price("-5"), 0);
        assert_eq!(parse_price("-0.5"), 0);
        assert_eq!(parse_price("1e3"), 0);
        assert_eq!(parse_price("NaN"), 0);
        assert_eq!(parse_price("inf"), 0);
        assert_eq!(parse_price("10,50"), 0);
    }

    #[test]
    fn parse_and_link_format_agree() {
        assert_eq!(format_link_amount(parse_price("10.00")), "10");
        assert_eq!(format_link_amount(parse_price("10.50")), "10.5");
    }
}
