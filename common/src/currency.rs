/// Fixed two-decimal rendering of a dollar amount, without symbol.
///
/// Exact half-cent ties round away from zero; `{:.2}` alone would round them
/// to even.
pub fn format_amount(amount: f64) -> String {
    // A value sitting exactly on a half cent is an odd multiple of 1/8.
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        return format!("{:.2}", (amount * 100.0).round() / 100.0);
    }
    format!("{amount:.2}")
}

/// Format an amount for display, e.g. `$19.98`.
pub fn format_dollars(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(5.0), "5.00");
        assert_eq!(format_amount(9.99 * 2.0), "19.98");
        assert_eq!(format_amount(1234.5), "1234.50");
    }

    #[test]
    fn half_cent_ties_round_up() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(0.625), "0.63");
        assert_eq!(format_amount(2.375), "2.38");
        assert_eq!(format_amount(-0.125), "-0.13");
    }

    #[test]
    fn inexact_half_cents_follow_stored_value() {
        // 1.005 is stored just below the tie.
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_amount(0.5), "0.50");
    }

    #[test]
    fn dollars_prefix() {
        assert_eq!(format_dollars(4.5), "$4.50");
    }
}
