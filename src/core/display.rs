use crate::core::{RoiDisplay, RoiOutcome};

const NO_RETURN: &str = "—";
const INFINITY: &str = "∞";

/// Formats an amount as en-US currency: `$30,000`, `$1,234.5`, `$-750`.
///
/// Keeps at most three fraction digits and drops trailing zeros. The sign
/// follows the `$`, and an overflowed amount renders as `$∞`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("${}{}", sign, INFINITY);
    }

    let rendered = format!("{:.3}", amount.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && (whole != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("${}{}", sign, grouped)
    } else {
        format!("${}{}.{}", sign, grouped, fraction)
    }
}

/// `19.0×` for a positive multiple, `∞×` on overflow, an em dash otherwise.
pub fn format_roi_multiple(roi: f64) -> String {
    if roi == f64::INFINITY {
        format!("{}×", INFINITY)
    } else if roi > 0.0 {
        format!("{:.1}×", roi)
    } else {
        NO_RETURN.to_string()
    }
}

impl RoiDisplay {
    pub fn new(outcome: &RoiOutcome, fee: f64) -> Self {
        Self {
            monthly_revenue: format_currency(outcome.revenue),
            fee: format_currency(fee),
            roi_multiple: format_roi_multiple(outcome.roi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1500.0), "$1,500");
        assert_eq!(format_currency(30000.0), "$30,000");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_format_currency_fractions_and_sign() {
        assert_eq!(format_currency(1234.5), "$1,234.5");
        assert_eq!(format_currency(0.125), "$0.125");
        assert_eq!(format_currency(-750.0), "$-750");
        assert_eq!(format_currency(-1234.5), "$-1,234.5");
        assert_eq!(format_currency(-0.0), "$0");
    }

    #[test]
    fn test_format_roi_multiple() {
        assert_eq!(format_roi_multiple(19.0), "19.0×");
        assert_eq!(format_roi_multiple(9.04), "9.0×");
        assert_eq!(format_roi_multiple(0.0), "—");
        assert_eq!(format_roi_multiple(-0.5), "—");
    }

    #[test]
    fn test_overflowed_revenue_renders_consistently() {
        let outcome = crate::core::calculator::compute(1e200, 1e200, 1500.0);
        assert_eq!(outcome.revenue, f64::INFINITY);

        let display = RoiDisplay::new(&outcome, 1500.0);
        assert_eq!(display.monthly_revenue, "$∞");
        assert_eq!(display.roi_multiple, "∞×");
    }

    #[test]
    fn test_negative_overflow_has_no_multiple() {
        let outcome = crate::core::calculator::compute(-1e200, 1e200, 1500.0);
        let display = RoiDisplay::new(&outcome, 1500.0);
        assert_eq!(display.monthly_revenue, "$-∞");
        assert_eq!(display.roi_multiple, "—");
    }

    #[test]
    fn test_display_tiles() {
        let outcome = RoiOutcome {
            revenue: 15000.0,
            roi: 9.0,
        };
        let display = RoiDisplay::new(&outcome, 1500.0);
        assert_eq!(display.monthly_revenue, "$15,000");
        assert_eq!(display.fee, "$1,500");
        assert_eq!(display.roi_multiple, "9.0×");
    }
}
