use crate::core::{RoiInput, RoiOutcome};
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_amount;

/// Monthly price of the service.
pub const DEFAULT_MONTHLY_FEE: f64 = 1500.0;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parses a calculator field. Anything that is not a finite number becomes 0.
pub fn coerce_input(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Revenue and ROI multiple for one case value and client count.
///
/// `roi` is gated on `revenue > 0`, so a revenue that exactly covers the fee
/// yields `0.0` and a revenue below the fee yields a negative multiple.
/// `fee` must be positive; [`RoiCalculator`] enforces that.
pub fn compute(case_value: f64, extra_clients: f64, fee: f64) -> RoiOutcome {
    let revenue = finite_or_zero(case_value) * finite_or_zero(extra_clients);
    let roi = if revenue > 0.0 {
        (revenue - fee) / fee
    } else {
        0.0
    };

    RoiOutcome { revenue, roi }
}

/// Calculator bound to a validated monthly fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiCalculator {
    fee: f64,
}

impl RoiCalculator {
    pub fn new(fee: f64) -> Result<Self> {
        validate_positive_amount("pricing.monthly_fee", fee)?;
        Ok(Self { fee })
    }

    pub fn fee(&self) -> f64 {
        self.fee
    }

    pub fn compute(&self, input: &RoiInput) -> RoiOutcome {
        let outcome = compute(input.case_value, input.extra_clients, self.fee);
        tracing::debug!(
            "case_value={} extra_clients={} -> revenue={} roi={}",
            input.case_value,
            input.extra_clients,
            outcome.revenue,
            outcome.roi
        );
        outcome
    }

    /// Coerces both text fields and computes, the way the page's inputs do.
    pub fn evaluate_text(&self, case_value: &str, extra_clients: &str) -> (RoiInput, RoiOutcome) {
        let input = RoiInput {
            case_value: coerce_input(case_value),
            extra_clients: coerce_input(extra_clients),
        };
        (input, self.compute(&input))
    }
}

impl Default for RoiCalculator {
    fn default() -> Self {
        Self {
            fee: DEFAULT_MONTHLY_FEE,
        }
    }
}
