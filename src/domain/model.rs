use serde::{Deserialize, Serialize};

/// The two user-editable calculator inputs, already coerced to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    pub case_value: f64,
    pub extra_clients: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiOutcome {
    pub revenue: f64,
    pub roi: f64,
}

/// Display strings for the three result tiles of the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoiDisplay {
    pub monthly_revenue: String,
    pub fee: String,
    pub roi_multiple: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub description: String,
    pub passed: bool,
}
