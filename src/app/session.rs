use crate::core::calculator::{coerce_input, RoiCalculator};
use crate::core::{PageSettings, RoiDisplay, RoiInput, RoiOutcome};
use crate::utils::error::Result;
use serde::Serialize;

/// One pass of the calculator widget: inputs in, the three tiles out.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub headline: String,
    pub guarantee_days: u32,
    pub input: RoiInput,
    pub outcome: RoiOutcome,
    pub display: RoiDisplay,
    pub fee: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}

pub struct CalculatorSession<'a, S: PageSettings> {
    settings: &'a S,
    calculator: RoiCalculator,
}

impl<'a, S: PageSettings> CalculatorSession<'a, S> {
    pub fn new(settings: &'a S) -> Result<Self> {
        let calculator = RoiCalculator::new(settings.monthly_fee())?;
        Ok(Self {
            settings,
            calculator,
        })
    }

    /// Missing fields take the page defaults; present ones are coerced.
    pub fn run(&self, case_value: Option<&str>, extra_clients: Option<&str>) -> SessionReport {
        let input = RoiInput {
            case_value: case_value
                .map(coerce_input)
                .unwrap_or_else(|| self.settings.default_case_value()),
            extra_clients: extra_clients
                .map(coerce_input)
                .unwrap_or_else(|| self.settings.default_extra_clients()),
        };
        let outcome = self.calculator.compute(&input);
        let fee = self.calculator.fee();

        SessionReport {
            headline: format!(
                "{}: {}",
                self.settings.site_name(),
                self.settings.tagline()
            ),
            guarantee_days: self.settings.guarantee_days(),
            input,
            outcome,
            display: RoiDisplay::new(&outcome, fee),
            fee,
            booking_url: self.settings.booking_url().map(str::to_string),
        }
    }
}

impl SessionReport {
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n", self.headline);
        if self.guarantee_days > 0 {
            out.push_str(&format!(
                "{}-day money-back guarantee\n",
                self.guarantee_days
            ));
        }
        out.push('\n');
        out.push_str(&format!("Monthly revenue: {}\n", self.display.monthly_revenue));
        out.push_str(&format!("Your fee:        {}\n", self.display.fee));
        out.push_str(&format!("ROI multiple:    {}\n", self.display.roi_multiple));
        if let Some(url) = &self.booking_url {
            out.push_str(&format!("Book a free demo: {}\n", url));
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
