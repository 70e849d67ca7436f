use crate::core::calculator::DEFAULT_MONTHLY_FEE;
use crate::core::PageSettings;
use crate::utils::error::{Result, RoiError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub site: SiteConfig,
    pub pricing: PricingConfig,
    pub calculator: CalculatorConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub monthly_fee: f64,
    pub guarantee_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub default_case_value: f64,
    pub default_extra_clients: f64,
}

/// Auxiliary page behaviours that used to differ between component revisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub smooth_scroll: bool,
    pub booking_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "InjuryAutomation".to_string(),
            tagline: "Never lose another personal injury client to voicemail again.".to_string(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            monthly_fee: DEFAULT_MONTHLY_FEE,
            guarantee_days: 30,
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_case_value: 15000.0,
            default_extra_clients: 1.0,
        }
    }
}

impl PageConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RoiError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RoiError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BOOKING_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RoiError::ConfigParseError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;
        validation::validate_positive_amount("pricing.monthly_fee", self.pricing.monthly_fee)?;
        validation::validate_range("pricing.guarantee_days", self.pricing.guarantee_days, 0, 365)?;

        if let Some(url) = &self.behavior.booking_url {
            validation::validate_url("behavior.booking_url", url)?;
        }

        Ok(())
    }
}

impl PageSettings for PageConfig {
    fn site_name(&self) -> &str {
        &self.site.name
    }

    fn tagline(&self) -> &str {
        &self.site.tagline
    }

    fn guarantee_days(&self) -> u32 {
        self.pricing.guarantee_days
    }

    fn monthly_fee(&self) -> f64 {
        self.pricing.monthly_fee
    }

    fn default_case_value(&self) -> f64 {
        self.calculator.default_case_value
    }

    fn default_extra_clients(&self) -> f64 {
        self.calculator.default_extra_clients
    }

    fn smooth_scroll_enabled(&self) -> bool {
        self.behavior.smooth_scroll
    }

    fn booking_url(&self) -> Option<&str> {
        self.behavior.booking_url.as_deref()
    }
}

impl Validate for PageConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
