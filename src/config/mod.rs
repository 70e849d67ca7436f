pub mod page_config;

#[cfg(feature = "cli")]
use crate::utils::error::{Result, RoiError};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "intake-roi")]
#[command(about = "ROI quick calculator for the intake automation service")]
pub struct CliConfig {
    /// Average fee per case ($); non-numeric input counts as 0
    #[arg(long, allow_hyphen_values = true)]
    pub case_value: Option<String>,

    /// Extra clients per month; non-numeric input counts as 0
    #[arg(long, allow_hyphen_values = true)]
    pub extra_clients: Option<String>,

    /// Path to a page configuration TOML file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Only run the calculator self-checks
    #[arg(long)]
    pub self_check: bool,

    /// Do not run the self-checks at startup
    #[arg(long)]
    pub skip_self_check: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.self_check && self.skip_self_check {
            return Err(RoiError::ConflictingOptionsError {
                message: "--self-check and --skip-self-check cannot be used together".to_string(),
            });
        }
        Ok(())
    }
}
