pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::session::{CalculatorSession, SessionReport};
pub use crate::config::page_config::PageConfig;
pub use crate::core::calculator::{coerce_input, compute, RoiCalculator, DEFAULT_MONTHLY_FEE};
pub use crate::core::self_check::{run_checks, SelfCheckReport};
pub use crate::utils::error::{Result, RoiError};
