pub mod calculator;
pub mod display;
pub mod self_check;

pub use crate::domain::model::{CheckResult, RoiDisplay, RoiInput, RoiOutcome};
pub use crate::domain::ports::PageSettings;
pub use crate::utils::error::Result;
