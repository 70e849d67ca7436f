/// Read-only view of the page settings the calculator and CLI depend on.
pub trait PageSettings: Send + Sync {
    fn site_name(&self) -> &str;
    fn tagline(&self) -> &str;
    fn guarantee_days(&self) -> u32;
    fn monthly_fee(&self) -> f64;
    fn default_case_value(&self) -> f64;
    fn default_extra_clients(&self) -> f64;
    fn smooth_scroll_enabled(&self) -> bool;
    fn booking_url(&self) -> Option<&str>;
}
