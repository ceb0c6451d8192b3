use std::env;

const ERROR_TRIGGER_VAR: &str = "ERROR_TRIGGER_ENABLED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether `GET /error-trigger` raises the simulated fault.
    pub error_trigger: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_trigger: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let error_trigger = env::var(ERROR_TRIGGER_VAR)
            .map(|val| parse_flag(&val))
            .unwrap_or_else(|_| Config::default().error_trigger);

        Self { error_trigger }
    }
}

// Anything that isn't clearly "off" keeps the flag on.
fn parse_flag(val: &str) -> bool {
    !matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}
