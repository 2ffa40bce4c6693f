use std::time::Duration;

pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    // Prefix for the activities endpoints, empty means same origin
    pub api_base: String,
    // How long a signup status message stays visible
    pub status_timeout: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }
}

impl BoardConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_status_timeout(mut self, status_timeout: Duration) -> Self {
        self.status_timeout = status_timeout;
        self
    }
}
