use super::security_config::SecurityConfig;

/// Application state shared with every handler and middleware.
///
/// Holds read-only configuration only; nothing here is mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session token signing configuration
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }
}
