use bfhl_config::IdentityConfig;
use std::sync::Arc;

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub identity: Arc<IdentityConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(identity: IdentityConfig) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(IdentityConfig::default())
    }
}
