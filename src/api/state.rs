//! Application state for the HR cost API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded payroll configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Checks a presented access key against the configured one.
    ///
    /// Every request is allowed when no key is configured.
    pub fn allows(&self, presented: Option<&str>) -> bool {
        match self.config.access_key() {
            None => true,
            Some(expected) => presented == Some(expected),
        }
    }
}
