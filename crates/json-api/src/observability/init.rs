//! Observability lifecycle.

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Runtime observability state.
#[derive(Debug)]
pub(crate) struct Observability {
    log_format: &'static str,
}

impl Observability {
    /// Initialize structured logging and apply request logging settings.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        logging::init_subscriber(config)?;

        Ok(Self {
            log_format: logging::format_name(config.logging.log_format),
        })
    }

    pub(crate) fn log_format(&self) -> &'static str {
        self.log_format
    }
}
