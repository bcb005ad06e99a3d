//! Tracing subscriber setup.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("folio=debug,folio_core=debug")
//!     .init()?;
//! ```
//!
//! `RUST_LOG` takes precedence over the builder's filter when it is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{FolioError, FolioResult};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "folio=info,folio_core=info";

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: bool,
    with_target: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    /// Create a new logging builder with console output enabled.
    pub fn new() -> Self {
        Self {
            env_filter: None,
            ansi: true,
            with_target: true,
        }
    }

    /// Set the environment filter (e.g., "folio=info,folio_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Disable ANSI colours (useful when output is piped to a file).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Hide event targets in console output.
    pub fn without_target(mut self) -> Self {
        self.with_target = false;
        self
    }

    /// Resolve the filter: `RUST_LOG`, then the explicit filter, then the default.
    pub fn build_filter(&self) -> FolioResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        let directives = self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER);
        EnvFilter::try_new(directives).map_err(|e| FolioError::Logging(e.to_string()))
    }

    /// Install the subscriber globally.
    ///
    /// Fails if a global subscriber is already set or the filter is invalid.
    pub fn init(self) -> FolioResult<()> {
        let filter = self.build_filter()?;
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(self.ansi)
            .with_target(self.with_target);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| FolioError::Logging(e.to_string()))
    }
}
