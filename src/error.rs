//! Errors surfaced by construction and configuration.
//!
//! Aggregators validate their parameters up front. Once an aggregator exists,
//! adding samples cannot fail, so every variant here is raised before any
//! state is allocated.

use thiserror::Error;

use crate::metrics::MetricType;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Construction and configuration errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor argument is outside its permitted range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// `Metrics::add_sample` was called with a type that needs another entry
    /// point.
    #[error("metric type {0:?} cannot take a numeric sample")]
    UnexpectedMetricType(MetricType),

    /// The configuration text could not be parsed.
    #[error("could not parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Error {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
