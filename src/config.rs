//! Aggregation settings.
//!
//! Settings are read from TOML. Every field has a default, so an empty
//! document is a valid configuration:
//!
//! ```
//! use statsketch::config::Config;
//!
//! let config = Config::from_toml(r#"
//!     timer_eps = 0.005
//!     quantiles = [0.5, 0.9, 0.99]
//!     set_eps = 0.01
//!
//!     [[histograms]]
//!     prefix = "api."
//!     min = 0.0
//!     max = 500.0
//!     width = 25.0
//! "#).unwrap();
//! assert_eq!(config.timer_eps, 0.005);
//! assert_eq!(config.set_precision().unwrap(), 14);
//! assert_eq!(config.histograms.len(), 1);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::histogram::HistogramConfig;
use crate::hll::{self, MAX_PRECISION, MIN_PRECISION};

/// Timer epsilon above which accuracy is poor enough to warn about.
const HIGH_TIMER_EPS: f64 = 0.1;

/// Settings shared by every aggregate in a `Metrics` registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Error bound for timer quantiles.
    pub timer_eps: f64,
    /// Quantiles targeted by every timer, ascending.
    pub quantiles: Vec<f64>,
    /// Target standard error for set cardinality.
    pub set_eps: f64,
    /// Explicit HLL precision for sets, overriding `set_eps`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_precision: Option<u8>,
    /// Histogram binning, matched against timer names by prefix.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub histograms: Vec<HistogramConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timer_eps: 0.01,
            quantiles: vec![0.5, 0.95, 0.99],
            set_eps: 0.02,
            set_precision: None,
            histograms: Vec::new(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting.
    pub fn validate(&self) -> Result<()> {
        if !(self.timer_eps > 0.0 && self.timer_eps < 0.5) {
            return Err(Error::invalid(
                "timer_eps",
                format!("{} is not in (0, 0.5)", self.timer_eps),
            ));
        }
        if self.timer_eps > HIGH_TIMER_EPS {
            warn!(timer_eps = self.timer_eps, "timer epsilon very high");
        }

        if self.quantiles.is_empty() {
            return Err(Error::invalid("quantiles", "at least one is required"));
        }
        if let Some(q) = self.quantiles.iter().find(|q| !(**q > 0.0 && **q < 1.0)) {
            return Err(Error::invalid("quantiles", format!("{} is not in (0, 1)", q)));
        }
        if self.quantiles.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::invalid("quantiles", "must be sorted ascending"));
        }

        self.set_precision()?;

        let mut prefixes = HashSet::new();
        for histogram in &self.histograms {
            histogram.validate()?;
            if !prefixes.insert(histogram.prefix.as_str()) {
                warn!(
                    prefix = %histogram.prefix,
                    "duplicate histogram prefix, the last one wins"
                );
            }
        }
        Ok(())
    }

    /// The HLL precision sets should use.
    ///
    /// An explicit `set_precision` wins; otherwise the smallest precision
    /// meeting `set_eps` is chosen.
    pub fn set_precision(&self) -> Result<u8> {
        let precision = match self.set_precision {
            Some(precision) => precision,
            None => hll::precision_for_error(self.set_eps)?,
        };
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(Error::invalid(
                "set_precision",
                format!(
                    "{} is not in [{}, {}]",
                    precision, MIN_PRECISION, MAX_PRECISION
                ),
            ));
        }
        Ok(precision)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.timer_eps, 0.01);
        assert_eq!(config.quantiles, vec![0.5, 0.95, 0.99]);
        assert_eq!(config.set_precision().unwrap(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn explicit_precision_overrides_eps() {
        let config = Config::from_toml("set_eps = 0.5\nset_precision = 10").unwrap();
        assert_eq!(config.set_precision().unwrap(), 10);
    }

    #[test]
    fn rejects_bad_values() {
        for text in [
            "timer_eps = 0.5",
            "timer_eps = 0.0",
            "quantiles = []",
            "quantiles = [0.5, 1.0]",
            "quantiles = [0.99, 0.5]",
            "set_precision = 20",
            "set_eps = 0.9",
            "[[histograms]]\nprefix = \"a\"\nmin = 5.0\nmax = 1.0\nwidth = 1.0",
        ] {
            assert!(
                matches!(Config::from_toml(text), Err(Error::InvalidParameter { .. })),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn high_eps_is_accepted() {
        assert!(Config::from_toml("timer_eps = 0.2").is_ok());
    }

    #[test]
    fn syntax_errors_surface() {
        assert!(matches!(
            Config::from_toml("timer_eps = "),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_toml("quantiles = \"high\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = Config::default();
        config.set_precision = Some(14);
        config.histograms.push(HistogramConfig {
            prefix: "db.".to_string(),
            min: 0.0,
            max: 100.0,
            width: 10.0,
        });
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
