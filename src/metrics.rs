//! The per-interval metrics registry.
//!
//! A `Metrics` maps metric names to aggregates for one flush interval. The
//! dispatcher feeds it decoded samples and the sinks walk it at flush time.
//! A fresh registry is expected for each interval.

use std::collections::HashMap;

use tracing::debug;

use crate::config::Config;
use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::histogram::{Histogram, HistogramConfig};
use crate::set::Set;
use crate::timer::Timer;

/// The kind of a decoded sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    /// A raw key/value pair, reported as given.
    KeyVal,
    /// A gauge, holding the last value set.
    Gauge,
    /// A signed adjustment to a gauge.
    GaugeDelta,
    /// A counter sample.
    Counter,
    /// A timing sample.
    Timer,
    /// A set member. Use `Metrics::set_update`.
    Set,
}

#[derive(Debug, Clone)]
struct TimerEntry {
    timer: Timer,
    histogram: Option<Histogram>,
}

/// One aggregate yielded by `Metrics::iter_mut`.
#[derive(Debug)]
pub enum Metric<'a> {
    /// A key/value pair. Keys may repeat.
    KeyVal(f64),
    /// A gauge's current value.
    Gauge(f64),
    /// A counter.
    Counter(&'a Counter),
    /// A timer and, when one is configured for its name, its histogram.
    Timer(&'a mut Timer, Option<&'a Histogram>),
    /// A set.
    Set(&'a Set),
}

/// Aggregates for one flush interval, keyed by metric name.
///
/// # Examples
/// ```
/// use statsketch::metrics::{Metric, Metrics, MetricType};
///
/// let mut m = Metrics::default();
/// m.add_sample(MetricType::Counter, "hits", 1.0).unwrap();
/// m.add_sample(MetricType::Counter, "hits", 2.0).unwrap();
/// m.add_sample(MetricType::Timer, "latency", 12.5).unwrap();
/// m.set_update("users", b"alice").unwrap();
///
/// for (name, metric) in m.iter_mut() {
///     match metric {
///         Metric::Counter(c) => assert_eq!((name, c.sum()), ("hits", 3.0)),
///         Metric::Timer(t, _) => assert_eq!(t.query(0.5), 12.5),
///         Metric::Set(s) => assert_eq!(s.size(), 1),
///         _ => unreachable!(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Metrics {
    timer_eps: f64,
    quantiles: Vec<f64>,
    set_precision: u8,
    histograms: Vec<HistogramConfig>,

    key_vals: Vec<(String, f64)>,
    gauges: HashMap<String, f64>,
    counters: HashMap<String, Counter>,
    timers: HashMap<String, TimerEntry>,
    sets: HashMap<String, Set>,
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics {
            timer_eps: 0.01,
            quantiles: vec![0.5, 0.95, 0.99],
            set_precision: 12,
            histograms: Vec::new(),
            key_vals: Vec::new(),
            gauges: HashMap::new(),
            counters: HashMap::new(),
            timers: HashMap::new(),
            sets: HashMap::new(),
        }
    }
}

impl Metrics {
    /// Create an empty registry from a validated copy of `config`.
    pub fn new(config: &Config) -> Result<Metrics> {
        config.validate()?;
        Ok(Metrics {
            timer_eps: config.timer_eps,
            quantiles: config.quantiles.clone(),
            set_precision: config.set_precision()?,
            histograms: config.histograms.clone(),
            ..Metrics::default()
        })
    }

    /// Record a numeric sample.
    ///
    /// Fails only for `MetricType::Set`, whose members are not numbers.
    pub fn add_sample(&mut self, ty: MetricType, name: &str, value: f64) -> Result<()> {
        match ty {
            MetricType::KeyVal => self.key_vals.push((name.to_string(), value)),
            MetricType::Gauge => {
                self.gauges.insert(name.to_string(), value);
            }
            MetricType::GaugeDelta => {
                *self.gauges.entry(name.to_string()).or_insert(0.0) += value;
            }
            MetricType::Counter => self
                .counters
                .entry(name.to_string())
                .or_default()
                .add_sample(value),
            MetricType::Timer => {
                if !self.timers.contains_key(name) {
                    let entry = self.new_timer(name)?;
                    self.timers.insert(name.to_string(), entry);
                }
                if let Some(entry) = self.timers.get_mut(name) {
                    entry.timer.add_sample(value);
                    if let Some(ref mut histogram) = entry.histogram {
                        histogram.insert(value);
                    }
                }
            }
            MetricType::Set => return Err(Error::UnexpectedMetricType(ty)),
        }
        Ok(())
    }

    /// Add `key` to the set called `name`.
    pub fn set_update(&mut self, name: &str, key: &[u8]) -> Result<()> {
        if !self.sets.contains_key(name) {
            debug!(name, precision = self.set_precision, "creating set");
            let set = Set::new(self.set_precision)?;
            self.sets.insert(name.to_string(), set);
        }
        if let Some(set) = self.sets.get_mut(name) {
            set.add(key);
        }
        Ok(())
    }

    fn new_timer(&self, name: &str) -> Result<TimerEntry> {
        let histogram = match self.histogram_for(name) {
            Some(config) => Some(Histogram::new(config)?),
            None => None,
        };
        debug!(name, histogram = histogram.is_some(), "creating timer");
        Ok(TimerEntry {
            timer: Timer::new(self.timer_eps, &self.quantiles)?,
            histogram,
        })
    }

    /// The configuration with the longest prefix of `name`. Among equal
    /// prefixes the last configured wins.
    fn histogram_for(&self, name: &str) -> Option<&HistogramConfig> {
        self.histograms
            .iter()
            .filter(|h| name.starts_with(h.prefix.as_str()))
            .max_by_key(|h| h.prefix.len())
    }

    /// Number of named aggregates, counting each key/value pair.
    pub fn len(&self) -> usize {
        self.key_vals.len()
            + self.gauges.len()
            + self.counters.len()
            + self.timers.len()
            + self.sets.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit every aggregate as `(name, metric)`.
    ///
    /// Key/values come first in arrival order. The order of everything
    /// else is unspecified. Timers are yielded mutably so that quantile
    /// queries can merge staged samples.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, Metric<'_>)> + '_ {
        let key_vals = self
            .key_vals
            .iter()
            .map(|(name, v)| (name.as_str(), Metric::KeyVal(*v)));
        let gauges = self
            .gauges
            .iter()
            .map(|(name, v)| (name.as_str(), Metric::Gauge(*v)));
        let counters = self
            .counters
            .iter()
            .map(|(name, c)| (name.as_str(), Metric::Counter(c)));
        let timers = self.timers.iter_mut().map(|(name, entry)| {
            let TimerEntry { timer, histogram } = entry;
            (name.as_str(), Metric::Timer(timer, histogram.as_ref()))
        });
        let sets = self
            .sets
            .iter()
            .map(|(name, s)| (name.as_str(), Metric::Set(s)));
        key_vals.chain(gauges).chain(counters).chain(timers).chain(sets)
    }
}
