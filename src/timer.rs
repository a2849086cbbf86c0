//! Timers: quantiles plus running moments over timing samples.
//!
//! Quantiles, `min` and `max` come from a CM sketch and need staged samples
//! merged first, so those queries take `&mut self` and flush on demand. The
//! moments are exact and cheap to read at any time.

use crate::cm::CmSketch;
use crate::counter::sample_stddev;
use crate::error::Result;

/// A timer aggregate.
///
/// # Examples
/// ```
/// use statsketch::timer::Timer;
///
/// let mut t = Timer::new(0.01, &[0.5, 0.95, 0.99]).unwrap();
/// for v in 1..=100 {
///     t.add_sample(v as f64);
/// }
/// assert_eq!(t.count(), 100);
/// assert_eq!(t.mean(), 50.5);
/// assert_eq!(t.min(), 1.0);
/// assert_eq!(t.max(), 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct Timer {
    sketch: CmSketch,
    count: u64,
    sum: f64,
    squared_sum: f64,
    finalized: bool,
}

impl Timer {
    /// Create a timer with quantile error `eps` targeted at `quantiles`.
    ///
    /// Fails under the same conditions as `CmSketch::new`.
    pub fn new(eps: f64, quantiles: &[f64]) -> Result<Timer> {
        Ok(Timer {
            sketch: CmSketch::new(eps, quantiles)?,
            count: 0,
            sum: 0.0,
            squared_sum: 0.0,
            finalized: true,
        })
    }

    /// Add a timing sample.
    pub fn add_sample(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.squared_sum += value * value;
        self.sketch.add_sample(value);
        self.finalized = false;
    }

    fn finalize(&mut self) {
        if !self.finalized {
            self.sketch.flush();
            self.finalized = true;
        }
    }

    /// The value at `quantile`, or 0 for an empty timer.
    pub fn query(&mut self, quantile: f64) -> f64 {
        self.finalize();
        self.sketch.query(quantile).unwrap_or(0.0)
    }

    /// Smallest sample, or 0 for an empty timer.
    pub fn min(&mut self) -> f64 {
        self.finalize();
        self.sketch.min().unwrap_or(0.0)
    }

    /// Largest sample, or 0 for an empty timer.
    pub fn max(&mut self) -> f64 {
        self.finalize();
        self.sketch.max().unwrap_or(0.0)
    }

    /// Number of samples added.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of the samples.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Sum of the squares of the samples.
    pub fn squared_sum(&self) -> f64 {
        self.squared_sum
    }

    /// Arithmetic mean, or 0 for an empty timer.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Sample standard deviation, or 0 with fewer than two samples.
    pub fn stddev(&self) -> f64 {
        sample_stddev(self.count, self.sum, self.squared_sum)
    }

    /// The targeted quantiles, sorted ascending.
    pub fn quantiles(&self) -> &[f64] {
        self.sketch.quantiles()
    }
}
