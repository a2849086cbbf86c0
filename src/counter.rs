//! Running sums over counter samples.
//!
//! A counter keeps no samples, only the first two moments and the extremes,
//! so it costs the same for ten samples as for ten million.

/// Running sum, extremes and moments of a counter's samples.
///
/// # Examples
/// ```
/// use statsketch::counter::Counter;
///
/// let mut c = Counter::new();
/// for v in 1..=4 {
///     c.add_sample(v as f64);
/// }
/// assert_eq!(c.count(), 4);
/// assert_eq!(c.sum(), 10.0);
/// assert_eq!(c.mean(), 2.5);
/// assert_eq!(c.min(), 1.0);
/// assert_eq!(c.max(), 4.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct Counter {
    count: u64,
    sum: f64,
    squared_sum: f64,
    min: f64,
    max: f64,
}

/// Sample standard deviation from running moments. Zero below two samples.
pub(crate) fn sample_stddev(count: u64, sum: f64, squared_sum: f64) -> f64 {
    if count < 2 {
        return 0.0;
    }
    let n = count as f64;
    let num = n * squared_sum - sum * sum;
    let div = n * (n - 1.0);
    // Cancellation can leave a tiny negative numerator for constant input.
    (num / div).max(0.0).sqrt()
}

impl Counter {
    /// Create an empty counter.
    pub fn new() -> Counter {
        Counter::default()
    }

    /// Add a sample.
    pub fn add_sample(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
        self.squared_sum += value * value;
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

    /// Arithmetic mean, or 0 when empty.
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

    /// Smallest sample, or 0 when empty.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample, or 0 when empty.
    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};

    #[test]
    fn empty() {
        let c = Counter::new();
        assert_eq!(c.count(), 0);
        assert_eq!(c.sum(), 0.0);
        assert_eq!(c.mean(), 0.0);
        assert_eq!(c.stddev(), 0.0);
        assert_eq!(c.min(), 0.0);
        assert_eq!(c.max(), 0.0);
    }

    #[test]
    fn one_through_hundred() {
        let mut c = Counter::new();
        for v in 1..=100 {
            c.add_sample(f64::from(v));
        }
        assert_eq!(c.count(), 100);
        assert_eq!(c.sum(), 5050.0);
        assert_eq!(c.squared_sum(), 338_350.0);
        assert_eq!(c.mean(), 50.5);
        assert!((c.stddev() - 29.0115).abs() < 1e-3);
        assert_eq!(c.min(), 1.0);
        assert_eq!(c.max(), 100.0);
    }

    #[test]
    fn descending_input_tracks_both_extremes() {
        let mut c = Counter::new();
        for v in [5.0, 4.0, 9.0, -2.0] {
            c.add_sample(v);
        }
        assert_eq!(c.min(), -2.0);
        assert_eq!(c.max(), 9.0);
    }

    #[test]
    fn single_sample_has_no_spread() {
        let mut c = Counter::new();
        c.add_sample(42.0);
        assert_eq!(c.stddev(), 0.0);
        assert_eq!(c.mean(), 42.0);
    }

    #[test]
    fn extremes_bound_mean() {
        fn inner(data: Vec<i32>) -> TestResult {
            if data.is_empty() {
                return TestResult::discard();
            }
            let mut c = Counter::new();
            for v in &data {
                c.add_sample(f64::from(*v));
            }
            let lo = data.iter().min().map(|v| f64::from(*v));
            let hi = data.iter().max().map(|v| f64::from(*v));
            TestResult::from_bool(
                Some(c.min()) == lo
                    && Some(c.max()) == hi
                    && c.mean() >= c.min() - 1e-6
                    && c.mean() <= c.max() + 1e-6
                    && c.stddev() >= 0.0,
            )
        }
        QuickCheck::new().quickcheck(inner as fn(Vec<i32>) -> TestResult);
    }
}
