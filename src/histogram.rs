//! 'histogram' counts timer samples into fixed-width bins between a
//! configured minimum and maximum. Two extra bins catch everything below
//! the minimum and everything at or above the maximum, so no sample is ever
//! dropped.
//!
//! Storage cost is one counter per bin. The implementation is biased in
//! favor of writes: insertion is a subtraction and a division.

use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Binning for timers whose name starts with `prefix`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Metric name prefix this configuration applies to.
    pub prefix: String,
    /// Lower edge of the first regular bin.
    pub min: f64,
    /// Upper edge of the last regular bin.
    pub max: f64,
    /// Width of each regular bin.
    pub width: f64,
}

impl HistogramConfig {
    /// Check the bounds describe at least one regular bin.
    pub fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(Error::invalid(
                "histogram",
                format!("{}: bounds must be finite", self.prefix),
            ));
        }
        if self.min >= self.max {
            return Err(Error::invalid(
                "histogram",
                format!("{}: min {} is not below max {}", self.prefix, self.min, self.max),
            ));
        }
        if !(self.width > 0.0) || self.width > self.max - self.min {
            return Err(Error::invalid(
                "histogram",
                format!(
                    "{}: width {} does not fit in [{}, {})",
                    self.prefix, self.width, self.min, self.max
                ),
            ));
        }
        Ok(())
    }

    /// Number of bins including the underflow and overflow bins.
    pub fn num_bins(&self) -> usize {
        ((self.max - self.min) / self.width) as usize + 2
    }
}

/// One edge of a histogram bin.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Bound {
    /// Below every finite value.
    NegInf,
    /// A finite edge.
    Finite(f64),
    /// Above every finite value.
    PosInf,
}

/// Fixed-width bins with underflow and overflow bins.
///
/// # Examples
/// ```
/// use statsketch::histogram::{Bound, Histogram, HistogramConfig};
///
/// let config = HistogramConfig {
///     prefix: "api.".into(),
///     min: 0.0,
///     max: 100.0,
///     width: 25.0,
/// };
/// let mut histo = Histogram::new(&config).unwrap();
/// for v in [-1.0, 0.0, 30.0, 99.9, 100.0] {
///     histo.insert(v);
/// }
///
/// let bins: Vec<(Bound, Bound, u64)> = histo.bins().collect();
/// assert_eq!(bins[0], (Bound::NegInf, Bound::Finite(0.0), 1));
/// assert_eq!(bins[1], (Bound::Finite(0.0), Bound::Finite(25.0), 1));
/// assert_eq!(bins[2], (Bound::Finite(25.0), Bound::Finite(50.0), 1));
/// assert_eq!(bins[4], (Bound::Finite(75.0), Bound::Finite(100.0), 1));
/// assert_eq!(bins[5], (Bound::Finite(100.0), Bound::PosInf, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Histogram {
    min: f64,
    max: f64,
    width: f64,
    count: u64,
    counts: Vec<u64>,
}

impl Histogram {
    /// Create an empty histogram for `config`.
    pub fn new(config: &HistogramConfig) -> Result<Histogram> {
        config.validate()?;
        Ok(Histogram {
            min: config.min,
            max: config.max,
            width: config.width,
            count: 0,
            counts: vec![0; config.num_bins()],
        })
    }

    /// Count `value` in its bin.
    ///
    /// Regular bins are closed below and open above. NaN lands in the
    /// overflow bin.
    pub fn insert(&mut self, value: f64) {
        let last = self.counts.len() - 1;
        let idx = if value < self.min {
            0
        } else if !(value < self.max) {
            last
        } else {
            // A width that does not divide the range leaves a short final
            // regular bin.
            (((value - self.min) / self.width) as usize + 1).min(last - 1)
        };
        self.counts[idx] += 1;
        self.count += 1;
    }

    /// Total number of values inserted.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Iterate the bins in order as `(lower, upper, count)`.
    pub fn bins(&self) -> Bins<'_> {
        Bins {
            histo: self,
            counts: self.counts.iter().enumerate(),
        }
    }

    fn edges(&self, idx: usize) -> (Bound, Bound) {
        let last = self.counts.len() - 1;
        if idx == 0 {
            (Bound::NegInf, Bound::Finite(self.min))
        } else if idx == last {
            (Bound::Finite(self.max), Bound::PosInf)
        } else {
            let lower = self.min + (idx - 1) as f64 * self.width;
            let upper = if idx == last - 1 {
                self.max
            } else {
                self.min + idx as f64 * self.width
            };
            (Bound::Finite(lower), Bound::Finite(upper))
        }
    }
}

/// Iterator over the bins of a `Histogram`.
#[derive(Debug)]
pub struct Bins<'a> {
    histo: &'a Histogram,
    counts: std::iter::Enumerate<slice::Iter<'a, u64>>,
}

impl<'a> Iterator for Bins<'a> {
    type Item = (Bound, Bound, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, count) = self.counts.next()?;
        let (lower, upper) = self.histo.edges(idx);
        Some((lower, upper, *count))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};

    fn config(min: f64, max: f64, width: f64) -> HistogramConfig {
        HistogramConfig {
            prefix: "t.".to_string(),
            min,
            max,
            width,
        }
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(Histogram::new(&config(10.0, 10.0, 1.0)).is_err());
        assert!(Histogram::new(&config(10.0, 0.0, 1.0)).is_err());
        assert!(Histogram::new(&config(0.0, 10.0, 0.0)).is_err());
        assert!(Histogram::new(&config(0.0, 10.0, -1.0)).is_err());
        assert!(Histogram::new(&config(0.0, 10.0, 20.0)).is_err());
        assert!(Histogram::new(&config(f64::NEG_INFINITY, 10.0, 1.0)).is_err());
        assert!(Histogram::new(&config(0.0, 10.0, f64::NAN)).is_err());
    }

    #[test]
    fn bin_count_includes_tails() {
        assert_eq!(config(0.0, 200.0, 10.0).num_bins(), 22);
        assert_eq!(config(0.0, 10.0, 3.0).num_bins(), 5);
    }

    #[test]
    fn edges_split_at_width() {
        let mut h = Histogram::new(&config(0.0, 200.0, 10.0)).unwrap();
        for v in [-5.0, 0.0, 9.99, 10.0, 199.0, 200.0, 1e9] {
            h.insert(v);
        }
        let bins: Vec<(Bound, Bound, u64)> = h.bins().collect();
        assert_eq!(bins.len(), 22);
        assert_eq!(bins[0], (Bound::NegInf, Bound::Finite(0.0), 1));
        assert_eq!(bins[1], (Bound::Finite(0.0), Bound::Finite(10.0), 2));
        assert_eq!(bins[2], (Bound::Finite(10.0), Bound::Finite(20.0), 1));
        assert_eq!(bins[20], (Bound::Finite(190.0), Bound::Finite(200.0), 1));
        assert_eq!(bins[21], (Bound::Finite(200.0), Bound::PosInf, 2));
        assert_eq!(h.count(), 7);
    }

    #[test]
    fn uneven_width_ends_at_max() {
        let mut h = Histogram::new(&config(0.0, 10.0, 3.0)).unwrap();
        h.insert(9.5);
        let bins: Vec<(Bound, Bound, u64)> = h.bins().collect();
        assert_eq!(bins[3], (Bound::Finite(6.0), Bound::Finite(10.0), 1));
    }

    #[test]
    fn nan_overflows() {
        let mut h = Histogram::new(&config(0.0, 10.0, 1.0)).unwrap();
        h.insert(f64::NAN);
        assert_eq!(h.bins().last().map(|b| b.2), Some(1));
    }

    #[test]
    fn bounds_order() {
        assert!(Bound::NegInf < Bound::Finite(f64::MIN));
        assert!(Bound::Finite(1.0) < Bound::Finite(2.0));
        assert!(Bound::Finite(f64::MAX) < Bound::PosInf);
    }

    #[test]
    fn insertion_count() {
        fn inner(pyld: Vec<f64>) -> TestResult {
            let mut h = Histogram::new(&config(-100.0, 100.0, 7.0)).unwrap();
            for v in &pyld {
                h.insert(*v);
            }
            let binned: u64 = h.bins().map(|b| b.2).sum();
            TestResult::from_bool(binned == pyld.len() as u64 && h.count() == binned)
        }
        QuickCheck::new().quickcheck(inner as fn(Vec<f64>) -> TestResult);
    }

    #[test]
    fn values_land_between_their_edges() {
        fn inner(v: i16) -> TestResult {
            let v = f64::from(v);
            let mut h = Histogram::new(&config(-1000.0, 1000.0, 50.0)).unwrap();
            h.insert(v);
            for (lower, upper, count) in h.bins() {
                if count == 1 {
                    let x = Bound::Finite(v);
                    return TestResult::from_bool(lower <= x && x < upper);
                }
            }
            TestResult::failed()
        }
        QuickCheck::new().quickcheck(inner as fn(i16) -> TestResult);
    }
}
