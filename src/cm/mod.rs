//! A biased quantile sketch after Cormode, Korn, Muthukrishnan and
//! Srivastava's "Effective Computation of Biased Quantiles over Data
//! Streams", in the targeted form that keeps error tight around a fixed set
//! of quantiles.
//!
//! Samples are kept in a sorted linked list. Rather than walking the whole
//! list on every insert, incoming values are staged in two min-heaps and
//! merged by a cursor that advances a few nodes per call. Values that land
//! behind the cursor wait for the next pass. A second cursor walks backward
//! merging adjacent samples whose combined rank uncertainty fits under the
//! error threshold. Both cursors advance `ceil(eps * len)` nodes per sample
//! so the per-sample work stays bounded.
//!
//! Staged values are invisible to `query` until they are merged. Call
//! `flush` before reading results.
//!
//! # Examples
//! ```
//! use statsketch::cm::CmSketch;
//!
//! let mut cm = CmSketch::new(0.01, &[0.5, 0.9, 0.99]).unwrap();
//! for v in [100.0, 200.0, 300.0] {
//!     cm.add_sample(v);
//! }
//! cm.flush();
//! assert_eq!(cm.query(0.5), Some(200.0));
//! assert_eq!(cm.min(), Some(100.0));
//! assert_eq!(cm.max(), Some(300.0));
//! ```

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

use crate::error::{Error, Result};
use crate::heap::Heap;

mod list;
mod sample;

use self::list::SampleList;
use self::sample::SampleId;

/// Approximate quantiles over a stream of `f64` in bounded memory.
#[derive(Clone, Debug)]
pub struct CmSketch {
    eps: f64,
    quantiles: Vec<f64>,

    samples: SampleList,
    num_values: u64,

    // Staged values not yet in `samples`. Values at or past the insert
    // cursor go to `ahead` and are merged during the current pass; smaller
    // values go to `behind`. The two swap roles when a pass ends.
    ahead: Heap<f64, ()>,
    behind: Heap<f64, ()>,

    // `None` means no pass is under way.
    insert_cursor: Option<SampleId>,

    compress_cursor: Option<SampleId>,
    // Sum of the widths of every sample before `compress_cursor`.
    compress_min_rank: u64,
}

impl CmSketch {
    /// Create a sketch with error `eps` targeted at `quantiles`.
    ///
    /// `eps` must lie strictly between 0 and 0.5 and every quantile strictly
    /// between 0 and 1. The quantile list may be given in any order but must
    /// not be empty.
    ///
    /// # Examples
    /// ```
    /// use statsketch::cm::CmSketch;
    ///
    /// assert!(CmSketch::new(0.01, &[0.99, 0.5]).is_ok());
    /// assert!(CmSketch::new(0.5, &[0.5]).is_err());
    /// assert!(CmSketch::new(0.01, &[]).is_err());
    /// assert!(CmSketch::new(0.01, &[1.0]).is_err());
    /// ```
    pub fn new(eps: f64, quantiles: &[f64]) -> Result<CmSketch> {
        if !(eps > 0.0 && eps < 0.5) {
            return Err(Error::invalid(
                "eps",
                format!("{} is not in (0, 0.5)", eps),
            ));
        }
        if quantiles.is_empty() {
            return Err(Error::invalid("quantiles", "at least one is required"));
        }
        if let Some(q) = quantiles.iter().find(|q| !(**q > 0.0 && **q < 1.0)) {
            return Err(Error::invalid(
                "quantiles",
                format!("{} is not in (0, 1)", q),
            ));
        }

        let mut quantiles = quantiles.to_vec();
        quantiles.sort_by(f64::total_cmp);

        Ok(CmSketch {
            eps,
            quantiles,
            samples: SampleList::new(),
            num_values: 0,
            ahead: Heap::with_comparator(0, f64::total_cmp),
            behind: Heap::with_comparator(0, f64::total_cmp),
            insert_cursor: None,
            compress_cursor: None,
            compress_min_rank: 0,
        })
    }

    /// Return the error bound this sketch was built with.
    pub fn error_bound(&self) -> f64 {
        self.eps
    }

    /// Return the targeted quantiles, sorted ascending.
    pub fn quantiles(&self) -> &[f64] {
        &self.quantiles
    }

    /// Number of samples in the list.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no value has reached the list.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of values represented by the list.
    ///
    /// Values still staged are not counted until merged, so this equals the
    /// number of calls to `add_sample` only after `flush`.
    pub fn count(&self) -> u64 {
        self.num_values
    }

    /// Number of values staged and waiting to be merged.
    pub fn buffered(&self) -> usize {
        self.ahead.len() + self.behind.len()
    }

    /// Smallest merged value.
    pub fn min(&self) -> Option<f64> {
        self.samples.head().map(|id| self.samples[id].value)
    }

    /// Largest merged value.
    pub fn max(&self) -> Option<f64> {
        self.samples.tail().map(|id| self.samples[id].value)
    }

    /// Iterate the samples in ascending order as `(value, width, delta)`.
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64, u64)> + '_ {
        self.samples.iter().map(|s| (s.value, s.width, s.delta))
    }

    /// Add a value to the sketch.
    ///
    /// The value is staged and a bounded amount of merging and compression
    /// work is done. NaN is accepted and sorts by IEEE total order.
    pub fn add_sample(&mut self, value: f64) {
        let behind = match self.insert_cursor {
            Some(cur) => value.total_cmp(&self.samples[cur].value) == Ordering::Less,
            None => false,
        };
        if behind {
            self.behind.insert(value, ());
        } else {
            self.ahead.insert(value, ());
        }

        self.insert_step();
        self.compress_step();
    }

    /// Merge every staged value into the list.
    pub fn flush(&mut self) {
        while !(self.ahead.is_empty() && self.behind.is_empty()) {
            if self.ahead.is_empty() {
                self.end_pass();
            }
            self.insert_step();
            self.compress_step();
        }
    }

    /// Query the sketch for the value at `quantile`.
    ///
    /// Only merged values are considered. Returns `None` when nothing has
    /// been merged yet.
    ///
    /// # Examples
    /// ```
    /// use statsketch::cm::CmSketch;
    ///
    /// let mut cm = CmSketch::new(0.01, &[0.5, 0.9]).unwrap();
    /// assert_eq!(cm.query(0.5), None);
    ///
    /// for v in 0..10 {
    ///     cm.add_sample(v as f64);
    /// }
    /// cm.flush();
    /// assert_eq!(cm.query(0.5), Some(4.0));
    /// ```
    pub fn query(&self, quantile: f64) -> Option<f64> {
        let head = self.samples.head()?;
        let rank = (quantile * self.num_values as f64).ceil();
        let window = rank + (self.threshold(rank) / 2.0).ceil();

        let mut answer = self.samples[head].value;
        let mut min_rank: u64 = 0;
        for sample in self.samples.iter() {
            let lower = min_rank as f64;
            // `lower + 1` is the rank of the first value the sample covers.
            if lower + (sample.width + sample.delta) as f64 > window || lower + 1.0 > rank {
                break;
            }
            answer = sample.value;
            min_rank += sample.width;
        }
        Some(answer)
    }

    /// The largest permitted `width + delta` for a sample at `rank`.
    fn threshold(&self, rank: f64) -> f64 {
        let n = self.num_values as f64;
        let eps = self.eps;
        self.quantiles
            .iter()
            .map(|&phi| {
                if rank >= phi * n {
                    2.0 * eps * rank / phi
                } else {
                    2.0 * eps * (n - rank) / (1.0 - phi)
                }
            })
            .fold(f64::INFINITY, f64::min)
    }

    fn steps(&self) -> usize {
        ((self.samples.len() as f64 * self.eps).ceil() as usize).max(1)
    }

    fn push_back(&mut self, value: f64) {
        self.samples.push_back(value, 1, 0);
        self.num_values += 1;
    }

    fn insert_before(&mut self, at: SampleId, value: f64, delta: u64) {
        self.samples.insert_before(at, value, 1, delta);
        self.num_values += 1;
        if let Some(cur) = self.compress_cursor {
            if self.at_or_before(at, cur) {
                self.compress_min_rank += 1;
            }
        }
    }

    /// True when `at` is `cur` or precedes it in the list.
    ///
    /// Only a run of values equal to `cur`'s needs walking.
    fn at_or_before(&self, at: SampleId, cur: SampleId) -> bool {
        let target = self.samples[cur].value;
        let mut node = Some(at);
        while let Some(id) = node {
            if id == cur {
                return true;
            }
            match self.samples[id].value.total_cmp(&target) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => node = self.samples.next(id),
            }
        }
        false
    }

    fn end_pass(&mut self) {
        trace!(
            ahead = self.ahead.len(),
            behind = self.behind.len(),
            samples = self.samples.len(),
            "swapping staging buffers"
        );
        mem::swap(&mut self.ahead, &mut self.behind);
        self.insert_cursor = None;
    }

    fn insert_step(&mut self) {
        let mut cur = match self.insert_cursor.or(self.samples.head()) {
            Some(cur) => cur,
            None => {
                if let Some((value, ())) = self.ahead.delete_min() {
                    self.push_back(value);
                }
                return;
            }
        };

        for _ in 0..self.steps() {
            let (value, delta, next) = {
                let node = &self.samples[cur];
                (node.value, node.width + node.delta - 1, node.next)
            };
            while let Some((&v, _)) = self.ahead.peek_min() {
                if v.total_cmp(&value) == Ordering::Greater {
                    break;
                }
                self.ahead.delete_min();
                self.insert_before(cur, v, delta);
            }

            match next {
                Some(next) => cur = next,
                None => {
                    while let Some((v, ())) = self.ahead.delete_min() {
                        self.push_back(v);
                    }
                    self.end_pass();
                    return;
                }
            }
        }
        self.insert_cursor = Some(cur);
    }

    fn compress_step(&mut self) {
        if self.samples.len() < 3 {
            return;
        }

        let (mut cur, mut min_rank) = match self.compress_cursor {
            Some(cur) => (cur, self.compress_min_rank),
            None => {
                let Some(tail) = self.samples.tail() else {
                    return;
                };
                let Some(cur) = self.samples.prev(tail) else {
                    return;
                };
                let min_rank = self.num_values - self.samples[tail].width - self.samples[cur].width;
                (cur, min_rank)
            }
        };

        for _ in 0..self.steps() {
            // The head and the tail are never merged away.
            let (prev, succ) = match (self.samples.prev(cur), self.samples.next(cur)) {
                (Some(prev), Some(succ)) => (prev, succ),
                _ => {
                    self.compress_cursor = None;
                    return;
                }
            };

            let width = self.samples[cur].width;
            let band = width + self.samples[succ].width + self.samples[succ].delta;
            if band as f64 <= self.threshold((min_rank + band) as f64) {
                self.samples[succ].width += width;
                self.samples.remove(cur);
                if self.insert_cursor == Some(cur) {
                    self.insert_cursor = Some(succ);
                }
            }

            min_rank = min_rank.saturating_sub(self.samples[prev].width);
            cur = prev;
        }

        self.compress_cursor = Some(cur);
        self.compress_min_rank = min_rank;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn fed(eps: f64, data: &[f64]) -> CmSketch {
        let mut cm = CmSketch::new(eps, &[0.5, 0.9, 0.99]).unwrap();
        for v in data {
            cm.add_sample(*v);
        }
        cm.flush();
        cm
    }

    // Samples are sorted, and the prefix sums of width account for every
    // merged value.
    fn invariant(cm: &CmSketch) -> bool {
        let mut last: Option<f64> = None;
        let mut total = 0;
        let mut len = 0;
        for (value, width, _) in cm.iter() {
            if width == 0 {
                return false;
            }
            if let Some(last) = last {
                if last.total_cmp(&value) == Ordering::Greater {
                    return false;
                }
            }
            last = Some(value);
            total += width;
            len += 1;
        }
        total == cm.count() && len == cm.len()
    }

    fn from_samples(samples: &[(f64, u64, u64)]) -> CmSketch {
        let mut cm = CmSketch::new(0.01, &[0.5, 0.9, 0.99]).unwrap();
        for &(value, width, delta) in samples {
            cm.samples.push_back(value, width, delta);
            cm.num_values += width;
        }
        cm
    }

    fn rank_before(cm: &CmSketch, cur: SampleId) -> u64 {
        let mut rank = 0;
        let mut node = cm.samples.head();
        while let Some(id) = node {
            if id == cur {
                break;
            }
            rank += cm.samples[id].width;
            node = cm.samples.next(id);
        }
        rank
    }

    #[test]
    fn rejects_bad_eps() {
        for eps in [0.0, -0.1, 0.5, 0.75, f64::NAN] {
            assert!(CmSketch::new(eps, &[0.5]).is_err(), "eps {}", eps);
        }
    }

    #[test]
    fn rejects_bad_quantiles() {
        assert!(CmSketch::new(0.01, &[]).is_err());
        assert!(CmSketch::new(0.01, &[0.0]).is_err());
        assert!(CmSketch::new(0.01, &[0.5, 1.0]).is_err());
        assert!(CmSketch::new(0.01, &[f64::NAN]).is_err());
    }

    #[test]
    fn quantiles_are_sorted() {
        let cm = CmSketch::new(0.01, &[0.99, 0.5, 0.9]).unwrap();
        assert_eq!(cm.quantiles(), &[0.5, 0.9, 0.99]);
        assert_eq!(cm.error_bound(), 0.01);
    }

    #[test]
    fn single_sample_is_visible_immediately() {
        let mut cm = CmSketch::new(0.01, &[0.5]).unwrap();
        cm.add_sample(100.0);
        assert_eq!(cm.query(0.5), Some(100.0));
        assert_eq!(cm.count(), 1);
        assert_eq!(cm.buffered(), 0);
    }

    #[test]
    fn out_of_order_values_wait_for_flush() {
        let mut cm = CmSketch::new(0.01, &[0.5, 0.9, 0.99]).unwrap();
        for v in [5.0, 3.0, 9.0, 1.0] {
            cm.add_sample(v);
        }
        assert_eq!(cm.buffered(), 1);
        assert_eq!(cm.count(), 3);

        cm.flush();
        assert_eq!(cm.buffered(), 0);
        assert_eq!(cm.count(), 4);
        assert_eq!(cm.min(), Some(1.0));
        assert_eq!(cm.max(), Some(9.0));
        assert_eq!(cm.query(0.5), Some(3.0));
    }

    #[test]
    fn query_window_rounds_up() {
        // Rank 2 is covered by the second sample only once the half
        // threshold is rounded up to a whole rank.
        let cm = from_samples(&[(1.0, 1, 0), (2.0, 1, 1), (3.0, 1, 0), (4.0, 1, 0)]);
        assert_eq!(cm.query(0.5), Some(2.0));
    }

    #[test]
    fn query_stops_before_samples_past_the_rank() {
        let cm = from_samples(&[(100.0, 1, 0), (200.0, 1, 0), (300.0, 1, 0)]);
        assert_eq!(cm.query(0.5), Some(200.0));
        assert_eq!(cm.query(0.1), Some(100.0));
        assert_eq!(cm.query(0.9), Some(300.0));
    }

    #[test]
    fn compress_rank_tracks_repeated_values() {
        let mut rng = StdRng::seed_from_u64(20);
        let mut cm = CmSketch::new(0.01, &[0.5, 0.9, 0.99]).unwrap();
        for _ in 0..50_000 {
            cm.add_sample(f64::from(rng.random_range(0..20u32)));
            if let Some(cur) = cm.compress_cursor {
                assert_eq!(cm.compress_min_rank, rank_before(&cm, cur));
            }
        }
    }

    quickcheck! {
        fn compress_rank_matches_prefix(data: Vec<u8>) -> bool {
            let mut cm = CmSketch::new(0.01, &[0.5, 0.9, 0.99]).unwrap();
            for v in data {
                cm.add_sample(f64::from(v % 4));
                if let Some(cur) = cm.compress_cursor {
                    if cm.compress_min_rank != rank_before(&cm, cur) {
                        return false;
                    }
                }
            }
            true
        }
    }

    #[test]
    fn compression_bounds_the_list() {
        let data: Vec<f64> = (0..10_000).map(|v| v as f64).collect();
        let cm = fed(0.01, &data);
        assert_eq!(cm.count(), 10_000);
        assert!(cm.len() < 500, "{} samples retained", cm.len());
        assert_eq!(cm.min(), Some(0.0));
        assert_eq!(cm.max(), Some(9999.0));
        assert!(invariant(&cm));
    }

    #[test]
    fn invariant_holds_after_flush() {
        fn inner(data: Vec<f64>) -> TestResult {
            let cm = fed(0.01, &data);
            if cm.count() != data.len() as u64 || cm.buffered() != 0 {
                return TestResult::failed();
            }
            TestResult::from_bool(invariant(&cm))
        }
        QuickCheck::new().quickcheck(inner as fn(Vec<f64>) -> TestResult);
    }

    #[test]
    fn extremes_survive_compression() {
        fn inner(data: Vec<i32>, eps: u8) -> TestResult {
            if data.is_empty() {
                return TestResult::discard();
            }
            let eps = (f64::from(eps) + 1.0) / 520.0;
            let values: Vec<f64> = data.iter().map(|v| f64::from(*v)).collect();
            let cm = fed(eps, &values);
            let lo = data.iter().min().map(|v| f64::from(*v));
            let hi = data.iter().max().map(|v| f64::from(*v));
            TestResult::from_bool(cm.min() == lo && cm.max() == hi)
        }
        QuickCheck::new().quickcheck(inner as fn(Vec<i32>, u8) -> TestResult);
    }

    quickcheck! {
        fn query_answers_a_seen_value(data: Vec<u16>, q: u8) -> TestResult {
            if data.is_empty() || q == 0 || q == 255 {
                return TestResult::discard();
            }
            let values: Vec<f64> = data.iter().map(|v| f64::from(*v)).collect();
            let cm = fed(0.01, &values);
            match cm.query(f64::from(q) / 255.0) {
                Some(v) => TestResult::from_bool(values.contains(&v)),
                None => TestResult::failed(),
            }
        }

        fn sorted_input_keeps_invariant(n: u8) -> bool {
            let values: Vec<f64> = (0..u32::from(n)).map(f64::from).collect();
            let cm = fed(0.01, &values);
            invariant(&cm) && cm.count() == u64::from(n)
        }
    }
}
