//! HyperLogLog cardinality estimation with the small-range corrections of
//! Heule, Nunkesser and Hall's "HyperLogLog in Practice".
//!
//! A sketch of precision `p` keeps `2^p` six-bit registers. Its standard
//! error is roughly `1.04 / sqrt(2^p)`; `precision_for_error` inverts that.
//! Raw estimates below `5 * 2^p` are corrected with an empirically measured
//! bias, and linear counting takes over while the estimate sits below a
//! per-precision switch threshold.
//!
//! # Examples
//! ```
//! use statsketch::hll::Hll;
//!
//! let mut hll = Hll::new(10).unwrap();
//! for i in 0..100 {
//!     hll.add(format!("user-{}", i).as_bytes());
//! }
//! let size = hll.size();
//! assert!(size > 90.0 && size < 110.0);
//! ```

use murmur3::murmur3_x64_128;

use crate::error::{Error, Result};

mod bias;
mod registers;

use self::registers::Registers;

/// Smallest accepted precision.
pub const MIN_PRECISION: u8 = 4;
/// Largest accepted precision.
pub const MAX_PRECISION: u8 = 18;

/// A HyperLogLog sketch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hll {
    precision: u8,
    registers: Registers,
}

/// Hash a key the way `Hll::add` does.
///
/// This is the second 64-bit word of MurmurHash3 x64/128 with seed 0.
pub fn hash_key(key: &[u8]) -> u64 {
    let mut reader = key;
    match murmur3_x64_128(&mut reader, 0) {
        Ok(hash) => (hash >> 64) as u64,
        Err(_) => unreachable!("reading from a byte slice cannot fail"),
    }
}

/// Return the precision whose standard error is at most `error`.
///
/// # Examples
/// ```
/// use statsketch::hll::precision_for_error;
///
/// assert_eq!(precision_for_error(0.02).unwrap(), 12);
/// assert_eq!(precision_for_error(0.01).unwrap(), 14);
/// assert!(precision_for_error(1.0).is_err());
/// ```
pub fn precision_for_error(error: f64) -> Result<u8> {
    if !(error > 0.0 && error < 1.0) {
        return Err(Error::invalid(
            "error",
            format!("{} is not in (0, 1)", error),
        ));
    }
    let bits = (1.04 / error).powi(2).log2().ceil();
    if bits > f64::from(u8::MAX) {
        return Err(Error::invalid(
            "error",
            format!("{} needs more than {} bits of precision", error, u8::MAX),
        ));
    }
    Ok(bits as u8)
}

fn alpha(precision: u8, m: f64) -> f64 {
    match precision {
        4 => 0.673,
        5 => 0.697,
        6 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / m),
    }
}

impl Hll {
    /// Create an empty sketch with `2^precision` registers.
    ///
    /// `precision` must lie in `[MIN_PRECISION, MAX_PRECISION]`.
    pub fn new(precision: u8) -> Result<Hll> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(Error::invalid(
                "precision",
                format!(
                    "{} is not in [{}, {}]",
                    precision, MIN_PRECISION, MAX_PRECISION
                ),
            ));
        }
        Ok(Hll::with_precision(precision))
    }

    /// Callers guarantee `precision` is in range.
    pub(crate) fn with_precision(precision: u8) -> Hll {
        Hll {
            precision,
            registers: Registers::new(1 << precision),
        }
    }

    /// The precision this sketch was built with.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// The number of registers, `2^precision`.
    pub fn num_registers(&self) -> usize {
        self.registers.len()
    }

    /// Hash `key` and add it.
    pub fn add(&mut self, key: &[u8]) {
        self.add_hash(hash_key(key));
    }

    /// Add a pre-computed 64-bit hash.
    ///
    /// The top `precision` bits pick the register. The register keeps the
    /// largest rank seen, where rank is the position of the first set bit in
    /// what remains.
    pub fn add_hash(&mut self, hash: u64) {
        let p = u32::from(self.precision);
        let idx = (hash >> (64 - p)) as usize;
        // The sentinel bit caps the rank at 64 - p + 1.
        let w = (hash << p) | (1 << (p - 1));
        let rank = (w.leading_zeros() + 1) as u8;
        if rank > self.registers.get(idx) {
            self.registers.set(idx, rank);
        }
    }

    /// Fold `other` into this sketch, so it estimates the union of both
    /// streams. Both sketches must share a precision.
    pub fn merge(&mut self, other: &Hll) -> Result<()> {
        if self.precision != other.precision {
            return Err(Error::invalid(
                "other",
                format!(
                    "precision {} does not match {}",
                    other.precision, self.precision
                ),
            ));
        }
        for (idx, rank) in other.registers.iter().enumerate() {
            if rank > self.registers.get(idx) {
                self.registers.set(idx, rank);
            }
        }
        Ok(())
    }

    /// Estimate the number of distinct items added.
    pub fn size(&self) -> f64 {
        let m = self.num_registers() as f64;
        let mut inv_sum = 0.0;
        let mut zeros = 0usize;
        for rank in self.registers.iter() {
            inv_sum += 1.0 / (1u64 << rank) as f64;
            if rank == 0 {
                zeros += 1;
            }
        }

        let raw = alpha(self.precision, m) * m * m / inv_sum;
        let estimate = if raw <= 5.0 * m {
            raw - self.bias(raw)
        } else {
            raw
        };

        if zeros > 0 {
            let linear = m * (m / zeros as f64).ln();
            if linear <= bias::SWITCH_THRESHOLD[self.table()] {
                return linear;
            }
        }
        estimate
    }

    fn table(&self) -> usize {
        usize::from(self.precision - MIN_PRECISION)
    }

    /// Average the biases of the two measured estimates nearest `raw`.
    fn bias(&self, raw: f64) -> f64 {
        let estimates = bias::RAW_ESTIMATES[self.table()];
        let biases = bias::BIASES[self.table()];
        let idx = estimates.partition_point(|e| *e < raw);
        if idx == 0 {
            biases[0]
        } else if idx == estimates.len() {
            biases[estimates.len() - 1]
        } else {
            (biases[idx - 1] + biases[idx]) / 2.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};

    #[test]
    fn precision_bounds() {
        assert!(Hll::new(3).is_err());
        assert!(Hll::new(19).is_err());
        for p in MIN_PRECISION..=MAX_PRECISION {
            let hll = Hll::new(p).unwrap();
            assert_eq!(hll.precision(), p);
            assert_eq!(hll.num_registers(), 1 << p);
        }
    }

    #[test]
    fn empty_is_zero() {
        for p in MIN_PRECISION..=MAX_PRECISION {
            assert_eq!(Hll::new(p).unwrap().size(), 0.0);
        }
    }

    #[test]
    fn error_to_precision() {
        assert_eq!(precision_for_error(0.02).unwrap(), 12);
        assert_eq!(precision_for_error(0.01).unwrap(), 14);
        assert_eq!(precision_for_error(0.005).unwrap(), 16);
        assert!(precision_for_error(0.0).is_err());
        assert!(precision_for_error(1.0).is_err());
        assert!(precision_for_error(f64::NAN).is_err());
        assert!(precision_for_error(1e-60).is_err());
    }

    #[test]
    fn bias_tables_are_well_formed() {
        assert_eq!(bias::RAW_ESTIMATES.len(), 15);
        for (raw, biases) in bias::RAW_ESTIMATES.iter().zip(bias::BIASES.iter()) {
            assert_eq!(raw.len(), biases.len());
            assert!(raw.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn rank_is_leading_zeros_plus_one() {
        let mut hll = Hll::new(4).unwrap();
        // Register 0b1010, remaining bits 0001...
        hll.add_hash(0xA100_0000_0000_0000);
        assert_eq!(hll.registers.get(0xA), 4);
        // All-zero remainder hits the sentinel.
        hll.add_hash(0x3000_0000_0000_0000);
        assert_eq!(hll.registers.get(0x3), 61);
    }

    #[test]
    fn duplicates_do_not_count() {
        let mut hll = Hll::new(12).unwrap();
        for _ in 0..1000 {
            hll.add(b"same");
        }
        let size = hll.size();
        assert!(size > 0.5 && size < 1.5, "size {}", size);
    }

    #[test]
    fn merge_requires_matching_precision() {
        let mut a = Hll::new(10).unwrap();
        let b = Hll::new(11).unwrap();
        assert!(a.merge(&b).is_err());
    }

    #[test]
    fn merge_estimates_union() {
        let mut a = Hll::new(12).unwrap();
        let mut b = Hll::new(12).unwrap();
        for i in 0..2000 {
            a.add(format!("k{}", i).as_bytes());
        }
        for i in 1000..3000 {
            b.add(format!("k{}", i).as_bytes());
        }
        a.merge(&b).unwrap();
        let size = a.size();
        assert!((size - 3000.0).abs() < 3000.0 * 0.05, "size {}", size);
    }

    #[test]
    fn merge_is_commutative() {
        fn inner(lhs: Vec<u64>, rhs: Vec<u64>) -> TestResult {
            let mut a = Hll::new(8).unwrap();
            let mut b = Hll::new(8).unwrap();
            for h in &lhs {
                a.add_hash(*h);
            }
            for h in &rhs {
                b.add_hash(*h);
            }
            let mut ab = a.clone();
            ab.merge(&b).unwrap();
            let mut ba = b;
            ba.merge(&a).unwrap();
            TestResult::from_bool(ab == ba)
        }
        QuickCheck::new().quickcheck(inner as fn(Vec<u64>, Vec<u64>) -> TestResult);
    }

    quickcheck! {
        fn readding_is_idempotent(hashes: Vec<u64>) -> bool {
            let mut hll = Hll::new(6).unwrap();
            for h in &hashes {
                hll.add_hash(*h);
            }
            let once = hll.clone();
            for h in &hashes {
                hll.add_hash(*h);
            }
            hll == once && hll.size() == once.size()
        }
    }
}
