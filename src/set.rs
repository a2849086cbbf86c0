//! Distinct-count sets.
//!
//! Small sets are counted exactly by remembering key hashes. Once
//! `SET_MAX_EXACT` distinct hashes have been seen the set switches to a
//! HyperLogLog for good.

use tracing::debug;

use crate::error::Result;
use crate::hll::{self, Hll};

/// Distinct hashes held before switching to a HyperLogLog.
pub const SET_MAX_EXACT: usize = 64;

#[derive(Clone, Debug)]
enum Store {
    Exact(Vec<u64>),
    Approx(Hll),
}

/// A set that counts its distinct members.
///
/// # Examples
/// ```
/// use statsketch::set::Set;
///
/// let mut s = Set::new(12).unwrap();
/// s.add(b"alice");
/// s.add(b"bob");
/// s.add(b"alice");
/// assert_eq!(s.size(), 2);
/// assert!(s.is_exact());
/// ```
#[derive(Clone, Debug)]
pub struct Set {
    precision: u8,
    store: Store,
}

impl Set {
    /// Create an empty set that upgrades to an HLL of `precision`.
    ///
    /// `precision` is validated now so the upgrade cannot fail later.
    pub fn new(precision: u8) -> Result<Set> {
        Hll::new(precision)?;
        Ok(Set {
            precision,
            store: Store::Exact(Vec::with_capacity(SET_MAX_EXACT)),
        })
    }

    /// Add a member.
    pub fn add(&mut self, key: &[u8]) {
        let hash = hll::hash_key(key);
        let sketch = match self.store {
            Store::Exact(ref mut hashes) => {
                if hashes.contains(&hash) {
                    return;
                }
                if hashes.len() < SET_MAX_EXACT {
                    hashes.push(hash);
                    return;
                }

                let mut sketch = Hll::with_precision(self.precision);
                for h in hashes.iter() {
                    sketch.add_hash(*h);
                }
                sketch.add_hash(hash);
                sketch
            }
            Store::Approx(ref mut sketch) => {
                sketch.add_hash(hash);
                return;
            }
        };
        debug!(precision = self.precision, "set converted to hyperloglog");
        self.store = Store::Approx(sketch);
    }

    /// Number of distinct members: exact while small, estimated after.
    pub fn size(&self) -> u64 {
        match self.store {
            Store::Exact(ref hashes) => hashes.len() as u64,
            Store::Approx(ref sketch) => sketch.size().ceil() as u64,
        }
    }

    /// True while the set still counts exactly.
    pub fn is_exact(&self) -> bool {
        matches!(self.store, Store::Exact(_))
    }

    /// The precision used once the set is approximate.
    pub fn precision(&self) -> u8 {
        self.precision
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn keys(n: usize) -> Vec<Vec<u8>> {
        (0..n).map(|i| format!("member{}", i).into_bytes()).collect()
    }

    #[test]
    fn rejects_bad_precision() {
        assert!(Set::new(3).is_err());
        assert!(Set::new(19).is_err());
    }

    #[test]
    fn exact_up_to_the_limit() {
        let mut s = Set::new(12).unwrap();
        assert_eq!(s.size(), 0);
        for (i, key) in keys(SET_MAX_EXACT).iter().enumerate() {
            s.add(key);
            assert_eq!(s.size(), i as u64 + 1);
        }
        assert!(s.is_exact());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut s = Set::new(12).unwrap();
        for _ in 0..3 {
            for key in keys(10) {
                s.add(&key);
            }
        }
        assert_eq!(s.size(), 10);
    }

    #[test]
    fn converts_past_the_limit() {
        let mut s = Set::new(12).unwrap();
        for key in keys(SET_MAX_EXACT + 1) {
            s.add(&key);
        }
        assert!(!s.is_exact());
        let size = s.size();
        assert!((60..=70).contains(&size), "size {}", size);
    }
}
