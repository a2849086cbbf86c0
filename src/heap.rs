//! A binary min-heap with page-granular storage.
//!
//! The CM sketch uses two of these as staging buffers, so the growth policy
//! matters for its amortised cost: capacity is counted in pages, doubles when
//! the heap is full and halves once fewer than a quarter of the pages are in
//! use. The heap never shrinks below the capacity it was created with.
//!
//! Ordering is given by a three-way comparator over keys. Keys that implement
//! `Ord` get their natural ordering from `Heap::new`.
//!
//! # Examples
//! ```
//! use statsketch::heap::Heap;
//!
//! let mut heap = Heap::new(0);
//! for k in [5, 1, 4, 2, 3] {
//!     heap.insert(k, k * 10);
//! }
//! assert_eq!(heap.peek_min(), Some((&1, &10)));
//!
//! let drained: Vec<i32> = std::iter::from_fn(|| heap.delete_min().map(|(k, _)| k)).collect();
//! assert_eq!(drained, vec![1, 2, 3, 4, 5]);
//! ```

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

/// Bytes in one storage page.
pub const PAGE_SIZE: usize = 4096;

/// Three-way key comparison. Returns `Less` when the first key sorts first.
pub type Comparator<K> = fn(&K, &K) -> Ordering;

/// A paged binary min-heap of `(key, value)` entries.
#[derive(Clone, Debug)]
pub struct Heap<K, V> {
    compare: Comparator<K>,
    entries: Vec<(K, V)>,
    minimum_pages: usize,
    allocated_pages: usize,
}

#[inline]
fn left_child(i: usize) -> usize {
    (i << 1) + 1
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) >> 1
}

impl<K: Ord, V> Heap<K, V> {
    /// Create a heap ordered by the keys' natural ordering.
    ///
    /// `initial_size` is rounded up to whole pages; zero means one page.
    pub fn new(initial_size: usize) -> Heap<K, V> {
        Heap::with_comparator(initial_size, K::cmp)
    }
}

impl<K, V> Heap<K, V> {
    /// Create a heap ordered by `compare`.
    pub fn with_comparator(initial_size: usize, compare: Comparator<K>) -> Heap<K, V> {
        let per_page = Self::entries_per_page();
        let initial_size = if initial_size == 0 {
            per_page
        } else {
            initial_size
        };
        let pages = initial_size.div_ceil(per_page);
        Heap {
            compare,
            entries: Vec::with_capacity(pages * per_page),
            minimum_pages: pages,
            allocated_pages: pages,
        }
    }

    /// Number of entries that fit in one page.
    pub fn entries_per_page() -> usize {
        (PAGE_SIZE / mem::size_of::<(K, V)>().max(1)).max(1)
    }

    /// Number of entries in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries the heap can hold before it must grow.
    pub fn capacity(&self) -> usize {
        self.allocated_pages * Self::entries_per_page()
    }

    /// Insert an entry, growing the storage by doubling when it is full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.entries.len() == self.capacity() {
            self.resize(self.allocated_pages * 2);
        }

        self.entries.push((key, value));
        let mut idx = self.entries.len() - 1;
        while idx > 0 {
            let up = parent(idx);
            if (self.compare)(&self.entries[idx].0, &self.entries[up].0) == Ordering::Less {
                self.entries.swap(idx, up);
                idx = up;
            } else {
                break;
            }
        }
    }

    /// The entry with the smallest key, if any.
    pub fn peek_min(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    /// Remove and return the entry with the smallest key.
    ///
    /// May release half of the pages when most of them sit unused.
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let last = self.entries.pop()?;
        let min = if self.entries.is_empty() {
            last
        } else {
            let min = mem::replace(&mut self.entries[0], last);
            self.sift_down(0);
            min
        };

        // Allow one spare page, but not two.
        let used_pages = self.entries.len().div_ceil(Self::entries_per_page());
        let half = self.allocated_pages / 2;
        if half > used_pages + 1 && half >= self.minimum_pages {
            self.resize(half);
        }
        Some(min)
    }

    /// Call `f` on every entry. The visiting order is unspecified.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in &self.entries {
            f(k, v);
        }
    }

    /// Drop every entry and return to the initial capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        if self.allocated_pages != self.minimum_pages {
            self.resize(self.minimum_pages);
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        let cmp = self.compare;
        loop {
            let left = left_child(idx);
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len
                && cmp(&self.entries[left].0, &self.entries[right].0) == Ordering::Greater
            {
                right
            } else {
                left
            };
            if cmp(&self.entries[idx].0, &self.entries[child].0) == Ordering::Greater {
                self.entries.swap(idx, child);
                idx = child;
            } else {
                break;
            }
        }
    }

    fn resize(&mut self, pages: usize) {
        let target = pages * Self::entries_per_page();
        trace!(
            from_pages = self.allocated_pages,
            to_pages = pages,
            entries = self.entries.len(),
            "resizing heap"
        );
        if target > self.entries.capacity() {
            self.entries.reserve_exact(target - self.entries.len());
        } else {
            self.entries.shrink_to(target);
        }
        self.allocated_pages = pages;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn drain<K, V>(heap: &mut Heap<K, V>) -> Vec<K> {
        let mut out = Vec::new();
        while let Some((k, _)) = heap.delete_min() {
            out.push(k);
        }
        out
    }

    #[test]
    fn init_is_empty() {
        let heap: Heap<i32, ()> = Heap::new(0);
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), Heap::<i32, ()>::entries_per_page());
    }

    #[test]
    fn insert_then_peek() {
        let mut heap = Heap::new(0);
        heap.insert(10, "ten");
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.peek_min(), Some((&10, &"ten")));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn insert_then_delete() {
        let mut heap = Heap::new(0);
        heap.insert(10, 100usize);
        assert_eq!(heap.delete_min(), Some((10, 100)));
        assert!(heap.is_empty());
    }

    #[test]
    fn delete_on_empty() {
        let mut heap: Heap<i32, i32> = Heap::new(0);
        assert_eq!(heap.peek_min(), None);
        assert_eq!(heap.delete_min(), None);
    }

    #[test]
    fn delete_order() {
        let mut heap = Heap::new(0);
        for i in (1..=10).rev() {
            heap.insert(i, ());
        }
        assert_eq!(heap.len(), 10);
        assert_eq!(heap.peek_min().map(|(k, _)| *k), Some(1));
        assert_eq!(drain(&mut heap), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn for_each_visits_all() {
        let mut heap = Heap::new(0);
        for i in 1..=10 {
            heap.insert(i, i * 2);
        }
        let mut seen = Vec::new();
        heap.for_each(|k, v| {
            assert_eq!(*v, k * 2);
            seen.push(*k);
        });
        seen.sort();
        assert_eq!(seen, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn random_permutation_comes_out_sorted() {
        let mut rng = StdRng::seed_from_u64(1972);
        let mut keys: Vec<u32> = (1..=10_000).collect();
        keys.shuffle(&mut rng);

        let mut heap = Heap::new(0);
        for k in keys {
            heap.insert(k, ());
        }
        assert_eq!(drain(&mut heap), (1..=10_000).collect::<Vec<_>>());
    }

    #[test]
    fn custom_comparator_reverses() {
        let mut heap: Heap<i32, ()> = Heap::with_comparator(0, |a, b| b.cmp(a));
        for i in 0..100 {
            heap.insert(i, ());
        }
        assert_eq!(drain(&mut heap), (0..100).rev().collect::<Vec<_>>());
    }

    #[test]
    fn float_keys_with_total_cmp() {
        let mut heap: Heap<f64, ()> = Heap::with_comparator(0, f64::total_cmp);
        for v in [3.5, -1.0, 2.25, 0.0, -7.5] {
            heap.insert(v, ());
        }
        assert_eq!(drain(&mut heap), vec![-7.5, -1.0, 0.0, 2.25, 3.5]);
    }

    #[test]
    fn grows_by_doubling_and_shrinks_back() {
        let per_page = Heap::<u64, u64>::entries_per_page();
        let mut heap = Heap::new(0);
        for i in 0..(per_page * 8) as u64 {
            heap.insert(i, i);
        }
        assert_eq!(heap.capacity(), per_page * 8);
        heap.insert(u64::MAX, 0);
        assert_eq!(heap.capacity(), per_page * 16);

        while heap.len() > 1 {
            heap.delete_min();
        }
        // Halving stops once half the pages would leave fewer than one spare.
        assert_eq!(heap.capacity(), per_page * 4);
    }

    #[test]
    fn never_shrinks_below_initial_size() {
        let per_page = Heap::<u64, u64>::entries_per_page();
        let mut heap = Heap::new(per_page * 4);
        assert_eq!(heap.capacity(), per_page * 4);
        for i in 0..(per_page * 20) as u64 {
            heap.insert(i, i);
        }
        while heap.delete_min().is_some() {}
        assert_eq!(heap.capacity(), per_page * 4);
    }

    #[test]
    fn clear_resets_capacity() {
        let per_page = Heap::<u32, ()>::entries_per_page();
        let mut heap = Heap::new(0);
        for i in 0..(per_page * 3) as u32 {
            heap.insert(i, ());
        }
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), per_page);
    }

    #[test]
    fn delete_min_is_nondecreasing() {
        fn inner(ops: Vec<(bool, i16)>) -> TestResult {
            let mut heap = Heap::new(0);
            let mut last: Option<i16> = None;
            for (is_insert, k) in ops {
                if is_insert {
                    heap.insert(k, ());
                    // A fresh insert may legitimately sort below what we
                    // already removed.
                    last = None;
                } else if let Some((k, _)) = heap.delete_min() {
                    if let Some(prev) = last {
                        if k < prev {
                            return TestResult::failed();
                        }
                    }
                    last = Some(k);
                }
            }
            TestResult::passed()
        }
        QuickCheck::new().quickcheck(inner as fn(Vec<(bool, i16)>) -> TestResult);
    }

    quickcheck! {
        fn drains_sorted(xs: Vec<i64>) -> bool {
            let mut heap = Heap::new(0);
            for x in &xs {
                heap.insert(*x, ());
            }
            let mut expected = xs.clone();
            expected.sort();
            drain(&mut heap) == expected
        }

        fn len_tracks_inserts(xs: Vec<u8>) -> bool {
            let mut heap = Heap::new(0);
            for x in &xs {
                heap.insert(*x, ());
            }
            heap.len() == xs.len()
        }
    }
}
