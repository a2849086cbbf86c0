use std::ops::{Index, IndexMut};

use crate::cm::sample::{Sample, SampleId};

/// A sorted doubly linked list of samples kept in an index arena.
///
/// Removed slots are recycled through a free list, so a `SampleId` stays
/// valid exactly as long as its sample is linked.
#[derive(Debug, Clone, Default)]
pub struct SampleList {
    slots: Vec<Option<Sample>>,
    free: Vec<SampleId>,
    head: Option<SampleId>,
    tail: Option<SampleId>,
    len: usize,
}

impl SampleList {
    pub fn new() -> SampleList {
        SampleList::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<SampleId> {
        self.head
    }

    pub fn tail(&self) -> Option<SampleId> {
        self.tail
    }

    pub fn next(&self, id: SampleId) -> Option<SampleId> {
        self[id].next
    }

    pub fn prev(&self, id: SampleId) -> Option<SampleId> {
        self[id].prev
    }

    fn alloc(&mut self, sample: Sample) -> SampleId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(sample);
                id
            }
            None => {
                self.slots.push(Some(sample));
                self.slots.len() - 1
            }
        }
    }

    /// Link a new sample after the tail.
    pub fn push_back(&mut self, value: f64, width: u64, delta: u64) -> SampleId {
        let mut sample = Sample::new(value, width, delta);
        sample.prev = self.tail;
        let id = self.alloc(sample);
        match self.tail {
            Some(tail) => self[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Link a new sample immediately before `at`.
    pub fn insert_before(&mut self, at: SampleId, value: f64, width: u64, delta: u64) -> SampleId {
        let mut sample = Sample::new(value, width, delta);
        let prev = self[at].prev;
        sample.prev = prev;
        sample.next = Some(at);
        let id = self.alloc(sample);
        match prev {
            Some(prev) => self[prev].next = Some(id),
            None => self.head = Some(id),
        }
        self[at].prev = Some(id);
        id
    }

    /// Unlink `id` and hand its sample back.
    pub fn remove(&mut self, id: SampleId) -> Sample {
        let sample = match self.slots[id].take() {
            Some(sample) => sample,
            None => panic!("sample {} is not linked", id),
        };
        match sample.prev {
            Some(prev) => self[prev].next = sample.next,
            None => self.head = sample.next,
        }
        match sample.next {
            Some(next) => self[next].prev = sample.prev,
            None => self.tail = sample.prev,
        }
        self.free.push(id);
        self.len -= 1;
        sample
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cur: self.head,
        }
    }
}

impl Index<SampleId> for SampleList {
    type Output = Sample;

    fn index(&self, id: SampleId) -> &Sample {
        match self.slots[id] {
            Some(ref sample) => sample,
            None => panic!("sample {} is not linked", id),
        }
    }
}

impl IndexMut<SampleId> for SampleList {
    fn index_mut(&mut self, id: SampleId) -> &mut Sample {
        match self.slots[id] {
            Some(ref mut sample) => sample,
            None => panic!("sample {} is not linked", id),
        }
    }
}

/// Head-to-tail iterator over a `SampleList`.
#[derive(Debug)]
pub struct Iter<'a> {
    list: &'a SampleList,
    cur: Option<SampleId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Sample;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let sample = &self.list[id];
        self.cur = sample.next;
        Some(sample)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn values(list: &SampleList) -> Vec<f64> {
        list.iter().map(|s| s.value).collect()
    }

    #[test]
    fn push_and_insert_keep_order() {
        let mut list = SampleList::new();
        let b = list.push_back(2.0, 1, 0);
        list.push_back(4.0, 1, 0);
        list.insert_before(b, 1.0, 1, 0);
        let d = list.tail().unwrap();
        list.insert_before(d, 3.0, 1, 0);

        assert_eq!(values(&list), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(list.len(), 4);
        assert_eq!(list[list.head().unwrap()].value, 1.0);
        assert_eq!(list[list.tail().unwrap()].value, 4.0);
    }

    #[test]
    fn remove_relinks_neighbours() {
        let mut list = SampleList::new();
        let a = list.push_back(1.0, 1, 0);
        let b = list.push_back(2.0, 1, 0);
        let c = list.push_back(3.0, 1, 0);

        assert_eq!(list.remove(b).value, 2.0);
        assert_eq!(list.next(a), Some(c));
        assert_eq!(list.prev(c), Some(a));

        list.remove(a);
        assert_eq!(list.head(), Some(c));
        list.remove(c);
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn slots_are_recycled() {
        let mut list = SampleList::new();
        let a = list.push_back(1.0, 1, 0);
        list.push_back(2.0, 1, 0);
        list.remove(a);
        let again = list.push_back(3.0, 1, 0);
        assert_eq!(a, again);
        assert_eq!(values(&list), vec![2.0, 3.0]);
        assert_eq!(list.slots.len(), 2);
    }

    #[test]
    #[should_panic]
    fn removed_ids_are_dead() {
        let mut list = SampleList::new();
        let a = list.push_back(1.0, 1, 0);
        list.remove(a);
        let _ = &list[a];
    }
}
