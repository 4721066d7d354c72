//! A binary min-heap with an explicit tie-breaking rule.
//!
//! [std::collections::BinaryHeap] is a max-heap whose sift order on equal keys is unspecified,
//! which makes the breadth-first emulation in [crate::solver::breadth_first] order-dependent on
//! library internals. This heap sifts deterministically: items only move up past strictly
//! greater parents, and on the way down the left child wins ties.
use crate::error::{Error, Result};
use core::slice;

#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    data: Vec<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> PriorityQueue<T> {
        PriorityQueue { data: Vec::new() }
    }
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue::default()
    }

    pub fn with_capacity(capacity: usize) -> PriorityQueue<T> {
        PriorityQueue {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Appends the item and sifts it up while it orders strictly before its parent.
    pub fn enqueue(&mut self, item: T) {
        let mut child = self.data.len();
        self.data.push(item);
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.data[child] >= self.data[parent] {
                break;
            }
            self.data.swap(child, parent);
            child = parent;
        }
    }

    /// Removes and returns the minimum item. The last item replaces the root and is sifted down,
    /// swapping with the smaller child; equal children resolve to the left one.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let front = self.data.swap_remove(0);
        let last = self.data.len();
        let mut parent = 0;
        loop {
            let mut child = parent * 2 + 1;
            if child >= last {
                break;
            }
            let right = child + 1;
            if right < last && self.data[right] < self.data[child] {
                child = right;
            }
            if self.data[parent] <= self.data[child] {
                break;
            }
            self.data.swap(parent, child);
            parent = child;
        }
        Ok(front)
    }

    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyQueue)
    }
}

impl<T> PriorityQueue<T> {
    /// Linear scan. Fine for the grid sizes this crate targets; not a constant-time membership
    /// test.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(item)
    }

    /// Linear scan with a predicate, for items whose identity is only part of their value.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().any(predicate)
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Items in heap order. Only the first element is guaranteed to be the minimum.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    #[test]
    fn empty_queue_errors() {
        let mut queue: PriorityQueue<i32> = PriorityQueue::new();
        assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
        assert_eq!(queue.peek(), Err(Error::EmptyQueue));
        assert!(queue.is_empty());
    }

    #[test]
    fn dequeues_in_ascending_order() {
        let mut queue = PriorityQueue::new();
        for v in [5, 3, 8, 1, 9, 2, 7] {
            queue.enqueue(v);
        }
        assert_eq!(queue.peek(), Ok(&1));
        let mut out = Vec::new();
        while let Ok(v) = queue.dequeue() {
            out.push(v);
        }
        assert_eq!(out, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn count_tracks_enqueues_and_dequeues() {
        let mut queue = PriorityQueue::new();
        for v in 0..10 {
            queue.enqueue(10 - v);
        }
        for _ in 0..4 {
            queue.dequeue().unwrap();
        }
        assert_eq!(queue.count(), 6);
        assert!(queue.contains(&10));
        assert!(!queue.contains(&1));
    }

    /// Orders by key only so equal keys expose where the heap places them.
    #[derive(Debug, Clone, Copy)]
    struct Keyed {
        key: u32,
        tag: char,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    /// Equal children resolve to the left one when sifting down.
    #[test]
    fn sift_down_prefers_left_child_on_tie() {
        let mut queue = PriorityQueue::new();
        // Heap layout after these enqueues: [0, 1(b), 1(c), 2(d)]
        queue.enqueue(Keyed { key: 0, tag: 'a' });
        queue.enqueue(Keyed { key: 1, tag: 'b' });
        queue.enqueue(Keyed { key: 1, tag: 'c' });
        queue.enqueue(Keyed { key: 2, tag: 'd' });
        assert_eq!(queue.dequeue().unwrap().tag, 'a');
        assert_eq!(queue.dequeue().unwrap().tag, 'b');
        assert_eq!(queue.dequeue().unwrap().tag, 'c');
        assert_eq!(queue.dequeue().unwrap().tag, 'd');
    }

    /// An item equal to its parent stays below it.
    #[test]
    fn sift_up_stops_on_equal_parent() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(Keyed { key: 1, tag: 'a' });
        queue.enqueue(Keyed { key: 1, tag: 'b' });
        assert_eq!(queue.as_slice()[0].tag, 'a');
        assert_eq!(queue.as_slice()[1].tag, 'b');
    }
}
