/*!
# Min-Priority Queue

A monomorphic min-heap over `(i64 key, u32 value)` pairs (§4.7), backed by
`std::collections::BinaryHeap` (a max-heap) wrapped in `Reverse` to flip it.

This mirrors `original_source/src/ShortestPathCalculator.h`'s choice of
`std::priority_queue` over a decrease-key heap: there is no `decrease_key`
here either. A node can be pushed multiple times as its tentative distance
improves; `pop_min` simply returns whatever is cheapest, and it is up to the
caller (Dijkstra, §4.2) to recognize and skip entries that are stale because
a cheaper one for the same node was already fixed.
*/

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap of `(key, value)` pairs. Duplicate values are allowed; callers
/// that need "has this value already been finalized" semantics track that
/// themselves and treat a popped entry for an already-finalized value as stale.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<K: Ord + Copy, V: Copy> {
    heap: BinaryHeap<Reverse<(K, V)>>,
}

impl<K: Ord + Copy, V: Copy> MinPriorityQueue<K, V> {
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, key: K, value: V) {
        self.heap.push(Reverse((key, value)));
    }

    /// Removes and returns the `(key, value)` pair with the smallest key.
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K: Ord + Copy, V: Copy> Default for MinPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_key_order() {
        let mut q: MinPriorityQueue<i64, u32> = MinPriorityQueue::new();
        q.push(5, 0);
        q.push(1, 1);
        q.push(3, 2);
        assert_eq!(q.pop_min(), Some((1, 1)));
        assert_eq!(q.pop_min(), Some((3, 2)));
        assert_eq!(q.pop_min(), Some((5, 0)));
        assert!(q.pop_min().is_none());
    }

    #[test]
    fn allows_duplicate_values_and_stale_entries() {
        let mut q: MinPriorityQueue<i64, u32> = MinPriorityQueue::new();
        q.push(10, 7);
        q.push(2, 7); // improved distance for the same node
        assert_eq!(q.pop_min(), Some((2, 7)));
        // the stale entry is still there; caller is responsible for skipping it
        assert_eq!(q.pop_min(), Some((10, 7)));
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queue_reports_empty() {
        let q: MinPriorityQueue<i64, u32> = MinPriorityQueue::new();
        assert!(q.is_empty());
    }
}
