use crate::collections::FxHashMap;

use std::hash::Hash;


/// Priority and heap position for one active key
#[derive(Debug, Clone)]
struct PrioPos<P> {
    prio: P,
    pos: usize,
}


/// Min-priority queue with O(log n) priority updates by key
/// https://algs4.cs.princeton.edu/24pq/
///
/// A binary heap array holds the keys, ordered by priority, while a side
/// table maps each active key to its priority and current heap position.
/// The side table is what makes `change` and `remove` logarithmic instead
/// of the linear re-scan a plain binary heap would need.
///
/// add / change / remove / remove_min run in O(log n);
/// get / min_key / min_prio run in O(1).
///
/// Ordering follows the natural `Ord` order of the priority type. Callers
/// that need a different order wrap the priority (e.g. `std::cmp::Reverse`).
/// Keys with equal priorities are extracted in an arbitrary order.
#[derive(Debug, Clone)]
pub struct IndexMinPq<K, P> {
    heap: Vec<K>,
    index: FxHashMap<K, PrioPos<P>>,
}

impl<K, P> Default for IndexMinPq<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> IndexMinPq<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord,
{

    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create an empty queue with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of active keys
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue has no active keys
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove all keys, keeping allocated capacity
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Insert a key with a priority
    /// Returns false without modifying anything if the key is already active
    pub fn add(&mut self, key: K, prio: P) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        let pos = self.heap.len();
        self.heap.push(key.clone());
        self.index.insert(key, PrioPos { prio, pos });
        self.sift_up(pos);
        true
    }

    /// Change the priority of an active key
    /// Returns the old priority, or None if the key is not active
    pub fn change(&mut self, key: &K, prio: P) -> Option<P> {
        let entry = self.index.get_mut(key)?;
        let old = std::mem::replace(&mut entry.prio, prio);
        let pos = entry.pos;

        // The new priority may be smaller or larger than the old one,
        // so the key may have to move in either direction
        self.sift_up(pos);
        self.sift_down(pos);
        Some(old)
    }

    /// Look up the priority of an active key
    pub fn get(&self, key: &K) -> Option<&P> {
        self.index.get(key).map(|pp| &pp.prio)
    }

    /// Check if a key is active
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove an arbitrary active key
    /// Returns its priority, or None if the key is not active
    pub fn remove(&mut self, key: &K) -> Option<P> {
        let PrioPos { prio, pos } = self.index.remove(key)?;

        // Move the last heap element into the vacated slot, then restore
        // heap order from there. If the removed key was the last element
        // the heap is already in order.
        let last = self.heap.pop().unwrap(); // key was active, heap is non-empty
        if pos < self.heap.len() {
            self.heap[pos] = last.clone();
            self.index.get_mut(&last).unwrap().pos = pos;
            self.sift_up(pos);
            self.sift_down(pos);
        }
        Some(prio)
    }

    /// Remove and return the key with the smallest priority
    pub fn remove_min(&mut self) -> Option<K> {
        if self.heap.is_empty() {
            return None;
        }

        let min = self.heap[0].clone();
        self.index.remove(&min);

        let last = self.heap.pop().unwrap();
        if !self.heap.is_empty() {
            self.heap[0] = last.clone();
            self.index.get_mut(&last).unwrap().pos = 0;
            self.sift_down(0);
        }
        Some(min)
    }

    /// Key with the smallest priority, without removing it
    pub fn min_key(&self) -> Option<&K> {
        self.heap.first()
    }

    /// Smallest priority, without removing it
    pub fn min_prio(&self) -> Option<&P> {
        self.heap.first().map(|k| &self.index[k].prio)
    }

    /// Move the key at heap position i up until its parent is no larger
    /// Instead of swapping pairwise, larger parents are shifted down and the
    /// key settles once in its final slot (insertion-sort style)
    fn sift_up(&mut self, mut i: usize) {
        let key = self.heap[i].clone();

        while i > 0 {
            let parent = (i - 1) / 2;
            if self.index[&self.heap[parent]].prio <= self.index[&key].prio {
                break;
            }
            // Shift the parent down one level
            let parent_key = self.heap[parent].clone();
            self.index.get_mut(&parent_key).unwrap().pos = i;
            self.heap[i] = parent_key;
            i = parent;
        }

        self.index.get_mut(&key).unwrap().pos = i;
        self.heap[i] = key;
    }

    /// Move the key at heap position i down until no child is smaller
    fn sift_down(&mut self, mut i: usize) {
        let key = self.heap[i].clone();

        // While a left child exists
        while 2 * i + 1 < self.heap.len() {
            let mut child = 2 * i + 1;

            // Pick the smaller of the two children
            if child + 1 < self.heap.len()
                && self.index[&self.heap[child + 1]].prio < self.index[&self.heap[child]].prio
            {
                child += 1;
            }

            if self.index[&key].prio <= self.index[&self.heap[child]].prio {
                break;
            }

            // Shift the smaller child up one level
            let child_key = self.heap[child].clone();
            self.index.get_mut(&child_key).unwrap().pos = i;
            self.heap[i] = child_key;
            i = child;
        }

        self.index.get_mut(&key).unwrap().pos = i;
        self.heap[i] = key;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // Check heap order and index consistency after a mutation
    fn assert_invariants<K, P>(pq: &IndexMinPq<K, P>)
    where
        K: Eq + Hash + Clone + std::fmt::Debug,
        P: Ord,
    {
        assert_eq!(pq.heap.len(), pq.index.len());

        for (i, key) in pq.heap.iter().enumerate() {
            // Recorded position matches the actual array index
            assert_eq!(pq.index[key].pos, i, "position index out of sync for {key:?}");

            // Every non-root key is at least as large as its parent
            if i > 0 {
                let parent = &pq.heap[(i - 1) / 2];
                assert!(
                    pq.index[parent].prio <= pq.index[key].prio,
                    "heap order violated at position {i}"
                );
            }
        }
    }

    #[test]
    fn test_add_and_remove_min_in_priority_order() {
        let mut pq = IndexMinPq::new();

        assert!(pq.add("abc", 5));
        assert!(!pq.add("abc", 7)); // duplicate key is ignored
        assert!(pq.add("def", 3));
        assert!(pq.add("ghi", 8));
        assert!(pq.add("jkl", 2));
        assert!(pq.add("xyz", 9));
        assert_eq!(pq.change(&"xyz", 1), Some(9));
        assert!(pq.add("uvw", 1));

        assert_eq!(pq.len(), 6);
        assert_eq!(pq.get(&"abc"), Some(&5)); // unchanged by the duplicate add
        assert_invariants(&pq);

        // Drain and verify non-decreasing priority order
        let mut drained = Vec::new();
        while let Some(min) = pq.min_prio().copied() {
            drained.push(min);
            pq.remove_min();
            assert_invariants(&pq);
        }
        assert_eq!(drained, vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_with_capacity_behaves_like_new() {
        let mut pq = IndexMinPq::with_capacity(4);
        assert!(pq.is_empty());

        // Growing past the initial capacity is transparent
        for key in 0..16u32 {
            assert!(pq.add(key, 100 - key));
        }
        assert_eq!(pq.len(), 16);
        assert_invariants(&pq);
        assert_eq!(pq.remove_min(), Some(15));
    }

    #[test]
    fn test_change_reorders_keys() {
        let mut pq = IndexMinPq::new();
        pq.add("a", 5);
        pq.add("b", 3);

        // "a" jumps ahead of "b"
        assert_eq!(pq.change(&"a", 1), Some(5));
        assert_invariants(&pq);

        assert_eq!(pq.remove_min(), Some("a"));
        assert_eq!(pq.remove_min(), Some("b"));
        assert_eq!(pq.remove_min(), None);
    }

    #[test]
    fn test_change_missing_key() {
        let mut pq: IndexMinPq<&str, u32> = IndexMinPq::new();
        pq.add("a", 1);
        assert_eq!(pq.change(&"b", 2), None);
        assert_eq!(pq.len(), 1);
    }

    #[test]
    fn test_remove_arbitrary_key() {
        let mut pq = IndexMinPq::new();
        pq.add("a", 4);
        pq.add("b", 2);
        pq.add("c", 7);
        pq.add("d", 1);

        assert_eq!(pq.remove(&"b"), Some(2));
        assert_invariants(&pq);
        assert!(!pq.contains(&"b"));

        // Removing a key that was never added does not change the queue
        assert_eq!(pq.remove(&"zzz"), None);
        assert_eq!(pq.len(), 3);

        assert_eq!(pq.remove_min(), Some("d"));
        assert_eq!(pq.remove_min(), Some("a"));
        assert_eq!(pq.remove_min(), Some("c"));
    }

    #[test]
    fn test_remove_last_element_slot() {
        let mut pq = IndexMinPq::new();
        pq.add("a", 1);
        pq.add("b", 2);
        pq.add("c", 3);

        // "c" sits in the last heap slot, no re-sift happens
        assert_eq!(pq.remove(&"c"), Some(3));
        assert_invariants(&pq);
        assert_eq!(pq.len(), 2);
    }

    #[test]
    fn test_peeks_on_empty_queue() {
        let mut pq: IndexMinPq<u32, u32> = IndexMinPq::new();
        assert_eq!(pq.min_key(), None);
        assert_eq!(pq.min_prio(), None);
        assert_eq!(pq.remove_min(), None);
        assert!(pq.is_empty());
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut pq = IndexMinPq::new();
        pq.add(10u32, 50u32);
        pq.add(20, 30);

        assert_eq!(pq.min_key(), Some(&20));
        assert_eq!(pq.min_prio(), Some(&30));
        assert_eq!(pq.len(), 2);
        assert_invariants(&pq);
    }

    #[test]
    fn test_clear_resets_queue() {
        let mut pq = IndexMinPq::new();
        pq.add(1u32, 1u32);
        pq.add(2, 2);
        pq.clear();

        assert!(pq.is_empty());
        assert_eq!(pq.get(&1), None);
        assert!(pq.add(1, 5)); // keys are re-addable after clear
    }

    #[test]
    fn test_randomized_operations_hold_invariants() {
        let mut rng = rand::rng();
        let mut pq: IndexMinPq<u32, u32> = IndexMinPq::new();

        for _ in 0..2000 {
            let key = rng.random_range(0..64);
            match rng.random_range(0..4) {
                0 => {
                    pq.add(key, rng.random_range(0..1000));
                }
                1 => {
                    pq.change(&key, rng.random_range(0..1000));
                }
                2 => {
                    pq.remove(&key);
                }
                _ => {
                    pq.remove_min();
                }
            }
            assert_invariants(&pq);
        }
    }

    #[test]
    fn test_drain_matches_sorted_priorities() {
        let mut rng = rand::rng();
        let mut pq: IndexMinPq<u32, u32> = IndexMinPq::new();
        let mut expected = Vec::new();

        for key in 0..200u32 {
            let prio = rng.random_range(0..10_000);
            pq.add(key, prio);
            expected.push(prio);
        }
        expected.sort_unstable();

        // remove_min yields priorities in non-decreasing order
        let mut drained = Vec::new();
        while let Some(prio) = pq.min_prio().copied() {
            drained.push(prio);
            pq.remove_min();
        }
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_reverse_order_via_wrapper() {
        use std::cmp::Reverse;

        let mut pq = IndexMinPq::new();
        pq.add("low", Reverse(1));
        pq.add("high", Reverse(9));

        // Reverse turns the min-queue into a max-queue
        assert_eq!(pq.remove_min(), Some("high"));
        assert_eq!(pq.remove_min(), Some("low"));
    }
}
