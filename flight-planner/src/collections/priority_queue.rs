//! Binary min-heap keyed by an ordered priority.
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `is_empty` | O(1)       |
//!
//! Elements with equal priority come out in no particular order.

/// A min-heap of `(priority, payload)` pairs.
///
/// # Examples
///
/// ```
/// use flight_planner::collections::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.push(3, "three");
/// queue.push(1, "one");
/// queue.push(2, "two");
///
/// assert_eq!(queue.pop(), Some((1, "one")));
/// assert_eq!(queue.pop(), Some((2, "two")));
/// assert_eq!(queue.pop(), Some((3, "three")));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<P: Ord, T> {
    data: Vec<(P, T)>,
}

impl<P: Ord, T> PriorityQueue<P, T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Insert `payload` with the given priority.
    pub fn push(&mut self, priority: P, payload: T) {
        self.data.push((priority, payload));
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the element with the smallest priority.
    ///
    /// Returns `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<(P, T)> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        min
    }

    /// Look at the element with the smallest priority without removing it.
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|(p, t)| (p, t))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].0 < self.data[parent].0 {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            // Promote the smaller child
            let right = left + 1;
            let child = if right < len && self.data[right].0 < self.data[left].0 {
                right
            } else {
                left
            };

            if self.data[index].0 <= self.data[child].0 {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<P: Ord, T> Default for PriorityQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Fare, HopsThenFare};
    use proptest::prelude::*;

    proptest! {
        /// Popping to empty yields a non-decreasing sequence.
        #[test]
        fn pops_non_decreasing(priorities in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut queue = PriorityQueue::new();
            for (i, p) in priorities.iter().enumerate() {
                queue.push(*p, i);
            }

            let mut popped = Vec::new();
            while let Some((p, _)) = queue.pop() {
                popped.push(p);
            }

            let mut expected = priorities.clone();
            expected.sort();
            prop_assert_eq!(popped, expected);
        }

        /// Lexicographic tuple priorities also pop in order.
        #[test]
        fn tuple_pops_non_decreasing(
            entries in prop::collection::vec((0usize..6, 0u32..1000), 0..200)
        ) {
            let mut queue = PriorityQueue::new();
            for (hops, cents) in &entries {
                let score = HopsThenFare::new(*hops, Fare::new(f64::from(*cents)).unwrap());
                queue.push(score, ());
            }

            let mut last: Option<HopsThenFare> = None;
            let mut count = 0;
            while let Some((score, ())) = queue.pop() {
                if let Some(prev) = last {
                    prop_assert!(prev <= score);
                }
                last = Some(score);
                count += 1;
            }
            prop_assert_eq!(count, entries.len());
        }
    }
}
