/*!
# Indexed Min-Heap

[`TimedMinHeap`] is an array-backed binary min-heap over `(Node, Time)` pairs
with a reverse index mapping every contained node to its current heap slot.
The reverse index makes [`TimedMinHeap::try_update`] an `O(log n)` operation
instead of a linear scan, which is what the dispatch computation
(see [`FastestArrival`](crate::algo::FastestArrival)) relies on.

## Invariants

After every mutating call:
- complete-binary-heap order: a parent's priority is at most its children's,
- the reverse index agrees with the heap array on every contained node.

Ties between equal priorities are broken by heap structure only; no ordering
beyond heap order is guaranteed.
*/

use crate::node::*;

/// One heap entry
#[derive(Debug, Copy, Clone)]
struct HeapItem {
    node: Node,
    priority: Time,
}

/// A binary min-heap over nodes keyed by [`Time`], supporting `O(log n)`
/// priority updates through a node → slot reverse index.
///
/// Unlike its inspiration, `update` re-heapifies in both directions, so
/// raising a priority is just as legal as lowering it.
pub struct TimedMinHeap {
    items: Vec<HeapItem>,
    positions: Vec<Option<Node>>,
}

impl TimedMinHeap {
    /// Creates an empty heap able to hold the nodes `0..n`.
    pub fn new(n: NumNodes) -> Self {
        Self {
            items: Vec::new(),
            positions: vec![None; n as usize],
        }
    }

    /// Returns the number of contained nodes
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns *true* if the heap contains no nodes
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns *true* if `node` is currently contained.
    /// ** Panics if `node >= n` **
    pub fn contains(&self, node: Node) -> bool {
        self.positions[node as usize].is_some()
    }

    /// Inserts `node` with the given priority.
    /// ** Panics if `node >= n`; `node` must not already be contained **
    pub fn push(&mut self, node: Node, priority: Time) {
        debug_assert!(!self.contains(node));

        let slot = self.items.len();
        self.items.push(HeapItem { node, priority });
        self.positions[node as usize] = Some(slot as Node);
        self.sift_up(slot);
    }

    /// Returns the node with minimum priority without removing it,
    /// or `None` if the heap is empty.
    pub fn peek(&self) -> Option<(Node, Time)> {
        self.items.first().map(|item| (item.node, item.priority))
    }

    /// Removes and returns the node with minimum priority,
    /// or `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<(Node, Time)> {
        let top = *self.items.first()?;

        let last = self.items.len() - 1;
        self.swap_slots(0, last);
        self.items.pop();
        self.positions[top.node as usize] = None;

        if !self.items.is_empty() {
            self.sift_down(0);
        }

        Some((top.node, top.priority))
    }

    /// Sets the priority of a contained node and restores heap order,
    /// sifting up or down as needed.
    /// Returns *false* if the node is not contained.
    /// ** Panics if `node >= n` **
    pub fn try_update(&mut self, node: Node, priority: Time) -> bool {
        let Some(slot) = self.positions[node as usize] else {
            return false;
        };
        let slot = slot as usize;

        let old = self.items[slot].priority;
        self.items[slot].priority = priority;

        if priority < old {
            self.sift_up(slot);
        } else if priority > old {
            self.sift_down(slot);
        }

        true
    }

    /// Sets the priority of a contained node and restores heap order.
    /// ** Panics if `node >= n` or the node is not contained **
    pub fn update(&mut self, node: Node, priority: Time) {
        assert!(self.try_update(node, priority));
    }

    /// Swaps two heap slots and keeps the reverse index in lock-step
    fn swap_slots(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
        self.positions[self.items[i].node as usize] = Some(i as Node);
        self.positions[self.items[j].node as usize] = Some(j as Node);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.items[slot].priority >= self.items[parent].priority {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < self.items.len()
                && self.items[left].priority < self.items[smallest].priority
            {
                smallest = left;
            }
            if right < self.items.len()
                && self.items[right].priority < self.items[smallest].priority
            {
                smallest = right;
            }

            if smallest == slot {
                break;
            }

            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn drain(heap: &mut TimedMinHeap) -> Vec<(Node, Time)> {
        let mut out = Vec::with_capacity(heap.len());
        while let Some(entry) = heap.pop() {
            out.push(entry);
        }
        out
    }

    #[test]
    fn empty() {
        let mut heap = TimedMinHeap::new(4);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert!(!heap.try_update(2, 7));
    }

    #[test]
    fn pops_in_priority_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 2, 10, 100, 1000] {
            let mut heap = TimedMinHeap::new(n);
            let mut priorities: Vec<Time> = (0..n).map(|_| rng.random_range(0..500)).collect();

            let mut insertion_order = (0..n).collect_vec();
            insertion_order.shuffle(rng);
            for u in insertion_order {
                heap.push(u, priorities[u as usize]);
            }

            assert_eq!(heap.len(), n as usize);

            let popped = drain(&mut heap);
            assert!(popped.windows(2).all(|w| w[0].1 <= w[1].1));
            assert!(popped.iter().all(|&(u, p)| priorities[u as usize] == p));

            priorities.sort_unstable();
            assert_eq!(popped.iter().map(|&(_, p)| p).collect_vec(), priorities);
        }
    }

    #[test]
    fn peek_agrees_with_pop() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        let mut heap = TimedMinHeap::new(100);
        for u in 0..100 {
            heap.push(u, rng.random_range(0..50));
        }

        while let Some(peeked) = heap.peek() {
            assert_eq!(heap.pop(), Some(peeked));
        }
    }

    #[test]
    fn decrease_key() {
        let mut heap = TimedMinHeap::new(4);
        heap.push(0, 10);
        heap.push(1, 20);
        heap.push(2, 30);

        heap.update(2, 5);
        assert_eq!(heap.peek(), Some((2, 5)));

        assert!(!heap.try_update(3, 1));

        assert_eq!(drain(&mut heap), vec![(2, 5), (0, 10), (1, 20)]);
    }

    #[test]
    fn increase_key_restores_order() {
        let mut heap = TimedMinHeap::new(4);
        heap.push(0, 1);
        heap.push(1, 2);
        heap.push(2, 3);

        heap.update(0, 50);

        assert_eq!(drain(&mut heap), vec![(1, 2), (2, 3), (0, 50)]);
    }

    #[test]
    fn random_updates_match_reference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [10 as NumNodes, 50, 200] {
            let mut heap = TimedMinHeap::new(n);
            let mut reference: Vec<Time> = (0..n).map(|_| rng.random_range(0..1000)).collect();

            for u in 0..n {
                heap.push(u, reference[u as usize]);
            }

            for _ in 0..(n * 3) {
                let u = rng.random_range(0..n);
                let p = rng.random_range(0..1000);
                reference[u as usize] = p;
                heap.update(u, p);
            }

            let mut expected = reference.clone();
            expected.sort_unstable();

            let popped = drain(&mut heap);
            assert_eq!(popped.iter().map(|&(_, p)| p).collect_vec(), expected);
            assert!(popped.iter().all(|&(u, p)| reference[u as usize] == p));
        }
    }
}
