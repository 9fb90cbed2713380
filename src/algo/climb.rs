use std::collections::VecDeque;

use super::*;

/// Breadth-first traversal restricted by the security-climb rule.
///
/// Starting from a given computer, the iterator yields every computer reachable
/// through hops `u → v` with `security_level(v) <= security_level(u) + 1`,
/// in BFS order and starting with the start node itself. Every computer is
/// yielded at most once.
///
/// Note that the climb rule is *directional*: the closure of a start node is
/// generally not symmetric in an undirected network.
pub struct ClimbBfs<'a> {
    graph: &'a NetworkGraph,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a> ClimbBfs<'a> {
    /// Creates a new traversal starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a NetworkGraph, start: Node) -> Self {
        assert!((start as usize) < graph.len());

        let mut visited = NodeBitSet::new(graph.number_of_nodes());
        visited.set_bit(start);

        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }
}

impl Iterator for ClimbBfs<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        let clearance = self.graph.security_level_of(u);
        for v in self.graph.neighbor_ids_of(u) {
            // Permission is checked before the visited bit: a computer rejected
            // from here may still be entered later via a lower-security hop
            if may_climb(clearance, self.graph.security_level_of(v)) && !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.queue.len()),
        )
    }
}

/// Returns the security-constrained closure of `start` in ascending order,
/// including `start` itself.
/// ** Panics if `start >= n` **
pub fn reachable_from(graph: &NetworkGraph, start: Node) -> Vec<Node> {
    let mut closure: Vec<Node> = ClimbBfs::new(graph, start).collect();
    closure.sort_unstable();
    closure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Computer, Connection};
    use itertools::Itertools;

    fn line_network(levels: &[SecurityLevel]) -> NetworkGraph {
        let computers = levels
            .iter()
            .map(|&lvl| Computer::new(lvl, 1))
            .collect_vec();
        let connections = (1..levels.len())
            .map(|i| Connection::new(i as Node - 1, i as Node, 1))
            .collect_vec();
        NetworkGraph::from_network(&computers, &connections)
    }

    #[test]
    fn yields_start_first() {
        let graph = line_network(&[1, 1, 1]);
        assert_eq!(ClimbBfs::new(&graph, 1).next(), Some(1));
    }

    #[test]
    fn climbs_one_level_at_a_time() {
        // Levels 1 - 2 - 3 along a path: fully traversable upwards
        let graph = line_network(&[1, 2, 3]);
        assert_eq!(reachable_from(&graph, 0), vec![0, 1, 2]);

        // A jump of two levels blocks the walk
        let graph = line_network(&[1, 3, 4]);
        assert_eq!(reachable_from(&graph, 0), vec![0]);

        // Descending is unrestricted
        let graph = line_network(&[9, 4, 1]);
        assert_eq!(reachable_from(&graph, 0), vec![0, 1, 2]);
    }

    #[test]
    fn closure_is_directional() {
        let graph = line_network(&[1, 5]);
        assert_eq!(reachable_from(&graph, 0), vec![0]);
        assert_eq!(reachable_from(&graph, 1), vec![0, 1]);
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let computers = vec![Computer::new(1, 1); 6];
        let connections = [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]
            .map(|(a, b)| Connection::new(a, b, 1));
        let graph = NetworkGraph::from_network(&computers, &connections);

        let order = ClimbBfs::new(&graph, 1).collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert!((order[1] == 2 && order[2] == 0) || (order[1] == 0 && order[2] == 2));
        assert_eq!(order[5], 3);
    }

    #[test]
    fn disconnected_vertex() {
        let computers = vec![Computer::new(1, 1); 3];
        let connections = [Connection::new(0, 1, 1)];
        let graph = NetworkGraph::from_network(&computers, &connections);

        assert_eq!(reachable_from(&graph, 2), vec![2]);
    }
}
