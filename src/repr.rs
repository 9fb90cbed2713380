/*!
# Graph Representation

[`NetworkGraph`] is an undirected, vertex-labelled, edge-weighted adjacency-list
graph. Every vertex owns a [`Computer`] record; every adjacency entry is a
[`Hop`] carrying the neighbor id and the transmission time of the link.

The graph is built fresh from the input arrays at the start of every algorithm
call and dropped at its end; nothing is shared or retained between calls.

## Invariants

- Adjacency lists are symmetric: `w` appears in `v`'s list iff `v` appears in
  `w`'s list, with identical transmission time.
- At most one edge per unordered pair; [`NetworkGraph::try_add_edge`] is
  idempotent and does not bump the edge count for an already adjacent pair.
- The edge counter equals the number of distinct unordered pairs present.
  In particular, removing a non-existent edge leaves it untouched.
*/

use itertools::Itertools;

use crate::{edge::*, network::*, node::*};

/// One adjacency entry: a reachable neighbor and the link's transmission time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Neighbor id
    pub node: Node,
    /// Transmission delay of the connecting link in seconds
    pub transmission_time: Time,
}

/// An undirected graph over computers with per-link transmission times.
#[derive(Clone)]
pub struct NetworkGraph {
    computers: Vec<Computer>,
    nbs: Vec<Vec<Hop>>,
    num_edges: NumEdges,
}

impl NetworkGraph {
    /// Creates a graph with `n` isolated vertices and zero edges.
    /// Vertex attributes default to the lowest clearance and a zero delay
    /// until [`NetworkGraph::set_vertex_info`] overwrites them.
    /// ** Panics if `n == 0` **
    pub fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            computers: vec![Computer::new(1, 0); n as usize],
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    /// Builds a fresh graph from the validated input arrays.
    pub fn from_network(computers: &[Computer], connections: &[Connection]) -> Self {
        let mut graph = Self::new(computers.len() as NumNodes);
        for (v, computer) in computers.iter().enumerate() {
            graph.set_vertex_info(v as Node, computer.security_level, computer.poodle_time);
        }
        for con in connections {
            graph.try_add_edge(con.computer_a, con.computer_b, con.transmission_time);
        }
        graph
    }

    /// Returns the number of vertices of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    /// Returns the number of vertices as usize
    pub fn len(&self) -> usize {
        self.nbs.len()
    }

    /// Returns *true* if the graph has no vertices. Always *false*, see [`NetworkGraph::new`].
    pub fn is_empty(&self) -> bool {
        self.nbs.is_empty()
    }

    /// Returns an iterator over V
    pub fn vertices(&self) -> impl Iterator<Item = Node> {
        0..self.number_of_nodes()
    }

    /// Returns the number of (undirected) edges of the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Overwrites the attributes of vertex `v`.
    /// ** Panics if `v >= n` **
    pub fn set_vertex_info(&mut self, v: Node, security_level: SecurityLevel, poodle_time: Time) {
        self.computers[v as usize] = Computer::new(security_level, poodle_time);
    }

    /// Returns the security clearance of vertex `v`.
    /// ** Panics if `v >= n` **
    pub fn security_level_of(&self, v: Node) -> SecurityLevel {
        self.computers[v as usize].security_level
    }

    /// Returns the processing delay of vertex `v`.
    /// ** Panics if `v >= n` **
    pub fn poodle_time_of(&self, v: Node) -> Time {
        self.computers[v as usize].poodle_time
    }

    /// Returns *true* if the edge `{u, v}` exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_valid(v);
        self.nbs[u as usize].iter().any(|hop| hop.node == v)
    }

    /// Adds the undirected edge `{u, v}` with the given transmission time if absent
    /// and returns *true* exactly if it was inserted. Inserting an existing pair is
    /// a no-op and leaves the edge count unchanged.
    /// ** Panics if `u >= n || v >= n` **
    pub fn try_add_edge(&mut self, u: Node, v: Node, transmission_time: Time) -> bool {
        debug_assert!(u != v);
        if self.has_edge(u, v) {
            return false;
        }

        self.nbs[u as usize].push(Hop {
            node: v,
            transmission_time,
        });
        self.nbs[v as usize].push(Hop {
            node: u,
            transmission_time,
        });
        self.num_edges += 1;

        true
    }

    /// Adds the undirected edge `{u, v}`.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    pub fn add_edge(&mut self, u: Node, v: Node, transmission_time: Time) {
        assert!(self.try_add_edge(u, v, transmission_time));
    }

    /// Removes the undirected edge `{u, v}` if present and returns *true* exactly
    /// if it was removed. The edge counter is only decremented on an actual removal.
    /// ** Panics if `u >= n || v >= n` **
    pub fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if let Some((pos, _)) = self.nbs[u as usize]
            .iter()
            .find_position(|hop| hop.node == v)
        {
            self.nbs[u as usize].swap_remove(pos);

            let (pos, _) = self.nbs[v as usize]
                .iter()
                .find_position(|hop| hop.node == u)
                .unwrap();
            self.nbs[v as usize].swap_remove(pos);

            self.num_edges -= 1;
            true
        } else {
            self.assert_valid(v);
            false
        }
    }

    /// Returns the number of neighbors of `u`.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }

    /// Returns an iterator over the hops leaving `u`.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Hop> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    /// Returns an iterator over the neighbor ids of `u`.
    /// ** Panics if `u >= n` **
    pub fn neighbor_ids_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u).map(|hop| hop.node)
    }

    /// Returns an iterator over all edges in normalized form together with
    /// their transmission times. Every undirected edge appears exactly once.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, Time)> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u).filter_map(move |hop| {
                let edge = Edge(u, hop.node);
                edge.is_normalized()
                    .then_some((edge, hop.transmission_time))
            })
        })
    }

    /// Returns the transmission time of the link `{u, v}` or `None` if the
    /// computers are not adjacent.
    /// ** Panics if `u >= n || v >= n` **
    pub fn transmission_time_between(&self, u: Node, v: Node) -> Option<Time> {
        self.assert_valid(v);
        self.nbs[u as usize]
            .iter()
            .find(|hop| hop.node == v)
            .map(|hop| hop.transmission_time)
    }

    /// Scans only touch the indexed endpoint, so the other one is checked explicitly
    #[inline]
    fn assert_valid(&self, v: Node) {
        assert!((v as usize) < self.nbs.len());
    }
}
