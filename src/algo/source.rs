use super::*;

/// Result of [`choose_source`]: the chosen source and its security-constrained
/// closure, sorted ascending and including the source itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceChoice {
    /// The winning source computer
    pub source: Node,
    /// Ascending ids of every computer the source can reach
    pub reachable: Vec<Node>,
}

/// Picks the computer whose security-constrained BFS closure is largest.
///
/// Candidates are tried in index order and a candidate only replaces the
/// current best on a *strict* improvement, so ties keep the lowest-index
/// source encountered first.
///
/// ** Panics if `computers` is empty **
///
/// # Examples
/// ```
/// use poodlenet::prelude::*;
///
/// let computers = [Computer::new(1, 1), Computer::new(2, 1), Computer::new(3, 1)];
/// let connections = [Connection::new(0, 1, 1), Connection::new(1, 2, 1)];
///
/// // Security climbs by one per hop, so 0 reaches everything
/// let choice = choose_source(&computers, &connections);
/// assert_eq!(choice.source, 0);
/// assert_eq!(choice.reachable, vec![0, 1, 2]);
/// ```
pub fn choose_source(computers: &[Computer], connections: &[Connection]) -> SourceChoice {
    let graph = NetworkGraph::from_network(computers, connections);

    let mut best = SourceChoice {
        source: 0,
        reachable: Vec::new(),
    };

    for candidate in graph.vertices() {
        let closure = reachable_from(&graph, candidate);
        if closure.len() > best.reachable.len() {
            best = SourceChoice {
                source: candidate,
                reachable: closure,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn prefers_largest_closure() {
        // Only 2 can climb onto 3 and still descend to everyone; the sources
        // below it are stuck under the level-4 wall
        let computers = [
            Computer::new(1, 1),
            Computer::new(2, 1),
            Computer::new(4, 1),
            Computer::new(5, 1),
        ];
        let connections = [
            Connection::new(0, 1, 1),
            Connection::new(1, 2, 1),
            Connection::new(2, 3, 1),
        ];

        let choice = choose_source(&computers, &connections);
        assert_eq!(choice.source, 2);
        assert_eq!(choice.reachable, vec![0, 1, 2, 3]);
    }

    #[test]
    fn ties_keep_first_candidate() {
        // Two symmetric components of equal size
        let computers = vec![Computer::new(1, 1); 4];
        let connections = [Connection::new(2, 3, 1), Connection::new(0, 1, 1)];

        let choice = choose_source(&computers, &connections);
        assert_eq!(choice.source, 0);
        assert_eq!(choice.reachable, vec![0, 1]);
    }

    #[test]
    fn isolated_vertex_is_never_preferred() {
        let computers = vec![Computer::new(1, 1); 3];
        let connections = [Connection::new(0, 1, 1)];

        let choice = choose_source(&computers, &connections);
        assert_eq!(choice.source, 0);
        assert_eq!(choice.reachable, vec![0, 1]);
        assert!(!choice.reachable.contains(&2));
    }

    #[test]
    fn all_isolated() {
        let computers = vec![Computer::new(1, 1); 3];

        let choice = choose_source(&computers, &[]);
        assert_eq!(choice.source, 0);
        assert_eq!(choice.reachable, vec![0]);
    }

    #[test]
    fn matches_naive_reference_on_random_networks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5 as NumNodes, 10, 25] {
            for _ in 0..20 {
                let computers = (0..n)
                    .map(|_| Computer::new(rng.random_range(1..=10), rng.random_range(1..10)))
                    .collect_vec();
                let connections = (0..(n * 2))
                    .filter_map(|_| {
                        let a = rng.random_range(0..n);
                        let b = rng.random_range(0..n);
                        (a != b).then(|| Connection::new(a, b, rng.random_range(1..20)))
                    })
                    .collect_vec();

                let graph = NetworkGraph::from_network(&computers, &connections);
                let choice = choose_source(&computers, &connections);

                // Returned closure is exactly the climb-BFS closure of the source
                assert_eq!(choice.reachable, reachable_from(&graph, choice.source));
                assert!(choice.reachable.contains(&choice.source));

                // No source has a strictly larger closure; earlier ones are strictly smaller
                for candidate in 0..n {
                    let size = reachable_from(&graph, candidate).len();
                    assert!(size <= choice.reachable.len());
                    if candidate < choice.source {
                        assert!(size < choice.reachable.len());
                    }
                }
            }
        }
    }
}
