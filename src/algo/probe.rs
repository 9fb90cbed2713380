use super::*;

/// Outcome class of a probe walk
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProbeStatus {
    /// The whole path was walked
    Success,
    /// Two consecutive path computers are not linked
    NoConnection,
    /// A hop violated the security-climb rule
    NoPermission,
}

/// Result of [`probe_path`]: the outcome and the time accumulated up to the
/// point of success or failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Outcome of the walk
    pub status: ProbeStatus,
    /// Seconds elapsed until completion or abort
    pub elapsed_time: Time,
}

/// Walks the fixed probe `path` through the network and accumulates elapsed time.
///
/// Every computer on the path contributes its poodle time on its *first* visit
/// only, even if the path revisits it later. Each hop contributes the link's
/// transmission time. The walk aborts at the first obstruction:
///
/// - consecutive path computers without a link → [`ProbeStatus::NoConnection`],
/// - a hop climbing more than one security level → [`ProbeStatus::NoPermission`].
///
/// On abort, `elapsed_time` covers the walk up to the obstruction. A
/// single-computer path succeeds with just that computer's poodle time.
///
/// ** Panics if `path` is empty or contains an id `>= computers.len()` **
///
/// # Examples
/// ```
/// use poodlenet::prelude::*;
///
/// let computers = [Computer::new(1, 5), Computer::new(2, 3)];
/// let connections = [Connection::new(0, 1, 4)];
///
/// let report = probe_path(&computers, &connections, &[0, 1]);
/// assert_eq!(report.status, ProbeStatus::Success);
/// assert_eq!(report.elapsed_time, 12); // 5 + 4 + 3
/// ```
pub fn probe_path(computers: &[Computer], connections: &[Connection], path: &[Node]) -> ProbeReport {
    assert!(!path.is_empty());

    let graph = NetworkGraph::from_network(computers, connections);
    let mut visited = NodeBitSet::new(graph.number_of_nodes());

    // The first computer is always a first visit; inside the loop, `first` has
    // already been entered as the previous pair's `second`
    visited.set_bit(path[0]);
    let mut elapsed_time = graph.poodle_time_of(path[0]);

    for (&first, &second) in path.iter().tuple_windows() {
        let Some(transmission_time) = graph.transmission_time_between(first, second) else {
            return ProbeReport {
                status: ProbeStatus::NoConnection,
                elapsed_time,
            };
        };

        if !may_climb(
            graph.security_level_of(first),
            graph.security_level_of(second),
        ) {
            return ProbeReport {
                status: ProbeStatus::NoPermission,
                elapsed_time,
            };
        }

        elapsed_time += transmission_time;
        if !visited.set_bit(second) {
            elapsed_time += graph.poodle_time_of(second);
        }
    }

    ProbeReport {
        status: ProbeStatus::Success,
        elapsed_time,
    }
}
