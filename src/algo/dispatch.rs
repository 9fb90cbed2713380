use smallvec::SmallVec;

use super::*;
use crate::heap::TimedMinHeap;

/// Tied-optimal forwarders of one step. Almost always a handful, hence inline.
pub type Recipients = SmallVec<[Node; 4]>;

/// One entry of a [`DispatchPlan`]: a reached computer, its earliest possible
/// arrival time and every immediate neighbor that achieves its own optimal
/// arrival time when receiving from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchStep {
    /// The reached computer
    pub computer: Node,
    /// Earliest time at which this computer has finished processing
    pub time: Time,
    /// All tied-optimal immediate forwarders, sorted ascending
    pub recipients: Recipients,
}

/// Result of a dispatch computation: one step per *reached* computer, sorted
/// ascending by arrival time. Unreached computers are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchPlan {
    /// Steps in ascending arrival-time order
    pub steps: Vec<DispatchStep>,
}

/// Strategy seam for dispatch planning.
///
/// [`FastestArrival`] is the provided implementation; alternative policies
/// (optimizing other criteria over the same step/recipient shape) plug in
/// here and run through [`plan_dispatch_with`].
pub trait DispatchPolicy {
    /// Computes a dispatch plan from `source` over the given network graph.
    /// ** Panics if `source >= n` **
    fn plan(&self, graph: &NetworkGraph, source: Node) -> DispatchPlan;
}

/// Earliest-arrival dispatch planning.
///
/// A Dijkstra variant where relaxation along `v → u` is gated by the
/// security-climb rule and costs `transmission_time(v, u) + poodle_time(u)`.
/// The source's distance starts at its own poodle time: it must finish local
/// processing before forwarding anything.
#[derive(Debug, Copy, Clone, Default)]
pub struct FastestArrival;

impl FastestArrival {
    /// Arrival times of all computers, [`INFINITE_TIME`] where unreached.
    fn arrival_times(&self, graph: &NetworkGraph, source: Node) -> Vec<Time> {
        let n = graph.number_of_nodes();
        let mut dist = vec![INFINITE_TIME; n as usize];
        let mut settled = NodeBitSet::new(n);
        let mut heap = TimedMinHeap::new(n);

        for v in graph.vertices() {
            heap.push(v, INFINITE_TIME);
        }
        dist[source as usize] = graph.poodle_time_of(source);
        heap.update(source, dist[source as usize]);

        while let Some((v, _)) = heap.pop() {
            // Lazy deletion: priorities only ever decrease, so a settled vertex
            // may surface again through a stale heap entry
            if settled.set_bit(v) {
                continue;
            }

            let dist_v = dist[v as usize];
            if dist_v == INFINITE_TIME {
                // Everything still in the heap is unreachable
                continue;
            }

            let clearance = graph.security_level_of(v);
            for hop in graph.neighbors_of(v) {
                let u = hop.node;
                if !may_climb(clearance, graph.security_level_of(u)) {
                    continue;
                }

                // Guard the sentinel against overflow before relaxing
                let Some(dist_next) = hop_cost(graph, dist_v, hop) else {
                    continue;
                };

                if dist_next < dist[u as usize] {
                    dist[u as usize] = dist_next;
                    heap.update(u, dist_next);
                }
            }
        }

        dist
    }
}

/// Arrival time at the hop's target when departing `from_time` at the hop's
/// origin, or `None` on sentinel overflow.
#[inline]
fn hop_cost(graph: &NetworkGraph, from_time: Time, hop: Hop) -> Option<Time> {
    hop.transmission_time
        .checked_add(graph.poodle_time_of(hop.node))
        .and_then(|cost| from_time.checked_add(cost))
        .filter(|&arrival| arrival < INFINITE_TIME)
}

impl DispatchPolicy for FastestArrival {
    fn plan(&self, graph: &NetworkGraph, source: Node) -> DispatchPlan {
        let dist = self.arrival_times(graph, source);

        let mut steps: Vec<DispatchStep> = graph
            .vertices()
            .filter(|&v| dist[v as usize] != INFINITE_TIME)
            .map(|v| {
                let clearance = graph.security_level_of(v);
                let mut recipients: Recipients = graph
                    .neighbors_of(v)
                    .filter(|&hop| {
                        may_climb(clearance, graph.security_level_of(hop.node))
                            && hop_cost(graph, dist[v as usize], hop)
                                .is_some_and(|arrival| arrival == dist[hop.node as usize])
                    })
                    .map(|hop| hop.node)
                    .collect();
                recipients.sort_unstable();

                DispatchStep {
                    computer: v,
                    time: dist[v as usize],
                    recipients,
                }
            })
            .collect();

        // Stable: equal arrival times stay in ascending id order
        steps.sort_by_key(|step| step.time);

        DispatchPlan { steps }
    }
}

/// Computes the earliest-arrival dispatch plan from `source`.
///
/// See [`FastestArrival`] for the cost model. The result contains one step per
/// reached computer (ascending by arrival time) whose recipient list holds
/// *all* immediate forwarders achieving the optimal arrival time at their end,
/// not just one.
///
/// ** Panics if `source >= computers.len()` **
///
/// # Examples
/// ```
/// use poodlenet::prelude::*;
///
/// let computers = [Computer::new(1, 5), Computer::new(2, 3)];
/// let connections = [Connection::new(0, 1, 4)];
///
/// let plan = plan_dispatch(&computers, &connections, 0);
/// assert_eq!(plan.steps.len(), 2);
/// assert_eq!((plan.steps[0].computer, plan.steps[0].time), (0, 5));
/// assert_eq!(plan.steps[0].recipients.as_slice(), [1]);
/// assert_eq!((plan.steps[1].computer, plan.steps[1].time), (1, 12));
/// assert!(plan.steps[1].recipients.is_empty());
/// ```
pub fn plan_dispatch(
    computers: &[Computer],
    connections: &[Connection],
    source: Node,
) -> DispatchPlan {
    plan_dispatch_with(&FastestArrival, computers, connections, source)
}

/// Computes a dispatch plan from `source` under the given policy.
///
/// This is the extension point for advanced planning strategies: implement
/// [`DispatchPolicy`] and pass it here to reuse the input handling and result
/// shape of [`plan_dispatch`].
///
/// ** Panics if `source >= computers.len()` **
pub fn plan_dispatch_with<P: DispatchPolicy>(
    policy: &P,
    computers: &[Computer],
    connections: &[Connection],
    source: Node,
) -> DispatchPlan {
    let graph = NetworkGraph::from_network(computers, connections);
    assert!((source as usize) < graph.len());
    policy.plan(&graph, source)
}
