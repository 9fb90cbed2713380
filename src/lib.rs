/*!
`poodlenet` models a network of computers connected by bidirectional links and
answers reachability and timing questions about probes travelling through it:
- every **computer** has a security clearance (`1..=10`) and a local processing
  delay, its *poodle time*,
- every **link** has a transmission delay shared by both directions,
- a probe may hop from `u` to `v` only if `securityLevel(v) <= securityLevel(u) + 1`
  (the *security-climb rule*); descending is unrestricted.

# Representation

Computers are numbered `0` to `n - 1` and represented as `u32`
(see [`Node`](node::Node)), durations as `u32` seconds (see [`Time`](node::Time)).
The network itself is an undirected, vertex-labelled, edge-weighted
adjacency-list graph ([`NetworkGraph`](repr::NetworkGraph)), built fresh from
plain [`Computer`](network::Computer) / [`Connection`](network::Connection)
records for every algorithm call and dropped afterwards.

# Operations

There are *4* operations, all in the [`algo`] module:
- [`probe_path`](algo::probe_path) verifies a fixed probe path and accumulates
  elapsed time, reporting the first obstruction (missing link or missing
  permission) otherwise,
- [`choose_source`](algo::choose_source) picks the computer with the largest
  security-constrained BFS closure,
- [`plan_dispatch`](algo::plan_dispatch) computes, per reachable computer, the
  earliest arrival time and *all* tied-optimal immediate forwarders
  (a Dijkstra variant over an indexed min-heap, see [`heap::TimedMinHeap`]),
- [`plan_dispatch_with`](algo::plan_dispatch_with) runs a custom
  [`DispatchPolicy`](algo::DispatchPolicy) — the extension seam for advanced
  planning strategies.

The [`io`] module reads and writes the plain-text network description format.

# Usage

In most use-cases, `use poodlenet::prelude::*;` suffices for your needs.

```
use poodlenet::prelude::*;

let computers = [Computer::new(1, 5), Computer::new(2, 3)];
let connections = [Connection::new(0, 1, 4)];

let report = probe_path(&computers, &connections, &[0, 1]);
assert_eq!(report.status, ProbeStatus::Success);
assert_eq!(report.elapsed_time, 12);

let plan = plan_dispatch(&computers, &connections, 0);
assert_eq!(plan.steps[0].recipients.as_slice(), [1]);
```
*/

pub mod algo;
pub mod edge;
pub mod heap;
pub mod io;
pub mod network;
pub mod node;
pub mod repr;

/// `poodlenet::prelude` includes the node/edge definitions, the input records,
/// the graph representation, and all algorithm entry points and result types.
pub mod prelude {
    pub use super::{algo::*, edge::*, network::*, node::*, repr::*};
}
