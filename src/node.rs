/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve far less than `2^32` computers.
This saves space compared to `usize`/`u64` and allows manipulating node values directly.

In addition to its id, every computer in a network carries two scalar attributes:
a [`SecurityLevel`] and a processing delay ("poodle time") measured in seconds.
Both are stored in the graph (see [`NetworkGraph`](crate::repr::NetworkGraph)),
not alongside the node id.

[`Time`] doubles as the priority type of the dispatch computation; [`INFINITE_TIME`]
is the "unreached" sentinel and never a legal arrival time.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Durations (poodle times, transmission times, arrival times) in seconds.
///
/// Input durations are strictly positive; accumulated arrival times are bounded
/// by [`INFINITE_TIME`] which serves as the "not reached" sentinel.
pub type Time = u32;

/// Sentinel for an unreached computer. Never a valid arrival time.
pub const INFINITE_TIME: Time = Time::MAX;

/// Security clearance of a computer, externally clamped to `1..=MAX_SECURITY_LEVEL`.
pub type SecurityLevel = u8;

/// Largest legal security level
pub const MAX_SECURITY_LEVEL: SecurityLevel = 10;

/// Returns *true* if a hop from `from` onto `onto` is permitted:
/// security may climb by at most one level per hop, descending is unrestricted.
#[inline]
pub fn may_climb(from: SecurityLevel, onto: SecurityLevel) -> bool {
    onto <= from + 1
}
