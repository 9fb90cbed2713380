/*!
# Network Description

The validated input records every algorithm entry point consumes: one
[`Computer`] per node and one [`Connection`] per undirected link. An outer
layer (see [`io`](crate::io)) is responsible for producing records that
satisfy the documented value ranges; the core assumes they hold.
*/

use crate::node::*;

/// A computer in the network.
///
/// Invariants (established by the producing layer):
/// - `security_level` lies in `1..=MAX_SECURITY_LEVEL`,
/// - `poodle_time > 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Computer {
    /// Security clearance of this computer
    pub security_level: SecurityLevel,
    /// Local processing delay in seconds, incurred the first time
    /// this computer handles a probe or dispatched data
    pub poodle_time: Time,
}

impl Computer {
    /// Shorthand constructor
    pub fn new(security_level: SecurityLevel, poodle_time: Time) -> Self {
        Self {
            security_level,
            poodle_time,
        }
    }
}

/// An undirected link between two computers.
///
/// Invariants (established by the producing layer):
/// - both endpoints lie in `0..n` where `n` is the number of computers,
/// - `transmission_time > 0`,
/// - endpoints differ.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Connection {
    /// First endpoint
    pub computer_a: Node,
    /// Second endpoint
    pub computer_b: Node,
    /// Transmission delay in seconds, shared by both directions
    pub transmission_time: Time,
}

impl Connection {
    /// Shorthand constructor
    pub fn new(computer_a: Node, computer_b: Node, transmission_time: Time) -> Self {
        Self {
            computer_a,
            computer_b,
            transmission_time,
        }
    }
}
