/*!
# Algorithms

The four operations over a network of security-cleared computers:
- [`probe_path`] walks a fixed path under adjacency + permission constraints,
- [`choose_source`] picks the source with the largest constrained closure,
- [`plan_dispatch`] computes earliest arrival times and all tied-optimal
  forwarders per computer,
- [`plan_dispatch_with`] runs an alternative [`DispatchPolicy`].

Every entry point builds a fresh [`NetworkGraph`](crate::repr::NetworkGraph)
from the input arrays, computes, and returns an owned plain result; nothing is
retained between calls. Lower-level building blocks ([`ClimbBfs`]) are exposed
for direct use.
*/

mod climb;
mod dispatch;
mod probe;
mod source;

use crate::{network::*, node::*, repr::*};
use itertools::Itertools;

pub use climb::*;
pub use dispatch::*;
pub use probe::*;
pub use source::*;
