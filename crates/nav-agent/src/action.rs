//! Actions — committed executable plans derived from goals.

use std::collections::VecDeque;

use nav_core::{NodeId, Vec3};

/// A committed plan believed to satisfy the agent's primary goal.
///
/// `Animate` and `LookAtPoint` are placeholders beyond interface shape; only
/// `Goto` carries movement behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Follow `path` node by node, then walk to the exact `target` position.
    ///
    /// An empty path means direct-line movement toward `target` — the
    /// degraded form used when planning fails or start and goal snap to the
    /// same waypoint.  Failure to plan never blocks an agent.
    Goto {
        path: VecDeque<NodeId>,
        target: Vec3,
    },
    /// Placeholder — no behavior yet.
    Animate,
    /// Placeholder — no behavior yet.
    LookAtPoint { point: Vec3 },
}

impl Action {
    /// Convenience constructor for a path-following move.
    pub fn goto(path: impl IntoIterator<Item = NodeId>, target: Vec3) -> Self {
        Action::Goto {
            path: path.into_iter().collect(),
            target,
        }
    }

    /// Convenience constructor for direct-line movement toward `target`.
    pub fn goto_direct(target: Vec3) -> Self {
        Action::Goto {
            path: VecDeque::new(),
            target,
        }
    }
}
