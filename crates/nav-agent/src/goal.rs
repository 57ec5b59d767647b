//! Goals — desired end conditions an agent works toward.

use std::collections::VecDeque;

use nav_core::Vec3;

/// An agent is close enough to a control point to hold it inside this radius.
pub const CONTROL_POINT_RADIUS: f32 = 1.0;

/// A patrol waypoint counts as visited inside this radius.
pub const PATROL_WAYPOINT_RADIUS: f32 = 1.0;

/// A desired end condition for one agent.
///
/// `TakeCover` and `ReloadWeapon` are declared extension points: they carry
/// no behavior yet, are never satisfied, and expose no target position.
#[derive(Debug, Clone, PartialEq)]
pub enum Goal {
    /// Reach and hold the control point at `position`.
    TakeControlPoint { position: Vec3 },
    /// Extension point — no behavior yet.
    TakeCover,
    /// Extension point — no behavior yet.
    ReloadWeapon,
    /// Visit each waypoint in order; satisfied once the queue is empty.
    Patrol { waypoints: VecDeque<Vec3> },
}

impl Goal {
    /// Convenience constructor for a patrol over `waypoints` in order.
    pub fn patrol(waypoints: impl IntoIterator<Item = Vec3>) -> Self {
        Goal::Patrol {
            waypoints: waypoints.into_iter().collect(),
        }
    }

    /// Has the agent at `agent_position` satisfied this goal?
    pub fn is_satisfied(&self, agent_position: Vec3) -> bool {
        match self {
            Goal::TakeControlPoint { position } => {
                agent_position.distance(*position) < CONTROL_POINT_RADIUS
            }
            Goal::Patrol { waypoints } => waypoints.is_empty(),
            Goal::TakeCover | Goal::ReloadWeapon => false,
        }
    }

    /// Advance goal-internal progression for an agent at `agent_position`.
    ///
    /// Patrol consumes its front waypoint once the agent is within
    /// [`PATROL_WAYPOINT_RADIUS`].  Returns `true` when the goal's content
    /// changed, which invalidates any action planned against the old
    /// content.
    pub fn advance(&mut self, agent_position: Vec3) -> bool {
        match self {
            Goal::Patrol { waypoints } => match waypoints.front() {
                Some(&next) if agent_position.distance(next) < PATROL_WAYPOINT_RADIUS => {
                    waypoints.pop_front();
                    true
                }
                _ => false,
            },
            Goal::TakeControlPoint { .. } | Goal::TakeCover | Goal::ReloadWeapon => false,
        }
    }

    /// The position this goal currently drives the agent toward, if any.
    pub fn target_position(&self) -> Option<Vec3> {
        match self {
            Goal::TakeControlPoint { position } => Some(*position),
            Goal::Patrol { waypoints } => waypoints.front().copied(),
            Goal::TakeCover | Goal::ReloadWeapon => None,
        }
    }
}
