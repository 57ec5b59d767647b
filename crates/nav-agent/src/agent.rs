//! The agent record.

use nav_core::{Quat, Vec3};

use crate::Blackboard;

/// A simulated entity with a transform and an independent goal/action state
/// machine.
///
/// Agents are owned exclusively by the system that created them; the outer
/// application refers to them only by `AgentId`.
#[derive(Debug, Clone)]
pub struct Agent {
    pub position: Vec3,
    pub rotation: Quat,
    pub blackboard: Blackboard,
}

impl Agent {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            blackboard: Blackboard::new(),
        }
    }
}
