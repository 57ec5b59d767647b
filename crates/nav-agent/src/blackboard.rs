//! The per-agent blackboard: goal queue, action list, and epoch tags.

use nav_core::Vec3;

use crate::{Action, Goal};

/// Per-agent container of goals and actions.
///
/// # Epoch invalidation
///
/// Actions are only meaningful for the goal set they were planned against.
/// Rather than diffing which action belonged to which goal, the blackboard
/// tags the action set with the goal epoch it was built in: every goal-set
/// mutation bumps `goal_epoch`, and [`actions_stale`][Self::actions_stale]
/// reports when the action set must be discarded wholesale.
#[derive(Debug, Default, Clone)]
pub struct Blackboard {
    goals: Vec<Goal>,
    actions: Vec<Action>,
    /// Bumped on every goal-set mutation.
    goal_epoch: u64,
    /// The goal epoch the current action set was planned in.
    action_epoch: u64,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Goals ─────────────────────────────────────────────────────────────

    /// Append `goal` to the back of the queue.
    pub fn push_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
        self.goal_epoch += 1;
    }

    /// The first queued goal — the one actions are planned for.
    #[inline]
    pub fn primary_goal(&self) -> Option<&Goal> {
        self.goals.first()
    }

    #[inline]
    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    #[inline]
    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }

    /// Advance goal-internal progression (patrol waypoints) for an agent at
    /// `agent_position`.  Any content change bumps the goal epoch.
    pub fn advance_goals(&mut self, agent_position: Vec3) {
        let mut changed = false;
        for goal in &mut self.goals {
            changed |= goal.advance(agent_position);
        }
        if changed {
            self.goal_epoch += 1;
        }
    }

    /// Remove and destroy every goal satisfied at `agent_position`.
    ///
    /// Returns how many goals were retired.  Each retirement bumps the goal
    /// epoch, so any in-flight action set becomes stale.
    pub fn retire_satisfied_goals(&mut self, agent_position: Vec3) -> usize {
        let before = self.goals.len();
        self.goals.retain(|g| !g.is_satisfied(agent_position));
        let retired = before - self.goals.len();
        if retired > 0 {
            self.goal_epoch += retired as u64;
        }
        retired
    }

    // ── Actions ───────────────────────────────────────────────────────────

    /// `true` when the action set was planned against an older goal set and
    /// must be discarded.
    #[inline]
    pub fn actions_stale(&self) -> bool {
        self.action_epoch != self.goal_epoch
    }

    /// Discard the entire action set and mark it current for this epoch.
    pub fn clear_actions(&mut self) {
        self.actions.clear();
        self.action_epoch = self.goal_epoch;
    }

    /// Install `action`, tagging it with the current goal epoch.
    pub fn push_action(&mut self, action: Action) {
        self.actions.push(action);
        self.action_epoch = self.goal_epoch;
    }

    #[inline]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Mutable access to the actions, in insertion order, for the executor.
    pub fn actions_mut(&mut self) -> &mut [Action] {
        &mut self.actions
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}
