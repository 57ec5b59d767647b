//! The action executor: derives an action from a goal and advances actions
//! tick by tick.

use log::{debug, trace};

use nav_agent::{Action, Goal};
use nav_core::Vec3;
use nav_graph::{NavGraph, Planner, SearchConfig, SearchStats};

use crate::motion::{SNAP_RADIUS_DIRECT, SNAP_RADIUS_PATH, SteeringParams, step_toward};

/// An action freshly planned for a goal, with the search statistics when a
/// graph search actually ran.
#[derive(Debug, Clone)]
pub struct PlannedAction {
    pub action: Action,
    /// `None` when no search was needed (same snap node, or an empty graph).
    pub stats: Option<SearchStats>,
}

/// Derives actions from goals and steps them.
///
/// Holds the search limits and steering tuning; the graph and planner are
/// passed per call so one executor serves any number of agents.
#[derive(Debug, Clone, Default)]
pub struct ActionExecutor {
    pub search_config: SearchConfig,
    pub params: SteeringParams,
}

impl ActionExecutor {
    pub fn new(search_config: SearchConfig, params: SteeringParams) -> Self {
        Self {
            search_config,
            params,
        }
    }

    /// Resolve `goal` into one executable action for an agent at
    /// `agent_position`.
    ///
    /// Snaps the agent position and the goal target to their closest
    /// waypoints; when they differ, plans a route between them.  A failed
    /// search (or an empty graph) degrades to direct-line movement toward
    /// the target — planning failure never blocks an agent.
    ///
    /// Returns `None` only for goals with no target position, which have
    /// nothing to execute.
    pub fn derive_action<P: Planner<NavGraph>>(
        &self,
        graph: &NavGraph,
        planner: &P,
        agent_position: Vec3,
        goal: &Goal,
    ) -> Option<PlannedAction> {
        let target = goal.target_position()?;

        let (from, to) = match (graph.closest_node(agent_position), graph.closest_node(target)) {
            (Some(from), Some(to)) => (from, to),
            // Empty graph: walk straight at the target.
            _ => {
                return Some(PlannedAction {
                    action: Action::goto_direct(target),
                    stats: None,
                });
            }
        };

        if from == to {
            trace!("start and target snap to {from}; moving directly");
            return Some(PlannedAction {
                action: Action::goto_direct(target),
                stats: None,
            });
        }

        let result = planner.plan(graph, from, to, &self.search_config);
        let action = if result.found() {
            Action::goto(result.route, target)
        } else {
            debug!(
                "no route {from} -> {to} ({:?}); falling back to direct movement",
                result.outcome,
            );
            Action::goto_direct(target)
        };

        Some(PlannedAction {
            action,
            stats: Some(result.stats),
        })
    }

    /// Advance `action` one tick for an agent at `position`, returning the
    /// new position.
    ///
    /// The immediate sub-target is the head of the remaining path when one
    /// exists (snap radius [`SNAP_RADIUS_PATH`]; the waypoint is popped on
    /// arrival), otherwise the action's final target (snap radius
    /// [`SNAP_RADIUS_DIRECT`]).
    pub fn advance(&self, graph: &NavGraph, position: Vec3, action: &mut Action) -> Vec3 {
        match action {
            Action::Goto { path, target } => {
                if let Some(&head) = path.front() {
                    let step =
                        step_toward(position, graph.position(head), SNAP_RADIUS_PATH, &self.params);
                    if step.arrived {
                        path.pop_front();
                    }
                    step.position
                } else {
                    step_toward(position, *target, SNAP_RADIUS_DIRECT, &self.params).position
                }
            }
            // Placeholders: no movement.
            Action::Animate | Action::LookAtPoint { .. } => position,
        }
    }
}
