//! The `AiSystem` struct: agent CRUD, goal API, and the update pipeline.

use std::collections::BTreeMap;

use log::{debug, error, trace};

use nav_agent::{Agent, Goal};
use nav_core::{AgentId, NavError, NavResult, Quat, SimTime, Vec3};
use nav_graph::{AStarPlanner, NavGraph, Planner, SearchConfig};
use nav_steer::{ActionExecutor, SteeringParams};

use crate::observer::{AiObserver, NoopObserver};

/// Owns every agent and drives the goal → plan → steer pipeline.
///
/// # Type parameter
///
/// `P` is the route planner (default [`AStarPlanner`]).  Swap it at compile
/// time for a different search strategy with no runtime overhead.
///
/// # Id allocation
///
/// `add_agent` issues the smallest unused id, probing linearly from zero, so
/// ids are reused after removal.  A full id space is reported as
/// [`NavError::AgentCapacityExhausted`] — an id is never handed out twice
/// while live.
///
/// # Error taxonomy
///
/// Accessors whose callers are expected to track valid ids
/// ([`agent_position`][Self::agent_position]) return
/// [`NavError::AgentNotFound`] for unknown ids.  Operations the outer loop
/// broadcasts for externally tracked ids
/// ([`set_agent_position_and_rotation`][Self::set_agent_position_and_rotation],
/// [`add_agent_goal`][Self::add_agent_goal]) tolerate unknown ids as silent
/// no-ops, since those ids may lag behind a removal.
pub struct AiSystem<P: Planner<NavGraph> = AStarPlanner> {
    graph: NavGraph,
    planner: P,
    executor: ActionExecutor,
    agents: BTreeMap<AgentId, Agent>,
}

impl AiSystem<AStarPlanner> {
    /// Create a system over `graph` with the default A* planner and
    /// steering tuning.
    pub fn new(graph: NavGraph) -> Self {
        Self::with_planner(graph, AStarPlanner)
    }
}

impl<P: Planner<NavGraph>> AiSystem<P> {
    /// Create a system with a custom planner.
    pub fn with_planner(graph: NavGraph, planner: P) -> Self {
        Self {
            graph,
            planner,
            executor: ActionExecutor::default(),
            agents: BTreeMap::new(),
        }
    }

    /// Replace the search limits used for every replan.
    pub fn set_search_config(&mut self, config: SearchConfig) {
        self.executor.search_config = config;
    }

    /// Replace the steering tuning used for every movement step.
    pub fn set_steering_params(&mut self, params: SteeringParams) {
        self.executor.params = params;
    }

    /// The navigation graph this system plans over.
    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    // ── Agent CRUD ────────────────────────────────────────────────────────

    /// Create an agent at `position`/`rotation` and return its id.
    ///
    /// Issues the smallest id not currently live.  Errors with
    /// [`NavError::AgentCapacityExhausted`] when every id is in use.
    pub fn add_agent(&mut self, position: Vec3, rotation: Quat) -> NavResult<AgentId> {
        // AgentId::INVALID (u16::MAX) is reserved and never issued.
        for raw in 0..u16::MAX {
            let id = AgentId(raw);
            if let std::collections::btree_map::Entry::Vacant(slot) = self.agents.entry(id) {
                slot.insert(Agent::new(position, rotation));
                trace!("added agent {id} at {position}");
                return Ok(id);
            }
        }
        error!("agent id space exhausted; add_agent refused");
        Err(NavError::AgentCapacityExhausted)
    }

    /// Remove `id` and destroy its blackboard contents.  No-op on unknown
    /// ids.
    pub fn remove_agent(&mut self, id: AgentId) {
        if self.agents.remove(&id).is_some() {
            trace!("removed agent {id}");
        }
    }

    /// Number of live agents.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Iterator over all live agent ids in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.keys().copied()
    }

    /// Read-only access to one agent, `None` for unknown ids.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    // ── Transforms ────────────────────────────────────────────────────────

    /// Current position of `id`.
    ///
    /// Callers of this accessor are expected to hold a valid id; unknown
    /// ids are an error, not a silent default.
    pub fn agent_position(&self, id: AgentId) -> NavResult<Vec3> {
        self.agents
            .get(&id)
            .map(|a| a.position)
            .ok_or(NavError::AgentNotFound(id))
    }

    /// Push a transform for `id`.  Silent no-op on unknown ids: the outer
    /// loop broadcasts transforms for every object it tracks, some of which
    /// may already have been removed here.
    pub fn set_agent_position_and_rotation(&mut self, id: AgentId, position: Vec3, rotation: Quat) {
        if let Some(agent) = self.agents.get_mut(&id) {
            agent.position = position;
            agent.rotation = rotation;
        }
    }

    // ── Goals ─────────────────────────────────────────────────────────────

    /// Append `goal` to `id`'s goal queue.  Silent no-op on unknown ids.
    pub fn add_agent_goal(&mut self, id: AgentId, goal: Goal) {
        if let Some(agent) = self.agents.get_mut(&id) {
            debug!("agent {id}: new goal {goal:?}");
            agent.blackboard.push_goal(goal);
        }
    }

    /// The position the primary goal currently drives `id` toward.
    ///
    /// `None` for unknown ids, empty goal queues, and positionless goals.
    pub fn agent_goal_position(&self, id: AgentId) -> Option<Vec3> {
        self.agents
            .get(&id)?
            .blackboard
            .primary_goal()?
            .target_position()
    }

    /// Queued goal count for `id`; 0 for unknown ids.  Debug-overlay food.
    pub fn agent_goal_count(&self, id: AgentId) -> usize {
        self.agents.get(&id).map_or(0, |a| a.blackboard.goal_count())
    }

    /// Active action count for `id`; 0 for unknown ids.
    pub fn agent_action_count(&self, id: AgentId) -> usize {
        self.agents
            .get(&id)
            .map_or(0, |a| a.blackboard.action_count())
    }

    // ── Update pipeline ───────────────────────────────────────────────────

    /// Run one simulation tick for every live agent.
    pub fn update(&mut self, now: SimTime) {
        self.update_with(now, &mut NoopObserver);
    }

    /// Run one simulation tick, reporting progress to `observer`.
    pub fn update_with<O: AiObserver>(&mut self, now: SimTime, observer: &mut O) {
        observer.on_update_start(now);

        let ids: Vec<AgentId> = self.agents.keys().copied().collect();
        for id in ids {
            let Some(agent) = self.agents.get_mut(&id) else {
                continue;
            };

            // ① Goal-internal progression (patrol waypoints).
            agent.blackboard.advance_goals(agent.position);

            // ② Retire satisfied goals.
            let retired = agent.blackboard.retire_satisfied_goals(agent.position);
            if retired > 0 {
                debug!("agent {id}: {retired} goal(s) satisfied");
            }

            // ③ Coarse invalidation: any goal-set change discards the whole
            //    action set.
            if agent.blackboard.actions_stale() {
                agent.blackboard.clear_actions();
            }

            // ④ Goals but no plan: derive one action from the primary goal.
            //    Skipped on a tick that retired a goal; the action set stays
            //    empty until the next update so callers observe the
            //    invalidation before the rebuild.
            if retired == 0 && agent.blackboard.has_goals() && !agent.blackboard.has_actions() {
                if let Some(goal) = agent.blackboard.primary_goal() {
                    if let Some(planned) =
                        self.executor
                            .derive_action(&self.graph, &self.planner, agent.position, goal)
                    {
                        if let Some(stats) = &planned.stats {
                            observer.on_agent_replanned(id, stats);
                        }
                        agent.blackboard.push_action(planned.action);
                    }
                }
            }

            // ⑤ Steer: advance actions in insertion order.
            let mut position = agent.position;
            for action in agent.blackboard.actions_mut() {
                position = self.executor.advance(&self.graph, position, action);
            }
            agent.position = position;
        }

        observer.on_update_end(now, &self.agents);
    }
}
