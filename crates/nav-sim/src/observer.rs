//! Update observer trait for progress reporting and data collection.

use std::collections::BTreeMap;

use nav_agent::Agent;
use nav_core::{AgentId, SimTime};
use nav_graph::SearchStats;

/// Callbacks invoked by [`AiSystem::update_with`][crate::AiSystem::update_with]
/// at key points in the update pipeline.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — replan printer
///
/// ```rust,ignore
/// struct ReplanPrinter;
///
/// impl AiObserver for ReplanPrinter {
///     fn on_agent_replanned(&mut self, agent: AgentId, stats: &SearchStats) {
///         println!("{agent}: examined {} nodes", stats.nodes_examined);
///     }
/// }
/// ```
pub trait AiObserver {
    /// Called at the very start of each update, before any agent runs.
    fn on_update_start(&mut self, _now: SimTime) {}

    /// Called whenever an agent's goal was resolved through a graph search.
    ///
    /// Not called for plans that needed no search (direct movement).
    fn on_agent_replanned(&mut self, _agent: AgentId, _stats: &SearchStats) {}

    /// Called at the end of each update with read-only access to all live
    /// agents, so collectors can record positions and goal/action counts
    /// without the system knowing about any specific output format.
    fn on_update_end(&mut self, _now: SimTime, _agents: &BTreeMap<AgentId, Agent>) {}
}

/// An [`AiObserver`] that does nothing.  Used by
/// [`AiSystem::update`][crate::AiSystem::update].
pub struct NoopObserver;

impl AiObserver for NoopObserver {}
