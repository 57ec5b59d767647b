//! Generic A* search and the pluggable `Planner` trait.
//!
//! # Pluggability
//!
//! `nav-sim` resolves goals into routes via the [`Planner`] trait, so
//! applications can swap in custom implementations (hierarchical planners,
//! weighted A*, …) without touching the framework core.  The default
//! [`AStarPlanner`] uses the straight-line heuristic, which is admissible
//! and consistent for the Euclidean edge-cost model and therefore returns
//! optimal routes whenever the limits are not hit.
//!
//! # Failure model
//!
//! Planning failure is an expected runtime outcome, not an error: the search
//! always returns a [`SearchResult`] whose [`SearchOutcome`] says whether the
//! goal was reached, with fully populated statistics either way.  A failed
//! search carries an **empty** route — never a partial one.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use nav_core::Vec3;
use rustc_hash::FxHashMap;

// ── SearchSpace ───────────────────────────────────────────────────────────────

/// The node abstraction the search runs over.
///
/// Anything that can name its nodes, place them in space, and enumerate
/// `(neighbor, edge-cost)` pairs is searchable.  [`NavGraph`][crate::NavGraph]
/// implements this with `Node = NodeId`.
pub trait SearchSpace {
    type Node: Copy + Eq + Hash + Debug;

    /// Position of `node`, used by distance heuristics.
    fn position(&self, node: Self::Node) -> Vec3;

    /// The outgoing `(neighbor, cost)` pairs of `node`, in stable order.
    fn neighbors(&self, node: Self::Node) -> impl Iterator<Item = (Self::Node, f32)> + '_;
}

impl SearchSpace for crate::NavGraph {
    type Node = nav_core::NodeId;

    #[inline]
    fn position(&self, node: Self::Node) -> Vec3 {
        crate::NavGraph::position(self, node)
    }

    fn neighbors(&self, node: Self::Node) -> impl Iterator<Item = (Self::Node, f32)> + '_ {
        self.node(node).edges.iter().map(|e| (e.to, e.cost))
    }
}

// ── Configuration and results ─────────────────────────────────────────────────

/// Work bounds for one search invocation.
///
/// The limits bound worst-case per-replan work, not wall-clock time; an
/// exceeded limit yields a failed (empty) result.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum nodes expanded before the search gives up.
    pub node_limit: usize,
    /// Maximum accumulated route cost before the search gives up.
    pub cost_limit: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_limit: 1_000,
            cost_limit: 1_000.0,
        }
    }
}

/// Why a search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Goal reached; the route is complete and optimal under the heuristic.
    Found,
    /// The open set emptied without reaching the goal.
    NoRoute,
    /// More than `node_limit` nodes were expanded.
    NodeLimitReached,
    /// The cheapest frontier entry already exceeded `cost_limit`.
    CostLimitReached,
}

/// Counters describing one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// Nodes popped from the open set and expanded.
    pub nodes_examined: usize,
    /// Entries still pending in the open set at termination.
    pub nodes_pending: usize,
    /// Entries pushed onto the open set over the whole search.
    pub nodes_opened: usize,
    /// Node count of the returned route.
    pub route_len: usize,
    /// Summed edge cost of the returned route.
    pub route_cost: f32,
}

/// The complete result of one search: route, cost, outcome, statistics.
///
/// The route runs from start to goal, **exclusive of the start node and
/// inclusive of the goal node**.  `start == goal` yields an empty route with
/// outcome [`SearchOutcome::Found`].
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    pub route: Vec<N>,
    pub cost: f32,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl<N> SearchResult<N> {
    /// `true` when the goal was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    fn failed(outcome: SearchOutcome, stats: SearchStats) -> Self {
        Self {
            route: Vec::new(),
            cost: 0.0,
            outcome,
            stats,
        }
    }
}

// ── Heuristics ────────────────────────────────────────────────────────────────

/// Straight-line (Euclidean) distance between two positions.
///
/// Never overestimates the remaining cost when edge costs are Euclidean
/// distances, so A* results are optimal.
#[inline]
pub fn straight_distance_heuristic(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

// ── A* ────────────────────────────────────────────────────────────────────────

/// Open-set entry.  Ordered so the `BinaryHeap` pops the **lowest** f-score
/// first, breaking ties by insertion sequence (earlier wins) to keep results
/// deterministic across runs.
struct OpenEntry<N> {
    f: f32,
    g: f32,
    seq: u64,
    node: N,
}

impl<N> PartialEq for OpenEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl<N> Eq for OpenEntry<N> {}

impl<N> Ord for OpenEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for OpenEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classic A* over any [`SearchSpace`].
///
/// Maintains an open set ordered by `f = g + h`, best-known g-scores, and
/// back-pointers for route reconstruction.  Stale heap entries (superseded
/// by a cheaper g-score) are skipped on pop rather than removed eagerly.
///
/// Pure and stateless: no I/O, no blocking, deterministic for identical
/// inputs.
pub fn astar<S: SearchSpace>(
    space: &S,
    start: S::Node,
    goal: S::Node,
    heuristic: impl Fn(Vec3, Vec3) -> f32,
    config: &SearchConfig,
) -> SearchResult<S::Node> {
    let mut stats = SearchStats::default();

    if start == goal {
        return SearchResult {
            route: Vec::new(),
            cost: 0.0,
            outcome: SearchOutcome::Found,
            stats,
        };
    }

    let goal_pos = space.position(goal);

    let mut open: BinaryHeap<OpenEntry<S::Node>> = BinaryHeap::new();
    let mut g_score: FxHashMap<S::Node, f32> = FxHashMap::default();
    let mut came_from: FxHashMap<S::Node, S::Node> = FxHashMap::default();
    let mut seq: u64 = 0;

    g_score.insert(start, 0.0);
    open.push(OpenEntry {
        f: heuristic(space.position(start), goal_pos),
        g: 0.0,
        seq,
        node: start,
    });
    stats.nodes_opened += 1;

    while let Some(entry) = open.pop() {
        // Skip entries superseded by a cheaper path found later.
        if entry.g > g_score.get(&entry.node).copied().unwrap_or(f32::INFINITY) {
            continue;
        }

        if stats.nodes_examined >= config.node_limit {
            stats.nodes_pending = open.len();
            return SearchResult::failed(SearchOutcome::NodeLimitReached, stats);
        }
        if entry.g > config.cost_limit {
            // Frontier pops in ascending f ≥ g order: if the cheapest entry
            // is already over budget, no route within the limit exists.
            stats.nodes_pending = open.len();
            return SearchResult::failed(SearchOutcome::CostLimitReached, stats);
        }

        stats.nodes_examined += 1;

        if entry.node == goal {
            stats.nodes_pending = open.len();
            let route = reconstruct(&came_from, start, goal);
            stats.route_len = route.len();
            stats.route_cost = entry.g;
            return SearchResult {
                route,
                cost: entry.g,
                outcome: SearchOutcome::Found,
                stats,
            };
        }

        for (neighbor, edge_cost) in space.neighbors(entry.node) {
            let tentative_g = entry.g + edge_cost;
            if tentative_g < g_score.get(&neighbor).copied().unwrap_or(f32::INFINITY) {
                g_score.insert(neighbor, tentative_g);
                came_from.insert(neighbor, entry.node);
                seq += 1;
                open.push(OpenEntry {
                    f: tentative_g + heuristic(space.position(neighbor), goal_pos),
                    g: tentative_g,
                    seq,
                    node: neighbor,
                });
                stats.nodes_opened += 1;
            }
        }
    }

    SearchResult::failed(SearchOutcome::NoRoute, stats)
}

/// Trace back-pointers from `goal` to `start` and return the route in
/// forward order, start excluded.
fn reconstruct<N: Copy + Eq + Hash>(came_from: &FxHashMap<N, N>, start: N, goal: N) -> Vec<N> {
    let mut route = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        if prev == start {
            break;
        }
        route.push(prev);
        current = prev;
    }
    route.reverse();
    route
}

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable route planner.
///
/// Implement this trait to replace the default A* with another search
/// strategy.  Implementations must be `Send + Sync` so a system embedding
/// one can still be moved across threads.
pub trait Planner<S: SearchSpace>: Send + Sync {
    /// Compute a route from `start` to `goal` under `config`'s limits.
    fn plan(
        &self,
        space: &S,
        start: S::Node,
        goal: S::Node,
        config: &SearchConfig,
    ) -> SearchResult<S::Node>;
}

/// The default planner: [`astar`] with [`straight_distance_heuristic`].
pub struct AStarPlanner;

impl<S: SearchSpace> Planner<S> for AStarPlanner {
    fn plan(
        &self,
        space: &S,
        start: S::Node,
        goal: S::Node,
        config: &SearchConfig,
    ) -> SearchResult<S::Node> {
        astar(space, start, goal, straight_distance_heuristic, config)
    }
}
