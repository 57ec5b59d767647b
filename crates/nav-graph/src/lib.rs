//! `nav-graph` — waypoint graph, spatial indexing, and path planning.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`graph`]  | `NavGraph` (nodes + edges + R-tree), `NavGraphBuilder`     |
//! | [`grid`]   | Jittered-grid generator with 4-directional connectivity    |
//! | [`search`] | `SearchSpace` trait, A*, `Planner` trait, `AStarPlanner`   |
//!
//! # Design
//!
//! The graph is **build-once**: constructed at startup from a list of node
//! positions and `(from, to)` index pairs, then read-only for its entire
//! lifetime.  Node identity is the input index, so `NodeId`s stay valid as
//! long as the graph lives.  Bad edge indices at build time are a
//! construction bug, not a runtime condition, and panic.
//!
//! Planning failure, by contrast, is an expected runtime outcome: the search
//! returns an empty route with a [`SearchOutcome`] describing why, never an
//! incorrect partial route.

pub mod graph;
pub mod grid;
pub mod search;


pub use graph::{Edge, NavGraph, NavGraphBuilder, Node};
pub use grid::{GridSpec, jittered_grid};
pub use search::{
    AStarPlanner, Planner, SearchConfig, SearchOutcome, SearchResult, SearchSpace, SearchStats,
    astar, straight_distance_heuristic,
};
