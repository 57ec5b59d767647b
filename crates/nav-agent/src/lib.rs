//! `nav-agent` — agent state, goals, and the action blackboard.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`goal`]       | `Goal` — desired end conditions, satisfaction tests |
//! | [`action`]     | `Action` — committed executable plans               |
//! | [`blackboard`] | `Blackboard` — per-agent goal/action container      |
//! | [`agent`]      | `Agent` — position, rotation, blackboard            |
//!
//! # Goal/action lifecycle
//!
//! Goals and actions are closed tagged enums, matched exhaustively — adding
//! a variant is a compile-visible change everywhere it matters.  Actions are
//! derived from the primary goal and are valid only for the goal-set epoch
//! they were created in: **any** mutation of the goal set (a new goal, a
//! retired goal, a patrol waypoint consumed) bumps the epoch and the whole
//! action set is discarded and rebuilt.  Correctness-by-restart instead of
//! incremental plan repair.

pub mod action;
pub mod agent;
pub mod blackboard;
pub mod goal;


pub use action::Action;
pub use agent::Agent;
pub use blackboard::Blackboard;
pub use goal::{CONTROL_POINT_RADIUS, Goal, PATROL_WAYPOINT_RADIUS};
