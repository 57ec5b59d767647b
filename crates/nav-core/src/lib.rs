//! `nav-core` — foundational types for the `rust_nav` agent navigation
//! framework.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `glam` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`ids`]    | `AgentId`, `NodeId`                              |
//! | [`math`]   | `Vec3`/`Quat` re-exports, `approx_eq`            |
//! | [`time`]   | `SimTime` (milliseconds of simulation time)      |
//! | [`error`]  | `NavError`, `NavResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the ID/time types. |

pub mod error;
pub mod ids;
pub mod math;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use ids::{AgentId, NodeId};
pub use math::{Quat, Vec3, approx_eq};
pub use time::SimTime;
