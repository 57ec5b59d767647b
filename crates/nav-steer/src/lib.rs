//! `nav-steer` — per-tick movement and the goal-to-action executor.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`motion`]   | Three-zone steering law (snap / ease / constant)      |
//! | [`executor`] | `ActionExecutor` — plan derivation + action stepping  |
//!
//! # Movement model
//!
//! One steering law covers all movement, applied per tick against the
//! current sub-target (next path waypoint, or the final goal position once
//! the path is consumed):
//!
//! 1. **Snap** — inside the snap radius the agent lands exactly on the
//!    sub-target.  The radius differs by context: 2.0 while following a
//!    path (waypoints are coarse), 0.1 when walking at the goal itself.
//! 2. **Ease** — inside 6.0, step `min(speed, 0.1 × distance)`: a
//!    decelerating approach.
//! 3. **Constant** — beyond that, step at full speed (0.1 units/tick).

pub mod executor;
pub mod motion;


pub use executor::{ActionExecutor, PlannedAction};
pub use motion::{SNAP_RADIUS_DIRECT, SNAP_RADIUS_PATH, Step, SteeringParams, step_toward};
