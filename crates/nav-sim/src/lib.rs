//! `nav-sim` — the `AiSystem` orchestrator for the rust_nav framework.
//!
//! # Per-tick pipeline
//!
//! ```text
//! for each live agent, in ascending AgentId order:
//!   ① Progress  — advance goal-internal state (patrol waypoints).
//!   ② Retire    — remove every satisfied goal.
//!   ③ Invalidate— if the goal set changed, discard the whole action set.
//!   ④ Plan      — goals but no actions? derive one action from the
//!                 primary goal (snap to waypoints, A* between them).
//!                 Skipped on a tick that retired a goal; the rebuild
//!                 waits for the next update.
//!   ⑤ Steer     — advance actions in insertion order, moving the agent.
//! ```
//!
//! # Threading model
//!
//! Single-threaded, cooperative, step-based: the outer loop calls
//! [`AiSystem::update`] once per simulation tick and all agent state is
//! mutated only there or in the explicit setters, on the same thread.  The
//! navigation graph is read-only for the system's whole lifetime.

pub mod observer;
pub mod system;

#[cfg(test)]
mod tests;

pub use observer::{AiObserver, NoopObserver};
pub use system::AiSystem;
