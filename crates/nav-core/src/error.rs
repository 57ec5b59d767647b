//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `NavError` via `From` impls, or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    /// A "must exist" accessor was called with an id that is not live.
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    /// Every id in the `AgentId` space is in use.  Surfaced as an explicit
    /// error so allocation can never hand out an id that aliases a live agent.
    #[error("agent id space exhausted")]
    AgentCapacityExhausted,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
