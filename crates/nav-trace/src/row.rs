//! Plain data row types written by trace backends.

/// A snapshot of one agent's state at the end of an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u16,
    pub time_ms:  u64,
    pub x:        f32,
    pub y:        f32,
    pub z:        f32,
    /// Queued goals after this update's retirements.
    pub goals:    u32,
    /// Active actions after this update's replanning.
    pub actions:  u32,
}

/// Summary statistics for one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSummaryRow {
    pub time_ms:        u64,
    pub live_agents:    u64,
    /// Graph searches run during this update.
    pub replans:        u64,
    /// Nodes examined across all of this update's searches.
    pub nodes_examined: u64,
}
