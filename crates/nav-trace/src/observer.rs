//! `TraceObserver<W>` — bridges `AiObserver` to a `TraceWriter`.

use std::collections::BTreeMap;

use nav_agent::Agent;
use nav_core::{AgentId, SimTime};
use nav_graph::SearchStats;
use nav_sim::AiObserver;

use crate::row::{AgentSnapshotRow, UpdateSummaryRow};
use crate::writer::TraceWriter;
use crate::{TraceError, TraceResult};

/// An [`AiObserver`] that writes agent snapshots and update summaries to a
/// [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because observer callbacks
/// have no return value.  After the update loop, check for errors with
/// [`take_error`][Self::take_error] and close the files with
/// [`finish`][Self::finish].
pub struct TraceObserver<W: TraceWriter> {
    writer:         W,
    replans:        u64,
    nodes_examined: u64,
    last_error:     Option<TraceError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            replans: 0,
            nodes_examined: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the update loop.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Flush and close the backend, storing any error for
    /// [`take_error`][Self::take_error].
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> AiObserver for TraceObserver<W> {
    fn on_update_start(&mut self, _now: SimTime) {
        self.replans = 0;
        self.nodes_examined = 0;
    }

    fn on_agent_replanned(&mut self, _agent: AgentId, stats: &SearchStats) {
        self.replans += 1;
        self.nodes_examined += stats.nodes_examined as u64;
    }

    fn on_update_end(&mut self, now: SimTime, agents: &BTreeMap<AgentId, Agent>) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|(&id, agent)| AgentSnapshotRow {
                agent_id: id.0,
                time_ms:  now.0,
                x:        agent.position.x,
                y:        agent.position.y,
                z:        agent.position.z,
                goals:    agent.blackboard.goal_count() as u32,
                actions:  agent.blackboard.action_count() as u32,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let summary = UpdateSummaryRow {
            time_ms:        now.0,
            live_agents:    agents.len() as u64,
            replans:        self.replans,
            nodes_examined: self.nodes_examined,
        };
        let result = self.writer.write_update_summary(&summary);
        self.store_err(result);
    }
}
