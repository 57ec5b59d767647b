//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `update_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{AgentSnapshotRow, TraceResult, UpdateSummaryRow};

/// Writes trace output to two CSV files.
pub struct CsvTraceWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "time_ms", "x", "y", "z", "goals", "actions"])?;

        let mut summaries = Writer::from_path(dir.join("update_summaries.csv"))?;
        summaries.write_record(["time_ms", "live_agents", "replans", "nodes_examined"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> TraceResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.time_ms.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.goals.to_string(),
                row.actions.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_update_summary(&mut self, row: &UpdateSummaryRow) -> TraceResult<()> {
        self.summaries.write_record(&[
            row.time_ms.to_string(),
            row.live_agents.to_string(),
            row.replans.to_string(),
            row.nodes_examined.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
