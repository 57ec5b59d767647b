//! `nav-trace` — per-update trace output for the rust_nav framework.
//!
//! The CSV backend creates two files:
//!
//! | File                   | One row per                         |
//! |------------------------|-------------------------------------|
//! | `agent_snapshots.csv`  | live agent per update               |
//! | `update_summaries.csv` | update (replan and search counters) |
//!
//! The backend implements [`TraceWriter`] and is driven by
//! [`TraceObserver`], which implements `nav_sim::AiObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_trace::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! for t in 0..ticks {
//!     system.update_with(SimTime(t * tick_ms), &mut obs);
//! }
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::TraceObserver;
pub use row::{AgentSnapshotRow, UpdateSummaryRow};
pub use writer::TraceWriter;
