//! Integration tests for nav-trace.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvTraceWriter;
    use crate::row::{AgentSnapshotRow, UpdateSummaryRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u16, time_ms: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            time_ms,
            x: agent_id as f32,
            y: 0.0,
            z: 0.0,
            goals: 1,
            actions: 1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("update_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "time_ms", "x", "y", "z", "goals", "actions"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("update_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["time_ms", "live_agents", "replans", "nodes_examined"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 100), snap_row(1, 100), snap_row(2, 100)])
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0"); // agent_id
        assert_eq!(&rows[0][1], "100"); // time_ms
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[2][0], "2");
    }

    #[test]
    fn csv_update_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_update_summary(&UpdateSummaryRow {
            time_ms: 300,
            live_agents: 4,
            replans: 2,
            nodes_examined: 17,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("update_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "300");
        assert_eq!(&rows[0][1], "4");
        assert_eq!(&rows[0][2], "2");
        assert_eq!(&rows[0][3], "17");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use nav_agent::Goal;
        use nav_core::{Quat, SimTime, Vec3};
        use nav_graph::NavGraphBuilder;
        use nav_sim::AiSystem;

        use crate::observer::TraceObserver;

        let mut b = NavGraphBuilder::new();
        let n0 = b.add_node(Vec3::ZERO);
        let n1 = b.add_node(Vec3::new(10.0, 0.0, 0.0));
        b.add_link(n0, n1);
        let mut sys = AiSystem::new(b.build());

        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: Vec3::new(10.0, 0.0, 0.0) });

        let dir = tmp();
        let writer = CsvTraceWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::new(writer);
        for t in 0..5u64 {
            sys.update_with(SimTime(t * 100), &mut obs);
        }
        obs.finish();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // 5 updates × 1 agent = 5 snapshot rows.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);

        // One search on the first update, none after.
        let mut rdr2 = csv::Reader::from_path(dir.path().join("update_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 5);
        assert_eq!(&summaries[0][2], "1"); // replans
        assert_eq!(&summaries[1][2], "0");
    }
}
