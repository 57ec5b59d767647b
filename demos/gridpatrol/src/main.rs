//! `gridpatrol` — agents navigating a jittered 10×10 waypoint grid over
//! rolling terrain.
//!
//! One squad of agents converges on a control point in the far corner while
//! a lone agent patrols the grid perimeter.  Per-update traces are written
//! to `output/gridpatrol/`.
//!
//! Run with:
//!   cargo run -p gridpatrol --release
//!
//! Set `RUST_LOG=debug` to watch goal retirements and replans.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use nav_agent::Goal;
use nav_core::{Quat, SimTime, Vec3};
use nav_graph::{
    GridSpec, NavGraph, SearchConfig, astar, jittered_grid, straight_distance_heuristic,
};
use nav_sim::AiSystem;
use nav_trace::{CsvTraceWriter, TraceObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const SQUAD_SIZE:    u16 = 4;
const TICK_MS:       u64 = 100;
const TOTAL_TICKS:   u64 = 6_000;

// ── Terrain ───────────────────────────────────────────────────────────────────

/// Rolling hills: smooth, bounded, and cheap to sample.
fn terrain_height(x: f32, z: f32) -> f32 {
    2.0 * ((x * 0.05).sin() + (z * 0.05).cos())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== rust_nav  gridpatrol — squad + patrol over a jittered grid ===");
    println!("Seed: {SEED}  |  Squad: {SQUAD_SIZE}  |  Ticks: {TOTAL_TICKS}");
    println!();

    // 1. Waypoint grid.
    let spec = GridSpec::default();
    let mut rng = SmallRng::seed_from_u64(SEED);
    let (positions, edges) = jittered_grid(&spec, terrain_height, &mut rng);
    let graph = NavGraph::from_positions_and_edges(&positions, &edges);
    println!(
        "Waypoint graph: {} nodes, {} edges ({}x{} grid, spacing {})",
        graph.node_count(),
        graph.edge_count(),
        spec.width,
        spec.height,
        spec.spacing,
    );

    // 2. Planner dry run across the full diagonal.
    let near = positions[0];
    let far = positions[positions.len() - 1];
    let from = graph.closest_node(near).expect("graph is non-empty");
    let to = graph.closest_node(far).expect("graph is non-empty");
    let result = astar(&graph, from, to, straight_distance_heuristic, &SearchConfig::default());
    println!();
    println!("Dry run {from} -> {to}: {:?}", result.outcome);
    println!("  nodes examined: {}", result.stats.nodes_examined);
    println!("  nodes pending:  {}", result.stats.nodes_pending);
    println!("  nodes opened:   {}", result.stats.nodes_opened);
    println!("  route length:   {}", result.stats.route_len);
    println!("  route cost:     {:.2}", result.stats.route_cost);
    println!();

    // 3. AI system: a squad heading for the far corner, plus one patroller.
    let mut sys = AiSystem::new(graph);
    for i in 0..SQUAD_SIZE {
        let start = near + Vec3::new(i as f32 * 2.0, 0.0, 0.0);
        let id = sys.add_agent(start, Quat::IDENTITY)?;
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: far });
    }

    let corner = |ix: usize| positions[ix];
    let w = spec.width as usize;
    let h = spec.height as usize;
    let patroller = sys.add_agent(corner(0), Quat::IDENTITY)?;
    sys.add_agent_goal(
        patroller,
        Goal::patrol([
            corner(w - 1),           // north-east
            corner(w * h - 1),       // south-east
            corner(w * (h - 1)),     // south-west
            corner(0),               // home
        ]),
    );

    // 4. Trace output.
    let out_dir = Path::new("output/gridpatrol");
    std::fs::create_dir_all(out_dir)?;
    let writer = CsvTraceWriter::new(out_dir)?;
    let mut obs = TraceObserver::new(writer);

    // 5. Run.
    let start = Instant::now();
    for t in 0..TOTAL_TICKS {
        sys.update_with(SimTime(t * TICK_MS), &mut obs);
    }
    obs.finish();
    if let Some(e) = obs.take_error() {
        eprintln!("trace error: {e}");
    }

    // 6. Summary.
    let elapsed = start.elapsed().as_secs_f64();
    println!("Simulated {TOTAL_TICKS} ticks in {elapsed:.3}s");
    println!();
    for id in sys.agent_ids().collect::<Vec<_>>() {
        let pos = sys.agent_position(id)?;
        println!(
            "  {id}: pos=({:.1}, {:.1}, {:.1})  goals={}  actions={}",
            pos.x,
            pos.y,
            pos.z,
            sys.agent_goal_count(id),
            sys.agent_action_count(id),
        );
    }
    println!();
    println!("Traces written to {}", out_dir.display());

    Ok(())
}
