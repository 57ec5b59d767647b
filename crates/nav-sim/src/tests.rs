//! Unit tests for nav-sim.

#[cfg(test)]
mod ids {
    use nav_core::{AgentId, NavError, Quat, Vec3};
    use nav_graph::NavGraph;

    use crate::AiSystem;

    fn system() -> AiSystem {
        AiSystem::new(NavGraph::empty())
    }

    #[test]
    fn ids_are_issued_ascending_from_zero() {
        let mut sys = system();
        for expected in 0..4u16 {
            let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
            assert_eq!(id, AgentId(expected));
        }
        assert_eq!(sys.agent_count(), 4);
    }

    #[test]
    fn smallest_free_id_is_reused() {
        let mut sys = system();
        for _ in 0..3 {
            sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        }
        sys.remove_agent(AgentId(1));

        assert_eq!(sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap(), AgentId(1));
        assert_eq!(sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap(), AgentId(3));
    }

    #[test]
    fn remove_unknown_is_a_no_op() {
        let mut sys = system();
        sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.remove_agent(AgentId(42));
        assert_eq!(sys.agent_count(), 1);
    }

    #[test]
    fn unknown_id_position_is_an_error() {
        let sys = system();
        match sys.agent_position(AgentId(7)) {
            Err(NavError::AgentNotFound(id)) => assert_eq!(id, AgentId(7)),
            other => panic!("expected AgentNotFound, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod queries {
    use nav_agent::Goal;
    use nav_core::{AgentId, Quat, Vec3};
    use nav_graph::NavGraph;

    use crate::AiSystem;

    #[test]
    fn transform_setter_round_trips() {
        let mut sys = AiSystem::new(NavGraph::empty());
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();

        let pos = Vec3::new(1.0, 2.0, 3.0);
        sys.set_agent_position_and_rotation(id, pos, Quat::IDENTITY);
        assert_eq!(sys.agent_position(id).unwrap(), pos);
    }

    #[test]
    fn setters_tolerate_unknown_ids() {
        let mut sys = AiSystem::new(NavGraph::empty());
        let ghost = AgentId(9);

        sys.set_agent_position_and_rotation(ghost, Vec3::ONE, Quat::IDENTITY);
        sys.add_agent_goal(ghost, Goal::TakeCover);

        assert_eq!(sys.agent_count(), 0);
        assert_eq!(sys.agent_goal_count(ghost), 0);
        assert_eq!(sys.agent_action_count(ghost), 0);
        assert_eq!(sys.agent_goal_position(ghost), None);
    }

    #[test]
    fn goal_position_reflects_primary_goal() {
        let mut sys = AiSystem::new(NavGraph::empty());
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();

        assert_eq!(sys.agent_goal_position(id), None);

        let point = Vec3::new(5.0, 0.0, 5.0);
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: point });
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: Vec3::ONE });

        // The first queued goal stays primary.
        assert_eq!(sys.agent_goal_position(id), Some(point));
        assert_eq!(sys.agent_goal_count(id), 2);
    }

    #[test]
    fn positionless_goal_has_no_goal_position() {
        let mut sys = AiSystem::new(NavGraph::empty());
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeCover);
        assert_eq!(sys.agent_goal_position(id), None);
    }
}

#[cfg(test)]
mod pipeline {
    use nav_agent::Goal;
    use nav_core::{Quat, SimTime, Vec3};
    use nav_graph::{NavGraph, NavGraphBuilder};

    use crate::AiSystem;

    /// Straight line of 4 nodes at 10-unit spacing: 0 — 1 — 2 — 3.
    fn line_graph() -> NavGraph {
        let mut b = NavGraphBuilder::new();
        let n: Vec<_> = (0..4)
            .map(|i| b.add_node(Vec3::new(10.0 * i as f32, 0.0, 0.0)))
            .collect();
        for w in n.windows(2) {
            b.add_link(w[0], w[1]);
        }
        b.build()
    }

    fn run_ticks(sys: &mut AiSystem, ticks: u64) {
        for t in 0..ticks {
            sys.update(SimTime(t * 100));
        }
    }

    #[test]
    fn goal_produces_one_action() {
        let mut sys = AiSystem::new(line_graph());
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: Vec3::new(30.0, 0.0, 0.0) });

        sys.update(SimTime::ZERO);
        assert_eq!(sys.agent_action_count(id), 1);

        // The plan persists across ticks while the goal set is unchanged.
        sys.update(SimTime(100));
        assert_eq!(sys.agent_action_count(id), 1);
    }

    #[test]
    fn agent_converges_on_control_point() {
        let target = Vec3::new(30.0, 0.0, 0.0);
        let mut sys = AiSystem::new(line_graph());
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: target });

        // Speed 0.1/tick over 30 units, plus easing near the end.
        run_ticks(&mut sys, 500);

        let pos = sys.agent_position(id).unwrap();
        assert!(pos.distance(target) < 1.0, "agent stalled at {pos}");
        // Arrival retires the goal, which invalidates its action.
        assert_eq!(sys.agent_goal_count(id), 0);
        assert_eq!(sys.agent_action_count(id), 0);
    }

    #[test]
    fn agent_crosses_unit_grid_corner_to_corner() {
        // 3×3 grid at unit spacing; node z * 3 + x sits at (x, 0, z).
        let mut positions = Vec::new();
        for z in 0..3u32 {
            for x in 0..3u32 {
                positions.push(Vec3::new(x as f32, 0.0, z as f32));
            }
        }
        let mut edges = Vec::new();
        for z in 0..3u32 {
            for x in 0..3u32 {
                let here = z * 3 + x;
                if x < 2 {
                    edges.push((here, here + 1));
                    edges.push((here + 1, here));
                }
                if z < 2 {
                    edges.push((here, here + 3));
                    edges.push((here + 3, here));
                }
            }
        }
        let graph = NavGraph::from_positions_and_edges(&positions, &edges);

        let target = Vec3::new(2.0, 0.0, 2.0);
        let mut sys = AiSystem::new(graph);
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: target });

        run_ticks(&mut sys, 50);

        assert!(sys.agent_position(id).unwrap().distance(target) < 1.0);
        assert_eq!(sys.agent_goal_count(id), 0);
    }

    #[test]
    fn retirement_leaves_actions_empty_until_next_tick() {
        let mut sys = AiSystem::new(line_graph());
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        // Goal A is already satisfied (0.5 away); goal B is far.
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: Vec3::new(0.5, 0.0, 0.0) });
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: Vec3::new(30.0, 0.0, 0.0) });

        // The retirement tick ends with the action set empty; the surviving
        // goal is not planned for until the following update.
        sys.update(SimTime::ZERO);
        assert_eq!(sys.agent_goal_count(id), 1);
        assert_eq!(sys.agent_action_count(id), 0);

        sys.update(SimTime(100));
        assert_eq!(sys.agent_action_count(id), 1);
    }

    #[test]
    fn new_goal_invalidates_existing_actions() {
        let mut sys = AiSystem::new(line_graph());
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: Vec3::new(30.0, 0.0, 0.0) });
        sys.update(SimTime::ZERO);
        assert_eq!(sys.agent_action_count(id), 1);

        // Mutating the goal set discards the whole action set; the next
        // update replans from scratch for the (unchanged) primary goal.
        sys.add_agent_goal(id, Goal::TakeCover);
        sys.update(SimTime(100));
        assert_eq!(sys.agent_action_count(id), 1);
        assert_eq!(sys.agent_goal_count(id), 2);
    }

    #[test]
    fn unroutable_goal_still_converges_direct() {
        // Two disconnected islands; no route exists between them.
        let mut b = NavGraphBuilder::new();
        b.add_node(Vec3::ZERO);
        b.add_node(Vec3::new(40.0, 0.0, 0.0));
        let mut sys = AiSystem::new(b.build());

        let target = Vec3::new(40.0, 0.0, 0.0);
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: target });

        run_ticks(&mut sys, 600);
        assert!(sys.agent_position(id).unwrap().distance(target) < 1.0);
        assert_eq!(sys.agent_goal_count(id), 0);
    }

    #[test]
    fn patrol_visits_waypoints_in_order() {
        let mut sys = AiSystem::new(line_graph());
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        let a = Vec3::new(10.0, 0.0, 0.0);
        let b = Vec3::new(20.0, 0.0, 0.0);
        sys.add_agent_goal(id, Goal::patrol([a, b]));

        // Enough ticks to cross both 10-unit legs with easing.
        run_ticks(&mut sys, 600);

        let pos = sys.agent_position(id).unwrap();
        assert!(pos.distance(b) < 1.0, "agent at {pos}, expected near {b}");
        // Consuming the last waypoint satisfies and retires the patrol.
        assert_eq!(sys.agent_goal_count(id), 0);
    }

    #[test]
    fn satisfied_goal_is_retired_without_planning() {
        let mut sys = AiSystem::new(line_graph());
        let target = Vec3::new(0.5, 0.0, 0.0);
        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: target });

        // Already inside the control-point radius: retired on the first tick.
        sys.update(SimTime::ZERO);
        assert_eq!(sys.agent_goal_count(id), 0);
        assert_eq!(sys.agent_action_count(id), 0);
    }
}

#[cfg(test)]
mod observer {
    use std::collections::BTreeMap;

    use nav_agent::{Agent, Goal};
    use nav_core::{AgentId, Quat, SimTime, Vec3};
    use nav_graph::{NavGraphBuilder, SearchStats};

    use crate::{AiObserver, AiSystem};

    #[derive(Default)]
    struct Recorder {
        starts: Vec<SimTime>,
        replans: Vec<(AgentId, usize)>,
        last_agent_count: usize,
    }

    impl AiObserver for Recorder {
        fn on_update_start(&mut self, now: SimTime) {
            self.starts.push(now);
        }

        fn on_agent_replanned(&mut self, agent: AgentId, stats: &SearchStats) {
            self.replans.push((agent, stats.nodes_examined));
        }

        fn on_update_end(&mut self, _now: SimTime, agents: &BTreeMap<AgentId, Agent>) {
            self.last_agent_count = agents.len();
        }
    }

    #[test]
    fn observer_sees_each_replan_once() {
        let mut b = NavGraphBuilder::new();
        let n0 = b.add_node(Vec3::ZERO);
        let n1 = b.add_node(Vec3::new(10.0, 0.0, 0.0));
        b.add_link(n0, n1);
        let mut sys = AiSystem::new(b.build());

        let id = sys.add_agent(Vec3::ZERO, Quat::IDENTITY).unwrap();
        sys.add_agent_goal(id, Goal::TakeControlPoint { position: Vec3::new(10.0, 0.0, 0.0) });

        let mut rec = Recorder::default();
        sys.update_with(SimTime::ZERO, &mut rec);
        sys.update_with(SimTime(100), &mut rec);

        assert_eq!(rec.starts, vec![SimTime::ZERO, SimTime(100)]);
        // One search on the first tick; the cached plan is reused after.
        assert_eq!(rec.replans.len(), 1);
        assert_eq!(rec.replans[0].0, id);
        assert!(rec.replans[0].1 > 0);
        assert_eq!(rec.last_agent_count, 1);
    }
}
