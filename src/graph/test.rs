#[cfg(test)]
mod test {
    use crate::call_context::CallContext;
    use crate::graph::{compute_flow, MaxFlow, MaxFlowSolver, SolverState};
    use crate::types::{Edge, EdgeDB};

    fn build_edges(vertex_count: usize, input: &[(usize, usize, u64)]) -> EdgeDB {
        EdgeDB::new(
            vertex_count,
            input
                .iter()
                .map(|(from, to, capacity)| Edge {
                    from: *from,
                    to: *to,
                    capacity: *capacity,
                })
                .collect(),
        )
    }

    fn assert_valid_flow(edges: &EdgeDB, source: usize, sink: usize, result: &MaxFlow) {
        assert!(result.flow.respects_capacities(edges));
        assert!(result.flow.is_conserved(edges, source, sink));
        assert_eq!(result.flow.value(edges, source), result.value);
    }

    #[test]
    fn direct() {
        let edges = build_edges(2, &[(0, 1, 10)]);
        let result = compute_flow(&edges, 0, 1, &CallContext::default());
        assert_eq!(result.value, 10);
        assert_eq!(result.flow.get(0), 10);
    }

    #[test]
    fn chain() {
        let edges = build_edges(3, &[(0, 1, 5), (1, 2, 3)]);
        let result = compute_flow(&edges, 0, 2, &CallContext::default());
        assert_eq!(result.value, 3);
        assert_eq!(result.flow.get(0), 3);
        assert_eq!(result.flow.get(1), 3);
        assert_valid_flow(&edges, 0, 2, &result);
    }

    #[test]
    fn diamond() {
        let edges = build_edges(4, &[(0, 1, 2), (1, 3, 5), (0, 2, 6), (2, 3, 2)]);
        let result = compute_flow(&edges, 0, 3, &CallContext::default());
        assert_eq!(result.value, 4);
        assert_valid_flow(&edges, 0, 3, &result);
    }

    #[test]
    fn needs_backward_edge() {
        // The first path found runs 0 -> 1 -> 2 -> 3 and blocks both
        // remaining routes until the middle edge is retracted.
        let edges = build_edges(4, &[(0, 1, 1), (0, 2, 1), (1, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let result = compute_flow(&edges, 0, 3, &CallContext::default());
        assert_eq!(result.value, 2);
        assert_eq!(result.flow.get(2), 0);
        assert_valid_flow(&edges, 0, 3, &result);
    }

    #[test]
    fn min_cut() {
        // Textbook network with the 1 -> 2 edge dropped to keep it
        // anti-symmetric. Minimum cut {1 -> 3, 4 -> 3, 4 -> 5} = 23.
        let edges = build_edges(
            6,
            &[
                (0, 1, 16),
                (0, 2, 13),
                (2, 1, 4),
                (1, 3, 12),
                (3, 2, 9),
                (2, 4, 14),
                (4, 3, 7),
                (3, 5, 20),
                (4, 5, 4),
            ],
        );
        let result = compute_flow(&edges, 0, 5, &CallContext::default());
        assert_eq!(result.value, 23);
        assert_valid_flow(&edges, 0, 5, &result);
    }

    #[test]
    fn disconnected() {
        let edges = build_edges(4, &[(0, 1, 3), (2, 3, 3)]);
        let result = compute_flow(&edges, 0, 3, &CallContext::default());
        assert_eq!(result.value, 0);
        assert_eq!(result.augmentations, 0);
        assert!(result.flow.iter().all(|(_, f)| f == 0));
    }

    #[test]
    fn zero_capacity_edges() {
        let edges = build_edges(3, &[(0, 1, 0), (1, 2, 4)]);
        let result = compute_flow(&edges, 0, 2, &CallContext::default());
        assert_eq!(result.value, 0);
    }

    #[test]
    fn source_is_sink() {
        let edges = build_edges(2, &[(0, 0, 3), (0, 1, 2)]);
        let result = compute_flow(&edges, 0, 0, &CallContext::default());
        assert_eq!(result.value, 0);
        assert!(result.flow.iter().all(|(_, f)| f == 0));
    }

    #[test]
    fn self_loop_is_dead_weight() {
        let edges = build_edges(3, &[(0, 1, 4), (1, 1, 9), (1, 2, 3)]);
        let result = compute_flow(&edges, 0, 2, &CallContext::default());
        assert_eq!(result.value, 3);
        assert_eq!(result.flow.get(1), 0);
    }

    #[test]
    fn parallel_routes_share_a_bottleneck() {
        // Three routes 0 -> {1,2,3} -> 4 -> 5, all through 4 -> 5.
        let edges = build_edges(
            6,
            &[
                (0, 1, 5),
                (0, 2, 5),
                (0, 3, 5),
                (1, 4, 5),
                (2, 4, 5),
                (3, 4, 5),
                (4, 5, 7),
            ],
        );
        let result = compute_flow(&edges, 0, 5, &CallContext::default());
        assert_eq!(result.value, 7);
        assert_valid_flow(&edges, 0, 5, &result);
    }

    #[test]
    fn terminates_within_value_bound() {
        let edges = build_edges(4, &[(0, 1, 100), (0, 2, 100), (1, 2, 1), (1, 3, 100), (2, 3, 100)]);
        let mut solver = MaxFlowSolver::new(&edges, 0, 3);
        let mut steps = 0;
        while solver.step() == SolverState::Searching {
            steps += 1;
            assert!(steps <= 200, "solver did not terminate");
            assert!(solver.flow().respects_capacities(&edges));
        }
        assert_eq!(solver.state(), SolverState::Done);
        assert_eq!(solver.value(), 200);
        assert_eq!(solver.step(), SolverState::Done);
    }

    #[test]
    fn unknown_terminals() {
        let edges = build_edges(2, &[(0, 1, 1)]);
        let result = compute_flow(&edges, 0, 9, &CallContext::default());
        assert_eq!(result.value, 0);
    }

    #[test]
    fn value_beyond_single_capacity() {
        let max = u64::MAX;
        let edges = build_edges(4, &[(0, 1, max), (0, 2, max), (1, 3, max), (2, 3, max)]);
        let result = compute_flow(&edges, 0, 3, &CallContext::default());
        assert_eq!(result.value, 2 * u128::from(max));
        assert_eq!(result.flow.get(0), max);
        assert_eq!(result.flow.get(1), max);
        assert_valid_flow(&edges, 0, 3, &result);
    }
}
