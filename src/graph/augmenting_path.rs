use crate::graph::ResidualView;
use crate::types::VertexId;

/// Depth-first search for a simple path from `start` to `end` in the residual
/// graph. Not necessarily a shortest one.
///
/// The search keeps one frame per vertex on the current path, holding the
/// position of the next neighbour to try, so the depth is bounded by the
/// number of vertices without using the call stack.
pub fn find_path(residual: &ResidualView, start: VertexId, end: VertexId) -> Option<Vec<VertexId>> {
    let vertex_count = residual.vertex_count();
    if start >= vertex_count || end >= vertex_count {
        return None;
    }
    let mut path = vec![start];
    if start == end {
        return Some(path);
    }
    let mut on_path = vec![false; vertex_count];
    on_path[start] = true;
    // cursors[i] is the next neighbour index to try from path[i].
    let mut cursors = vec![0usize];
    while let Some(cursor) = cursors.last_mut() {
        let tail = path[path.len() - 1];
        let neighbors = residual.neighbors(tail);
        match neighbors[*cursor..].iter().position(|v| !on_path[*v]) {
            Some(offset) => {
                let next = neighbors[*cursor + offset];
                *cursor += offset + 1;
                path.push(next);
                if next == end {
                    return Some(path);
                }
                on_path[next] = true;
                cursors.push(0);
            }
            None => {
                cursors.pop();
                if let Some(v) = path.pop() {
                    on_path[v] = false;
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::find_path;
    use crate::graph::{residual_edges, Flow};
    use crate::types::{Edge, EdgeDB};

    fn build(vertex_count: usize, edges: &[(usize, usize, u64)]) -> EdgeDB {
        EdgeDB::new(
            vertex_count,
            edges
                .iter()
                .map(|(from, to, capacity)| Edge {
                    from: *from,
                    to: *to,
                    capacity: *capacity,
                })
                .collect(),
        )
    }

    fn assert_valid(path: &[usize], residual: &crate::graph::ResidualView) {
        let mut seen = path.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), path.len(), "path {path:?} repeats a vertex");
        for window in path.windows(2) {
            assert!(residual.contains(window[0], window[1]));
        }
    }

    #[test]
    fn trivial_path() {
        let edges = build(2, &[(0, 1, 1)]);
        let residual = residual_edges(&edges, &Flow::zero(&edges));
        assert_eq!(find_path(&residual, 1, 1), Some(vec![1]));
    }

    #[test]
    fn follows_edges() {
        let edges = build(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let residual = residual_edges(&edges, &Flow::zero(&edges));
        assert_eq!(find_path(&residual, 0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(find_path(&residual, 3, 0), None);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        // 0 -> 1 -> 2 is a dead end, 0 -> 3 -> 4 reaches the target.
        let edges = build(5, &[(0, 1, 1), (1, 2, 1), (0, 3, 1), (3, 4, 1)]);
        let residual = residual_edges(&edges, &Flow::zero(&edges));
        let path = find_path(&residual, 0, 4).unwrap();
        assert_valid(&path, &residual);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&4));
    }

    #[test]
    fn cycles_do_not_trap_the_search() {
        let edges = build(4, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)]);
        let residual = residual_edges(&edges, &Flow::zero(&edges));
        let path = find_path(&residual, 0, 3).unwrap();
        assert_valid(&path, &residual);
        assert_eq!(path.last(), Some(&3));
    }

    #[test]
    fn uses_backward_arcs() {
        let edges = build(4, &[(0, 1, 1), (2, 1, 1), (2, 3, 1)]);
        let flow = Flow(vec![0, 1, 0]);
        let residual = residual_edges(&edges, &flow);
        assert_eq!(find_path(&residual, 0, 3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn unknown_vertices() {
        let edges = build(2, &[(0, 1, 1)]);
        let residual = residual_edges(&edges, &Flow::zero(&edges));
        assert_eq!(find_path(&residual, 0, 7), None);
        assert_eq!(find_path(&residual, 7, 7), None);
    }

    #[test]
    fn long_chain() {
        let n = 100_000;
        let chain = (0..n - 1).map(|i| (i, i + 1, 1)).collect::<Vec<_>>();
        let edges = build(n, &chain);
        let residual = residual_edges(&edges, &Flow::zero(&edges));
        assert_eq!(find_path(&residual, 0, n - 1).map(|p| p.len()), Some(n));
    }
}
