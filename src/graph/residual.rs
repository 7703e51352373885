use crate::graph::Flow;
use crate::types::{Capacity, EdgeDB, VertexId};

/// The arcs along which flow can still be pushed: forward arcs of edges with
/// spare capacity and backward arcs of edges that carry flow.
#[derive(Debug, Clone)]
pub struct ResidualView {
    neighbors: Vec<Vec<VertexId>>,
}

impl ResidualView {
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Residual out-neighbours of `from`, ascending by vertex id.
    pub fn neighbors(&self, from: VertexId) -> &[VertexId] {
        self.neighbors.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        self.neighbors(from).binary_search(&to).is_ok()
    }

    pub fn arcs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(from, out)| out.iter().map(move |to| (from, *to)))
    }
}

pub fn residual_edges(edges: &EdgeDB, flow: &Flow) -> ResidualView {
    let mut neighbors: Vec<Vec<VertexId>> = vec![Vec::new(); edges.vertex_count()];
    for (id, edge) in edges.edges().iter().enumerate() {
        let f = flow.get(id);
        if f < edge.capacity {
            neighbors[edge.from].push(edge.to);
        }
        if f > 0 {
            neighbors[edge.to].push(edge.from);
        }
    }
    for out in &mut neighbors {
        out.sort_unstable();
        out.dedup();
    }
    ResidualView { neighbors }
}

/// Spare capacity of the residual pair `from -> to`, or `None` if neither
/// `from -> to` nor `to -> from` is an edge.
pub fn residual_capacity(
    edges: &EdgeDB,
    flow: &Flow,
    from: VertexId,
    to: VertexId,
) -> Option<Capacity> {
    if let Some(id) = edges.find(from, to) {
        return Some(edges.capacity(id) - flow.get(id));
    }
    edges.find(to, from).map(|id| flow.get(id))
}
