use crate::types::{Capacity, EdgeId, VertexId};

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub capacity: Capacity,
}

/// Arena of edges with per-vertex adjacency lists.
///
/// Edge ids are the positions in the arena and never change once the
/// database is built.
#[derive(Debug, Default, Clone)]
pub struct EdgeDB {
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
}

impl EdgeDB {
    /// Panics if an edge refers to a vertex outside `0..vertex_count`.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> EdgeDB {
        let outgoing = outgoing_index(vertex_count, &edges);
        let incoming = incoming_index(vertex_count, &edges);
        EdgeDB {
            edges,
            outgoing,
            incoming,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edges(&self) -> &Vec<Edge> {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn capacity(&self, id: EdgeId) -> Capacity {
        self.edges[id].capacity
    }

    pub fn outgoing(&self, source: VertexId) -> &[EdgeId] {
        self.outgoing.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn incoming(&self, to: VertexId) -> &[EdgeId] {
        self.incoming.get(to).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The id of the edge `from -> to`, if there is one.
    pub fn find(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.outgoing(from)
            .iter()
            .copied()
            .find(|i| self.edges[*i].to == to)
    }
}

fn outgoing_index(vertex_count: usize, edges: &[Edge]) -> Vec<Vec<EdgeId>> {
    let mut index: Vec<Vec<EdgeId>> = vec![Vec::new(); vertex_count];
    for (i, e) in edges.iter().enumerate() {
        index[e.from].push(i)
    }
    index
}

fn incoming_index(vertex_count: usize, edges: &[Edge]) -> Vec<Vec<EdgeId>> {
    let mut index: Vec<Vec<EdgeId>> = vec![Vec::new(); vertex_count];
    for (i, e) in edges.iter().enumerate() {
        index[e.to].push(i)
    }
    index
}
