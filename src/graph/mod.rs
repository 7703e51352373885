use crate::types::{Capacity, EdgeDB, EdgeId, VertexId};

mod augment;
mod augmenting_path;
mod flow;
mod residual;
mod test;

pub use crate::graph::augment::{augment, bottleneck};
pub use crate::graph::augmenting_path::find_path;
pub use crate::graph::flow::{compute_flow, MaxFlow, MaxFlowSolver, SolverState};
pub use crate::graph::residual::{residual_capacity, residual_edges, ResidualView};

// A flow assigns each edge of an EdgeDB an amount, indexed by edge id.
// Every operation in this module keeps 0 <= flow(e) <= capacity(e).
// Sums over several edges are u128 so they cannot overflow.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flow(Vec<Capacity>);

impl Flow {
    pub fn zero(edges: &EdgeDB) -> Flow {
        Flow(vec![0; edges.edge_count()])
    }

    pub fn get(&self, edge: EdgeId) -> Capacity {
        self.0[edge]
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, Capacity)> + '_ {
        self.0.iter().copied().enumerate()
    }

    fn increase(&mut self, edge: EdgeId, amount: Capacity) {
        self.0[edge] += amount;
    }

    fn decrease(&mut self, edge: EdgeId, amount: Capacity) {
        self.0[edge] -= amount;
    }

    pub(crate) fn outflow(&self, edges: &EdgeDB, vertex: VertexId) -> u128 {
        edges.outgoing(vertex).iter().map(|e| u128::from(self.get(*e))).sum()
    }

    pub(crate) fn inflow(&self, edges: &EdgeDB, vertex: VertexId) -> u128 {
        edges.incoming(vertex).iter().map(|e| u128::from(self.get(*e))).sum()
    }

    /// Net amount leaving `source`.
    pub(crate) fn value(&self, edges: &EdgeDB, source: VertexId) -> u128 {
        self.outflow(edges, source)
            .saturating_sub(self.inflow(edges, source))
    }

    pub(crate) fn respects_capacities(&self, edges: &EdgeDB) -> bool {
        self.0.len() == edges.edge_count()
            && self.iter().all(|(e, f)| f <= edges.capacity(e))
    }

    /// Inflow equals outflow at every vertex except `source` and `sink`.
    pub(crate) fn is_conserved(&self, edges: &EdgeDB, source: VertexId, sink: VertexId) -> bool {
        (0..edges.vertex_count())
            .filter(|v| *v != source && *v != sink)
            .all(|v| self.inflow(edges, v) == self.outflow(edges, v))
    }
}
