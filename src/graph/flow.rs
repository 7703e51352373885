use std::mem;

use crate::call_context::CallContext;
use crate::graph::{augment, bottleneck, find_path, residual_edges, Flow};
use crate::types::{EdgeDB, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Searching,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFlow {
    pub flow: Flow,
    pub value: u128,
    pub augmentations: usize,
}

/// Ford-Fulkerson driven one augmenting path at a time.
pub struct MaxFlowSolver<'a> {
    edges: &'a EdgeDB,
    source: VertexId,
    sink: VertexId,
    flow: Flow,
    value: u128,
    augmentations: usize,
    state: SolverState,
}

impl<'a> MaxFlowSolver<'a> {
    pub fn new(edges: &'a EdgeDB, source: VertexId, sink: VertexId) -> Self {
        MaxFlowSolver {
            edges,
            source,
            sink,
            flow: Flow::zero(edges),
            value: 0,
            augmentations: 0,
            state: SolverState::Searching,
        }
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    /// Augments along one path, or moves to `Done` if there is none.
    pub fn step(&mut self) -> SolverState {
        if self.state == SolverState::Done {
            return self.state;
        }
        let residual = residual_edges(self.edges, &self.flow);
        let amount = find_path(&residual, self.source, self.sink)
            .and_then(|path| bottleneck(&path, self.edges, &self.flow).map(|a| (path, a)));
        match amount {
            Some((path, amount)) if amount > 0 => {
                let flow = mem::take(&mut self.flow);
                self.flow = augment(&path, self.edges, flow);
                self.value += u128::from(amount);
                self.augmentations += 1;
                log::trace!("Augmented {amount} along {} vertices", path.len());
            }
            _ => self.state = SolverState::Done,
        }
        self.state
    }

    pub fn solve(mut self) -> MaxFlow {
        while self.step() == SolverState::Searching {}
        MaxFlow {
            flow: self.flow,
            value: self.value,
            augmentations: self.augmentations,
        }
    }
}

pub fn compute_flow(
    edges: &EdgeDB,
    source: VertexId,
    sink: VertexId,
    call_context: &CallContext,
) -> MaxFlow {
    let result = MaxFlowSolver::new(edges, source, sink).solve();
    call_context.log_message(format!("Max flow: {}", result.value).as_str());
    call_context.log_message(format!("Augmenting paths: {}", result.augmentations).as_str());
    result
}
