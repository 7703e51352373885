use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::call_context::CallContext;
use crate::error::NetworkError;
use crate::graph::compute_flow;
use crate::types::{Capacity, Edge, EdgeDB, EdgeId, ProductIndex, VertexId};

mod assignment;
mod terminals;

pub use crate::network::assignment::Assignment;
use crate::network::terminals::{deduce_sink, deduce_source};

/// One machine: converts `input` into `output` at up to `capacity` per unit
/// of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineRecord {
    pub machine: String,
    pub input: String,
    pub output: String,
    pub capacity: Capacity,
}

/// What to do with several records for the same input -> output pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    /// The later record replaces the earlier one, machine label included.
    LastWins,
    /// Capacities add up; the machines share the edge.
    Sum,
}

#[derive(Debug, Default, Clone)]
pub struct BuildOptions {
    pub duplicates: DuplicatePolicy,
    /// Overrides the deduced feedstock.
    pub source: Option<String>,
    /// Overrides the deduced final product.
    pub sink: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineShare {
    pub machine: String,
    pub capacity: Capacity,
}

#[derive(Debug, Clone)]
pub struct Network {
    products: ProductIndex,
    edges: EdgeDB,
    // Machines per edge id, in record order.
    machines: Vec<Vec<MachineShare>>,
    source: VertexId,
    sink: VertexId,
}

impl Network {
    pub fn build(records: &[MachineRecord], options: &BuildOptions) -> Result<Network, NetworkError> {
        if records.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }
        let mut products = ProductIndex::new();
        let mut edges: Vec<Edge> = Vec::new();
        let mut machines: Vec<Vec<MachineShare>> = Vec::new();
        let mut pair_index: HashMap<(VertexId, VertexId), EdgeId> = HashMap::new();
        let mut machine_pairs: HashMap<&str, (VertexId, VertexId)> = HashMap::new();

        for record in records {
            let from = products.intern(&record.input);
            let to = products.intern(&record.output);
            let share = MachineShare {
                machine: record.machine.clone(),
                capacity: record.capacity,
            };

            if let Some(pair) = machine_pairs.insert(record.machine.as_str(), (from, to)) {
                if pair != (from, to) {
                    return Err(NetworkError::DuplicateMachine(record.machine.clone()));
                }
            }

            if from != to && pair_index.contains_key(&(to, from)) {
                return Err(NetworkError::AntiParallelEdge {
                    input: record.input.clone(),
                    output: record.output.clone(),
                });
            }

            let Some(&id) = pair_index.get(&(from, to)) else {
                pair_index.insert((from, to), edges.len());
                edges.push(Edge {
                    from,
                    to,
                    capacity: record.capacity,
                });
                machines.push(vec![share]);
                continue;
            };
            match options.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(NetworkError::DuplicateEdge {
                        input: record.input.clone(),
                        output: record.output.clone(),
                    });
                }
                DuplicatePolicy::LastWins => {
                    for evicted in &machines[id] {
                        if evicted.machine != record.machine {
                            machine_pairs.remove(evicted.machine.as_str());
                        }
                    }
                    edges[id].capacity = record.capacity;
                    machines[id] = vec![share];
                }
                DuplicatePolicy::Sum => {
                    edges[id].capacity = edges[id]
                        .capacity
                        .checked_add(record.capacity)
                        .ok_or_else(|| NetworkError::CapacityOverflow {
                            input: record.input.clone(),
                            output: record.output.clone(),
                        })?;
                    machines[id].push(share);
                }
            }
        }

        let source = match &options.source {
            Some(name) => lookup(&products, name)?,
            None => deduce_source(records, &products)?,
        };
        let sink = match &options.sink {
            Some(name) => lookup(&products, name)?,
            None => deduce_sink(records, &products)?,
        };

        let edges = EdgeDB::new(products.len(), edges);
        // The flow value is bounded by what leaves the source.
        edges
            .outgoing(source)
            .iter()
            .try_fold(0, |total: Capacity, e| total.checked_add(edges.capacity(*e)))
            .ok_or_else(|| NetworkError::SourceCapacityOverflow(products.name_of(source).to_string()))?;

        Ok(Network {
            edges,
            products,
            machines,
            source,
            sink,
        })
    }

    pub fn edges(&self) -> &EdgeDB {
        &self.edges
    }

    pub fn products(&self) -> &ProductIndex {
        &self.products
    }

    pub fn machines_on(&self, edge: EdgeId) -> &[MachineShare] {
        &self.machines[edge]
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn sink(&self) -> VertexId {
        self.sink
    }

    pub fn feedstock(&self) -> &str {
        self.products.name_of(self.source)
    }

    pub fn final_product(&self) -> &str {
        self.products.name_of(self.sink)
    }

    /// Solves max flow from feedstock to final product and reports it per
    /// machine.
    pub fn optimise(&self, call_context: &CallContext) -> Assignment {
        call_context.log_message(
            format!(
                "{} products, {} edges, {} -> {}",
                self.products.len(),
                self.edges.edge_count(),
                self.feedstock(),
                self.final_product()
            )
            .as_str(),
        );
        let result = compute_flow(&self.edges, self.source, self.sink, call_context);
        Assignment::from_flow(self, &result)
    }
}

fn lookup(products: &ProductIndex, name: &str) -> Result<VertexId, NetworkError> {
    products
        .id_of(name)
        .ok_or_else(|| NetworkError::UnknownProduct(name.to_string()))
}
