use std::cmp::min;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::MaxFlow;
use crate::network::Network;
use crate::types::Capacity;

/// Flow per machine, the result handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub feedstock: String,
    pub final_product: String,
    pub value: Capacity,
    pub machines: BTreeMap<String, Capacity>,
}

impl Assignment {
    /// Edges shared by several machines hand out their flow in record
    /// order, each machine up to its own capacity.
    pub fn from_flow(network: &Network, result: &MaxFlow) -> Assignment {
        let mut machines = BTreeMap::new();
        for (edge, flow) in result.flow.iter() {
            let mut remaining = flow;
            for share in network.machines_on(edge) {
                let assigned = min(remaining, share.capacity);
                remaining -= assigned;
                *machines.entry(share.machine.clone()).or_default() += assigned;
            }
        }
        Assignment {
            feedstock: network.feedstock().to_string(),
            final_product: network.final_product().to_string(),
            // Network::build bounds the source's outgoing capacity by u64::MAX.
            value: Capacity::try_from(result.value).unwrap_or(Capacity::MAX),
            machines,
        }
    }
}
