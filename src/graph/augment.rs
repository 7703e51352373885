use std::cmp::min;

use crate::graph::{residual_capacity, Flow};
use crate::types::{Capacity, EdgeDB, VertexId};

/// Smallest residual capacity along `path`.
///
/// Returns `None` for paths without an edge and for paths containing a pair
/// that is neither an edge nor the reverse of one.
pub fn bottleneck(path: &[VertexId], edges: &EdgeDB, flow: &Flow) -> Option<Capacity> {
    let mut capacity: Option<Capacity> = None;
    for window in path.windows(2) {
        if let [from, to] = window {
            let c = residual_capacity(edges, flow, *from, *to)?;
            capacity = Some(capacity.map_or(c, |current| min(current, c)));
        }
    }
    capacity
}

/// Pushes the bottleneck amount along `path`: forward pairs gain flow,
/// reversed pairs give flow back.
pub fn augment(path: &[VertexId], edges: &EdgeDB, mut flow: Flow) -> Flow {
    let Some(amount) = bottleneck(path, edges, &flow) else {
        return flow;
    };
    for window in path.windows(2) {
        if let [from, to] = window {
            if let Some(id) = edges.find(*from, *to) {
                flow.increase(id, amount);
            } else if let Some(id) = edges.find(*to, *from) {
                flow.decrease(id, amount);
            }
        }
    }
    flow
}
