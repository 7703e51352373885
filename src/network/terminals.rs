use std::collections::HashSet;

use crate::error::NetworkError;
use crate::network::MachineRecord;
use crate::types::{ProductIndex, VertexId};

// The feedstock is the one product that is consumed but never produced,
// the final product the one that is produced but never consumed.

pub fn deduce_source(records: &[MachineRecord], products: &ProductIndex) -> Result<VertexId, NetworkError> {
    let outputs: HashSet<&str> = records.iter().map(|r| r.output.as_str()).collect();
    let candidates = unique_missing(records.iter().map(|r| r.input.as_str()), &outputs);
    match candidates.as_slice() {
        [source] => products
            .id_of(source)
            .ok_or_else(|| NetworkError::UnknownProduct(source.to_string())),
        _ => Err(NetworkError::NoUniqueSource {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }),
    }
}

pub fn deduce_sink(records: &[MachineRecord], products: &ProductIndex) -> Result<VertexId, NetworkError> {
    let inputs: HashSet<&str> = records.iter().map(|r| r.input.as_str()).collect();
    let candidates = unique_missing(records.iter().map(|r| r.output.as_str()), &inputs);
    match candidates.as_slice() {
        [sink] => products
            .id_of(sink)
            .ok_or_else(|| NetworkError::UnknownProduct(sink.to_string())),
        _ => Err(NetworkError::NoUniqueSink {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }),
    }
}

/// Distinct values of `names` absent from `other`, in first-seen order.
fn unique_missing<'a>(names: impl Iterator<Item = &'a str>, other: &HashSet<&str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names
        .filter(|name| !other.contains(name) && seen.insert(*name))
        .collect()
}
