pub mod edge;
pub mod product;

pub use edge::Edge;
pub use edge::EdgeDB;
pub use product::ProductIndex;

/// Dense index of a product (vertex) inside one network.
pub type VertexId = usize;

/// Stable index of an edge inside an `EdgeDB`.
pub type EdgeId = usize;

/// Machine throughput and flow amounts.
pub type Capacity = u64;
