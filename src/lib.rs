pub mod call_context;
pub mod error;
pub mod graph;
pub mod io;
pub mod network;
pub mod types;
