use std::io;

use thiserror::Error;

/// Everything that can go wrong between reading machine records and handing
/// a graph to the solver. The solver itself never fails.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed JSON records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing column \"{0}\" in header")]
    MissingColumn(&'static str),

    #[error("Expected Machine,Input,Output,Capacity in row {row}, but got {content}")]
    MalformedRow { row: usize, content: String },

    #[error("Capacity \"{value}\" in row {row} is not a non-negative integer")]
    MalformedCapacity { row: usize, value: String },

    #[error("Combined capacity of {input} -> {output} overflows")]
    CapacityOverflow { input: String, output: String },

    #[error("Capacities leaving {0} add up to more than {max}", max = u64::MAX)]
    SourceCapacityOverflow(String),

    #[error("Duplicate edge {input} -> {output}")]
    DuplicateEdge { input: String, output: String },

    #[error("Edge {input} -> {output} runs against an existing edge {output} -> {input}")]
    AntiParallelEdge { input: String, output: String },

    #[error("Machine \"{0}\" is used for more than one product pair")]
    DuplicateMachine(String),

    #[error("No unique source product (candidates: {candidates:?})")]
    NoUniqueSource { candidates: Vec<String> },

    #[error("No unique sink product (candidates: {candidates:?})")]
    NoUniqueSink { candidates: Vec<String> },

    #[error("Unknown product \"{0}\"")]
    UnknownProduct(String),

    #[error("No machine records")]
    EmptyNetwork,
}
