use std::fs::{read_to_string, File};
use std::io::{BufRead, BufReader};
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::NetworkError;
use crate::network::MachineRecord;
use crate::types::Capacity;

const COLUMNS: [&str; 4] = ["Machine", "Input", "Output", "Capacity"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

pub fn read_records(path: &str, format: InputFormat) -> Result<Vec<MachineRecord>, NetworkError> {
    match format {
        InputFormat::Csv => read_records_csv(path),
        InputFormat::Json => read_records_json(path),
    }
}

pub fn read_records_csv(path: &str) -> Result<Vec<MachineRecord>, NetworkError> {
    parse_records_csv(BufReader::new(File::open(path)?))
}

/// Reads records from CSV with a header row naming the Machine, Input,
/// Output and Capacity columns in any order. Other columns are ignored.
/// Cells are split on every comma, so quoted cells cannot contain commas.
pub fn parse_records_csv(input: impl BufRead) -> Result<Vec<MachineRecord>, NetworkError> {
    let mut columns: Option<[usize; 4]> = None;
    let mut records = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let row = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields = line.split(',').map(unescape).collect::<Vec<_>>();
        let Some([machine_at, input_at, output_at, capacity_at]) = columns else {
            columns = Some(header_columns(&fields)?);
            continue;
        };
        match (
            fields.get(machine_at),
            fields.get(input_at),
            fields.get(output_at),
            fields.get(capacity_at),
        ) {
            (Some(machine), Some(input), Some(output), Some(capacity)) => {
                records.push(MachineRecord {
                    machine: machine.to_string(),
                    input: input.to_string(),
                    output: output.to_string(),
                    capacity: parse_capacity(row, capacity)?,
                });
            }
            _ => {
                return Err(NetworkError::MalformedRow {
                    row,
                    content: line.clone(),
                })
            }
        }
    }
    Ok(records)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCapacity {
    Number(Capacity),
    Text(String),
}

#[derive(Deserialize)]
struct JsonRecord {
    machine: String,
    input: String,
    output: String,
    capacity: JsonCapacity,
}

pub fn read_records_json(path: &str) -> Result<Vec<MachineRecord>, NetworkError> {
    parse_records_json(&read_to_string(path)?)
}

/// Reads a JSON array of `{machine, input, output, capacity}` objects.
/// Capacities may be numbers or decimal strings.
pub fn parse_records_json(contents: &str) -> Result<Vec<MachineRecord>, NetworkError> {
    let records: Vec<JsonRecord> = serde_json::from_str(contents)?;
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let capacity = match r.capacity {
                JsonCapacity::Number(c) => c,
                JsonCapacity::Text(text) => parse_capacity(i + 1, &text)?,
            };
            Ok(MachineRecord {
                machine: r.machine,
                input: r.input,
                output: r.output,
                capacity,
            })
        })
        .collect()
}

fn header_columns(fields: &[&str]) -> Result<[usize; 4], NetworkError> {
    let mut indices = [0; 4];
    for (index, name) in indices.iter_mut().zip(COLUMNS) {
        *index = fields
            .iter()
            .position(|f| *f == name)
            .ok_or(NetworkError::MissingColumn(name))?;
    }
    Ok(indices)
}

fn parse_capacity(row: usize, text: &str) -> Result<Capacity, NetworkError> {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    let decimal = DECIMAL.get_or_init(|| Regex::new(r"^[0-9]+$").unwrap());
    let malformed = || NetworkError::MalformedCapacity {
        row,
        value: text.to_string(),
    };
    if !decimal.is_match(text) {
        return Err(malformed());
    }
    text.parse().map_err(|_| malformed())
}

fn unescape(input: &str) -> &str {
    let input = input.trim();
    match input.chars().next() {
        Some(quote @ ('"' | '\'')) if input.len() >= 2 && input.ends_with(quote) => {
            &input[1..input.len() - 1]
        }
        _ => input,
    }
}
