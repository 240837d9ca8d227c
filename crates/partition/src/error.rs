use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// Required columns absent from the input table.
    InvalidInput { missing: Vec<String> },
    /// A required cell is empty. `line` is the 1-based CSV line number.
    MissingValue { line: usize, column: String },
    /// A relation pair references a node outside the declared universe.
    UnknownNode { node: String, pair_index: usize },
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (blank column name, empty separator, etc.).
    ConfigValidation(String),
    /// IO error (CSV read/write, etc.).
    Io(String),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { missing } => {
                write!(f, "input missing required columns: {}", missing.join(", "))
            }
            Self::MissingValue { line, column } => {
                write!(f, "line {line}: empty value in column '{column}'")
            }
            Self::UnknownNode { node, pair_index } => {
                write!(f, "pair #{pair_index} references unknown node {node}")
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for PartitionError {}

impl From<csv::Error> for PartitionError {
    fn from(e: csv::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<std::io::Error> for PartitionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
