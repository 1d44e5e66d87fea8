use thiserror::Error;

/// Malformed puzzle input. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected {expected} numbers, got {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[error("empty grid")]
    EmptyGrid,
    #[error("line {line}: expected row of length {expected}, got {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Input that parsed fine but breaks a puzzle's contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("line {line}: report needs at least 2 levels, got {len}")]
    ShortReport { line: usize, len: usize },
    #[error("unknown gate {0:?}")]
    UnknownGate(String),
}
