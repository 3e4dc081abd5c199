//! Error types for configuration, generation and evaluation

use thiserror::Error;

/// Game engine error types
#[derive(Error, Debug)]
pub enum GameError {
    /// Grid dimensions must be positive
    #[error("Invalid grid size: {rows}x{columns}")]
    InvalidGridSize { rows: i32, columns: i32 },

    /// Probability entry references a cell outside the grid
    #[error("Probability cell out of range: {row}:{column}")]
    CellOutOfRange { row: i32, column: i32 },

    /// Grid cell without a probability entry
    #[error("No probability entry covers cell {row}:{column}")]
    UncoveredCell { row: i32, column: i32 },

    /// Weight table with zero total weight
    #[error("No symbol selected despite configured probabilities")]
    NoSymbolSelected,

    /// Symbol without a configuration entry
    #[error("Unknown symbol: {name}")]
    UnknownSymbol { name: String },

    /// Malformed or out-of-grid covered-area coordinate
    #[error("Invalid covered-area coordinate: {coordinate}")]
    InvalidCoordinate { coordinate: String },

    /// Win combination missing a field its rule kind requires
    #[error("Win combination '{combination}' is missing required field '{field}'")]
    MissingField {
        combination: String,
        field: &'static str,
    },

    /// Malformed configuration document
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
