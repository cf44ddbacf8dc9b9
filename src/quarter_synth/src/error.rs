use thiserror::Error;

/// Errors raised while synthesizing quarter data.
#[derive(Error, Debug)]
pub enum SynthError {
    /// A required identifying column is absent from the input table.
    #[error("Input table must contain '{column}' column")]
    MissingColumn { column: String },

    #[error("Cannot split a total into {parts} parts")]
    InvalidPartCount { parts: usize },

    /// Made units left over with no quarter able to take them.
    #[error("{leftover} made units could not be placed: every quarter is at its attempts cap")]
    UnplacedMade { leftover: u32 },

    #[error("Unknown split method '{name}' (expected floor_fill or largest_remainder)")]
    UnknownSplitMethod { name: String },

    #[error("Invalid number '{value}' in column '{column}' (row {row})")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SynthError {
    /// Schema errors are raised before any row is touched.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, SynthError::MissingColumn { .. })
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;
