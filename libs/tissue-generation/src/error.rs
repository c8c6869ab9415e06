//! # Generation Errors
//!
//! Error types for lattice sampling and fixture construction.
//!
//! ## Error Policy
//!
//! - Numeric sampler inputs are trusted and never rejected
//! - The cylinder orientation, the convention name and the noise scale
//!   are the only validated parameters
//! - Table and topology errors carry the offending column or entity

use thiserror::Error;

/// Errors that can occur while generating seeds or fixtures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    /// Cylinder orientation is neither `transverse` nor `longitudinal`.
    #[error("Orientation should either be 'transverse' or 'longitudinal', not '{0}'")]
    InvalidOrientation(String),

    /// Attribute convention name is neither `flat` nor `planar`.
    #[error("Unknown geometry convention '{0}', expected 'flat' or 'planar'")]
    UnknownConvention(String),

    /// Standard deviation of the position noise is negative or not finite.
    #[error("Invalid noise scale: {0}")]
    InvalidNoise(f64),

    /// A column was read from a table that does not hold it.
    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },

    /// A column was written with a length different from the table index.
    #[error("Column '{column}' of table '{table}' expects {expected} values, got {actual}")]
    ColumnLength {
        table: String,
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A column was read or written with a type different from its own.
    #[error("Column '{column}' of table '{table}' is {actual}, not {expected}")]
    ColumnType {
        table: String,
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The edge table does not describe one closed cycle per face.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Vertex positions do not match the expected geometry.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl GenerationError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a missing column error.
    pub fn missing_column(table: &str, column: &str) -> Self {
        Self::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

/// Result type alias for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
