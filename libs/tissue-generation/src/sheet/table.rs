//! # Columnar Tables
//!
//! Tables indexed by `0..len` holding one typed vector per column. Tables
//! are allocated from an [`EntitySpec`] by a [`TableFactory`], then written
//! column by column.

use super::spec::{ColumnValue, EntitySpec};
use crate::error::{GenerationError, GenerationResult};

/// Values of one column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Real values.
    Float(Vec<f64>),
    /// Integer values.
    Int(Vec<i64>),
    /// Boolean values.
    Bool(Vec<bool>),
}

impl Column {
    /// Column of `len` copies of a default value.
    pub fn filled(value: ColumnValue, len: usize) -> Self {
        match value {
            ColumnValue::Float(v) => Column::Float(vec![v; len]),
            ColumnValue::Int(v) => Column::Int(vec![v; len]),
            ColumnValue::Bool(v) => Column::Bool(vec![v; len]),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Int(v) => v.len(),
            Column::Bool(v) => v.len(),
        }
    }

    /// Whether the column holds no value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the column type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Float(_) => "float",
            Column::Int(_) => "int",
            Column::Bool(_) => "bool",
        }
    }
}

/// A table indexed by `0..len`, with named, ordered columns.
///
/// # Example
///
/// ```rust
/// use tissue_generation::sheet::table::Table;
///
/// let mut table = Table::new("vert", 3);
/// table.set_float_column("x", vec![0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(table.float_column("x").unwrap()[2], 2.0);
/// assert!(table.set_float_column("y", vec![0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    len: usize,
    columns: Vec<(String, Column)>,
}

impl Table {
    /// Creates a table with no column over the index `0..len`.
    pub fn new(name: &str, len: usize) -> Self {
        Self {
            name: name.to_string(),
            len,
            columns: Vec::new(),
        }
    }

    /// Name of the index (`face`, `vert`, `edge`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no row.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Row labels.
    pub fn index(&self) -> std::ops::Range<usize> {
        0..self.len
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Whether the table has the column.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Writes a whole column.
    ///
    /// The column must hold exactly one value per row. An existing column
    /// is replaced only by a column of the same type.
    pub fn set_column(&mut self, name: &str, column: Column) -> GenerationResult<()> {
        if column.len() != self.len {
            return Err(GenerationError::ColumnLength {
                table: self.name.clone(),
                column: name.to_string(),
                expected: self.len,
                actual: column.len(),
            });
        }

        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => {
                if existing.type_name() != column.type_name() {
                    return Err(GenerationError::ColumnType {
                        table: self.name.clone(),
                        column: name.to_string(),
                        expected: existing.type_name(),
                        actual: column.type_name(),
                    });
                }
                *existing = column;
            }
            None => self.columns.push((name.to_string(), column)),
        }
        Ok(())
    }

    /// Writes a real-valued column.
    pub fn set_float_column(&mut self, name: &str, values: Vec<f64>) -> GenerationResult<()> {
        self.set_column(name, Column::Float(values))
    }

    /// Writes an integer column.
    pub fn set_int_column(&mut self, name: &str, values: Vec<i64>) -> GenerationResult<()> {
        self.set_column(name, Column::Int(values))
    }

    /// Sets every row of a real-valued column to `value`.
    pub fn fill_float(&mut self, name: &str, value: f64) -> GenerationResult<()> {
        self.set_float_column(name, vec![value; self.len])
    }

    /// Reads a real-valued column.
    pub fn float_column(&self, name: &str) -> GenerationResult<&[f64]> {
        match self.column(name) {
            Some(Column::Float(values)) => Ok(values),
            Some(other) => Err(self.type_error(name, "float", other)),
            None => Err(GenerationError::missing_column(&self.name, name)),
        }
    }

    /// Reads an integer column.
    pub fn int_column(&self, name: &str) -> GenerationResult<&[i64]> {
        match self.column(name) {
            Some(Column::Int(values)) => Ok(values),
            Some(other) => Err(self.type_error(name, "int", other)),
            None => Err(GenerationError::missing_column(&self.name, name)),
        }
    }

    fn type_error(&self, name: &str, expected: &'static str, found: &Column) -> GenerationError {
        GenerationError::ColumnType {
            table: self.name.clone(),
            column: name.to_string(),
            expected,
            actual: found.type_name(),
        }
    }
}

/// Allocates tables from attribute specifications.
pub trait TableFactory {
    /// Creates a table over `0..len` holding every column of `spec`, each
    /// filled with its default value.
    fn make_table(&self, name: &str, len: usize, spec: &EntitySpec) -> Table;
}

/// Default [`TableFactory`]: one dense vector per column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnarTableFactory;

impl TableFactory for ColumnarTableFactory {
    fn make_table(&self, name: &str, len: usize, spec: &EntitySpec) -> Table {
        let mut table = Table::new(name, len);
        table.columns = spec
            .columns()
            .map(|(column, value)| (column.to_string(), Column::filled(value, len)))
            .collect();
        tracing::trace!(table = name, rows = len, columns = spec.len(), "allocated table");
        table
    }
}
