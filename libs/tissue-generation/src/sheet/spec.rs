//! # Attribute Specifications
//!
//! Default column sets for faces, vertices and edges. A specification names
//! every column a table must carry together with its default value (which
//! also fixes the column type).
//!
//! Two conventions are provided:
//!
//! - **flat**: 3D sheet, vertices carry `x`, `y`, `z`
//! - **planar**: 2D sheet, vertices carry `x`, `y` only

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default value of a column, which also fixes its type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColumnValue {
    /// Real-valued column.
    Float(f64),
    /// Integer column (indices, counts).
    Int(i64),
    /// Boolean flag column.
    Bool(bool),
}

impl ColumnValue {
    /// Name of the column type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnValue::Float(_) => "float",
            ColumnValue::Int(_) => "int",
            ColumnValue::Bool(_) => "bool",
        }
    }
}

/// Ordered mapping from column name to default value for one entity kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    columns: Vec<(String, ColumnValue)>,
}

impl EntitySpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a column default, builder style.
    pub fn with(mut self, name: &str, value: ColumnValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a column default, replacing any previous default of that name.
    pub fn insert(&mut self, name: &str, value: ColumnValue) {
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.columns.push((name.to_string(), value)),
        }
    }

    /// Default value of a column.
    pub fn get(&self, name: &str) -> Option<ColumnValue> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// Whether the specification declares the column.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, ColumnValue)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column is declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Geometry convention of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Sheet embedded in 3D, with a z coordinate.
    Flat,
    /// Strictly 2D sheet.
    Planar,
}

impl Convention {
    /// Name of the convention.
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::Flat => "flat",
            Convention::Planar => "planar",
        }
    }

    /// Coordinate column names of the convention.
    pub fn coords(self) -> &'static [&'static str] {
        match self {
            Convention::Flat => &["x", "y", "z"],
            Convention::Planar => &["x", "y"],
        }
    }

    /// The provider of this convention's specification.
    pub fn provider(self) -> Box<dyn SpecificationProvider> {
        match self {
            Convention::Flat => Box::new(FlatSheet),
            Convention::Planar => Box::new(PlanarSheet),
        }
    }

    /// Shorthand for `self.provider().specification()`.
    pub fn specification(self) -> Specification {
        self.provider().specification()
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Convention::Flat),
            "planar" => Ok(Convention::Planar),
            other => Err(GenerationError::UnknownConvention(other.to_string())),
        }
    }
}

/// The three attribute specifications used to build a sheet's tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// Convention the specification was produced for.
    pub convention: Convention,
    /// Face columns.
    pub face: EntitySpec,
    /// Vertex columns.
    pub vert: EntitySpec,
    /// Edge columns.
    pub edge: EntitySpec,
}

/// Source of default column sets for one geometry convention.
pub trait SpecificationProvider {
    /// Convention this provider implements.
    fn convention(&self) -> Convention;

    /// Face, vertex and edge specifications of the convention.
    fn specification(&self) -> Specification;
}

/// Provider of the `flat` convention (3D coordinates).
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatSheet;

/// Provider of the `planar` convention (2D coordinates).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarSheet;

use ColumnValue::{Bool, Float, Int};

fn face_columns(coords: &[&str]) -> EntitySpec {
    let mut spec = EntitySpec::new();
    for c in coords {
        spec.insert(c, Float(0.0));
    }
    spec.with("num_sides", Int(6))
        .with("area", Float(0.0))
        .with("perimeter", Float(0.0))
        .with("is_alive", Bool(true))
        .with("id", Int(0))
}

fn vert_columns(coords: &[&str]) -> EntitySpec {
    let mut spec = EntitySpec::new();
    for c in coords {
        spec.insert(c, Float(0.0));
    }
    spec.with("is_active", Bool(true)).with("id", Int(0))
}

fn edge_topology() -> EntitySpec {
    EntitySpec::new()
        .with("srce", Int(0))
        .with("trgt", Int(0))
        .with("face", Int(0))
}

impl SpecificationProvider for FlatSheet {
    fn convention(&self) -> Convention {
        Convention::Flat
    }

    fn specification(&self) -> Specification {
        let coords = Convention::Flat.coords();
        let mut edge = edge_topology();
        // edge vectors, normals, source and target positions, face centers
        for prefix in ["d", "n", "s", "t", "f"] {
            for c in coords {
                edge.insert(&format!("{prefix}{c}"), Float(0.0));
            }
        }
        edge.insert("nz", Float(1.0));
        let edge = edge.with("length", Float(0.0)).with("sub_area", Float(0.0));

        Specification {
            convention: Convention::Flat,
            face: face_columns(coords),
            vert: vert_columns(coords),
            edge,
        }
    }
}

impl SpecificationProvider for PlanarSheet {
    fn convention(&self) -> Convention {
        Convention::Planar
    }

    fn specification(&self) -> Specification {
        let coords = Convention::Planar.coords();
        let mut edge = edge_topology();
        for prefix in ["d", "s", "t", "f"] {
            for c in coords {
                edge.insert(&format!("{prefix}{c}"), Float(0.0));
            }
        }
        let edge = edge
            .with("nz", Float(0.0))
            .with("length", Float(0.0))
            .with("sub_area", Float(0.0));

        Specification {
            convention: Convention::Planar,
            face: face_columns(coords),
            vert: vert_columns(coords),
            edge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_parse() {
        assert_eq!("flat".parse::<Convention>(), Ok(Convention::Flat));
        assert_eq!("planar".parse::<Convention>(), Ok(Convention::Planar));
        assert_eq!(
            "spherical".parse::<Convention>(),
            Err(GenerationError::UnknownConvention("spherical".to_string()))
        );
    }

    #[test]
    fn test_providers_match_convention() {
        for convention in [Convention::Flat, Convention::Planar] {
            let provider = convention.provider();
            assert_eq!(provider.convention(), convention);
            assert_eq!(provider.specification().convention, convention);
        }
    }

    #[test]
    fn test_flat_vertices_have_z() {
        let spec = FlatSheet.specification();
        assert!(spec.vert.contains("z"));
        assert_eq!(spec.edge.get("nz"), Some(Float(1.0)));
        assert!(spec.edge.contains("dz"));
    }

    #[test]
    fn test_planar_vertices_have_no_z() {
        let spec = PlanarSheet.specification();
        assert!(spec.vert.contains("x"));
        assert!(spec.vert.contains("y"));
        assert!(!spec.vert.contains("z"));
        assert!(!spec.edge.contains("dz"));
    }

    #[test]
    fn test_edge_topology_columns_first() {
        for spec in [FlatSheet.specification(), PlanarSheet.specification()] {
            let names: Vec<&str> = spec.edge.columns().map(|(n, _)| n).take(3).collect();
            assert_eq!(names, vec!["srce", "trgt", "face"]);
        }
    }

    #[test]
    fn test_insert_replaces_default() {
        let mut spec = EntitySpec::new().with("a", Int(1));
        spec.insert("a", Int(2));
        assert_eq!(spec.len(), 1);
        assert_eq!(spec.get("a"), Some(Int(2)));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Float(0.0).type_name(), "float");
        assert_eq!(Int(0).type_name(), "int");
        assert_eq!(Bool(false).type_name(), "bool");
    }
}
