//! # Sheet
//!
//! Polygonal sheets described by three aligned tables (faces, vertices,
//! half-edges), the attribute specifications that define their default
//! columns, and the three faces reference fixture.

pub mod dataset;
pub mod fixture;
pub mod spec;
pub mod table;

pub use dataset::{DirectedEdge, SheetDatasets};
pub use fixture::{three_faces_sheet, three_faces_sheet_array, three_faces_sheet_with};
pub use spec::{
    ColumnValue, Convention, EntitySpec, FlatSheet, PlanarSheet, Specification,
    SpecificationProvider,
};
pub use table::{Column, ColumnarTableFactory, Table, TableFactory};
