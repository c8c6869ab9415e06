//! # Three Faces Sheet
//!
//! A hand-built reference mesh: three regular hexagons packed around
//! vertex 0, with side length 1.0 ± 1e-3.
//!
//! ```text
//!         4 ---- 3
//!        /        \
//!   6 - 5    f0    2
//!  /     \        /
//! 7   f1   0 --- 1
//!  \     /        \
//!   8 - 9    f2    12
//!        \        /
//!         10 --- 11
//! ```

use super::dataset::{DirectedEdge, SheetDatasets};
use super::spec::{Convention, SpecificationProvider};
use super::table::{ColumnarTableFactory, TableFactory};
use crate::error::GenerationResult;
use glam::DVec2;

/// Number of faces of the fixture.
pub const FIXTURE_FACES: usize = 3;

/// Vertex positions of the fixture.
pub const FIXTURE_POINTS: [DVec2; 13] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.5, 0.866),
    DVec2::new(1.0, 1.732),
    DVec2::new(0.0, 1.732),
    DVec2::new(-0.5, 0.866),
    DVec2::new(-1.5, 0.866),
    DVec2::new(-2.0, 0.0),
    DVec2::new(-1.5, -0.866),
    DVec2::new(-0.5, -0.866),
    DVec2::new(0.0, -1.732),
    DVec2::new(1.0, -1.732),
    DVec2::new(1.5, -0.866),
];

/// Undirected junctions of the fixture; each shared boundary appears once.
pub const FIXTURE_JUNCTIONS: [[usize; 2]; 15] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 4],
    [4, 5],
    [5, 0],
    [5, 6],
    [6, 7],
    [7, 8],
    [8, 9],
    [9, 0],
    [9, 10],
    [10, 11],
    [11, 12],
    [12, 1],
];

/// Half-edges of the fixture, six per face, each face a counter-clockwise
/// cycle. Boundaries `0-5`, `0-9` and `0-1` are each owned once by both of
/// their faces.
pub const FIXTURE_EDGES: [DirectedEdge; 18] = [
    DirectedEdge::new(0, 1, 0),
    DirectedEdge::new(1, 2, 0),
    DirectedEdge::new(2, 3, 0),
    DirectedEdge::new(3, 4, 0),
    DirectedEdge::new(4, 5, 0),
    DirectedEdge::new(5, 0, 0),
    DirectedEdge::new(0, 5, 1),
    DirectedEdge::new(5, 6, 1),
    DirectedEdge::new(6, 7, 1),
    DirectedEdge::new(7, 8, 1),
    DirectedEdge::new(8, 9, 1),
    DirectedEdge::new(9, 0, 1),
    DirectedEdge::new(0, 9, 2),
    DirectedEdge::new(9, 10, 2),
    DirectedEdge::new(10, 11, 2),
    DirectedEdge::new(11, 12, 2),
    DirectedEdge::new(12, 1, 2),
    DirectedEdge::new(1, 0, 2),
];

/// Raw arrays of the fixture: positions, undirected junctions and the
/// `(faces, vertices, junctions)` counts, `(3, 13, 15)`.
///
/// # Example
///
/// ```rust
/// use tissue_generation::sheet::three_faces_sheet_array;
///
/// let (points, junctions, counts) = three_faces_sheet_array();
/// assert_eq!(counts, (3, 13, 15));
/// assert_eq!(points.len(), 13);
/// assert_eq!(junctions[0], [0, 1]);
/// ```
pub fn three_faces_sheet_array() -> (Vec<DVec2>, Vec<[usize; 2]>, (usize, usize, usize)) {
    let points = FIXTURE_POINTS.to_vec();
    let junctions = FIXTURE_JUNCTIONS.to_vec();
    let counts = (FIXTURE_FACES, points.len(), junctions.len());
    (points, junctions, counts)
}

fn edge_column(select: impl Fn(&DirectedEdge) -> usize) -> Vec<i64> {
    FIXTURE_EDGES.iter().map(|e| select(e) as i64).collect()
}

/// Builds the three faces sheet with the default table factory.
///
/// With `zaxis`, vertices also get a `z` column filled with 0.0 and the
/// `flat` specification is used; otherwise the `planar` one.
///
/// # Example
///
/// ```rust
/// use tissue_generation::sheet::three_faces_sheet;
///
/// let sheet = three_faces_sheet(true).unwrap();
/// assert_eq!(sheet.face_count(), 3);
/// assert_eq!(sheet.vert_count(), 13);
/// assert_eq!(sheet.edge_count(), 18);
/// sheet.validate().unwrap();
/// ```
pub fn three_faces_sheet(zaxis: bool) -> GenerationResult<SheetDatasets> {
    three_faces_sheet_with(zaxis, &ColumnarTableFactory)
}

/// Builds the three faces sheet, allocating tables with `factory`.
pub fn three_faces_sheet_with(
    zaxis: bool,
    factory: &dyn TableFactory,
) -> GenerationResult<SheetDatasets> {
    let convention = if zaxis {
        Convention::Flat
    } else {
        Convention::Planar
    };
    let specification = convention.provider().specification();

    let face = factory.make_table("face", FIXTURE_FACES, &specification.face);
    let mut vert = factory.make_table("vert", FIXTURE_POINTS.len(), &specification.vert);
    let mut edge = factory.make_table("edge", FIXTURE_EDGES.len(), &specification.edge);

    edge.set_int_column("srce", edge_column(|e| e.srce))?;
    edge.set_int_column("trgt", edge_column(|e| e.trgt))?;
    edge.set_int_column("face", edge_column(|e| e.face))?;

    vert.set_float_column("x", FIXTURE_POINTS.iter().map(|p| p.x).collect())?;
    vert.set_float_column("y", FIXTURE_POINTS.iter().map(|p| p.y).collect())?;
    if zaxis {
        vert.fill_float("z", 0.0)?;
    }

    tracing::debug!(
        convention = %convention,
        faces = face.len(),
        verts = vert.len(),
        edges = edge.len(),
        "built three faces sheet"
    );

    Ok(SheetDatasets {
        face,
        vert,
        edge,
        specification,
    })
}
