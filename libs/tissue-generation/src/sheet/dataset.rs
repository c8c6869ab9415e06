//! # Sheet Datasets
//!
//! The face, vertex and edge tables of a sheet together with the
//! specification used to build them.
//!
//! Edges are half-edges: each row is a directed `srce -> trgt` segment owned
//! by exactly one face. A boundary shared by two faces appears twice, once
//! per face, with swapped ends. The edges of a face form a single closed
//! cycle over its vertices.

use super::spec::Specification;
use super::table::Table;
use crate::error::{GenerationError, GenerationResult};
use config::constants::{within, GenerationConfig, FIXTURE_SIDE_LENGTH};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A directed edge owned by one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedEdge {
    /// Source vertex.
    pub srce: usize,
    /// Target vertex.
    pub trgt: usize,
    /// Owning face.
    pub face: usize,
}

impl DirectedEdge {
    /// Creates a directed edge.
    pub const fn new(srce: usize, trgt: usize, face: usize) -> Self {
        Self { srce, trgt, face }
    }

    /// Whether `other` runs along the same segment in the opposite direction.
    pub fn is_opposite(&self, other: &DirectedEdge) -> bool {
        self.srce == other.trgt && self.trgt == other.srce
    }
}

/// Tables of a sheet and the specification that populated them.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetDatasets {
    /// Faces, indexed `0..Nf`.
    pub face: Table,
    /// Vertices, indexed `0..Nv`, carrying coordinate columns.
    pub vert: Table,
    /// Half-edges, indexed `0..Ne`, carrying `srce`, `trgt` and `face`.
    pub edge: Table,
    /// Specification the tables were built from.
    pub specification: Specification,
}

fn to_index(value: i64, column: &str, row: usize) -> GenerationResult<usize> {
    usize::try_from(value).map_err(|_| {
        GenerationError::invalid_topology(format!("edge {row} has negative {column} {value}"))
    })
}

impl SheetDatasets {
    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.face.len()
    }

    /// Number of vertices.
    pub fn vert_count(&self) -> usize {
        self.vert.len()
    }

    /// Number of half-edges.
    pub fn edge_count(&self) -> usize {
        self.edge.len()
    }

    /// Reads the edge table back as records, in edge index order.
    pub fn directed_edges(&self) -> GenerationResult<Vec<DirectedEdge>> {
        let srce = self.edge.int_column("srce")?;
        let trgt = self.edge.int_column("trgt")?;
        let face = self.edge.int_column("face")?;

        (0..self.edge.len())
            .map(|row| {
                Ok(DirectedEdge {
                    srce: to_index(srce[row], "srce", row)?,
                    trgt: to_index(trgt[row], "trgt", row)?,
                    face: to_index(face[row], "face", row)?,
                })
            })
            .collect()
    }

    /// Vertex positions. Planar sheets get `z = 0`.
    pub fn positions(&self) -> GenerationResult<Vec<DVec3>> {
        let x = self.vert.float_column("x")?;
        let y = self.vert.float_column("y")?;
        let z = if self.vert.has_column("z") {
            Some(self.vert.float_column("z")?)
        } else {
            None
        };

        Ok((0..self.vert.len())
            .map(|i| DVec3::new(x[i], y[i], z.map_or(0.0, |z| z[i])))
            .collect())
    }

    /// Indices of the edges owned by `face`, in edge index order.
    pub fn face_edges(&self, face: usize) -> GenerationResult<Vec<usize>> {
        Ok(self
            .directed_edges()?
            .iter()
            .enumerate()
            .filter(|(_, e)| e.face == face)
            .map(|(i, _)| i)
            .collect())
    }

    /// Vertices of `face` in boundary order, starting from the source of its
    /// lowest-indexed edge.
    ///
    /// Fails unless the face's edges chain into exactly one closed cycle
    /// visiting each of its vertices once.
    pub fn face_cycle(&self, face: usize) -> GenerationResult<Vec<usize>> {
        let edges = self.directed_edges()?;
        face_cycle_of(&edges, face)
    }

    /// Index of the half-edge running opposite to `edge`, if any.
    pub fn opposite_edge(&self, edge: usize) -> GenerationResult<Option<usize>> {
        let edges = self.directed_edges()?;
        let current = edges.get(edge).ok_or_else(|| {
            GenerationError::invalid_topology(format!(
                "edge {edge} out of range (0..{})",
                edges.len()
            ))
        })?;
        Ok(edges.iter().position(|other| current.is_opposite(other)))
    }

    /// Euclidean length of every edge.
    pub fn edge_lengths(&self) -> GenerationResult<Vec<f64>> {
        let positions = self.positions()?;
        let edges = self.directed_edges()?;
        edges
            .iter()
            .enumerate()
            .map(|(row, e)| match (positions.get(e.srce), positions.get(e.trgt)) {
                (Some(s), Some(t)) => Ok(s.distance(*t)),
                _ => Err(GenerationError::invalid_topology(format!(
                    "edge {row} references a missing vertex"
                ))),
            })
            .collect()
    }

    /// Checks the half-edge invariants of the sheet.
    ///
    /// - every `srce` / `trgt` is a vertex index, every `face` a face index
    /// - no directed edge is duplicated and none is a loop
    /// - the edges of every face form one closed cycle
    pub fn validate(&self) -> GenerationResult<()> {
        let edges = self.directed_edges()?;
        let (nv, nf) = (self.vert_count(), self.face_count());

        let mut seen = HashSet::with_capacity(edges.len());
        for (row, e) in edges.iter().enumerate() {
            if e.srce >= nv || e.trgt >= nv {
                return Err(GenerationError::invalid_topology(format!(
                    "edge {row} ({} -> {}) references a vertex outside 0..{nv}",
                    e.srce, e.trgt
                )));
            }
            if e.face >= nf {
                return Err(GenerationError::invalid_topology(format!(
                    "edge {row} is owned by face {} outside 0..{nf}",
                    e.face
                )));
            }
            if e.srce == e.trgt {
                return Err(GenerationError::invalid_topology(format!(
                    "edge {row} is a loop on vertex {}",
                    e.srce
                )));
            }
            if !seen.insert((e.srce, e.trgt)) {
                return Err(GenerationError::invalid_topology(format!(
                    "edge {row} duplicates {} -> {}",
                    e.srce, e.trgt
                )));
            }
        }

        for face in 0..nf {
            face_cycle_of(&edges, face)?;
        }
        Ok(())
    }

    /// Checks that every edge has the nominal fixture side length, within
    /// the configured tolerance.
    pub fn check_side_lengths(&self, config: &GenerationConfig) -> GenerationResult<()> {
        for (row, length) in self.edge_lengths()?.into_iter().enumerate() {
            if !within(length, FIXTURE_SIDE_LENGTH, config.tolerance) {
                return Err(GenerationError::degenerate(format!(
                    "edge {row} has length {length}, expected {FIXTURE_SIDE_LENGTH} +/- {}",
                    config.tolerance
                )));
            }
        }
        Ok(())
    }
}

fn face_cycle_of(edges: &[DirectedEdge], face: usize) -> GenerationResult<Vec<usize>> {
    let owned: Vec<&DirectedEdge> = edges.iter().filter(|e| e.face == face).collect();
    let Some(first) = owned.first() else {
        return Err(GenerationError::invalid_topology(format!(
            "face {face} has no edge"
        )));
    };

    let mut next: HashMap<usize, usize> = HashMap::with_capacity(owned.len());
    for e in &owned {
        if next.insert(e.srce, e.trgt).is_some() {
            return Err(GenerationError::invalid_topology(format!(
                "face {face} leaves vertex {} twice",
                e.srce
            )));
        }
    }

    let mut cycle = Vec::with_capacity(owned.len());
    let mut vertex = first.srce;
    loop {
        cycle.push(vertex);
        vertex = *next.get(&vertex).ok_or_else(|| {
            GenerationError::invalid_topology(format!(
                "face {face} boundary is open at vertex {vertex}"
            ))
        })?;
        if vertex == first.srce || cycle.len() > owned.len() {
            break;
        }
    }

    if vertex != first.srce || cycle.len() != owned.len() {
        return Err(GenerationError::invalid_topology(format!(
            "face {face} edges do not form a single cycle ({} edges, cycle of {})",
            owned.len(),
            cycle.len()
        )));
    }
    Ok(cycle)
}
