use std::collections::HashSet;
use tissue_generation::sheet::{
    three_faces_sheet, Column, Convention, DirectedEdge, SheetDatasets,
};

fn sheet(zaxis: bool) -> SheetDatasets {
    three_faces_sheet(zaxis).expect("fixture builds")
}

#[test]
fn table_sizes() {
    for zaxis in [true, false] {
        let sheet = sheet(zaxis);
        assert_eq!(sheet.face.len(), 3);
        assert_eq!(sheet.vert.len(), 13);
        assert_eq!(sheet.edge.len(), 18);
        assert_eq!(sheet.face.name(), "face");
        assert_eq!(sheet.vert.name(), "vert");
        assert_eq!(sheet.edge.name(), "edge");
    }
}

#[test]
fn fixture_is_valid() {
    sheet(true).validate().unwrap();
    sheet(false).validate().unwrap();
}

#[test]
fn every_face_is_one_hexagonal_cycle() {
    let sheet = sheet(true);
    for face in 0..3 {
        let cycle = sheet.face_cycle(face).unwrap();
        assert_eq!(cycle.len(), 6);
        let distinct: HashSet<usize> = cycle.iter().copied().collect();
        assert_eq!(distinct.len(), 6);
        assert_eq!(cycle[0], 0, "every face touches the central vertex");
    }
}

#[test]
fn shared_boundaries_are_twinned() {
    let sheet = sheet(true);
    let edges = sheet.directed_edges().unwrap();
    let mut twinned = 0;
    for (i, e) in edges.iter().enumerate() {
        if let Some(j) = sheet.opposite_edge(i).unwrap() {
            let twin = edges[j];
            assert_ne!(twin.face, e.face);
            assert_eq!((twin.srce, twin.trgt), (e.trgt, e.srce));
            twinned += 1;
        }
    }
    // three shared boundaries, two half-edges each
    assert_eq!(twinned, 6);

    let shared: HashSet<(usize, usize)> = edges
        .iter()
        .filter(|e| edges.iter().any(|o| o.is_opposite(e)))
        .map(|e| (e.srce.min(e.trgt), e.srce.max(e.trgt)))
        .collect();
    assert_eq!(shared, HashSet::from([(0, 1), (0, 5), (0, 9)]));
}

#[test]
fn edge_records_match_table() {
    let sheet = sheet(false);
    let edges = sheet.directed_edges().unwrap();
    assert_eq!(edges[0], DirectedEdge::new(0, 1, 0));
    assert_eq!(edges[6], DirectedEdge::new(0, 5, 1));
    assert_eq!(edges[17], DirectedEdge::new(1, 0, 2));
}

#[test]
fn side_lengths_are_unit() {
    for length in sheet(true).edge_lengths().unwrap() {
        assert!((length - 1.0).abs() < 1e-3, "side length {length}");
    }
}

#[test]
fn zaxis_adds_zero_z() {
    let flat = sheet(true);
    assert_eq!(flat.specification.convention, Convention::Flat);
    assert_eq!(flat.vert.float_column("z").unwrap(), &[0.0; 13]);

    let planar = sheet(false);
    assert_eq!(planar.specification.convention, Convention::Planar);
    assert!(!planar.vert.has_column("z"));
    assert!(planar.vert.has_column("x"));
    assert!(planar.vert.has_column("y"));
}

#[test]
fn coordinates_populated() {
    let sheet = sheet(false);
    let x = sheet.vert.float_column("x").unwrap();
    let y = sheet.vert.float_column("y").unwrap();
    assert_eq!((x[7], y[7]), (-2.0, 0.0));
    assert_eq!((x[11], y[11]), (1.0, -1.732));
}

#[test]
fn default_columns_come_from_specification() {
    let sheet = sheet(true);
    for (name, _) in sheet.specification.face.columns() {
        assert!(sheet.face.has_column(name), "face column {name}");
    }
    assert_eq!(sheet.face.column("num_sides"), Some(&Column::Int(vec![6; 3])));
    assert_eq!(sheet.edge.float_column("nz").unwrap(), &[1.0; 18]);
}
