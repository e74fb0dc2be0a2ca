use gridfield::prelude::*;

fn matches_approx(expected: &[f64], actual: &[f64]) -> bool {
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(e, a)| (e - a).abs() < 1e-12)
}

struct Meshes {
    mesh1d: Mesh<1>,
    mesh2d: Mesh<2>,
    mesh3d: Mesh<3>,
}

fn setup() -> Meshes {
    let s = MeshScalingType::Constant;
    let x = MeshDimension::new(10, 0.0, 1.0);
    let y = MeshDimension::new(10, -2.0, 2.0);
    let z = MeshDimension::new(10, 0.0, 4.0);

    Meshes {
        mesh1d: Mesh::new(s, [x]).unwrap(),
        mesh2d: Mesh::new(s, [x, y]).unwrap(),
        mesh3d: Mesh::new(s, [x, y, z]).unwrap(),
    }
}

#[test]
fn whole_mesh_bounding_boxes() {
    let m = setup();

    assert_eq!(m.mesh1d.bounds().bounds(), &[0.0, 1.0]);
    assert_eq!(m.mesh2d.bounds().bounds(), &[0.0, 1.0, -2.0, 2.0]);
    assert_eq!(m.mesh3d.bounds().bounds(), &[0.0, 1.0, -2.0, 2.0, 0.0, 4.0]);
}

#[test]
fn cell_bounding_boxes_from_per_dimension_indices() {
    let m = setup();

    let bx = m.mesh1d.cell_bounds_at([0]).unwrap();
    assert!(matches_approx(&[0.0, 0.1], &bx));

    let bx = m.mesh2d.cell_bounds_at([0, 1]).unwrap();
    assert!(matches_approx(&[0.0, 0.1, -1.6, -1.2], &bx));

    let bx = m.mesh3d.cell_bounds_at([8, 3, 1]).unwrap();
    assert!(matches_approx(&[0.8, 0.9, -0.8, -0.4, 0.4, 0.8], &bx));
}

#[test]
fn cell_bounding_boxes_from_flat_indices() {
    let m = setup();

    let cases_2d: [(usize, [f64; 4]); 3] = [
        (0, [0.0, 0.1, -2.0, -1.6]),
        (1, [0.1, 0.2, -2.0, -1.6]),
        (10, [0.0, 0.1, -1.6, -1.2]),
    ];
    for (flat, expected) in cases_2d {
        let bx = m.mesh2d.cell_bounds(flat).unwrap();
        assert!(matches_approx(&expected, &bx), "cell {flat}: {bx}");
    }

    let cases_3d: [(usize, [f64; 6]); 5] = [
        (0, [0.0, 0.1, -2.0, -1.6, 0.0, 0.4]),
        (1, [0.1, 0.2, -2.0, -1.6, 0.0, 0.4]),
        (10, [0.0, 0.1, -1.6, -1.2, 0.0, 0.4]),
        (100, [0.0, 0.1, -2.0, -1.6, 0.4, 0.8]),
        (138, [0.8, 0.9, -0.8, -0.4, 0.4, 0.8]),
    ];
    for (flat, expected) in cases_3d {
        let bx = m.mesh3d.cell_bounds(flat).unwrap();
        assert!(matches_approx(&expected, &bx), "cell {flat}: {bx}");
    }

    // flat and per-dimension queries agree everywhere
    for flat in 0..m.mesh3d.num_cells() {
        let idx = m.mesh3d.multi_index(flat).unwrap();
        assert_eq!(
            m.mesh3d.cell_bounds(flat).unwrap(),
            m.mesh3d.cell_bounds_at(idx).unwrap()
        );
    }
}

#[test]
fn out_of_range_cells() {
    let m = setup();

    assert_eq!(
        m.mesh2d.cell_bounds(100).unwrap_err(),
        Error::FlatIndexOutOfBounds {
            index: 100,
            num_cells: 100
        }
    );
    assert_eq!(
        m.mesh3d.cell_bounds_at([0, 0, 10]).unwrap_err(),
        Error::IndexOutOfBounds {
            dimension: 2,
            index: 10,
            size: 10
        }
    );
}

#[test]
fn output_to_string() {
    let m = setup();

    let bx = m.mesh2d.cell_bounds(1).unwrap();
    assert_eq!(bx.to_string(), "X: [0.1, 0.2], Y: [-2, -1.6]");

    let bx = m.mesh3d.cell_bounds(138).unwrap();
    assert_eq!(
        format!("{bx:.1}"),
        "X: [0.8, 0.9], Y: [-0.8, -0.4], Z: [0.4, 0.8]"
    );

    assert_eq!(m.mesh1d.bounds().to_string(), "X: [0, 1]");
}

#[test]
fn per_dimension_bounds_are_checked() {
    let m = setup();
    let bx = m.mesh3d.cell_bounds(138).unwrap();

    assert!((bx.min(2).unwrap() - 0.4).abs() < 1e-12);
    assert!((bx.max(0).unwrap() - 0.9).abs() < 1e-12);
    assert_eq!(
        bx.max(3).unwrap_err(),
        Error::DimensionOutOfRange {
            dimension: 3,
            dimensions: 3
        }
    );
    assert!(m.mesh1d.bounds().interval(1).is_err());
}

#[test]
fn cells_tile_the_mesh() {
    let dim = MeshDimension::new(6, 0.0, 3.0);
    let mesh = Mesh::new(MeshScalingType::Hyperbolic, [dim, dim]).unwrap();

    let area: f64 = (0..mesh.num_cells())
        .map(|flat| {
            let bx = mesh.cell_bounds(flat).unwrap();
            let (x0, x1) = bx.interval(0).unwrap();
            let (y0, y1) = bx.interval(1).unwrap();
            (x1 - x0) * (y1 - y0)
        })
        .sum();
    assert!((area - 9.0).abs() < 1e-9);

    let whole = mesh.bounds();
    for flat in 0..mesh.num_cells() {
        let centre = mesh.cell_centre(mesh.multi_index(flat).unwrap()).unwrap();
        assert!(whole.contains(&centre));
        assert!(mesh.cell_bounds(flat).unwrap().contains(&centre));
    }
}
