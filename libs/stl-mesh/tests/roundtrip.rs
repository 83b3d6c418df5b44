//! File-level round trips: write a mesh, read it back, transform it.

use glam::DVec3;
use stl_mesh::{
    read_stl, read_stl_with, rotate, translate, write_mesh, write_stl, Mesh, MeshArray, MeshError,
    ParseMode, Triangle,
};

fn fan_mesh() -> Mesh {
    let mut mesh = Mesh::new("fan");
    let apex = DVec3::new(0.0, 0.0, 1.5);
    let ring: Vec<DVec3> = (0..7)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / 6.0;
            DVec3::new(theta.cos() * 2.0, theta.sin() * 2.0, 0.25)
        })
        .collect();
    for pair in ring.windows(2) {
        mesh.add_triangle(apex, pair[0], pair[1]);
    }
    mesh
}

#[test]
fn written_coordinates_read_back_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fan.stl");
    let mesh = fan_mesh();
    write_mesh(&path, &mesh).unwrap();

    let array = read_stl(&path).unwrap();
    assert_eq!(array.len(), 4 * mesh.triangle_count() + 1);

    let array = array.strip_padding().unwrap();
    assert_eq!(array.len(), 4 * mesh.triangle_count());
    assert_eq!(array, MeshArray::from_mesh(&mesh));
}

#[test]
fn strict_read_of_written_file_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strict.stl");
    write_mesh(&path, &fan_mesh()).unwrap();
    let array = read_stl_with(&path, ParseMode::Strict).unwrap();
    assert_eq!(array.strip_padding().unwrap().facet_count(), 6);
}

#[test]
fn array_writer_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.stl");
    let second = dir.path().join("second.stl");
    write_mesh(&first, &fan_mesh()).unwrap();

    let array = read_stl(&first).unwrap();
    array.write_stl(&second, "fan").unwrap();

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn translate_after_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moved.stl");
    write_mesh(&path, &fan_mesh()).unwrap();

    let original = read_stl(&path).unwrap();
    let moved = translate(original.clone(), 1.0, 2.0, 1.0).unwrap();
    let original = original.strip_padding().unwrap();

    for (i, (before, after)) in original.rows().iter().zip(moved.rows()).enumerate() {
        let delta = *after - *before;
        if i % 4 == 0 {
            assert_eq!(delta, DVec3::ZERO);
        } else {
            assert!((delta - DVec3::new(1.0, 2.0, 1.0)).length() < 1e-12);
        }
    }
}

#[test]
fn rotate_produces_new_file_and_keeps_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.stl");
    let target = dir.path().join("rotated.stl");
    write_mesh(&source, &fan_mesh()).unwrap();
    let before = std::fs::read_to_string(&source).unwrap();

    let array = read_stl(&source).unwrap();
    rotate(&array, 0.0, 0.0, 0.0, &target).unwrap();

    assert_eq!(std::fs::read_to_string(&source).unwrap(), before);
    let rotated = read_stl(&target).unwrap().strip_padding().unwrap();
    let original = array.strip_padding().unwrap();
    for (a, b) in original.rows().iter().zip(rotated.rows()) {
        assert!((*a - *b).length() < 1e-12);
    }
}

#[test]
fn explicit_triangle_lists_are_validated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lists.stl");
    let points = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
    assert!(matches!(
        Triangle::from_points(&points),
        Err(MeshError::TriangleArity { got: 4 })
    ));

    let tri = Triangle::from_points(&points[..3]).unwrap();
    write_stl(&path, "lists", &[tri], &[tri.normal()]).unwrap();
    assert!(path.exists());
}

#[test]
fn missing_input_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_stl(dir.path().join("absent.stl"));
    assert!(matches!(result, Err(MeshError::FileNotFound { .. })));
}
