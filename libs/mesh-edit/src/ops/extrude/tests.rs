use super::*;
use crate::fixtures::{split_quad, unit_cube, unit_cube_source};
use crate::mesh::SourceMesh;
use approx::assert_relative_eq;
use config::constants::{EditConfig, NormalPolicy, DEFAULT_VERTEX_COLOR};

#[test]
fn test_extrude_cube_face_counts() {
    let mut mesh = unit_cube();
    let result = extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();

    assert_eq!(mesh.vertex_count(), 11);
    assert_eq!(mesh.triangle_count(), 18);
    assert_eq!(mesh.index_count(), 36 + 18);
    assert_eq!(result.new_vertices, [8, 9, 10]);
    assert_eq!(result.cap_triangle, 0);
    assert_eq!(result.first_side_triangle, 12);
    assert_eq!(result.stale_face, Face::new(0, 2, 1));
}

#[test]
fn test_extrude_cube_cap_replaces_face() {
    let mut mesh = unit_cube();
    let result = extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();

    assert_eq!(mesh.face_at(0), Some(Face::new(8, 9, 10)));
    assert_eq!(result.cap(), Face::new(8, 9, 10));
    assert_eq!(mesh.find_triangle(Face::new(0, 2, 1)), None);
    // The rest of the original list is untouched
    assert_eq!(&mesh.triangles()[1..12], &unit_cube_source().triangles[1..12]);
}

#[test]
fn test_extrude_cube_offsets_along_outward_normal() {
    let mut mesh = unit_cube();
    extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();

    // The z = 0 face points down, depth 0.5
    assert_eq!(mesh.vertex(8).unwrap(), DVec3::new(0.0, 0.0, -0.5));
    assert_eq!(mesh.vertex(9).unwrap(), DVec3::new(1.0, 1.0, -0.5));
    assert_eq!(mesh.vertex(10).unwrap(), DVec3::new(1.0, 0.0, -0.5));
}

#[test]
fn test_extrude_side_quads() {
    let mut mesh = unit_cube();
    extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();

    assert_eq!(
        &mesh.triangles()[12..],
        &[
            [2, 1, 9],
            [10, 9, 1],
            [1, 0, 10],
            [8, 10, 0],
            [0, 2, 8],
            [9, 8, 2],
        ]
    );
}

#[test]
fn test_extrude_offset_away_from_origin() {
    // A face far from the origin still extrudes along its own normal
    let corners = [
        DVec3::new(10.0, 10.0, 10.0),
        DVec3::new(11.0, 10.0, 10.0),
        DVec3::new(10.0, 11.0, 10.0),
    ];
    let offset = extrusion_offset(corners, 0.5).unwrap();
    assert_relative_eq!(offset.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(offset.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(offset.z, 0.5, epsilon = 1e-12);
}

#[test]
fn test_extrude_missing_face_is_invalid() {
    let mut mesh = unit_cube();
    let err = extrude(&mut mesh, Face::new(0, 1, 2)).unwrap_err();
    assert_eq!(
        err,
        EditError::InvalidFace {
            face: Face::new(0, 1, 2)
        }
    );
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn test_extrude_requires_exact_winding() {
    let mut mesh = unit_cube();
    // Rotation of (0, 2, 1), but not the stored order
    let err = extrude(&mut mesh, Face::new(2, 1, 0)).unwrap_err();
    assert!(matches!(err, EditError::InvalidFace { .. }));
}

#[test]
fn test_extrude_repeated_corner_is_degenerate() {
    let mut mesh = unit_cube();
    let err = extrude(&mut mesh, Face::new(0, 0, 1)).unwrap_err();
    assert!(matches!(err, EditError::DegenerateFace { .. }));
    assert_eq!(mesh.vertex_count(), 8);
}

#[test]
fn test_extrude_zero_area_is_degenerate() {
    let source = SourceMesh::new(
        vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)],
        vec![[0, 1, 2]],
    );
    let mut mesh = EditableMesh::from_source(&source, EditConfig::default()).unwrap();
    let err = extrude(&mut mesh, Face::new(0, 1, 2)).unwrap_err();
    assert!(matches!(err, EditError::DegenerateFace { .. }));
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn test_extrude_stale_face_is_invalid_index() {
    let mut mesh = unit_cube();
    let err = extrude(&mut mesh, Face::new(0, 2, 11)).unwrap_err();
    assert_eq!(
        err,
        EditError::InvalidIndex {
            index: 11,
            vertex_count: 8
        }
    );
}

#[test]
fn test_extrude_twice_stacks() {
    let mut mesh = unit_cube();
    let first = extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();
    let second = extrude(&mut mesh, first.cap()).unwrap();

    assert_eq!(second.new_vertices, [11, 12, 13]);
    assert_eq!(mesh.vertex_count(), 14);
    assert_eq!(mesh.triangle_count(), 24);
    assert_eq!(mesh.vertex(11).unwrap(), DVec3::new(0.0, 0.0, -1.0));
    assert_eq!(mesh.face_at(0), Some(Face::new(11, 12, 13)));
}

#[test]
fn test_extrude_keeps_color_cardinality() {
    let mut mesh = unit_cube();
    mesh.enable_vertex_colors();
    mesh.set_color(0, [1.0, 0.0, 0.0, 1.0]).unwrap();
    extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();

    assert_eq!(mesh.colors().len(), mesh.vertex_count());
    assert_eq!(&mesh.colors()[8..], &[DEFAULT_VERTEX_COLOR; 3]);
    assert_eq!(mesh.colors()[0], [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_extrude_marks_normals_dirty() {
    let mut mesh = unit_cube();
    extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();
    assert!(mesh.normals_dirty());
}

#[test]
fn test_extrude_immediate_policy_recomputes_normals() {
    let config = EditConfig {
        normal_policy: NormalPolicy::Immediate,
        ..EditConfig::default()
    };
    let mut mesh = EditableMesh::from_source(&unit_cube_source(), config).unwrap();
    extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();

    assert!(!mesh.normals_dirty());
    assert_eq!(mesh.normals().map(<[DVec3]>::len), Some(11));
}

#[test]
fn test_extrude_uses_configured_depth() {
    let config = EditConfig {
        extrude_depth: 2.0,
        ..EditConfig::default()
    };
    let mut mesh = EditableMesh::from_source(&unit_cube_source(), config).unwrap();
    extrude(&mut mesh, Face::new(0, 2, 1)).unwrap();
    assert_eq!(mesh.vertex(8).unwrap(), DVec3::new(0.0, 0.0, -2.0));
}

#[test]
fn test_extrude_first_matching_triangle_only() {
    let mut mesh = split_quad();
    mesh.append_triangles(&[[0, 1, 2]]).unwrap();
    let result = extrude(&mut mesh, Face::new(0, 1, 2)).unwrap();
    assert_eq!(result.cap_triangle, 0);
    // The duplicate triangle keeps the old corners
    assert_eq!(mesh.face_at(2), Some(Face::new(0, 1, 2)));
}
