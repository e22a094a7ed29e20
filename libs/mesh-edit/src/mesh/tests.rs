use super::*;
use config::constants::DEFAULT_VERTEX_COLOR;

fn triangle_source() -> SourceMesh {
    SourceMesh::new(
        vec![DVec3::ZERO, DVec3::X, DVec3::Y],
        vec![[0, 1, 2]],
    )
}

fn triangle_mesh() -> EditableMesh {
    EditableMesh::from_source(&triangle_source(), EditConfig::default()).unwrap()
}

#[test]
fn test_clone_copies_geometry_and_grays_colors() {
    let mesh = triangle_mesh();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.index_count(), 3);
    assert_eq!(mesh.colors(), &[DEFAULT_VERTEX_COLOR; 3]);
    assert!(!mesh.is_vertex_colored());
    assert!(!mesh.normals_dirty());
}

#[test]
fn test_clone_rejects_empty_source() {
    let err = EditableMesh::from_source(&SourceMesh::default(), EditConfig::default()).unwrap_err();
    assert_eq!(err, EditError::EmptySource);
}

#[test]
fn test_clone_rejects_out_of_range_triangle() {
    let source = SourceMesh::new(vec![DVec3::ZERO], vec![[0, 1, 2]]);
    let err = EditableMesh::from_source(&source, EditConfig::default()).unwrap_err();
    assert_eq!(
        err,
        EditError::InvalidIndex {
            index: 1,
            vertex_count: 1
        }
    );
}

#[test]
fn test_clone_rejects_mismatched_normals() {
    let mut source = triangle_source();
    source.normals = Some(vec![DVec3::Z]);
    let err = EditableMesh::from_source(&source, EditConfig::default()).unwrap_err();
    assert!(matches!(err, EditError::PreconditionViolation { .. }));
}

#[test]
fn test_clone_passes_normals_and_uvs_through() {
    let mut source = triangle_source();
    source.normals = Some(vec![DVec3::Z; 3]);
    source.uvs = Some(vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)]);
    let mesh = EditableMesh::from_source(&source, EditConfig::default()).unwrap();
    assert_eq!(mesh.normals(), source.normals.as_deref());
    assert_eq!(mesh.uvs(), source.uvs.as_deref());
}

#[test]
fn test_set_position_does_not_touch_source() {
    let source = triangle_source();
    let mut mesh = EditableMesh::from_source(&source, EditConfig::default()).unwrap();
    mesh.set_position(1, DVec3::new(2.0, 0.0, 0.0)).unwrap();
    assert_eq!(mesh.vertex(1).unwrap(), DVec3::new(2.0, 0.0, 0.0));
    assert_eq!(source.vertices[1], DVec3::X);
    assert!(mesh.normals_dirty());
}

#[test]
fn test_set_position_out_of_range() {
    let mut mesh = triangle_mesh();
    let err = mesh.set_position(3, DVec3::ZERO).unwrap_err();
    assert_eq!(
        err,
        EditError::InvalidIndex {
            index: 3,
            vertex_count: 3
        }
    );
    assert_eq!(mesh.vertices(), &[DVec3::ZERO, DVec3::X, DVec3::Y]);
}

#[test]
fn test_set_color() {
    let mut mesh = triangle_mesh();
    mesh.set_color(2, [1.0, 0.0, 0.0, 1.0]).unwrap();
    assert_eq!(mesh.color(2).unwrap(), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(mesh.color(0).unwrap(), DEFAULT_VERTEX_COLOR);
}

#[test]
fn test_append_vertices_grows_colors_and_uvs() {
    let mut source = triangle_source();
    source.uvs = Some(vec![DVec2::ONE; 3]);
    let mut mesh = EditableMesh::from_source(&source, EditConfig::default()).unwrap();

    let start = mesh.append_vertices(&[DVec3::Z, DVec3::ONE]).unwrap();
    assert_eq!(start, 3);
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.colors().len(), 5);
    assert_eq!(mesh.colors()[4], DEFAULT_VERTEX_COLOR);
    assert_eq!(mesh.uvs().unwrap()[4], DVec2::ZERO);
}

#[test]
fn test_append_triangles_validates_indices() {
    let mut mesh = triangle_mesh();
    assert!(mesh.append_triangles(&[[0, 2, 9]]).is_err());
    assert_eq!(mesh.triangle_count(), 1);

    let first = mesh.append_triangles(&[[2, 1, 0]]).unwrap();
    assert_eq!(first, 1);
    assert_eq!(mesh.face_at(1), Some(Face::new(2, 1, 0)));
}

#[test]
fn test_overwrite_triangle_at() {
    let mut mesh = triangle_mesh();
    mesh.overwrite_triangle_at(0, [0, 2, 1]).unwrap();
    assert_eq!(mesh.triangles(), &[[0, 2, 1]]);
    assert!(mesh.overwrite_triangle_at(1, [0, 1, 2]).is_err());
}

#[test]
fn test_find_triangle_respects_winding() {
    let mesh = triangle_mesh();
    assert_eq!(mesh.find_triangle(Face::new(0, 1, 2)), Some(0));
    assert_eq!(mesh.find_triangle(Face::new(1, 2, 0)), None);
}

#[test]
fn test_check_face_present() {
    let mesh = triangle_mesh();
    assert_eq!(mesh.check_face_present(Face::new(0, 1, 2)), Ok(0));
    assert_eq!(
        mesh.check_face_present(Face::new(0, 2, 1)),
        Err(EditError::InvalidFace { face: Face::new(0, 2, 1) })
    );
    assert!(matches!(
        mesh.check_face_present(Face::new(0, 1, 3)),
        Err(EditError::InvalidIndex { index: 3, .. })
    ));
}

#[test]
fn test_faces_enumerate_triangle_list() {
    let mut mesh = triangle_mesh();
    mesh.append_triangles(&[[2, 1, 0]]).unwrap();
    let faces: Vec<Face> = mesh.faces().collect();
    assert_eq!(faces, vec![Face::new(0, 1, 2), Face::new(2, 1, 0)]);
    assert_eq!(mesh.face_at(1), Some(Face::new(2, 1, 0)));
    assert_eq!(mesh.face_at(2), None);
}

#[test]
fn test_face_center() {
    let mesh = triangle_mesh();
    let center = mesh.face_center(Face::new(0, 1, 2)).unwrap();
    assert_eq!(center, DVec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0));
    assert!(mesh.face_center(Face::new(0, 1, 7)).is_err());
}

#[test]
fn test_recompute_normals() {
    let mut mesh = triangle_mesh();
    mesh.set_position(0, DVec3::ZERO).unwrap();
    mesh.recompute_normals();
    assert!(!mesh.normals_dirty());
    assert_eq!(mesh.normals().unwrap(), &[DVec3::Z; 3]);
}

#[test]
fn test_immediate_policy_recomputes() {
    let config = EditConfig {
        normal_policy: NormalPolicy::Immediate,
        ..EditConfig::default()
    };
    let mut mesh = EditableMesh::from_source(&triangle_source(), config).unwrap();
    mesh.set_position(2, DVec3::new(0.0, 2.0, 0.0)).unwrap();
    mesh.apply_normal_policy();
    assert!(!mesh.normals_dirty());
    assert!(mesh.normals().is_some());
}

#[test]
fn test_deferred_policy_leaves_flag() {
    let mut mesh = triangle_mesh();
    mesh.set_position(2, DVec3::new(0.0, 2.0, 0.0)).unwrap();
    mesh.apply_normal_policy();
    assert!(mesh.normals_dirty());
    assert!(mesh.normals().is_none());
}

#[test]
fn test_gpu_exports() {
    let mesh = triangle_mesh();
    assert_eq!(
        mesh.vertices_f32(),
        vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
    assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
    assert_eq!(mesh.colors_f32().len(), 12);
    assert!(mesh.normals_f32().is_none());
}

#[test]
fn test_source_from_flat_rejects_ragged_buffers() {
    assert!(SourceMesh::from_flat(&[0.0, 1.0], &[]).is_err());
    assert!(SourceMesh::from_flat(&[0.0, 1.0, 2.0], &[0, 0]).is_err());
}

#[test]
fn test_face_from_slice() {
    assert_eq!(Face::from_slice(&[4, 5, 6]).unwrap(), Face::new(4, 5, 6));
    let err = Face::from_slice(&[1, 2, 3, 4]).unwrap_err();
    assert!(matches!(err, EditError::DegenerateFace { .. }));
    assert!(!Face::new(1, 1, 2).is_distinct());
    assert_eq!(Face::new(0, 2, 1).to_string(), "(0, 2, 1)");
}
