//! Shared meshes for unit tests.

use config::constants::EditConfig;
use glam::DVec3;

use crate::mesh::{EditableMesh, SourceMesh};

/// Unit cube with shared corners: 8 vertices, 12 triangles.
pub(crate) fn unit_cube_source() -> SourceMesh {
    let vertices = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, 0.0, 1.0),
        DVec3::new(0.0, 0.0, 1.0),
    ];
    let triangles = vec![
        [0, 2, 1],
        [0, 3, 2],
        [2, 3, 4],
        [2, 4, 5],
        [1, 2, 5],
        [1, 5, 6],
        [0, 7, 4],
        [0, 4, 3],
        [5, 4, 7],
        [5, 7, 6],
        [0, 6, 7],
        [0, 1, 6],
    ];
    SourceMesh::new(vertices, triangles)
}

pub(crate) fn unit_cube() -> EditableMesh {
    EditableMesh::from_source(&unit_cube_source(), EditConfig::default()).unwrap()
}

/// Two triangles that do not share index slots but share corner positions
/// along the edge (1,0,0)-(0,1,0): slots 1/4 and 2/3 are welded.
pub(crate) fn split_quad() -> EditableMesh {
    let source = SourceMesh::new(
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2], [3, 4, 5]],
    );
    EditableMesh::from_source(&source, EditConfig::default()).unwrap()
}
