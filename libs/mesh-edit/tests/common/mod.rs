//! Meshes shared by the integration tests.

#![allow(dead_code)]

use config::constants::EditConfig;
use glam::DVec3;
use mesh_edit::{EditableMesh, SourceMesh};

/// Canonical unit cube: 8 shared corners, 12 triangles.
pub fn unit_cube_source() -> SourceMesh {
    let vertices = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
    ]
    .into_iter()
    .map(DVec3::from_array)
    .collect();

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

pub fn unit_cube() -> EditableMesh {
    EditableMesh::from_source(&unit_cube_source(), EditConfig::default())
        .expect("cube is a valid source")
}

/// Cube with unshared corners: every face carries its own copy of each
/// corner (24 vertices), as imported meshes with hard normals do.
pub fn split_cube_source() -> SourceMesh {
    let shared = unit_cube_source();
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();

    // Quads as pairs of triangles in the shared list
    for pair in shared.triangles.chunks_exact(2) {
        let base = vertices.len() as u32;
        let mut corners: Vec<u32> = Vec::new();
        for &index in pair.iter().flatten() {
            if !corners.contains(&index) {
                corners.push(index);
            }
        }
        for &corner in &corners {
            vertices.push(shared.vertices[corner as usize]);
        }
        let local = |index: u32| base + corners.iter().position(|&c| c == index).unwrap_or(0) as u32;
        for tri in pair {
            triangles.push([local(tri[0]), local(tri[1]), local(tri[2])]);
        }
    }

    SourceMesh::new(vertices, triangles)
}
