//! # Weld Groups
//!
//! Many meshes store one corner position several times (once per adjacent
//! face) so each copy can carry its own normal or UV. An edit to such a
//! corner has to reach every copy or the surface tears.
//!
//! Groups are always derived from the current positions. Equality is exact
//! component-wise `==`; there is no tolerance.

use glam::DVec3;
use hashbrown::HashMap;

use crate::error::{EditError, EditResult};
use crate::mesh::EditableMesh;

/// Linear-scan weld lookup over a borrowed vertex slice.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_edit::WeldIndex;
///
/// let vertices = [DVec3::ZERO, DVec3::X, DVec3::ZERO];
/// let weld = WeldIndex::new(&vertices);
/// assert_eq!(weld.same_vertices(2).unwrap(), vec![0, 2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WeldIndex<'a> {
    vertices: &'a [DVec3],
}

impl<'a> WeldIndex<'a> {
    /// Creates a lookup over the given positions.
    pub fn new(vertices: &'a [DVec3]) -> Self {
        Self { vertices }
    }

    /// Creates a lookup over the current positions of `mesh`.
    pub fn of(mesh: &'a EditableMesh) -> Self {
        Self::new(mesh.vertices())
    }

    /// Returns every vertex index whose position equals that of `index`,
    /// including `index` itself, in ascending order.
    ///
    /// O(V) per call.
    pub fn same_vertices(&self, index: u32) -> EditResult<Vec<u32>> {
        let target = self
            .vertices
            .get(index as usize)
            .copied()
            .ok_or(EditError::InvalidIndex {
                index,
                vertex_count: self.vertices.len(),
            })?;

        Ok(self
            .vertices
            .iter()
            .enumerate()
            .filter(|&(j, v)| j == index as usize || *v == target)
            .map(|(j, _)| j as u32)
            .collect())
    }
}

/// Exact-equality hash key for a position.
///
/// `-0.0` is folded into `0.0` because they compare equal. Positions with a
/// NaN component have no key: they only weld with themselves.
fn position_key(position: DVec3) -> Option<[u64; 3]> {
    if position.is_nan() {
        return None;
    }
    let bits = |c: f64| if c == 0.0 { 0.0f64.to_bits() } else { c.to_bits() };
    Some([bits(position.x), bits(position.y), bits(position.z)])
}

/// Snapshot of every weld group, for operations that need several lookups.
///
/// The snapshot goes stale as soon as any position changes; build it, use
/// it, drop it.
#[derive(Debug, Clone, Default)]
pub struct WeldMap {
    groups: Vec<Vec<u32>>,
    membership: Vec<usize>,
}

impl WeldMap {
    /// Partitions `vertices` into weld groups.
    pub fn build(vertices: &[DVec3]) -> Self {
        let mut by_key: HashMap<[u64; 3], usize> = HashMap::with_capacity(vertices.len());
        let mut groups: Vec<Vec<u32>> = Vec::new();
        let mut membership = Vec::with_capacity(vertices.len());

        for (index, &position) in vertices.iter().enumerate() {
            let group = match position_key(position) {
                Some(key) => *by_key.entry(key).or_insert_with(|| {
                    groups.push(Vec::new());
                    groups.len() - 1
                }),
                None => {
                    groups.push(Vec::new());
                    groups.len() - 1
                }
            };
            groups[group].push(index as u32);
            membership.push(group);
        }

        Self { groups, membership }
    }

    /// Builds the snapshot from a mesh's current positions.
    pub fn of(mesh: &EditableMesh) -> Self {
        Self::build(mesh.vertices())
    }

    /// Returns the weld group of `index`, ascending.
    pub fn group(&self, index: u32) -> EditResult<&[u32]> {
        let group = self
            .membership
            .get(index as usize)
            .ok_or(EditError::InvalidIndex {
                index,
                vertex_count: self.membership.len(),
            })?;
        Ok(&self.groups[*group])
    }

    /// Returns the id of the group containing `index`.
    pub fn group_id(&self, index: u32) -> Option<usize> {
        self.membership.get(index as usize).copied()
    }

    /// Number of distinct positions.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterates all groups in order of their lowest member.
    pub fn groups(&self) -> impl Iterator<Item = &[u32]> {
        self.groups.iter().map(Vec::as_slice)
    }
}
