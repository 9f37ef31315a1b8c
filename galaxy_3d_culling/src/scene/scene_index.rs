/// Spatial acceleration structures for culling queries.
///
/// A SceneIndex indexes scene elements by their world-space AABB so that
/// cullers can ask for the elements near a box or inside a frustum
/// without testing every element.
///
/// Ownership: the caller creates and owns the SceneIndex and passes it by
/// reference to a CameraCuller. Indexes only grow: removing or moving an
/// element means rebuilding the index.

use crate::camera::Frustum;
use crate::geometry::AABB;
use super::bvh::{BoundingVolumeHierarchy, ROOT};

/// Trait for spatial indexing of scene elements.
pub trait SceneIndex: Send + Sync {
    /// Insert an element with its world-space AABB.
    fn insert(&mut self, element_id: u32, world_aabb: &AABB);

    /// Append the ids of all elements whose AABB overlaps `target`.
    fn query_aabb(&self, target: &AABB, results: &mut Vec<u32>);

    /// Append the ids of all elements whose AABB is (potentially) inside
    /// the frustum.
    fn query_frustum(&self, frustum: &Frustum, results: &mut Vec<u32>);

    /// Number of indexed elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all elements from the index.
    fn clear(&mut self);
}

impl SceneIndex for BoundingVolumeHierarchy {
    fn insert(&mut self, element_id: u32, world_aabb: &AABB) {
        BoundingVolumeHierarchy::insert(self, *world_aabb, element_id);
    }

    fn query_aabb(&self, target: &AABB, results: &mut Vec<u32>) {
        // The index answers empty queries; raw traversal does not.
        if BoundingVolumeHierarchy::is_empty(self) {
            return;
        }
        results.extend(self.traverse(ROOT, target));
    }

    fn query_frustum(&self, frustum: &Frustum, results: &mut Vec<u32>) {
        BoundingVolumeHierarchy::query_frustum(self, frustum, results);
    }

    fn len(&self) -> usize {
        self.leaf_count()
    }

    fn clear(&mut self) {
        BoundingVolumeHierarchy::clear(self);
    }
}
