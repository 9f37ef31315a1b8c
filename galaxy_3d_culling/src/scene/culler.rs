/// Camera culling strategies.
///
/// A CameraCuller determines which scene elements are visible from a
/// frustum. Implementations range from brute-force (return all) to
/// spatial queries through a SceneIndex (BVH).

use crate::camera::{Frustum, aabb_to_frustum};
use crate::geometry::AABB;
use super::scene_index::SceneIndex;

/// An element to cull: caller-defined id plus world-space bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneElement {
    pub element_id: u32,
    pub world_aabb: AABB,
}

impl SceneElement {
    pub fn new(element_id: u32, world_aabb: AABB) -> Self {
        Self { element_id, world_aabb }
    }
}

/// Strategy for determining visible elements from a frustum.
///
/// Called once per frame. `&mut self` allows stateful implementations
/// (statistics, caching) to keep state across frames.
pub trait CameraCuller: Send + Sync {
    /// Return the ids of the visible elements.
    ///
    /// `scene_index`, when given, must index the same elements as
    /// `elements`; cullers may answer from either.
    fn cull(
        &mut self,
        frustum: &Frustum,
        elements: &[SceneElement],
        scene_index: Option<&dyn SceneIndex>,
    ) -> Vec<u32>;
}

/// Brute-force culler: returns ALL elements (no actual culling).
///
/// Baseline for comparison. Ignores the frustum and the SceneIndex.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(
        &mut self,
        _frustum: &Frustum,
        elements: &[SceneElement],
        _scene_index: Option<&dyn SceneIndex>,
    ) -> Vec<u32> {
        elements.iter().map(|e| e.element_id).collect()
    }
}

/// Frustum culler: tests element AABBs against the frustum.
///
/// With a SceneIndex: hierarchical query, whole subtrees are accepted or
/// rejected at once. Without: one frustum test per element.
#[derive(Debug, Default)]
pub struct FrustumCuller {
    last_visible: usize,
    last_total: usize,
}

impl FrustumCuller {
    pub fn new() -> Self {
        Self::default()
    }

    /// (visible, total) element counts of the previous `cull` call
    pub fn last_stats(&self) -> (usize, usize) {
        (self.last_visible, self.last_total)
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(
        &mut self,
        frustum: &Frustum,
        elements: &[SceneElement],
        scene_index: Option<&dyn SceneIndex>,
    ) -> Vec<u32> {
        let visible = match scene_index {
            Some(index) => {
                let mut results = Vec::new();
                index.query_frustum(frustum, &mut results);
                results
            }
            None => elements
                .iter()
                .filter(|e| aabb_to_frustum(&e.world_aabb, frustum))
                .map(|e| e.element_id)
                .collect(),
        };

        self.last_visible = visible.len();
        self.last_total = scene_index.map_or(elements.len(), |index| index.len());
        crate::engine_debug!("galaxy3d::Culler",
            "{} of {} elements visible", self.last_visible, self.last_total);

        visible
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
