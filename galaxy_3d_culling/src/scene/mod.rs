//! Scene module
//!
//! Spatial indexing (BVH) and culling strategies over scene elements.

mod bvh;
mod scene_index;
mod culler;

pub use bvh::{BoundingVolumeHierarchy, Bvh, BvhNode, ROOT};
pub use scene_index::SceneIndex;
pub use culler::{CameraCuller, BruteForceCuller, FrustumCuller, SceneElement};
