//! Camera module: camera properties, frustum construction and
//! AABB-vs-frustum culling tests.
//!
//! The engine does NOT own cameras. The caller supplies a camera world
//! transform and a `CameraProperties` description and gets back plain
//! frustum values.

mod camera_properties;
mod frustum;

pub use camera_properties::{CameraProperties, CameraPropertiesBuilder};
pub use frustum::{
    Frustum, FrustumPoints, FrustumTest,
    build_frustum, calculate_frustum_points, aabb_to_frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_FAR, PLANE_NEAR, PLANE_TOP, PLANE_BOTTOM,
};
