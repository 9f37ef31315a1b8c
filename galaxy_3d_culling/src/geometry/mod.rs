//! Geometry primitives for culling.
//!
//! Pure value types: boxes, planes, spheres, and the classification
//! routines between them. Nothing here allocates or logs.

mod aabb;
mod plane;

pub use aabb::{AABB, encapsulate};
pub use plane::{
    Plane, Sphere, PlaneSide,
    calculate_plane, classify_sphere_to_plane, classify_aabb_to_plane,
};
