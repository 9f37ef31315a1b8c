//! Planes, spheres, and side-of-plane classification.
//!
//! A plane is the set of points `p` with `dot(normal, p) == offset`. The
//! side the normal points to is "in front"; for frustum planes that is
//! the inside of the volume.

use glam::Vec3;
use super::aabb::AABB;

/// Plane in normal/offset form
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    /// Unit normal (zero for degenerate planes)
    pub normal: Vec3,
    /// Signed distance of the plane from the origin along `normal`
    pub offset: f32,
}

impl Plane {
    /// Build a plane through `point`. The normal is normalized; a zero
    /// normal stays zero.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self { normal, offset: normal.dot(point) }
    }

    /// Signed distance from `point` to the plane (positive in front)
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.offset
    }

    /// Same surface, opposite facing
    pub fn flipped(&self) -> Self {
        Self { normal: -self.normal, offset: -self.offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Result of classifying a volume against a plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Entirely on the side the normal points to
    Front,
    /// Entirely on the opposite side
    Behind,
    /// Crosses or touches the plane
    Straddling,
}

impl PlaneSide {
    /// Integer form: `1` front, `-1` behind, `0` straddling
    pub fn as_i32(self) -> i32 {
        match self {
            PlaneSide::Front => 1,
            PlaneSide::Behind => -1,
            PlaneSide::Straddling => 0,
        }
    }
}

/// Plane of the triangle `a, b, c`.
///
/// Normal is `normalize(cross(b - a, c - b))`, so winding decides facing.
/// Collinear points give a zero normal and a zero offset.
pub fn calculate_plane(a: Vec3, b: Vec3, c: Vec3) -> Plane {
    let normal = (b - a).cross(c - b).normalize_or_zero();
    Plane { normal, offset: normal.dot(a) }
}

/// Classify a sphere against a plane.
///
/// Front if the center is farther than `radius` in front of the plane,
/// Behind if farther than `radius` behind it, Straddling otherwise.
pub fn classify_sphere_to_plane(sphere: &Sphere, plane: &Plane) -> PlaneSide {
    let distance = plane.signed_distance(sphere.center);
    if distance > sphere.radius {
        PlaneSide::Front
    } else if distance < -sphere.radius {
        PlaneSide::Behind
    } else {
        PlaneSide::Straddling
    }
}

/// Classify an AABB against a plane with the projected radius test.
///
/// The box's reach along the normal is `dot(abs(normal), extents)`; the box
/// is then classified as a sphere of that radius at its center. Exact for
/// axis-aligned boxes.
pub fn classify_aabb_to_plane(aabb: &AABB, plane: &Plane) -> PlaneSide {
    let radius = plane.normal.abs().dot(aabb.extents);
    classify_sphere_to_plane(&Sphere::new(aabb.center, radius), plane)
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
