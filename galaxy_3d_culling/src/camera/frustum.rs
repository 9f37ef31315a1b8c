/// Frustum: six bounding planes built from camera properties.
///
/// Every plane normal points into the frustum, so "in front of" a plane
/// means "on the inside" and an AABB is rejected as soon as it lies fully
/// behind any single plane.
///
/// Camera convention: the camera transform is the camera's world matrix
/// (column-major, glam). Its x axis is right, y axis is up, and the camera
/// looks down its local -Z axis, as with `Mat4::look_at_rh`.

use glam::{Mat4, Vec3};
use crate::geometry::{AABB, Plane, PlaneSide, calculate_plane, classify_aabb_to_plane};
use crate::galaxy3d::Engine;
use crate::galaxy3d::log::LogSeverity;
use super::camera_properties::CameraProperties;

/// Result of a 3-way frustum/AABB classification.
///
/// Used by the BVH frustum query:
/// - `Outside` → skip the entire subtree
/// - `Inside` → collect all elements without further testing
/// - `Partial` → keep testing children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely behind at least one plane
    Outside,
    /// AABB is entirely in front of every plane
    Inside,
    /// AABB straddles at least one plane and is behind none
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_FAR: usize = 2;
pub const PLANE_NEAR: usize = 3;
pub const PLANE_TOP: usize = 4;
pub const PLANE_BOTTOM: usize = 5;

/// Six frustum planes: left, right, far, near, top, bottom
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

/// The eight frustum corners.
///
/// N/F = near/far, B/T = bottom/top, L/R = left/right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrustumPoints {
    pub nbl: Vec3,
    pub nbr: Vec3,
    pub ntl: Vec3,
    pub ntr: Vec3,
    pub fbl: Vec3,
    pub fbr: Vec3,
    pub ftl: Vec3,
    pub ftr: Vec3,
}

impl FrustumPoints {
    /// Corners in NBL, NBR, NTL, NTR, FBL, FBR, FTL, FTR order
    pub fn to_array(&self) -> [Vec3; 8] {
        [self.nbl, self.nbr, self.ntl, self.ntr, self.fbl, self.fbr, self.ftl, self.ftr]
    }

    pub fn near_center(&self) -> Vec3 {
        (self.nbl + self.ntr) * 0.5
    }

    pub fn far_center(&self) -> Vec3 {
        (self.fbl + self.ftr) * 0.5
    }

    /// The twelve edges: near rectangle, far rectangle, then the four
    /// connecting edges.
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        [
            (self.nbl, self.nbr),
            (self.nbl, self.ntl),
            (self.ntl, self.ntr),
            (self.ntr, self.nbr),
            (self.fbl, self.fbr),
            (self.fbl, self.ftl),
            (self.ftl, self.ftr),
            (self.ftr, self.fbr),
            (self.fbl, self.nbl),
            (self.fbr, self.nbr),
            (self.ftr, self.ntr),
            (self.ftl, self.ntl),
        ]
    }
}

/// Compute the eight frustum corners for a camera.
///
/// The near plane sits `near_view_cutoff` in front of the eye, the far plane
/// `near_view_cutoff * camera_length` in front of it.
pub fn calculate_frustum_points(properties: &CameraProperties, camera_transform: &Mat4) -> FrustumPoints {
    let position = camera_transform.w_axis.truncate();
    let right = camera_transform.x_axis.truncate().normalize_or_zero();
    let up = camera_transform.y_axis.truncate().normalize_or_zero();
    let forward = (-camera_transform.z_axis.truncate()).normalize_or_zero();

    let near_center = position + forward * properties.near_view_cutoff;
    let far_center = position + forward * properties.far_distance();

    let near_x = right * (properties.near_width * 0.5);
    let near_y = up * (properties.near_height * 0.5);
    let far_x = right * (properties.far_width * 0.5);
    let far_y = up * (properties.far_height * 0.5);

    FrustumPoints {
        nbl: near_center - near_x - near_y,
        nbr: near_center + near_x - near_y,
        ntl: near_center - near_x + near_y,
        ntr: near_center + near_x + near_y,
        fbl: far_center - far_x - far_y,
        fbr: far_center + far_x - far_y,
        ftl: far_center - far_x + far_y,
        ftr: far_center + far_x + far_y,
    }
}

/// Compute the corners and the six inward-facing planes for a camera.
pub fn build_frustum(properties: &CameraProperties, camera_transform: &Mat4) -> (FrustumPoints, Frustum) {
    let points = calculate_frustum_points(properties, camera_transform);
    let frustum = Frustum::from_points(&points);

    if Engine::is_enabled(LogSeverity::Trace) {
        crate::engine_trace!("galaxy3d::Frustum",
            "built frustum: near center {:?}, far center {:?}",
            points.near_center(), points.far_center());
    }

    (points, frustum)
}

/// Returns false iff the AABB is fully behind any frustum plane.
///
/// Partial overlap counts as inside.
pub fn aabb_to_frustum(aabb: &AABB, frustum: &Frustum) -> bool {
    frustum.intersects_aabb(aabb)
}

impl Frustum {
    /// Derive the six planes from the corner points.
    ///
    /// With the camera looking down -Z, the natural winding of the left, far
    /// and top triangles already faces inward; right, near and bottom are
    /// flipped.
    pub fn from_points(points: &FrustumPoints) -> Self {
        let mut planes = [Plane::default(); 6];
        planes[PLANE_LEFT] = calculate_plane(points.nbl, points.fbl, points.ftl);
        planes[PLANE_RIGHT] = calculate_plane(points.nbr, points.fbr, points.ftr).flipped();
        planes[PLANE_FAR] = calculate_plane(points.fbl, points.fbr, points.ftr);
        planes[PLANE_NEAR] = calculate_plane(points.nbl, points.nbr, points.ntr).flipped();
        planes[PLANE_TOP] = calculate_plane(points.ntl, points.ftl, points.ftr);
        planes[PLANE_BOTTOM] = calculate_plane(points.nbl, points.fbl, points.fbr).flipped();
        Self { planes }
    }

    /// Test if an AABB is (potentially) visible.
    ///
    /// Conservative: may accept boxes near frustum corners that are
    /// actually outside, never rejects a visible one.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes
            .iter()
            .all(|plane| classify_aabb_to_plane(aabb, plane) != PlaneSide::Behind)
    }

    /// Classify an AABB against the frustum (3-way test).
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;
        for plane in &self.planes {
            match classify_aabb_to_plane(aabb, plane) {
                PlaneSide::Behind => return FrustumTest::Outside,
                PlaneSide::Straddling => all_inside = false,
                PlaneSide::Front => {}
            }
        }
        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
