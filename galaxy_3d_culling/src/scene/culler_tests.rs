use glam::{Mat4, Vec3};
use crate::camera::{build_frustum, CameraProperties, Frustum};
use crate::geometry::AABB;
use super::*;
use crate::scene::{Bvh, SceneIndex};

fn frustum() -> Frustum {
    // Identity camera: looks down -Z, depth 1.25 .. 6.25
    build_frustum(&CameraProperties::default(), &Mat4::IDENTITY).1
}

fn elements() -> Vec<SceneElement> {
    vec![
        SceneElement::new(10, AABB::new(Vec3::new(0.0, 0.0, -3.0), Vec3::splat(0.25))),
        SceneElement::new(11, AABB::new(Vec3::new(0.0, 0.0, 4.0), Vec3::splat(0.25))),
        SceneElement::new(12, AABB::new(Vec3::new(-0.5, 0.2, -6.0), Vec3::splat(0.25))),
        SceneElement::new(13, AABB::new(Vec3::new(30.0, 0.0, -3.0), Vec3::splat(0.25))),
        SceneElement::new(14, AABB::new(Vec3::new(0.0, 0.0, -40.0), Vec3::splat(0.25))),
    ]
}

fn index_of(elements: &[SceneElement]) -> Bvh {
    elements.iter().map(|e| (e.world_aabb, e.element_id)).collect()
}

// ============================================================================
// BruteForceCuller
// ============================================================================

#[test]
fn test_brute_force_returns_everything() {
    let mut culler = BruteForceCuller::new();
    let visible = culler.cull(&frustum(), &elements(), None);
    assert_eq!(visible, vec![10, 11, 12, 13, 14]);
}

// ============================================================================
// FrustumCuller
// ============================================================================

#[test]
fn test_frustum_culler_without_index() {
    let mut culler = FrustumCuller::new();
    let visible = culler.cull(&frustum(), &elements(), None);
    assert_eq!(visible, vec![10, 12]);
    assert_eq!(culler.last_stats(), (2, 5));
}

#[test]
fn test_frustum_culler_with_index_matches_linear_scan() {
    let elements = elements();
    let bvh = index_of(&elements);

    let mut culler = FrustumCuller::new();
    let mut indexed = culler.cull(&frustum(), &elements, Some(&bvh));
    indexed.sort_unstable();
    assert_eq!(indexed, vec![10, 12]);
    assert_eq!(culler.last_stats(), (2, 5));
}

#[test]
fn test_frustum_culler_empty_scene() {
    let mut culler = FrustumCuller::new();
    let bvh = Bvh::new();
    assert!(culler.cull(&frustum(), &[], Some(&bvh)).is_empty());
    assert_eq!(culler.last_stats(), (0, 0));
}

#[test]
fn test_cullers_as_trait_objects() {
    let mut cullers: Vec<Box<dyn CameraCuller>> =
        vec![Box::new(BruteForceCuller::new()), Box::new(FrustumCuller::new())];
    let counts: Vec<usize> = cullers
        .iter_mut()
        .map(|c| c.cull(&frustum(), &elements(), None).len())
        .collect();
    assert_eq!(counts, vec![5, 2]);
}

// ============================================================================
// SceneIndex for Bvh
// ============================================================================

#[test]
fn test_scene_index_insert_and_query() {
    let mut index = Bvh::new();
    assert!(SceneIndex::is_empty(&index));

    let mut results = Vec::new();
    SceneIndex::query_aabb(&index, &AABB::new(Vec3::ZERO, Vec3::ONE), &mut results);
    assert!(results.is_empty());

    for e in elements() {
        SceneIndex::insert(&mut index, e.element_id, &e.world_aabb);
    }
    assert_eq!(SceneIndex::len(&index), 5);

    SceneIndex::query_aabb(&index, &AABB::new(Vec3::new(0.0, 0.0, -3.0), Vec3::ONE), &mut results);
    assert_eq!(results, vec![10]);

    SceneIndex::clear(&mut index);
    assert_eq!(SceneIndex::len(&index), 0);
}
