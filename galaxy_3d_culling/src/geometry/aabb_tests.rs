use glam::{Mat4, Vec3};
use proptest::prelude::*;
use super::*;

fn unit_box(center: Vec3) -> AABB {
    AABB::new(center, Vec3::ONE)
}

prop_compose! {
    fn arb_vec3(range: f32)(x in -range..range, y in -range..range, z in -range..range) -> Vec3 {
        Vec3::new(x, y, z)
    }
}

prop_compose! {
    fn arb_aabb()(center in arb_vec3(100.0), extents in arb_vec3(20.0)) -> AABB {
        AABB::new(center, extents.abs())
    }
}

// ============================================================================
// Corners and construction
// ============================================================================

#[test]
fn test_min_max_derived_from_center_extents() {
    let aabb = AABB::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, 2.0));
    assert_eq!(aabb.min(), Vec3::new(0.5, 1.0, 1.0));
    assert_eq!(aabb.max(), Vec3::new(1.5, 3.0, 5.0));
}

#[test]
fn test_from_min_max_reorders_swapped_corners() {
    let aabb = AABB::from_min_max(Vec3::new(2.0, -1.0, 4.0), Vec3::new(0.0, 1.0, 2.0));
    assert_eq!(aabb.center, Vec3::new(1.0, 0.0, 3.0));
    assert_eq!(aabb.extents, Vec3::ONE);
}

#[test]
fn test_clamped_zeroes_negative_extents() {
    let aabb = AABB::new(Vec3::ZERO, Vec3::new(-1.0, 2.0, f32::NAN));
    assert!(!aabb.has_valid_extents());

    let clamped = aabb.clamped();
    assert!(clamped.has_valid_extents());
    assert_eq!(clamped.extents, Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_corners_bit_layout() {
    let corners = unit_box(Vec3::ZERO).corners();
    assert_eq!(corners[0], Vec3::splat(-1.0));
    assert_eq!(corners[1], Vec3::new(1.0, -1.0, -1.0));
    assert_eq!(corners[6], Vec3::new(-1.0, 1.0, 1.0));
    assert_eq!(corners[7], Vec3::ONE);
}

// ============================================================================
// encapsulate
// ============================================================================

#[test]
fn test_encapsulate_disjoint_boxes() {
    let merged = encapsulate(&unit_box(Vec3::ZERO), &unit_box(Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(merged.min(), Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(merged.max(), Vec3::new(11.0, 1.0, 1.0));
    assert_eq!(merged.center, Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_encapsulate_nested_returns_outer() {
    let outer = AABB::new(Vec3::ZERO, Vec3::splat(4.0));
    let inner = unit_box(Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(encapsulate(&outer, &inner), outer);
}

#[test]
fn test_encapsulate_rounding_never_shrinks() {
    // A thin box merged with a distant point: the naive `hi - extents`
    // center puts max.y below 0.33860266.
    let thin = AABB::new(Vec3::ZERO, Vec3::new(0.0, 0.338_602_66, 0.0));
    let point = AABB::new(Vec3::new(0.0, -55.528_77, 0.0), Vec3::ZERO);

    let merged = encapsulate(&thin, &point);
    assert!(merged.max().y >= thin.max().y);
    assert!(merged.min().y <= point.min().y);
    assert!(merged.contains(&thin));
    assert!(merged.contains(&point));
}

#[test]
fn test_from_min_max_degenerate_and_large() {
    let point = AABB::from_min_max(Vec3::splat(3.5), Vec3::splat(3.5));
    assert_eq!(point.center, Vec3::splat(3.5));
    assert_eq!(point.extents, Vec3::ZERO);

    let big = AABB::from_min_max(Vec3::splat(-f32::MAX), Vec3::splat(f32::MAX));
    assert!(big.center.is_finite());
    assert!(big.min().cmple(Vec3::splat(-f32::MAX)).all());
    assert!(big.max().cmpge(Vec3::splat(f32::MAX)).all());
}

proptest! {
    #[test]
    fn prop_encapsulate_contains_both(a in arb_aabb(), b in arb_aabb()) {
        let merged = encapsulate(&a, &b);
        prop_assert!(merged.min().cmple(a.min()).all() && merged.min().cmple(b.min()).all());
        prop_assert!(merged.max().cmpge(a.max()).all() && merged.max().cmpge(b.max()).all());
        prop_assert!(merged.contains(&a) && merged.contains(&b));
    }

    #[test]
    fn prop_from_min_max_covers_corners(a in arb_vec3(1000.0), b in arb_vec3(1000.0)) {
        let aabb = AABB::from_min_max(a, b);
        prop_assert!(aabb.has_valid_extents());
        prop_assert!(aabb.min().cmple(a.min(b)).all());
        prop_assert!(aabb.max().cmpge(a.max(b)).all());
        // Only a few ulps looser than the exact half-width
        prop_assert!(aabb.extents.abs_diff_eq((a - b).abs() * 0.5, 1e-3));
    }

    #[test]
    fn prop_encapsulate_is_commutative(a in arb_aabb(), b in arb_aabb()) {
        prop_assert_eq!(encapsulate(&a, &b), encapsulate(&b, &a));
    }
}

// ============================================================================
// intersects / contains
// ============================================================================

#[test]
fn test_intersects_overlapping() {
    assert!(unit_box(Vec3::ZERO).intersects(&unit_box(Vec3::new(1.5, 0.5, -0.5))));
}

#[test]
fn test_intersects_is_strict_for_touching_faces() {
    assert!(!unit_box(Vec3::ZERO).intersects(&unit_box(Vec3::new(2.0, 0.0, 0.0))));
}

#[test]
fn test_intersects_separated_on_one_axis() {
    assert!(!unit_box(Vec3::ZERO).intersects(&unit_box(Vec3::new(0.0, 0.0, 5.0))));
}

#[test]
fn test_contains() {
    let outer = AABB::new(Vec3::ZERO, Vec3::splat(2.0));
    assert!(outer.contains(&unit_box(Vec3::new(1.0, 0.0, 0.0))));
    assert!(!outer.contains(&unit_box(Vec3::new(1.5, 0.0, 0.0))));
}

// ============================================================================
// Cost and transforms
// ============================================================================

#[test]
fn test_center_distance_l1() {
    let a = unit_box(Vec3::new(1.0, 2.0, 3.0));
    let b = unit_box(Vec3::new(-1.0, 4.0, 3.5));
    assert_eq!(a.center_distance_l1(&b), 4.5);
    assert_eq!(b.center_distance_l1(&a), 4.5);
}

#[test]
fn test_transformed_by_translation() {
    let moved = unit_box(Vec3::ZERO).transformed(&Mat4::from_translation(Vec3::new(5.0, 0.0, -2.0)));
    assert!(moved.abs_diff_eq(&unit_box(Vec3::new(5.0, 0.0, -2.0)), 1e-6));
}

#[test]
fn test_transformed_by_rotation_grows_extents() {
    let aabb = AABB::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
    let rotated = aabb.transformed(&Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4));
    let half = std::f32::consts::FRAC_1_SQRT_2;
    assert!(rotated.extents.abs_diff_eq(Vec3::new(half, 0.0, half), 1e-5));
}
