/// Axis-Aligned Bounding Box stored as center + half-extents.
///
/// Min/max corners are derived on demand (`center ± extents`). Extents are
/// expected to be non-negative; `AABB::new` does not enforce it, use
/// `clamped()` or check `has_valid_extents()` when the input is untrusted.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AABB {
    /// Box center
    pub center: Vec3,
    /// Half-widths along each axis
    pub extents: Vec3,
}

impl AABB {
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self { center, extents }
    }

    /// Build from corners. Swapped corners are reordered per axis.
    ///
    /// Rounding is conservative: the derived `min()`/`max()` always cover
    /// the given corners, possibly by a few ulps.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        let (lo, hi) = (min.min(max), min.max(max));
        let center = lo * 0.5 + hi * 0.5;
        let mut extents = (hi - center).max(center - lo);
        for axis in 0..3 {
            while center[axis] + extents[axis] < hi[axis] || center[axis] - extents[axis] > lo[axis] {
                extents[axis] = next_up(extents[axis]);
            }
        }
        Self { center, extents }
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    /// True when no extent component is negative (NaN counts as invalid)
    pub fn has_valid_extents(&self) -> bool {
        self.extents.cmpge(Vec3::ZERO).all()
    }

    /// Copy with negative (or NaN) extent components replaced by zero
    pub fn clamped(&self) -> Self {
        Self { center: self.center, extents: self.extents.max(Vec3::ZERO) }
    }

    /// Smallest box enclosing `self` and `other`
    pub fn encapsulate(&self, other: &AABB) -> AABB {
        AABB::from_min_max(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Strict overlap test: touching faces do not count.
    ///
    /// For every axis `a.min < b.max && a.max > b.min`.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min().cmplt(other.max()).all() && self.max().cmpgt(other.min()).all()
    }

    /// Test if `other` lies entirely within `self` (faces may touch)
    pub fn contains(&self, other: &AABB) -> bool {
        self.min().cmple(other.min()).all() && self.max().cmpge(other.max()).all()
    }

    /// L1 (Manhattan) distance between the two centers
    pub fn center_distance_l1(&self, other: &AABB) -> f32 {
        let d = (self.center - other.center).abs();
        d.x + d.y + d.z
    }

    /// Component-wise comparison of center and extents within `max_abs_diff`
    pub fn abs_diff_eq(&self, other: &AABB, max_abs_diff: f32) -> bool {
        self.center.abs_diff_eq(other.center, max_abs_diff)
            && self.extents.abs_diff_eq(other.extents, max_abs_diff)
    }

    /// The eight corners, bit layout: bit0 = X, bit1 = Y, bit2 = Z (0 = min, 1 = max)
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min(), self.max());
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            )
        })
    }

    /// Transform this box by an affine matrix, returning the enclosing box.
    ///
    /// Arvo's method: the new center is the transformed center, the new
    /// extents are the extents projected through the absolute 3x3 part.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let center = matrix.transform_point3(self.center);
        let mut extents = Vec3::ZERO;
        for i in 0..3 {
            let axis = matrix.col(i).truncate().abs();
            extents += axis * self.extents[i];
        }
        AABB { center, extents }
    }
}

/// Next representable value above a finite, non-negative `value`
fn next_up(value: f32) -> f32 {
    f32::from_bits(value.to_bits() + 1)
}

/// Smallest box containing both inputs. Commutative.
pub fn encapsulate(first: &AABB, second: &AABB) -> AABB {
    first.encapsulate(second)
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
