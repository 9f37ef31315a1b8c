/// Line sink trait and a bounded line-vertex buffer.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use crate::camera::FrustumPoints;
use crate::error::{Error, Result};
use crate::geometry::AABB;
use crate::scene::BvhNode;

/// Default vertex capacity of a `DebugLines` buffer (2048 lines)
pub const DEFAULT_LINE_VERTEX_CAPACITY: usize = 4096;

/// Anything that accepts colored line segments.
pub trait LineSink {
    /// Add one segment from `a` to `b`.
    fn add_line(&mut self, a: Vec3, b: Vec3, color: Vec4);
}

/// One endpoint of a debug line, laid out for direct vertex upload
/// (28 bytes: position xyz, color rgba).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self { position: position.to_array(), color: color.to_array() }
    }
}

/// Fixed-capacity list of line vertices, two per segment.
///
/// The buffer never reallocates past its capacity, so it can back a GPU
/// vertex buffer of the same size.
#[derive(Debug, Clone)]
pub struct DebugLines {
    vertices: Vec<LineVertex>,
    capacity: usize,
    dropped: usize,
}

impl Default for DebugLines {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LINE_VERTEX_CAPACITY)
    }
}

impl DebugLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding at most `capacity` vertices. An odd capacity leaves
    /// the last slot unused.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Add a segment, or fail with `CapacityExceeded` when both endpoints
    /// do not fit.
    pub fn try_add_line(&mut self, a: Vec3, b: Vec3, color: Vec4) -> Result<()> {
        if self.vertices.len() + 2 > self.capacity {
            return Err(Error::CapacityExceeded { capacity: self.capacity });
        }
        self.vertices.push(LineVertex::new(a, color));
        self.vertices.push(LineVertex::new(b, color));
        Ok(())
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Raw vertex bytes, ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Segments rejected by `add_line` since the last `clear`
    pub fn dropped_lines(&self) -> usize {
        self.dropped
    }

    /// Forget all lines. Call once per frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.dropped = 0;
    }
}

impl LineSink for DebugLines {
    fn add_line(&mut self, a: Vec3, b: Vec3, color: Vec4) {
        if self.try_add_line(a, b, color).is_err() {
            // Warn once per frame, not once per line
            if self.dropped == 0 {
                crate::engine_warn!("galaxy3d::DebugLines",
                    "Line buffer full ({} vertices), dropping lines until next clear",
                    self.capacity);
            }
            self.dropped += 1;
        }
    }
}

impl LineSink for Vec<(Vec3, Vec3, Vec4)> {
    fn add_line(&mut self, a: Vec3, b: Vec3, color: Vec4) {
        self.push((a, b, color));
    }
}

/// The twelve edges of a box, as pairs of corner indices into
/// `AABB::corners()` (bit 0 = x, bit 1 = y, bit 2 = z).
pub fn aabb_edges() -> [(usize, usize); 12] {
    [
        // x-aligned
        (0, 1), (2, 3), (4, 5), (6, 7),
        // y-aligned
        (0, 2), (1, 3), (4, 6), (5, 7),
        // z-aligned
        (0, 4), (1, 5), (2, 6), (3, 7),
    ]
}

/// Emit the 12 edges of `aabb`.
pub fn add_aabb_lines(sink: &mut dyn LineSink, aabb: &AABB, color: Vec4) {
    let corners = aabb.corners();
    for (a, b) in aabb_edges() {
        sink.add_line(corners[a], corners[b], color);
    }
}

/// Emit the 12 edges of a frustum corner set.
pub fn add_frustum_lines(sink: &mut dyn LineSink, points: &FrustumPoints, color: Vec4) {
    for (a, b) in points.edges() {
        sink.add_line(a, b, color);
    }
}

/// Traversal visitor drawing the box of every visited node.
///
/// Leaves use `leaf_color`, branches `branch_color`.
///
/// ```ignore
/// let mut lines = DebugLines::new();
/// let hits = bvh.traverse_with(ROOT, &target,
///     bvh_node_visitor(&mut lines, leaf_color, branch_color));
/// ```
pub fn bvh_node_visitor<'a>(
    sink: &'a mut dyn LineSink,
    leaf_color: Vec4,
    branch_color: Vec4,
) -> impl FnMut(u32, &BvhNode) + 'a {
    move |_index, node| {
        let color = if node.is_leaf() { leaf_color } else { branch_color };
        add_aabb_lines(&mut *sink, node.aabb(), color);
    }
}

#[cfg(test)]
#[path = "debug_lines_tests.rs"]
mod tests;
