/// Debug line geometry (CPU side).
///
/// Turns boxes, frustums and BVH traversals into colored line segments.
/// Uploading and drawing the vertices is left to the caller.

pub mod debug_lines;

pub use debug_lines::{
    LineSink, LineVertex, DebugLines,
    DEFAULT_LINE_VERTEX_CAPACITY,
    add_aabb_lines, add_frustum_lines, aabb_edges, bvh_node_visitor,
};
