/*!
# Galaxy 3D Culling

Spatial indexing and view-frustum culling for the Galaxy 3D engine.

The crate computes geometry and indices only; drawing is left to the caller.

## Architecture

- **Geometry**: AABB (center + extents), plane, sphere, and plane classification
- **Camera**: camera properties, frustum corner points, six-plane frustum
- **Scene**: incremental bounding volume hierarchy, `SceneIndex` and
  `CameraCuller` strategies producing visible element id lists
- **Debug**: `LineSink` trait and a bounded line buffer for visualising
  boxes, frustums and BVH traversals
- **Log / Engine**: pluggable global logger with a severity filter

## Example

```no_run
use galaxy_3d_culling::galaxy3d::camera::{build_frustum, CameraProperties};
use galaxy_3d_culling::galaxy3d::geometry::AABB;
use galaxy_3d_culling::galaxy3d::scene::{Bvh, ROOT};
use galaxy_3d_culling::glam::{Mat4, Vec3};

let mut bvh = Bvh::new();
bvh.insert(AABB::new(Vec3::ZERO, Vec3::ONE), 1);
bvh.insert(AABB::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ONE), 2);

let near = bvh.traverse(ROOT, &AABB::new(Vec3::ZERO, Vec3::splat(2.0)));
assert_eq!(near, vec![1]);

let (_, frustum) = build_frustum(&CameraProperties::default(), &Mat4::IDENTITY);
let mut visible = Vec::new();
bvh.query_frustum(&frustum, &mut visible);
```
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geometry;
pub mod camera;
pub mod scene;
pub mod debug;

#[cfg(test)]
mod test_utils;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Geometry primitives
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Camera properties and frustum
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Debug line geometry
    pub mod debug {
        pub use crate::debug::*;
    }
}

// Re-export math library at crate root
pub use glam;
