//! Error types for the Galaxy3D culling crate
//!
//! Geometry and BVH operations have no recoverable failure modes: misuse of
//! node accessors or indices panics. The errors below cover configuration
//! (camera properties) and bounded buffers (debug line storage).

use std::fmt;

/// Result type for Galaxy3D culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Camera properties contain a non-finite or non-positive dimension
    InvalidCameraProperties(String),

    /// A fixed-capacity buffer is full
    CapacityExceeded {
        /// Maximum number of elements the buffer can hold
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCameraProperties(msg) => write!(f, "Invalid camera properties: {}", msg),
            Error::CapacityExceeded { capacity } => {
                write!(f, "Capacity exceeded: buffer holds at most {} elements", capacity)
            }
        }
    }
}

impl std::error::Error for Error {}


// ===== ERROR MACROS =====

/// Log an error and build it.
///
/// `$kind` is a single-`String` variant constructor such as
/// `Error::InvalidCameraProperties`.
///
/// ```ignore
/// let err = engine_err!("galaxy3d::Frustum", Error::InvalidCameraProperties,
///     "aspect ratio {} is not positive", aspect);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $kind:path, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $kind(message)
    }};
}

/// Log an error and return it from the enclosing function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $kind:path, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $kind, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
