/// Camera properties: the shape of the viewing volume.
///
/// Dimensions are in world units. Heights are derived from widths through
/// the aspect ratio (`height = width * aspect_ratio`), so the aspect ratio
/// here is height over width.

use crate::error::{Error, Result};
use crate::engine_bail;

/// Default aspect ratio (height / width)
pub const DEFAULT_ASPECT_RATIO: f32 = 9.0 / 16.0;
/// Default far plane width
pub const DEFAULT_FAR_WIDTH: f32 = 5.25;
/// Default depth multiplier (see `CameraProperties::camera_length`)
pub const DEFAULT_CAMERA_LENGTH: f32 = 5.0;
/// Default distance from the eye to the near plane
pub const DEFAULT_NEAR_VIEW_CUTOFF: f32 = 1.25;
/// Near plane dimensions default to the far ones divided by this
pub const DEFAULT_NEAR_DIVISOR: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraProperties {
    /// Height over width
    pub aspect_ratio: f32,
    /// Far plane width
    pub far_width: f32,
    /// Far plane height
    pub far_height: f32,
    /// Near plane width
    pub near_width: f32,
    /// Near plane height
    pub near_height: f32,
    /// Far plane distance as a multiple of `near_view_cutoff`
    pub camera_length: f32,
    /// Distance from the eye to the near plane along the view direction
    pub near_view_cutoff: f32,
}

impl Default for CameraProperties {
    fn default() -> Self {
        let far_height = DEFAULT_FAR_WIDTH * DEFAULT_ASPECT_RATIO;
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            far_width: DEFAULT_FAR_WIDTH,
            far_height,
            near_width: DEFAULT_FAR_WIDTH / DEFAULT_NEAR_DIVISOR,
            near_height: far_height / DEFAULT_NEAR_DIVISOR,
            camera_length: DEFAULT_CAMERA_LENGTH,
            near_view_cutoff: DEFAULT_NEAR_VIEW_CUTOFF,
        }
    }
}

impl CameraProperties {
    pub fn builder() -> CameraPropertiesBuilder {
        CameraPropertiesBuilder::default()
    }

    /// Distance from the eye to the far plane.
    ///
    /// Far depth is `near_view_cutoff * camera_length`, not `camera_length`.
    pub fn far_distance(&self) -> f32 {
        self.near_view_cutoff * self.camera_length
    }

    /// Check that every dimension is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("aspect_ratio", self.aspect_ratio),
            ("far_width", self.far_width),
            ("far_height", self.far_height),
            ("near_width", self.near_width),
            ("near_height", self.near_height),
            ("camera_length", self.camera_length),
            ("near_view_cutoff", self.near_view_cutoff),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                engine_bail!("galaxy3d::Frustum", Error::InvalidCameraProperties,
                    "{} must be finite and positive, got {}", name, value);
            }
        }
        Ok(())
    }
}

/// Builder for `CameraProperties`.
///
/// Unset near dimensions follow the far ones (divided by 3); heights always
/// follow widths through the aspect ratio.
#[derive(Debug, Clone, Default)]
pub struct CameraPropertiesBuilder {
    aspect_ratio: Option<f32>,
    far_width: Option<f32>,
    near_width: Option<f32>,
    camera_length: Option<f32>,
    near_view_cutoff: Option<f32>,
}

impl CameraPropertiesBuilder {
    pub fn aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn far_width(mut self, far_width: f32) -> Self {
        self.far_width = Some(far_width);
        self
    }

    pub fn near_width(mut self, near_width: f32) -> Self {
        self.near_width = Some(near_width);
        self
    }

    pub fn camera_length(mut self, camera_length: f32) -> Self {
        self.camera_length = Some(camera_length);
        self
    }

    pub fn near_view_cutoff(mut self, near_view_cutoff: f32) -> Self {
        self.near_view_cutoff = Some(near_view_cutoff);
        self
    }

    /// Derive the remaining dimensions and validate.
    ///
    /// # Errors
    ///
    /// `Error::InvalidCameraProperties` if any dimension is non-finite or
    /// not strictly positive.
    pub fn build(self) -> Result<CameraProperties> {
        let aspect_ratio = self.aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO);
        let far_width = self.far_width.unwrap_or(DEFAULT_FAR_WIDTH);
        let near_width = self.near_width.unwrap_or(far_width / DEFAULT_NEAR_DIVISOR);

        let properties = CameraProperties {
            aspect_ratio,
            far_width,
            far_height: far_width * aspect_ratio,
            near_width,
            near_height: near_width * aspect_ratio,
            camera_length: self.camera_length.unwrap_or(DEFAULT_CAMERA_LENGTH),
            near_view_cutoff: self.near_view_cutoff.unwrap_or(DEFAULT_NEAR_VIEW_CUTOFF),
        };
        properties.validate()?;
        Ok(properties)
    }
}

#[cfg(test)]
#[path = "camera_properties_tests.rs"]
mod tests;
