//! Rendering, lighting and capture configuration.

use std::path::PathBuf;

use glam::Vec3;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,

    /// Initial camera position (meters); the camera always looks at the origin
    pub camera_position: Vec3,

    /// Fog blend start distance (meters)
    pub fog_near_m: f32,

    /// Fog fully opaque distance (meters)
    pub fog_far_m: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane_m: 1.0,
            far_plane_m: 500.0,
            camera_position: Vec3::new(0.0, 25.0, 150.0),
            fog_near_m: 0.1,
            fog_far_m: 500.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Shadow map settings shared by both lights
///
/// The point light renders one map per cube face, each `map_size` square.
#[derive(Debug, Clone)]
pub struct ShadowSettings {
    /// Shadow map resolution (texels per side)
    pub map_size: u32,

    /// Percentage-closer filter radius (texels)
    pub blur_radius: f32,

    /// Half extent of the directional light's orthographic shadow volume (meters)
    pub frustum_half_extent_m: f32,

    /// Distance the shadow camera is pulled back along the light direction (meters)
    pub light_distance_m: f32,

    /// Near plane of the point light's six 90 degree face cameras (meters)
    pub point_near_m: f32,

    /// Far plane of the point light's face cameras (meters)
    pub point_far_m: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            map_size: 1024,
            blur_radius: 10.0,
            frustum_half_extent_m: 120.0,
            light_distance_m: 250.0,
            point_near_m: 0.5,
            point_far_m: 500.0,
        }
    }
}

/// Screenshot capture (writes one frame to disk, then exits)
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Output PNG path
    pub path: PathBuf,

    /// Frame number to capture (counted from the first rendered tick)
    pub frame: u64,
}
