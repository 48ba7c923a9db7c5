//! Perspective camera that always faces a look-at target.

use glam::{Mat4, Vec3};

use crate::params::RenderConfig;

/// Perspective camera (Y up, never rolls)
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position (meters); owned by the scroll timeline
    pub position: Vec3,

    /// Look-at target (meters); re-aimed every frame
    pub target: Vec3,

    pub fov_degrees: f32,
    pub aspect: f32,
    pub near_m: f32,
    pub far_m: f32,
}

impl Camera {
    /// Create camera at the configured start position, looking at the origin
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            position: config.camera_position,
            target: Vec3::ZERO,
            fov_degrees: config.fov_degrees,
            aspect: config.aspect_ratio(),
            near_m: config.near_plane_m,
            far_m: config.far_plane_m,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Recompute the aspect ratio for a surface of `width` x `height` pixels
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near_m,
            self.far_m,
        )
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
