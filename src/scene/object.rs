//! Named scene entities and their transforms.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::params::ShipKind;

/// Every entity the scene ever contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Wave,
    Ship(ShipKind),
    PointLight,
    DirectionalLight,
}

impl ObjectKind {
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Wave => "wave",
            ObjectKind::Ship(ShipKind::Ship) => "ship",
            ObjectKind::Ship(ShipKind::AsianShip) => "asian-ship",
            ObjectKind::Ship(ShipKind::VikingShip) => "viking-ship",
            ObjectKind::PointLight => "point-light",
            ObjectKind::DirectionalLight => "directional-light",
        }
    }
}

/// Position, XYZ Euler rotation (radians) and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Model matrix: translate * rotate * scale
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }
}

/// A named entity with a transform; created once, never destroyed
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(kind: ObjectKind, transform: Transform) -> Self {
        Self { kind, transform }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_object_names() {
        assert_eq!(ObjectKind::Wave.name(), "wave");
        assert_eq!(ObjectKind::Ship(ShipKind::AsianShip).name(), "asian-ship");
        assert_eq!(ObjectKind::DirectionalLight.name(), "directional-light");
    }

    #[test]
    fn test_wave_rotation_maps_local_z_to_world_up() {
        let transform = Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0));
        let up = transform.matrix().transform_vector3(Vec3::Z);
        assert!((up - Vec3::Y).length() < 1e-6);

        // Local +Y ends up pointing away from the default camera (world -Z)
        let forward = transform.matrix().transform_vector3(Vec3::Y);
        assert!((forward - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_matrix_applies_scale_then_translation() {
        let transform = Transform::at(Vec3::new(70.0, 0.0, -50.0)).with_uniform_scale(40.0);
        let p = transform.matrix().transform_point3(Vec3::X);
        assert_eq!(p, Vec3::new(110.0, 0.0, -50.0));
    }
}
