//! Point and directional lights with shadow settings.

use glam::{Mat4, Vec3};

use super::object::{ObjectKind, SceneObject, Transform};
use crate::color::Color;
use crate::params::{LightRig, ShadowSettings};

#[derive(Debug, Clone)]
pub struct PointLight {
    pub object: SceneObject,
    pub color: Color,
    pub intensity: f32,
    pub casts_shadow: bool,
}

/// Directional light shining from its position toward `target`
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    pub object: SceneObject,
    pub target: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub casts_shadow: bool,
}

impl PointLight {
    pub fn from_rig(rig: &LightRig) -> Self {
        Self {
            object: SceneObject::new(ObjectKind::PointLight, Transform::at(rig.point_position)),
            color: rig.point_color,
            intensity: rig.point_intensity,
            casts_shadow: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.object.transform.position
    }

    /// View-projections of the six 90 degree shadow cameras, in
    /// `POINT_SHADOW_FACES` order
    pub fn shadow_view_projs(&self, shadows: &ShadowSettings) -> [Mat4; 6] {
        let eye = self.position();
        let proj = Mat4::perspective_rh(
            std::f32::consts::FRAC_PI_2,
            1.0,
            shadows.point_near_m,
            shadows.point_far_m,
        );
        POINT_SHADOW_FACES.map(|(dir, up)| proj * Mat4::look_at_rh(eye, eye + dir, up))
    }
}

/// Cube face directions and up vectors: +X, -X, +Y, -Y, +Z, -Z
///
/// A point lies on the face of the dominant axis of its offset from the light.
pub const POINT_SHADOW_FACES: [(Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y),
    (Vec3::NEG_X, Vec3::Y),
    (Vec3::Y, Vec3::Z),
    (Vec3::NEG_Y, Vec3::Z),
    (Vec3::Z, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y),
];

impl DirectionalLight {
    pub fn from_rig(rig: &LightRig) -> Self {
        Self {
            object: SceneObject::new(
                ObjectKind::DirectionalLight,
                Transform::at(rig.directional_position),
            ),
            target: Vec3::ZERO,
            color: rig.directional_color,
            intensity: rig.directional_intensity,
            casts_shadow: true,
        }
    }

    /// Unit vector pointing from the surface toward the light
    pub fn to_light(&self) -> Vec3 {
        (self.object.transform.position - self.target).normalize_or(Vec3::Y)
    }

    /// Orthographic view-projection of the shadow camera
    pub fn shadow_view_proj(&self, shadows: &ShadowSettings) -> Mat4 {
        let eye = self.target + self.to_light() * shadows.light_distance_m;
        let up = if self.to_light().abs_diff_eq(Vec3::Y, 1e-4) {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(eye, self.target, up);
        let e = shadows.frustum_half_extent_m;
        let proj = Mat4::orthographic_rh(-e, e, -e, e, 0.5, shadows.light_distance_m * 2.0);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rig_defaults() {
        let rig = LightRig::default();
        let point = PointLight::from_rig(&rig);
        let sun = DirectionalLight::from_rig(&rig);

        assert_eq!(point.position(), Vec3::new(15.0, 15.0, 15.0));
        assert_eq!(point.intensity, 1.0);
        assert_eq!(sun.intensity, 0.8);
        assert_eq!(sun.object.name(), "directional-light");
    }

    #[test]
    fn test_shadow_camera_sees_origin() {
        let sun = DirectionalLight::from_rig(&LightRig::default());
        let clip = sun.shadow_view_proj(&ShadowSettings::default()) * Vec3::ZERO.extend(1.0);

        assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&clip.z));
    }

    #[test]
    fn test_point_faces_cover_their_axis() {
        let lamp = PointLight::from_rig(&LightRig::default());
        let faces = lamp.shadow_view_projs(&ShadowSettings::default());

        for (i, (dir, _)) in POINT_SHADOW_FACES.iter().enumerate() {
            // Straight ahead lands in the middle of its own face
            let ahead = faces[i] * (lamp.position() + *dir * 20.0).extend(1.0);
            let ndc = ahead.truncate() / ahead.w;
            assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4, "face {}", i);
            assert!((0.0..=1.0).contains(&ndc.z));

            // Off-axis but still dominant stays inside the face
            let side = Vec3::new(dir.y.abs(), dir.z.abs(), dir.x.abs()) * 15.0;
            let edge = faces[i] * (lamp.position() + *dir * 20.0 + side).extend(1.0);
            let ndc = edge.truncate() / edge.w;
            assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "face {}", i);

            // Behind the face camera is clipped
            let behind = faces[i] * (lamp.position() - *dir * 20.0).extend(1.0);
            assert!(behind.w < 0.0);
        }
    }
}
