//! GPU uniform layouts and their construction from the scene.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::color::Color;
use crate::params::{ShadowSettings, TitleStyle};
use crate::scene::Scene;
use crate::timeline::TitleState;

/// Depth bias subtracted before the directional shadow comparison (NDC depth)
const SHADOW_BIAS: f32 = 0.002;

/// Point faces use a perspective depth, which is much denser far from the light
const POINT_SHADOW_BIAS: f32 = 0.0005;

/// Per-frame scene uniforms (camera, fog, lights, shadow camera)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// Camera view matrix; fog is driven by view-space depth
    pub view: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// Linear RGB
    pub fog_color: [f32; 4],
    /// near, far, unused, unused
    pub fog_range: [f32; 4],
    /// xyz position, w intensity
    pub point_light: [f32; 4],
    pub point_color: [f32; 4],
    /// xyz unit vector toward the light, w intensity
    pub directional_light: [f32; 4],
    pub directional_color: [f32; 4],
    /// map size, blur radius, bias, enabled
    pub shadow_params: [f32; 4],
}

impl SceneUniforms {
    pub fn from_scene(scene: &Scene, shadows: &ShadowSettings) -> Self {
        let point = &scene.point_light;
        let sun = &scene.directional_light;
        let shadows_enabled = sun.casts_shadow && scene.wave.receives_shadow;

        Self {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            view: scene.camera.view().to_cols_array_2d(),
            light_view_proj: sun.shadow_view_proj(shadows).to_cols_array_2d(),
            camera_pos: scene.camera.position.extend(1.0).to_array(),
            fog_color: rgb(scene.appearance.fog, 1.0),
            fog_range: [scene.fog.near_m, scene.fog.far_m, 0.0, 0.0],
            point_light: point.position().extend(point.intensity).to_array(),
            point_color: rgb(point.color, 1.0),
            directional_light: sun.to_light().extend(sun.intensity).to_array(),
            directional_color: rgb(sun.color, 1.0),
            shadow_params: [
                shadows.map_size as f32,
                shadows.blur_radius,
                SHADOW_BIAS,
                if shadows_enabled { 1.0 } else { 0.0 },
            ],
        }
    }
}

/// Point light cube-face cameras for the shadow lookup
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PointShadowUniforms {
    /// +X, -X, +Y, -Y, +Z, -Z
    pub face_view_proj: [[[f32; 4]; 4]; 6],
    /// map size, blur radius, bias, enabled
    pub params: [f32; 4],
}

impl PointShadowUniforms {
    pub fn from_scene(scene: &Scene, shadows: &ShadowSettings) -> Self {
        let point = &scene.point_light;
        let enabled = point.casts_shadow && scene.wave.receives_shadow;
        Self {
            face_view_proj: point
                .shadow_view_projs(shadows)
                .map(|m| m.to_cols_array_2d()),
            params: [
                shadows.map_size as f32,
                shadows.blur_radius,
                POINT_SHADOW_BIAS,
                if enabled { 1.0 } else { 0.0 },
            ],
        }
    }
}

/// Per-draw uniforms (model transform and material color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    /// Linear RGB, w = 1 when the object receives shadows
    pub color: [f32; 4],
}

impl ObjectUniforms {
    pub fn new(model: Mat4, color: Color, receives_shadow: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            color: rgb(color, if receives_shadow { 1.0 } else { 0.0 }),
        }
    }
}

/// Shadow pass camera
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ShadowUniforms {
    pub light_view_proj: [[f32; 4]; 4],
}

/// Title banner rectangle (NDC) and color (linear RGB, alpha = opacity)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TitleUniforms {
    /// left, top, right, bottom
    pub rect: [f32; 4],
    pub color: [f32; 4],
}

impl TitleUniforms {
    pub fn new(style: &TitleStyle, title: &TitleState, surface_height: u32) -> Self {
        // Held at its resting place while pinned
        let lift_px = if title.pinned { 0.0 } else { title.lift_px.max(0.0) };
        let lift_ndc = 2.0 * lift_px / surface_height.max(1) as f32;
        let top = 1.0 - 2.0 * style.top_fraction + lift_ndc;
        let bottom = top - 2.0 * style.height_fraction;
        Self {
            rect: [-style.width_fraction, top, style.width_fraction, bottom],
            color: rgb(style.color, title.opacity.clamp(0.0, 1.0)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.color[3] > 0.0 && self.rect[3] < 1.0
    }
}

fn rgb(color: Color, w: f32) -> [f32; 4] {
    let [r, g, b] = color.to_linear();
    [r, g, b, w]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 320);
        assert_eq!(std::mem::size_of::<PointShadowUniforms>(), 400);
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 144);
        assert_eq!(std::mem::size_of::<TitleUniforms>() % 16, 0);
    }

    #[test]
    fn test_scene_uniforms_carry_fog_and_lights() {
        let scene = scene::tests::scene();
        let uniforms = SceneUniforms::from_scene(&scene, &ShadowSettings::default());

        assert_eq!(uniforms.fog_range[0], 0.1);
        assert_eq!(uniforms.fog_range[1], 500.0);
        assert_eq!(uniforms.point_light, [15.0, 15.0, 15.0, 1.0]);
        assert_eq!(uniforms.directional_light[3], 0.8);
        assert_eq!(uniforms.shadow_params[0], 1024.0);
        assert_eq!(uniforms.shadow_params[1], 10.0);
        assert_eq!(uniforms.camera_pos, [0.0, 25.0, 150.0, 1.0]);
    }

    #[test]
    fn test_title_rect_lifts_after_pin() {
        let style = TitleStyle::default();
        let pinned = TitleUniforms::new(&style, &TitleState::VISIBLE, 800);
        let lifted = TitleUniforms::new(
            &style,
            &TitleState {
                opacity: 0.0,
                pinned: false,
                lift_px: 400.0,
            },
            800,
        );

        assert_eq!(pinned.color[3], 1.0);
        assert!(pinned.is_visible());
        assert!((lifted.rect[1] - pinned.rect[1] - 1.0).abs() < 1e-6);
        assert!(!lifted.is_visible());
    }

    #[test]
    fn test_pinned_title_does_not_move() {
        let style = TitleStyle::default();
        let resting = TitleUniforms::new(&style, &TitleState::VISIBLE, 800);
        let pinned = TitleUniforms::new(
            &style,
            &TitleState {
                opacity: 0.5,
                pinned: true,
                lift_px: 120.0,
            },
            800,
        );

        assert_eq!(pinned.rect, resting.rect);
        assert_eq!(pinned.color[3], 0.5);
    }

    #[test]
    fn test_point_shadow_uniforms() {
        let mut scene = scene::tests::scene();
        let shadows = ShadowSettings::default();
        let uniforms = PointShadowUniforms::from_scene(&scene, &shadows);

        assert_eq!(uniforms.params[0], 1024.0);
        assert_eq!(uniforms.params[1], 10.0);
        assert_eq!(uniforms.params[3], 1.0);

        let faces = scene.point_light.shadow_view_projs(&shadows);
        for (i, face) in faces.iter().enumerate() {
            assert_eq!(uniforms.face_view_proj[i], face.to_cols_array_2d());
        }

        scene.point_light.casts_shadow = false;
        let disabled = PointShadowUniforms::from_scene(&scene, &shadows);
        assert_eq!(disabled.params[3], 0.0);
    }

    #[test]
    fn test_fog_uses_view_depth() {
        let scene = scene::tests::scene();
        let uniforms = SceneUniforms::from_scene(&scene, &ShadowSettings::default());
        let view = Mat4::from_cols_array_2d(&uniforms.view);

        // The look-at target sits straight ahead at its full distance
        let depth = -(view * scene.camera.target.extend(1.0)).z;
        let distance = scene.camera.position.distance(scene.camera.target);
        assert!((depth - distance).abs() < 1e-3);

        // A point off to the side at the same depth is no farther in the fog
        let side = view.inverse() * glam::Vec4::new(60.0, 0.0, -distance, 1.0);
        let side_depth = -(view * side).z;
        assert!((side_depth - distance).abs() < 1e-3);
        assert!(side.truncate().distance(scene.camera.position) > distance + 1.0);
    }
}
