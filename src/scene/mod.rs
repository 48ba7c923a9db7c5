//! Surface scene: wave, ships, lights, camera and appearance.

mod light;
mod object;

pub use light::{DirectionalLight, PointLight};
pub use object::{ObjectKind, SceneObject, Transform};

use std::f32::consts::FRAC_PI_2;

use anyhow::Result;
use glam::Vec3;

use crate::assets::{self, ModelLoader};
use crate::camera::Camera;
use crate::ocean::{WaveDisplacement, WaveSurface};
use crate::params::{Palette, ShipKind, ShipPlacement, StageParams};
use crate::ships::{Ship, ShipFleet};
use crate::timeline::StoryState;

/// Linear fog range (meters); the color lives in the appearance palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub near_m: f32,
    pub far_m: f32,
}

/// The wave object: its transform plus the live vertex buffer
#[derive(Debug, Clone)]
pub struct Wave {
    pub object: SceneObject,
    pub surface: WaveSurface,
    pub receives_shadow: bool,
}

/// Everything visible, built once at startup
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub wave: Wave,
    pub ships: ShipFleet,
    pub point_light: PointLight,
    pub directional_light: DirectionalLight,
    /// Wave, background and fog colors
    pub appearance: Palette,
    pub fog: Fog,
}

impl Scene {
    /// Build the scene around an already-jittered wave surface and loaded ships
    pub fn new(params: &StageParams, surface: WaveSurface, ships: ShipFleet) -> Self {
        let wave = Wave {
            object: SceneObject::new(
                ObjectKind::Wave,
                Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            ),
            surface,
            receives_shadow: true,
        };

        Self {
            camera: Camera::new(&params.render),
            wave,
            ships,
            point_light: PointLight::from_rig(&params.lights),
            directional_light: DirectionalLight::from_rig(&params.lights),
            appearance: Palette::LIGHT,
            fog: Fog {
                near_m: params.render.fog_near_m,
                far_m: params.render.fog_far_m,
            },
        }
    }

    /// Every named object, in a stable order
    pub fn objects(&self) -> Vec<&SceneObject> {
        let mut objects = vec![&self.wave.object];
        objects.extend(self.ships.iter().map(|s| &s.object));
        objects.push(&self.point_light.object);
        objects.push(&self.directional_light.object);
        objects
    }

    /// Current values of every field the scroll timeline drives
    pub fn story_state(&self) -> StoryState {
        StoryState {
            camera_position: self.camera.position,
            ship_z: ShipKind::ALL.map(|k| self.ships.get(k).position().z),
            appearance: self.appearance,
        }
    }

    /// Overwrite the timeline-owned fields (camera position, ship Z, colors)
    pub fn apply_story(&mut self, state: &StoryState) {
        self.camera.position = state.camera_position;
        for kind in ShipKind::ALL {
            self.ships.get_mut(kind).object.transform.position.z = state.ship_z[kind.index()];
        }
        self.appearance = state.appearance;
    }
}

/// Load assets and assemble the scene
///
/// Models are loaded one after another; any failure aborts construction and
/// no partial scene is returned.
pub fn assemble(
    loader: &dyn ModelLoader,
    params: &StageParams,
) -> Result<(Scene, WaveDisplacement)> {
    let mut surface = WaveSurface::new(&params.wave);
    let displacement = WaveDisplacement::jitter(&mut surface, &params.wave);

    let models = assets::load_fleet(loader, &params.assets)?;
    let placements = ShipPlacement::fleet();
    let [m0, m1, m2] = models;
    let [p0, p1, p2] = &placements;
    let ships = ShipFleet::new([Ship::new(p0, m0), Ship::new(p1, m1), Ship::new(p2, m2)]);

    let scene = Scene::new(params, surface, ships);
    log::info!(
        "Scene assembled: {} objects, {} wave vertices",
        scene.objects().len(),
        scene.wave.surface.vertex_count()
    );
    Ok((scene, displacement))
}
