//! Ship placements and light rig.

use std::f32::consts::PI;
use std::path::{Path, PathBuf};

use glam::Vec3;

use crate::color::Color;

/// Which of the three ships a placement or timeline target refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Ship,
    AsianShip,
    VikingShip,
}

impl ShipKind {
    /// Load and draw order
    pub const ALL: [ShipKind; 3] = [ShipKind::Ship, ShipKind::AsianShip, ShipKind::VikingShip];

    pub fn index(self) -> usize {
        match self {
            ShipKind::Ship => 0,
            ShipKind::AsianShip => 1,
            ShipKind::VikingShip => 2,
        }
    }

    /// Model file relative to the models directory
    pub fn asset_path(self) -> &'static str {
        match self {
            ShipKind::Ship => "ship/scene.gltf",
            ShipKind::AsianShip => "asian_pirate_ship/scene.gltf",
            ShipKind::VikingShip => "viking_ship/scene.gltf",
        }
    }
}

/// Initial transform of one ship
#[derive(Debug, Clone)]
pub struct ShipPlacement {
    pub kind: ShipKind,
    pub position: Vec3,
    /// Rotation about world Y (radians)
    pub heading_rad: f32,
    pub scale: f32,
}

impl ShipPlacement {
    pub fn fleet() -> [ShipPlacement; 3] {
        [
            ShipPlacement {
                kind: ShipKind::Ship,
                position: Vec3::ZERO,
                heading_rad: PI,
                scale: 40.0,
            },
            ShipPlacement {
                kind: ShipKind::AsianShip,
                position: Vec3::new(70.0, 0.0, -50.0),
                heading_rad: -PI / 13.0,
                scale: 40.0,
            },
            ShipPlacement {
                kind: ShipKind::VikingShip,
                position: Vec3::new(-65.0, 0.0, -50.0),
                heading_rad: PI,
                scale: 4.0,
            },
        ]
    }
}

/// Where the ship models live on disk
#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub models_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
        }
    }
}

impl AssetConfig {
    pub fn model_path(&self, kind: ShipKind) -> PathBuf {
        Path::new(&self.models_dir).join(kind.asset_path())
    }
}

/// Point and directional light rig
#[derive(Debug, Clone)]
pub struct LightRig {
    pub point_position: Vec3,
    pub point_color: Color,
    pub point_intensity: f32,
    pub directional_position: Vec3,
    pub directional_color: Color,
    pub directional_intensity: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            point_position: Vec3::new(15.0, 15.0, 15.0),
            point_color: Color::WHITE,
            point_intensity: 1.0,
            directional_position: Vec3::new(-15.0, 15.0, 15.0),
            directional_color: Color::WHITE,
            directional_intensity: 0.8,
        }
    }
}
