//! Tween targets: which field a segment drives and where it ends up.

use crate::color::{lerp_clamped, Color};
use crate::params::ShipKind;

use super::StoryState;

/// End value for one timeline-owned field (or camera axes)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Camera position; `None` axes keep their current value
    Camera {
        x: Option<f32>,
        y: Option<f32>,
        z: Option<f32>,
    },
    ShipZ(ShipKind, f32),
    WaveColor(Color),
    BackgroundColor(Color),
    FogColor(Color),
}

impl Target {
    /// Write `from` eased toward this target by `t` into `into`
    pub fn blend(&self, from: &StoryState, t: f32, into: &mut StoryState) {
        match *self {
            Target::Camera { x, y, z } => {
                let start = from.camera_position;
                let pos = &mut into.camera_position;
                if let Some(x) = x {
                    pos.x = lerp_clamped(start.x, x, t);
                }
                if let Some(y) = y {
                    pos.y = lerp_clamped(start.y, y, t);
                }
                if let Some(z) = z {
                    pos.z = lerp_clamped(start.z, z, t);
                }
            }
            Target::ShipZ(kind, z) => {
                let i = kind.index();
                into.ship_z[i] = lerp_clamped(from.ship_z[i], z, t);
            }
            Target::WaveColor(c) => {
                into.appearance.wave = from.appearance.wave.lerp(c, t);
            }
            Target::BackgroundColor(c) => {
                into.appearance.background = from.appearance.background.lerp(c, t);
            }
            Target::FogColor(c) => {
                into.appearance.fog = from.appearance.fog.lerp(c, t);
            }
        }
    }

    /// Jump straight to the end value
    pub fn settle(&self, state: &mut StoryState) {
        let from = *state;
        self.blend(&from, 1.0, state);
    }
}
