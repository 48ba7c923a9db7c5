//! Scroll story: palettes, camera waypoints and segment weights.

use glam::Vec3;

use crate::color::Color;

/// Wave, background and fog colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub wave: Color,
    pub background: Color,
    pub fog: Color,
}

impl Palette {
    /// Palette at the top of the page
    pub const LIGHT: Palette = Palette {
        wave: Color::rgb8(0x00, 0xff, 0xff),
        background: Color::rgb8(0xff, 0xff, 0xff),
        fog: Color::rgb8(0xf0, 0xf0, 0xf0),
    };

    /// Palette once the color segment has completed
    pub const DARK: Palette = Palette {
        wave: Color::rgb8(0x42, 0x68, 0xff),
        background: Color::rgb8(0x2a, 0x2a, 0x2a),
        fog: Color::rgb8(0x2f, 0x2f, 0x2f),
    };
}

/// Targets and relative weights of the scrubbed timeline
#[derive(Debug, Clone)]
pub struct StoryBeats {
    pub dark_palette: Palette,
    pub palette_weight: f32,

    /// Camera swings here first (Y untouched)
    pub swing_x_m: f32,
    pub swing_z_m: f32,
    pub swing_weight: f32,

    /// Ships sail to this Z
    pub ships_exit_z_m: f32,
    pub ships_weight: f32,

    /// Two pull-back waypoints, in order
    pub pull_back: [Vec3; 2],
    pub pull_back_weight: f32,
}

impl Default for StoryBeats {
    fn default() -> Self {
        Self {
            dark_palette: Palette::DARK,
            palette_weight: 1.5,
            swing_x_m: 100.0,
            swing_z_m: -100.0,
            swing_weight: 2.5,
            ships_exit_z_m: 150.0,
            ships_weight: 2.0,
            pull_back: [Vec3::new(0.0, 25.0, 200.0), Vec3::new(0.0, 50.0, 300.0)],
            pull_back_weight: 2.0,
        }
    }
}
