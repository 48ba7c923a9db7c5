//! Virtual page scroll configuration.

/// Scroll region and input scaling
#[derive(Debug, Clone)]
pub struct ScrollConfig {
    /// Scrollable distance of the story region (pixels); progress 1 at the end
    pub page_length_px: f32,

    /// Pixels per wheel line / arrow key press
    pub line_height_px: f32,

    /// Scroll distance over which the title fades and stays pinned (pixels)
    pub title_pin_px: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            page_length_px: 4000.0,
            line_height_px: 60.0,
            title_pin_px: 1000.0,
        }
    }
}

/// Title banner overlay appearance
#[derive(Debug, Clone)]
pub struct TitleStyle {
    /// Banner height as a fraction of the window height
    pub height_fraction: f32,

    /// Banner width as a fraction of the window width
    pub width_fraction: f32,

    /// Distance of the banner's top edge from the window top (fraction of height)
    pub top_fraction: f32,

    /// Banner color (sRGB) at full opacity
    pub color: crate::color::Color,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            height_fraction: 0.12,
            width_fraction: 0.5,
            top_fraction: 0.2,
            color: crate::color::Color::rgb8(0x1a, 0x1a, 0x1a),
        }
    }
}
