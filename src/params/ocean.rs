//! Wave surface geometry and displacement parameters.

/// Wave plane geometry and animation parameters
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Plane extent along local X (meters)
    pub width_m: f32,

    /// Plane extent along local Y, world Z after rotation (meters)
    pub depth_m: f32,

    /// Segments per side (151 x 151 = 22,801 vertices at 150)
    pub segments: usize,

    /// Peak displacement and baseline jitter span (meters)
    pub amplitude_m: f32,

    /// Angular speed of the displacement sine (radians per second)
    pub wave_speed: f32,

    /// Seed for baseline jitter (fixed so runs are reproducible)
    pub jitter_seed: u64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            width_m: 1500.0,
            depth_m: 1500.0,
            segments: 150,
            amplitude_m: 2.5,
            wave_speed: 3.0,
            jitter_seed: 42,
        }
    }
}

impl WaveParams {
    /// Number of grid vertices: (segments + 1)^2
    pub fn vertex_count(&self) -> usize {
        (self.segments + 1).pow(2)
    }
}

/// Shared vertical bob applied to every ship
#[derive(Debug, Clone)]
pub struct ShipBobParams {
    /// Angular speed (radians per second)
    pub speed: f32,

    /// Bob height (meters)
    pub amplitude_m: f32,
}

impl Default for ShipBobParams {
    fn default() -> Self {
        Self {
            speed: 3.0,
            amplitude_m: 1.0,
        }
    }
}
