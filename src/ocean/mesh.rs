//! Wave grid mesh laid out as a subdivided plane in local XY.

use crate::mesh::Vertex;
use crate::params::WaveParams;

/// Subdivided plane whose local Z carries the wave height
///
/// Vertices run row by row from +Y to -Y, each row from -X to +X. The scene
/// rotates the plane -90° about X, so local Z ends up as world up and local
/// +Y points into the screen (world -Z).
#[derive(Debug, Clone)]
pub struct WaveSurface {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Set when heights changed since the last upload
    dirty: bool,
}

impl WaveSurface {
    /// Create a flat grid with the given extent and subdivision
    pub fn new(params: &WaveParams) -> Self {
        let segments = params.segments;
        let half_width = params.width_m / 2.0;
        let half_depth = params.depth_m / 2.0;
        let segment_width = params.width_m / segments as f32;
        let segment_depth = params.depth_m / segments as f32;

        let mut vertices = Vec::with_capacity(params.vertex_count());
        let mut indices = Vec::with_capacity(segments * segments * 6);

        for iy in 0..=segments {
            let y = half_depth - iy as f32 * segment_depth;
            for ix in 0..=segments {
                let x = ix as f32 * segment_width - half_width;
                vertices.push(Vertex {
                    position: [x, y, 0.0],
                    normal: [0.0, 0.0, 1.0],
                });
            }
        }

        // Two counter-clockwise triangles per cell (facing local +Z)
        let row = (segments + 1) as u32;
        for iy in 0..segments as u32 {
            for ix in 0..segments as u32 {
                let a = iy * row + ix;
                let b = (iy + 1) * row + ix;
                let c = b + 1;
                let d = a + 1;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            vertices,
            indices,
            dirty: true,
        }
    }

    /// Surface from explicit heights laid out on a single row
    pub fn from_heights(heights: &[f32]) -> Self {
        let vertices = heights
            .iter()
            .enumerate()
            .map(|(i, &z)| Vertex {
                position: [i as f32, 0.0, z],
                normal: [0.0, 0.0, 1.0],
            })
            .collect();

        Self {
            vertices,
            indices: Vec::new(),
            dirty: true,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Current height (local Z) of every vertex
    pub fn heights(&self) -> Vec<f32> {
        self.vertices.iter().map(|v| v.position[2]).collect()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called once the renderer has consumed the current heights
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_vertex_order() {
        let params = WaveParams {
            width_m: 2.0,
            depth_m: 2.0,
            segments: 2,
            ..WaveParams::default()
        };
        let surface = WaveSurface::new(&params);

        // First row sits at +Y, running -X to +X
        assert_eq!(surface.vertices[0].position, [-1.0, 1.0, 0.0]);
        assert_eq!(surface.vertices[2].position, [1.0, 1.0, 0.0]);
        // Last vertex is the -Y, +X corner
        assert_eq!(surface.vertices[8].position, [1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_indices_in_range() {
        let params = WaveParams {
            segments: 8,
            ..WaveParams::default()
        };
        let surface = WaveSurface::new(&params);
        let count = surface.vertex_count() as u32;
        assert!(surface.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_dirty_flag_lifecycle() {
        let mut surface = WaveSurface::from_heights(&[0.0, 0.0]);
        assert!(surface.is_dirty());
        surface.clear_dirty();
        assert!(!surface.is_dirty());
        surface.mark_dirty();
        assert!(surface.is_dirty());
        assert_eq!(surface.heights(), vec![0.0, 0.0]);
    }
}
