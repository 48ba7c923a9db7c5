//! Per-vertex wave displacement driven by elapsed time.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::mesh::WaveSurface;
use crate::params::WaveParams;

/// Height of vertex `index` at `elapsed_s`:
/// `baseline + sin(elapsed_s * speed + index²) * amplitude`
///
/// The phase is evaluated in f64; `index²` reaches ~5e8 on the default grid,
/// far past the range where f32 keeps sub-radian precision.
pub fn displaced_height(
    baseline: f32,
    index: usize,
    elapsed_s: f32,
    speed: f32,
    amplitude: f32,
) -> f32 {
    let i = index as f64;
    let phase = elapsed_s as f64 * speed as f64 + i * i;
    (baseline as f64 + phase.sin() * amplitude as f64) as f32
}

/// Owns the baseline heights and rewrites the live surface every frame
#[derive(Debug, Clone)]
pub struct WaveDisplacement {
    baseline: Vec<f32>,
    amplitude: f32,
    speed: f32,
}

impl WaveDisplacement {
    /// Randomize the surface's baseline by up to ±amplitude/2 per vertex
    ///
    /// The jittered heights are written into the surface and kept as the
    /// baseline, so the grid never looks like a perfectly regular corrugation.
    pub fn jitter(surface: &mut WaveSurface, params: &WaveParams) -> Self {
        let mut rng = SmallRng::seed_from_u64(params.jitter_seed);
        let mut baseline = Vec::with_capacity(surface.vertex_count());

        for vertex in &mut surface.vertices {
            let jitter = (rng.gen::<f32>() - 0.5) * params.amplitude_m;
            let z = vertex.position[2] + jitter;
            vertex.position[2] = z;
            baseline.push(z);
        }
        surface.mark_dirty();

        Self {
            baseline,
            amplitude: params.amplitude_m,
            speed: params.wave_speed,
        }
    }

    /// Use the surface's current heights as the baseline, unchanged
    pub fn from_surface(surface: &WaveSurface, amplitude: f32, speed: f32) -> Self {
        Self {
            baseline: surface.heights(),
            amplitude,
            speed,
        }
    }

    pub fn baseline(&self) -> &[f32] {
        &self.baseline
    }

    /// Write `height(i, elapsed_s)` into every vertex and mark the surface dirty
    pub fn apply(&self, elapsed_s: f32, surface: &mut WaveSurface) {
        assert_eq!(
            self.baseline.len(),
            surface.vertex_count(),
            "wave baseline out of lockstep with surface"
        );

        for (index, (vertex, &baseline)) in surface
            .vertices
            .iter_mut()
            .zip(&self.baseline)
            .enumerate()
        {
            vertex.position[2] =
                displaced_height(baseline, index, elapsed_s, self.speed, self.amplitude);
        }
        surface.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const AMPLITUDE: f32 = 2.5;
    const SPEED: f32 = 3.0;

    fn flat(count: usize) -> (WaveSurface, WaveDisplacement) {
        let surface = WaveSurface::from_heights(&vec![0.0; count]);
        let displacement = WaveDisplacement::from_surface(&surface, AMPLITUDE, SPEED);
        (surface, displacement)
    }

    #[test]
    fn test_three_vertex_heights_at_t0() {
        let (mut surface, displacement) = flat(3);
        displacement.apply(0.0, &mut surface);

        let heights = surface.heights();
        assert_eq!(heights[0], 0.0);
        assert!((heights[1] - 2.5 * 1.0_f32.sin()).abs() < 1e-5);
        assert!((heights[2] - 2.5 * 4.0_f32.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_vertex_zero_peaks_at_sixth_pi() {
        let (mut surface, displacement) = flat(3);
        displacement.apply(PI / 6.0, &mut surface);

        // sin(3 * π/6 + 0) = sin(π/2) = 1
        assert!((surface.heights()[0] - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_heights_bounded_by_amplitude() {
        let baseline = [0.7, -1.1, 0.2, 1.2, -0.3];
        let mut surface = WaveSurface::from_heights(&baseline);
        let displacement = WaveDisplacement::from_surface(&surface, AMPLITUDE, SPEED);

        for step in 0..200 {
            let t = step as f32 * 0.037;
            displacement.apply(t, &mut surface);
            for (h, b) in surface.heights().iter().zip(baseline) {
                assert!(*h >= b - AMPLITUDE - 1e-5 && *h <= b + AMPLITUDE + 1e-5);
            }
        }
    }

    #[test]
    fn test_heights_periodic_in_time() {
        let period = 2.0 * std::f64::consts::PI / SPEED as f64;
        for index in [0usize, 3, 17, 150] {
            let a = displaced_height(0.4, index, 1.25, SPEED, AMPLITUDE);
            let b = displaced_height(0.4, index, (1.25 + period) as f32, SPEED, AMPLITUDE);
            assert!((a - b).abs() < 1e-4, "vertex {} not periodic", index);
        }
    }

    #[test]
    fn test_apply_marks_dirty() {
        let (mut surface, displacement) = flat(2);
        surface.clear_dirty();
        displacement.apply(0.5, &mut surface);
        assert!(surface.is_dirty());
    }

    #[test]
    fn test_jitter_is_seeded_and_bounded() {
        let params = WaveParams {
            segments: 10,
            ..WaveParams::default()
        };
        let mut a = WaveSurface::new(&params);
        let mut b = WaveSurface::new(&params);
        let da = WaveDisplacement::jitter(&mut a, &params);
        let db = WaveDisplacement::jitter(&mut b, &params);

        assert_eq!(da.baseline(), db.baseline());
        let half = params.amplitude_m / 2.0;
        assert!(da.baseline().iter().all(|z| z.abs() <= half));
        // Jitter actually breaks the flat grid
        assert!(da.baseline().iter().any(|z| *z != 0.0));
    }

    #[test]
    #[should_panic(expected = "lockstep")]
    fn test_mismatched_surface_rejected() {
        let (_, displacement) = flat(3);
        let mut other = WaveSurface::from_heights(&[0.0; 4]);
        displacement.apply(0.0, &mut other);
    }
}
