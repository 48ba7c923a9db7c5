//! Ocean surface: the wave grid and its per-frame displacement.

mod displacement;
mod mesh;

// Re-export public types
pub use displacement::{displaced_height, WaveDisplacement};
pub use mesh::WaveSurface;
