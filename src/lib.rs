//! Seafarer library - scroll-driven ocean scene

pub mod animate;
pub mod assets;
pub mod camera;
pub mod cli;
pub mod color;
pub mod frame_loop;
pub mod mesh;
pub mod ocean;
pub mod params;
pub mod rendering;
pub mod scene;
pub mod ships;
pub mod timeline;
