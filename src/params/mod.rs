//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (meters, seconds, pixels)
//! - Documented ranges and meanings

mod ocean;
mod render;
mod scene;
mod scroll;
mod story;

// Re-export all types
pub use ocean::{ShipBobParams, WaveParams};
pub use render::{CaptureConfig, RenderConfig, ShadowSettings};
pub use scene::{AssetConfig, LightRig, ShipKind, ShipPlacement};
pub use scroll::{ScrollConfig, TitleStyle};
pub use story::{Palette, StoryBeats};

/// Everything needed to assemble the scene and drive it
#[derive(Debug, Clone, Default)]
pub struct StageParams {
    pub wave: WaveParams,
    pub bob: ShipBobParams,
    pub render: RenderConfig,
    pub shadows: ShadowSettings,
    pub lights: LightRig,
    pub assets: AssetConfig,
    pub scroll: ScrollConfig,
    pub title: TitleStyle,
    pub story: StoryBeats,
}
