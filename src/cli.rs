//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{CaptureConfig, StageParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Seafarer")]
#[command(about = "Scroll-driven ocean scene with three sailing ships", long_about = None)]
pub struct Args {
    /// Directory containing the ship model folders
    #[arg(long, value_name = "DIR", default_value = "models")]
    pub models: PathBuf,

    /// Initial window width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "1280")]
    pub width: u32,

    /// Initial window height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: u32,

    /// Virtual page length the story is scrubbed over (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "4000")]
    pub scroll_length: f32,

    /// Seed for the wave baseline jitter
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Save one frame as PNG and exit
    #[arg(long, value_name = "PATH")]
    pub screenshot: Option<PathBuf>,

    /// Frame number to capture with --screenshot
    #[arg(long, value_name = "N", default_value = "60")]
    pub screenshot_frame: u64,
}

impl Args {
    /// Stage parameters with command-line overrides applied
    pub fn stage_params(&self) -> StageParams {
        let mut params = StageParams::default();
        params.assets.models_dir = self.models.clone();
        params.render.window_width = self.width.max(1);
        params.render.window_height = self.height.max(1);
        params.scroll.page_length_px = self.scroll_length.max(0.0);
        params.wave.jitter_seed = self.seed;
        params
    }

    /// Create capture configuration if screenshot mode is enabled
    pub fn capture_config(&self) -> Option<CaptureConfig> {
        self.screenshot.as_ref().map(|path| CaptureConfig {
            path: path.clone(),
            frame: self.screenshot_frame,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stage_params() {
        let args = Args::parse_from(["seafarer"]);
        let params = args.stage_params();
        let defaults = StageParams::default();
        assert_eq!(params.render.window_width, defaults.render.window_width);
        assert_eq!(params.scroll.page_length_px, defaults.scroll.page_length_px);
        assert_eq!(params.wave.jitter_seed, defaults.wave.jitter_seed);
        assert!(args.capture_config().is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "seafarer",
            "--models",
            "/tmp/ships",
            "--scroll-length",
            "2000",
            "--seed",
            "7",
            "--screenshot",
            "out.png",
            "--screenshot-frame",
            "5",
        ]);
        let params = args.stage_params();
        assert_eq!(params.assets.models_dir, PathBuf::from("/tmp/ships"));
        assert_eq!(params.scroll.page_length_px, 2000.0);
        assert_eq!(params.wave.jitter_seed, 7);

        let capture = args.capture_config().unwrap();
        assert_eq!(capture.path, PathBuf::from("out.png"));
        assert_eq!(capture.frame, 5);
    }
}
