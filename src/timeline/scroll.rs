//! Virtual page scroll: offset tracking, trigger regions and the title fade.

use crate::params::ScrollConfig;

/// Page region mapped to progress 0..1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    pub start_px: f32,
    pub end_px: f32,
}

impl ScrollTrigger {
    pub fn new(start_px: f32, end_px: f32) -> Self {
        Self { start_px, end_px }
    }

    /// Clamped normalized position of `offset_px` inside the region
    pub fn progress(&self, offset_px: f32) -> f32 {
        let span = self.end_px - self.start_px;
        if span <= 0.0 {
            return if offset_px >= self.end_px { 1.0 } else { 0.0 };
        }
        ((offset_px - self.start_px) / span).clamp(0.0, 1.0)
    }
}

/// Title visibility at one scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleState {
    pub opacity: f32,
    /// Held in place while the offset is inside the pin range
    pub pinned: bool,
    /// How far the title has scrolled up past its pinned position (pixels)
    pub lift_px: f32,
}

impl TitleState {
    pub const VISIBLE: TitleState = TitleState {
        opacity: 1.0,
        pinned: false,
        lift_px: 0.0,
    };
}

/// Fades the title to transparent over a fixed scroll distance while pinned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleFade {
    trigger: ScrollTrigger,
}

impl TitleFade {
    pub fn new(start_px: f32, pin_length_px: f32) -> Self {
        Self {
            trigger: ScrollTrigger::new(start_px, start_px + pin_length_px),
        }
    }

    pub fn sample(&self, offset_px: f32) -> TitleState {
        let progress = self.trigger.progress(offset_px);
        TitleState {
            opacity: 1.0 - progress,
            pinned: offset_px >= self.trigger.start_px && offset_px <= self.trigger.end_px,
            lift_px: (offset_px - self.trigger.end_px).max(0.0),
        }
    }
}

/// Scroll offset of the virtual page, clamped to [0, max]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    offset_px: f32,
    max_px: f32,
    line_px: f32,
}

impl ScrollState {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            offset_px: 0.0,
            max_px: config.page_length_px.max(0.0),
            line_px: config.line_height_px,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset_px
    }

    pub fn max(&self) -> f32 {
        self.max_px
    }

    /// Jump to an absolute offset
    pub fn set(&mut self, offset_px: f32) {
        self.offset_px = if offset_px.is_nan() {
            0.0
        } else {
            offset_px.clamp(0.0, self.max_px)
        };
    }

    pub fn scroll_by(&mut self, delta_px: f32) {
        self.set(self.offset_px + delta_px);
    }

    /// Wheel notches; positive means further down the page
    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll_by(lines * self.line_px);
    }

    pub fn to_top(&mut self) {
        self.set(0.0);
    }

    pub fn to_bottom(&mut self) {
        self.set(self.max_px);
    }
}
