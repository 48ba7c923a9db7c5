//! Frame loop: per-tick animation, scroll scrubbing, resize and visibility.

use anyhow::Result;
use glam::Vec3;

use crate::animate::{Animatable, FrameContext};
use crate::assets::ModelLoader;
use crate::params::StageParams;
use crate::scene::{self, Scene};
use crate::ships::ShipBob;
use crate::timeline::{ScrollState, ScrollTrigger, Timeline, TitleFade, TitleState};

/// Anything that can present a scene
pub trait FrameSink {
    /// Reconfigure the output surface
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame
    fn render(&mut self, scene: &Scene, title: &TitleState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Host surface hidden; ticks are skipped
    Paused,
}

/// Owns the scene and drives it from ticks, scroll and resize events
pub struct FrameLoop<S: FrameSink> {
    scene: Scene,
    sink: S,
    animatables: Vec<Animatable>,
    timeline: Timeline,
    trigger: ScrollTrigger,
    title_fade: TitleFade,
    scroll: ScrollState,
    title: TitleState,
    state: LoopState,
    frames: u64,
}

impl<S: FrameSink> FrameLoop<S> {
    /// Load assets, assemble the scene, then build the sink and start running
    ///
    /// `make_sink` only runs once the scene exists; if any asset fails to
    /// load the error is returned and nothing is ever rendered.
    pub fn boot<F>(loader: &dyn ModelLoader, params: &StageParams, make_sink: F) -> Result<Self>
    where
        F: FnOnce(&Scene) -> Result<S>,
    {
        let (scene, displacement) = scene::assemble(loader, params)?;
        let sink = make_sink(&scene)?;

        let animatables = vec![
            Animatable::Wave(displacement),
            Animatable::ShipGroup(ShipBob::new(params.bob.clone())),
        ];
        let timeline = Timeline::story(scene.story_state(), &params.story);
        log::info!(
            "Timeline ready: {} segments over weight {}",
            timeline.segments().len(),
            timeline.total()
        );

        Ok(Self {
            scene,
            sink,
            animatables,
            timeline,
            trigger: ScrollTrigger::new(0.0, params.scroll.page_length_px),
            title_fade: TitleFade::new(0.0, params.scroll.title_pin_px),
            scroll: ScrollState::new(&params.scroll),
            title: TitleState::VISIBLE,
            state: LoopState::Running,
            frames: 0,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn title(&self) -> TitleState {
        self.title
    }

    /// Number of ticks rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Whether the host should keep requesting redraws
    pub fn wants_redraw(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn set_visible(&mut self, visible: bool) {
        let next = if visible {
            LoopState::Running
        } else {
            LoopState::Paused
        };
        if next != self.state {
            log::debug!("Frame loop {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Advance one display refresh
    pub fn tick(&mut self, elapsed_s: f32) {
        if self.state == LoopState::Paused {
            return;
        }

        let ctx = FrameContext { elapsed_s };
        for animatable in &self.animatables {
            animatable.update(&ctx, &mut self.scene);
        }
        self.scene.camera.look_at(Vec3::ZERO);

        self.render();
        self.frames += 1;
    }

    /// New surface size: update projection, resize output, redraw once
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.scene.camera.set_viewport(width, height);
        self.sink.resize(width, height);
        self.render();
    }

    /// Scrub to the current virtual scroll offset
    pub fn scroll_to(&mut self, offset_px: f32) {
        self.scroll.set(offset_px);
        self.scrub();
    }

    pub fn scroll_by(&mut self, delta_px: f32) {
        self.scroll.scroll_by(delta_px);
        self.scrub();
    }

    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll.scroll_lines(lines);
        self.scrub();
    }

    fn scrub(&mut self) {
        let offset = self.scroll.offset();
        let state = self.timeline.sample(self.trigger.progress(offset));
        self.scene.apply_story(&state);
        self.title = self.title_fade.sample(offset);
    }

    fn render(&mut self) {
        self.sink.render(&self.scene, &self.title);
        self.scene.wave.surface.clear_dirty();
    }
}
