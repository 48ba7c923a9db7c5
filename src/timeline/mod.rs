//! Scroll-scrubbed timeline.
//!
//! The timeline is a pure function from normalized scroll progress to a full
//! snapshot of every field it drives. Scrubbing forward, backward or to the
//! same point twice always yields the same snapshot for the same progress.

mod ease;
mod scroll;
mod target;

use ease::power1_out;
pub use scroll::{ScrollState, ScrollTrigger, TitleFade, TitleState};
pub use target::Target;

use glam::Vec3;

use crate::params::{Palette, ShipKind, StoryBeats};

/// Values of every field the timeline owns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoryState {
    pub camera_position: Vec3,
    /// Z position per ship, indexed by `ShipKind::index`
    pub ship_z: [f32; 3],
    pub appearance: Palette,
}

/// Where a segment starts relative to the one added before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Starts when the previous segment ends
    AfterPrevious,
    /// Starts together with the previous segment
    WithPrevious,
}

/// One tween on the timeline
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: f32,
    pub duration: f32,
    pub targets: Vec<Target>,
}

impl Segment {
    /// Linear progress through this segment at timeline time `time`
    fn local_progress(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

/// Ordered segments over a shared weight axis
#[derive(Debug, Clone)]
pub struct Timeline {
    initial: StoryState,
    segments: Vec<Segment>,
    /// Start of the most recently added segment
    cursor_start: f32,
    total: f32,
}

impl Timeline {
    pub fn new(initial: StoryState) -> Self {
        Self {
            initial,
            segments: Vec::new(),
            cursor_start: 0.0,
            total: 0.0,
        }
    }

    /// Append a segment; weights are relative, not seconds
    pub fn push(mut self, placement: Placement, duration: f32, targets: Vec<Target>) -> Self {
        let start = match placement {
            Placement::AfterPrevious => self.total,
            Placement::WithPrevious => self.cursor_start,
        };
        self.cursor_start = start;
        self.total = self.total.max(start + duration);
        self.segments.push(Segment {
            start,
            duration,
            targets,
        });
        self
    }

    /// The scroll story: darken, swing the camera, sail the ships off, pull back
    pub fn story(initial: StoryState, beats: &StoryBeats) -> Self {
        let palette = beats.dark_palette;
        let [first_pull, second_pull] = beats.pull_back;

        let mut timeline = Timeline::new(initial)
            .push(
                Placement::AfterPrevious,
                beats.palette_weight,
                vec![Target::WaveColor(palette.wave)],
            )
            .push(
                Placement::WithPrevious,
                beats.palette_weight,
                vec![Target::BackgroundColor(palette.background)],
            )
            .push(
                Placement::WithPrevious,
                beats.palette_weight,
                vec![Target::FogColor(palette.fog)],
            )
            .push(
                Placement::AfterPrevious,
                beats.swing_weight,
                vec![Target::Camera {
                    x: Some(beats.swing_x_m),
                    y: None,
                    z: Some(beats.swing_z_m),
                }],
            );

        for (i, kind) in ShipKind::ALL.into_iter().enumerate() {
            let placement = if i == 0 {
                Placement::AfterPrevious
            } else {
                Placement::WithPrevious
            };
            timeline = timeline.push(
                placement,
                beats.ships_weight,
                vec![Target::ShipZ(kind, beats.ships_exit_z_m)],
            );
        }

        timeline
            .push(
                Placement::AfterPrevious,
                beats.pull_back_weight,
                vec![camera_to(first_pull)],
            )
            .push(
                Placement::AfterPrevious,
                beats.pull_back_weight,
                vec![camera_to(second_pull)],
            )
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of weights along the longest path
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Snapshot at `progress` (clamped to [0, 1])
    ///
    /// Each segment starts from the value its fields hold once every earlier
    /// segment has completed, and only writes once the playhead reaches it.
    pub fn sample(&self, progress: f32) -> StoryState {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let time = progress * self.total;

        let mut settled = self.initial;
        let mut current = self.initial;
        for segment in &self.segments {
            let from = settled;
            if time >= segment.start {
                let t = power1_out(segment.local_progress(time));
                for target in &segment.targets {
                    target.blend(&from, t, &mut current);
                }
            }
            for target in &segment.targets {
                target.settle(&mut settled);
            }
        }
        current
    }
}

fn camera_to(position: Vec3) -> Target {
    Target::Camera {
        x: Some(position.x),
        y: Some(position.y),
        z: Some(position.z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> StoryState {
        StoryState {
            camera_position: Vec3::new(0.0, 25.0, 150.0),
            ship_z: [0.0, -50.0, -50.0],
            appearance: Palette::LIGHT,
        }
    }

    fn story() -> Timeline {
        Timeline::story(initial(), &StoryBeats::default())
    }

    #[test]
    fn test_segment_layout() {
        let timeline = story();
        let starts: Vec<f32> = timeline.segments().iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0.0, 0.0, 0.0, 1.5, 4.0, 4.0, 4.0, 6.0, 8.0]);
        assert_eq!(timeline.total(), 10.0);
    }

    #[test]
    fn test_progress_zero_is_initial() {
        assert_eq!(story().sample(0.0), initial());
    }

    #[test]
    fn test_progress_one_is_final() {
        let end = story().sample(1.0);
        assert_eq!(end.camera_position, Vec3::new(0.0, 50.0, 300.0));
        assert_eq!(end.ship_z, [150.0; 3]);
        assert_eq!(end.appearance, Palette::DARK);
    }

    #[test]
    fn test_round_trip_restores_initial() {
        let timeline = story();
        let _ = timeline.sample(0.0);
        let _ = timeline.sample(1.0);
        assert_eq!(timeline.sample(0.0), initial());
    }

    #[test]
    fn test_scrub_idempotent_and_reversible() {
        let timeline = story();
        let forward: Vec<StoryState> = (0..=40).map(|i| timeline.sample(i as f32 / 40.0)).collect();
        let backward: Vec<StoryState> = (0..=40)
            .rev()
            .map(|i| timeline.sample(i as f32 / 40.0))
            .collect();

        for (i, state) in forward.iter().enumerate() {
            assert_eq!(*state, backward[40 - i]);
            assert_eq!(*state, timeline.sample(i as f32 / 40.0));
        }
    }

    #[test]
    fn test_camera_swing_keeps_height() {
        // Middle of the swing segment: weight 2.75 of 10
        let state = story().sample(0.275);
        assert_eq!(state.camera_position.y, 25.0);
        assert!(state.camera_position.x > 0.0 && state.camera_position.x < 100.0);
        assert!(state.camera_position.z < 150.0 && state.camera_position.z > -100.0);
        // Palette already dark, ships not yet moving
        assert_eq!(state.appearance, Palette::DARK);
        assert_eq!(state.ship_z, [0.0, -50.0, -50.0]);
    }

    fn assert_near(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < 1e-3,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_segment_boundaries() {
        let timeline = story();
        let swing_done = timeline.sample(0.4);
        assert_near(swing_done.camera_position, Vec3::new(100.0, 25.0, -100.0));

        let ships_done = timeline.sample(0.6);
        for z in ships_done.ship_z {
            assert!((z - 150.0).abs() < 1e-3);
        }
        assert_near(ships_done.camera_position, Vec3::new(100.0, 25.0, -100.0));

        let first_pull = timeline.sample(0.8);
        assert_near(first_pull.camera_position, Vec3::new(0.0, 25.0, 200.0));
    }

    #[test]
    fn test_no_overshoot_within_segment() {
        let timeline = story();
        // Ship segment spans progress 0.4..0.6
        let mut last = [f32::MIN; 3];
        for step in 0..=100 {
            let p = 0.4 + 0.2 * step as f32 / 100.0;
            let z = timeline.sample(p).ship_z;
            assert!(z[0] >= 0.0 && z[0] <= 150.0);
            assert!(z[1] >= -50.0 && z[1] <= 150.0);
            for i in 0..3 {
                assert!(z[i] >= last[i], "ship {} moved backward at {}", i, p);
            }
            last = z;
        }
    }

    #[test]
    fn test_colors_between_palettes() {
        let timeline = story();
        for step in 0..=30 {
            let p = 0.15 * step as f32 / 30.0;
            let fog = timeline.sample(p).appearance.fog;
            let (lo, hi) = (Palette::DARK.fog.r, Palette::LIGHT.fog.r);
            assert!(fog.r >= lo && fog.r <= hi);
        }
    }

    #[test]
    fn test_ships_share_motion() {
        let state = story().sample(0.5);
        // Same start for ship 1 and 2 gives identical Z
        assert_eq!(state.ship_z[1], state.ship_z[2]);
        assert!(state.ship_z[0] > 0.0 && state.ship_z[0] < 150.0);
    }

    #[test]
    fn test_out_of_range_progress_clamped() {
        let timeline = story();
        assert_eq!(timeline.sample(-1.0), timeline.sample(0.0));
        assert_eq!(timeline.sample(7.0), timeline.sample(1.0));
        assert_eq!(timeline.sample(f32::NAN), timeline.sample(0.0));
    }
}
