//! Per-frame animatables dispatched by the frame loop.

use crate::ocean::WaveDisplacement;
use crate::scene::Scene;
use crate::ships::ShipBob;

/// Per-frame inputs shared by every animatable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Seconds since the scene started running
    pub elapsed_s: f32,
}

/// Something that rewrites part of the scene once per frame
#[derive(Debug, Clone)]
pub enum Animatable {
    /// Rewrites every wave vertex height
    Wave(WaveDisplacement),
    /// Rewrites the Y position of every ship
    ShipGroup(ShipBob),
}

impl Animatable {
    pub fn update(&self, ctx: &FrameContext, scene: &mut Scene) {
        match self {
            Animatable::Wave(displacement) => {
                displacement.apply(ctx.elapsed_s, &mut scene.wave.surface)
            }
            Animatable::ShipGroup(bob) => bob.apply(ctx.elapsed_s, &mut scene.ships),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShipBobParams;
    use crate::scene;

    #[test]
    fn test_dispatch_touches_only_own_fields() {
        let mut scene = scene::tests::scene();
        let before = scene.clone();
        let ctx = FrameContext { elapsed_s: 0.5 };

        Animatable::ShipGroup(ShipBob::new(ShipBobParams::default())).update(&ctx, &mut scene);
        assert_eq!(scene.wave.surface.vertices, before.wave.surface.vertices);
        assert_eq!(scene.camera, before.camera);
        assert!(scene.ships.iter().all(|s| s.position().y == (1.5_f32).sin()));

        let wave = WaveDisplacement::from_surface(&scene.wave.surface, 2.5, 3.0);
        Animatable::Wave(wave).update(&ctx, &mut scene);
        assert_ne!(scene.wave.surface.vertices, before.wave.surface.vertices);
        assert_eq!(scene.story_state(), before.story_state());
    }
}
