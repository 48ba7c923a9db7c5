//! The three ships and their shared vertical bob.

use glam::Vec3;

use crate::assets::Model;
use crate::params::{ShipBobParams, ShipKind, ShipPlacement};
use crate::scene::{ObjectKind, SceneObject, Transform};

/// One placed ship model
#[derive(Debug, Clone)]
pub struct Ship {
    pub object: SceneObject,
    pub model: Model,
    pub casts_shadow: bool,
}

impl Ship {
    pub fn new(placement: &ShipPlacement, model: Model) -> Self {
        let transform = Transform::at(placement.position)
            .with_rotation(Vec3::new(0.0, placement.heading_rad, 0.0))
            .with_uniform_scale(placement.scale);

        Self {
            object: SceneObject::new(ObjectKind::Ship(placement.kind), transform),
            model,
            casts_shadow: true,
        }
    }

    pub fn kind(&self) -> ShipKind {
        match self.object.kind {
            ObjectKind::Ship(kind) => kind,
            other => unreachable!("ship holds non-ship object {:?}", other),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.object.transform.position
    }
}

/// Ships in `ShipKind::ALL` order
#[derive(Debug, Clone)]
pub struct ShipFleet {
    ships: [Ship; 3],
}

impl ShipFleet {
    pub fn new(ships: [Ship; 3]) -> Self {
        debug_assert!(ships
            .iter()
            .zip(ShipKind::ALL)
            .all(|(ship, kind)| ship.kind() == kind));
        Self { ships }
    }

    pub fn get(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ShipKind) -> &mut Ship {
        &mut self.ships[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ship> {
        self.ships.iter_mut()
    }
}

/// Vertical offset shared by every ship: `sin(t * speed) * amplitude`
pub fn bob_offset(elapsed_s: f32, params: &ShipBobParams) -> f32 {
    (elapsed_s * params.speed).sin() * params.amplitude_m
}

/// Ship motion generator; writes world Y of every ship and nothing else
#[derive(Debug, Clone, Default)]
pub struct ShipBob {
    params: ShipBobParams,
}

impl ShipBob {
    pub fn new(params: ShipBobParams) -> Self {
        Self { params }
    }

    pub fn apply(&self, elapsed_s: f32, fleet: &mut ShipFleet) {
        let y = bob_offset(elapsed_s, &self.params);
        for ship in fleet.iter_mut() {
            ship.object.transform.position.y = y;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::assets::Model;

    pub(crate) fn fleet() -> ShipFleet {
        let placements = ShipPlacement::fleet();
        ShipFleet::new(placements.map(|p| Ship::new(&p, Model::empty(p.kind.asset_path()))))
    }

    #[test]
    fn test_placements_applied() {
        let fleet = fleet();
        let asian = fleet.get(ShipKind::AsianShip);
        assert_eq!(asian.position(), Vec3::new(70.0, 0.0, -50.0));
        assert_eq!(asian.object.transform.scale, Vec3::splat(40.0));
        assert_eq!(fleet.get(ShipKind::VikingShip).object.transform.scale, Vec3::splat(4.0));
    }

    #[test]
    fn test_bob_identical_across_ships() {
        let mut fleet = fleet();
        let bob = ShipBob::default();

        for step in 0..50 {
            let t = step as f32 * 0.13;
            bob.apply(t, &mut fleet);
            let expected = (t * 3.0).sin();
            for ship in fleet.iter() {
                assert_eq!(ship.position().y, expected);
            }
        }
    }

    #[test]
    fn test_bob_leaves_x_and_z_alone() {
        let mut fleet = fleet();
        fleet.get_mut(ShipKind::Ship).object.transform.position.z = 150.0;
        ShipBob::default().apply(0.4, &mut fleet);

        let ship = fleet.get(ShipKind::Ship);
        assert_eq!(ship.position().x, 0.0);
        assert_eq!(ship.position().z, 150.0);
        assert_eq!(fleet.get(ShipKind::VikingShip).position().x, -65.0);
    }
}
