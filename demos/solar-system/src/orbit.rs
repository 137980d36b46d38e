//! Circular orbital motion in the XZ plane.
//!
//! Phases are kept in f64 and reduced modulo 2π each step; only the final
//! mesh position is narrowed to f32.

use std::f64::consts::TAU;

use glam::DVec3;
use orrery_engine::{EntityId, Scene};

use crate::speed::SpeedControl;

/// A planet's orbital state. The mesh itself lives in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Display name, also the key into the speed map.
    pub name: String,
    /// Handle to the planet's mesh entity.
    pub entity: EntityId,
    /// Distance from the sun; fixed at creation.
    pub orbit_radius: f64,
    /// Current orbital phase in radians, kept in [0, 2π).
    pub angle: f64,
}

impl Planet {
    pub fn new(name: impl Into<String>, entity: EntityId, orbit_radius: f64) -> Self {
        Self {
            name: name.into(),
            entity,
            orbit_radius,
            angle: 0.0,
        }
    }

    /// Advance the phase by `speed` radians.
    pub fn advance(&mut self, speed: f64) {
        self.angle = (self.angle + speed).rem_euclid(TAU);
    }

    pub fn position(&self) -> DVec3 {
        orbit_position(self.orbit_radius, self.angle)
    }
}

/// Point on a circle of `radius` around the origin in the y = 0 plane.
pub fn orbit_position(radius: f64, angle: f64) -> DVec3 {
    DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// One orbital step for every planet: advance by the planet's current
/// speed and write the new position into its mesh.
pub fn update_orbits(planets: &mut [Planet], speeds: &SpeedControl, scene: &mut Scene) {
    for planet in planets.iter_mut() {
        let speed = speeds.speed_or_default(&planet.name);
        planet.advance(speed);
        if let Some(entity) = scene.get_mut(planet.entity) {
            entity.pos = planet.position().as_vec3();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speed::FALLBACK_SPEED;
    use orrery_engine::{Entity, MeshColor, MeshComponent};

    fn world(planets: &[(&str, f64, f64)]) -> (Vec<Planet>, SpeedControl, Scene) {
        let mut scene = Scene::new();
        let mut list = Vec::new();
        for (i, &(name, radius, _)) in planets.iter().enumerate() {
            let id = EntityId(i as u32 + 1);
            scene.spawn(
                Entity::new(id)
                    .with_tag(name)
                    .with_mesh(MeshComponent::sphere(1.0, MeshColor::WHITE)),
            );
            list.push(Planet::new(name, id, radius));
        }
        let speeds = SpeedControl::new(planets.iter().map(|&(n, _, s)| (n, s)));
        (list, speeds, scene)
    }

    fn step(planets: &mut [Planet], speeds: &SpeedControl, scene: &mut Scene, n: usize) {
        for _ in 0..n {
            update_orbits(planets, speeds, scene);
        }
    }

    #[test]
    fn earth_after_100_frames() {
        let (mut planets, speeds, mut scene) = world(&[("Earth", 10.0, 0.01)]);
        step(&mut planets, &speeds, &mut scene, 100);

        assert!((planets[0].angle - 1.0).abs() < 1e-12, "angle = {}", planets[0].angle);
        let pos = planets[0].position();
        assert!((pos.x - 5.403023058681398).abs() < 1e-9);
        assert_eq!(pos.y, 0.0);
        assert!((pos.z - 8.414709848078965).abs() < 1e-9);

        let mesh = scene.get(planets[0].entity).unwrap().pos;
        assert!((mesh.x - 5.403).abs() < 1e-3);
        assert!((mesh.z - 8.415).abs() < 1e-3);
    }

    #[test]
    fn position_matches_closed_form_over_many_wraps() {
        let (mut planets, speeds, mut scene) = world(&[("Mercury", 6.0, 0.04)]);
        let n = 20_000;
        step(&mut planets, &speeds, &mut scene, n);

        let expected = orbit_position(6.0, n as f64 * 0.04);
        assert!((planets[0].position() - expected).length() < 1e-9);
        assert!(planets[0].angle >= 0.0 && planets[0].angle < TAU);
    }

    #[test]
    fn mesh_sits_on_its_orbit_every_frame() {
        let (mut planets, speeds, mut scene) =
            world(&[("Venus", 9.0, 0.015), ("Jupiter", 20.0, 0.004)]);
        for _ in 0..50 {
            update_orbits(&mut planets, &speeds, &mut scene);
            for p in &planets {
                let pos = scene.get(p.entity).unwrap().pos;
                assert_eq!(pos.y, 0.0);
                let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
                assert!((r as f64 - p.orbit_radius).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn changing_one_speed_leaves_others_untouched() {
        let spec = [("Earth", 12.0, 0.01), ("Mars", 15.0, 0.008)];
        let (mut planets, mut speeds, mut scene) = world(&spec);
        let (mut control, control_speeds, mut control_scene) = world(&spec);

        step(&mut planets, &speeds, &mut scene, 30);
        step(&mut control, &control_speeds, &mut control_scene, 30);

        speeds.set("Earth", 0.05);
        step(&mut planets, &speeds, &mut scene, 40);
        step(&mut control, &control_speeds, &mut control_scene, 40);

        assert_eq!(planets[1].angle, control[1].angle);
        let earth_expected = (30.0 * 0.01 + 40.0 * 0.05) % TAU;
        assert!((planets[0].angle - earth_expected).abs() < 1e-9);
        assert!((control[0].angle - 0.7).abs() < 1e-9);
    }

    #[test]
    fn setting_current_speed_changes_nothing() {
        let spec = [("Saturn", 26.0, 0.003)];
        let (mut planets, mut speeds, mut scene) = world(&spec);
        let (mut control, control_speeds, mut control_scene) = world(&spec);

        step(&mut planets, &speeds, &mut scene, 10);
        step(&mut control, &control_speeds, &mut control_scene, 10);
        speeds.set("Saturn", 0.003);
        step(&mut planets, &speeds, &mut scene, 10);
        step(&mut control, &control_speeds, &mut control_scene, 10);

        assert_eq!(planets[0].angle, control[0].angle);
        assert_eq!(
            scene.get(planets[0].entity).unwrap().pos,
            control_scene.get(control[0].entity).unwrap().pos
        );
    }

    #[test]
    fn missing_speed_entry_uses_fallback() {
        let (_, _, mut scene) = world(&[("Ghost", 5.0, 0.0)]);
        let mut planets = vec![Planet::new("Ghost", EntityId(1), 5.0)];
        let empty = SpeedControl::new(std::iter::empty());
        update_orbits(&mut planets, &empty, &mut scene);
        assert!((planets[0].angle - FALLBACK_SPEED).abs() < 1e-15);
    }

    #[test]
    fn missing_mesh_still_advances_phase() {
        let mut scene = Scene::new();
        let mut planets = vec![Planet::new("Earth", EntityId(99), 12.0)];
        let speeds = SpeedControl::new([("Earth", 0.01)]);
        update_orbits(&mut planets, &speeds, &mut scene);
        assert!((planets[0].angle - 0.01).abs() < 1e-15);
    }
}
