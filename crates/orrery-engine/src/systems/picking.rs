//! Ray picking against entity bounding spheres.

use glam::Vec3;

use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// A half-line in world space. `dir` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized (zero stays zero).
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Smallest non-negative parameter where the ray meets the sphere.
    /// An origin inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t_near = -b - sqrt_disc;
        let t_far = -b + sqrt_disc;
        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far >= 0.0 {
            Some(t_far)
        } else {
            None
        }
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: EntityId,
    /// Ray parameter (world units from the ray origin).
    pub distance: f32,
    pub point: Vec3,
}

/// Test `ray` against the bounding spheres of exactly the `candidates`,
/// returning the nearest hit. Inactive and mesh-less entities never hit.
/// On equal distances the earlier candidate wins.
pub fn pick_nearest(scene: &Scene, ray: &Ray, candidates: &[EntityId]) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for &id in candidates {
        let Some(entity) = scene.get(id) else { continue };
        if !entity.active {
            continue;
        }
        let Some(radius) = entity.bounding_radius() else { continue };
        let Some(t) = ray.intersect_sphere(entity.pos, radius) else { continue };
        if best.map_or(true, |b| t < b.distance) {
            best = Some(PickHit { id, distance: t, point: ray.at(t) });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::mesh::{MeshColor, MeshComponent};

    fn sphere(id: u32, pos: Vec3, radius: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(pos)
            .with_mesh(MeshComponent::sphere(radius, MeshColor::WHITE))
    }

    fn down_z() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn ray_hits_sphere_front_face() {
        let t = down_z().intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_offset_sphere() {
        assert!(down_z().intersect_sphere(Vec3::new(3.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_ignored() {
        assert!(down_z().intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 1.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn new_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        assert!((ray.dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pick_single_hit() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1, Vec3::ZERO, 1.0));
        scene.spawn(sphere(2, Vec3::new(5.0, 0.0, 0.0), 1.0));
        let hit = pick_nearest(&scene, &down_z(), &[EntityId(1), EntityId(2)]).unwrap();
        assert_eq!(hit.id, EntityId(1));
        assert!((hit.point - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn pick_no_hit() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1, Vec3::new(5.0, 0.0, 0.0), 1.0));
        assert!(pick_nearest(&scene, &down_z(), &[EntityId(1)]).is_none());
    }

    #[test]
    fn pick_nearest_wins_regardless_of_order() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1, Vec3::new(0.0, 0.0, -5.0), 2.0));
        scene.spawn(sphere(2, Vec3::new(0.0, 0.0, 3.0), 1.0));
        let hit = pick_nearest(&scene, &down_z(), &[EntityId(1), EntityId(2)]).unwrap();
        assert_eq!(hit.id, EntityId(2));
        let hit = pick_nearest(&scene, &down_z(), &[EntityId(2), EntityId(1)]).unwrap();
        assert_eq!(hit.id, EntityId(2));
    }

    #[test]
    fn pick_ignores_non_candidates_and_inactive() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1, Vec3::ZERO, 1.0));
        let mut hidden = sphere(2, Vec3::new(0.0, 0.0, 4.0), 1.0);
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Entity::new(EntityId(3)).with_pos(Vec3::new(0.0, 0.0, 6.0)));

        assert!(pick_nearest(&scene, &down_z(), &[]).is_none());
        let hit = pick_nearest(&scene, &down_z(), &[EntityId(2), EntityId(3), EntityId(1)]).unwrap();
        assert_eq!(hit.id, EntityId(1));
    }

    #[test]
    fn pick_uses_entity_scale() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1, Vec3::new(1.5, 0.0, 0.0), 1.0).with_scale(2.0));
        assert!(pick_nearest(&scene, &down_z(), &[EntityId(1)]).is_some());
    }
}
