//! Pointer picking: which planet is under the cursor this frame.

use glam::Vec2;
use orrery_engine::{pick_nearest, Camera3D, EntityId, Scene, Viewport};

use crate::orbit::Planet;

/// Last known pointer position in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    /// Outside the [-1, 1] square, so nothing is hovered before the
    /// first pointer move.
    pub const OFF_SCREEN: Vec2 = Vec2::new(-2.0, -2.0);

    pub fn new() -> Self {
        Self { ndc: Self::OFF_SCREEN }
    }

    /// Whether the pointer lies on the canvas ([-1, 1] on both axes).
    pub fn is_on_canvas(ndc: Vec2) -> bool {
        ndc.abs().cmple(Vec2::ONE).all()
    }

    /// Record a pointer move given in canvas pixels.
    pub fn move_to(&mut self, viewport: &Viewport, px: f32, py: f32) {
        self.ndc = viewport.to_ndc(px, py);
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

/// The planet under the pointer and where the pointer was.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverState {
    pub name: String,
    pub ndc: Vec2,
}

/// Cast a ray from the camera through `ndc` and report the nearest planet
/// it meets. Only planet meshes are tested; stars, sun, rings and the
/// ground never hover. A pointer off the canvas hovers nothing.
pub fn pick_planet(
    camera: &Camera3D,
    scene: &Scene,
    planets: &[Planet],
    ndc: Vec2,
) -> Option<HoverState> {
    if !PointerState::is_on_canvas(ndc) {
        return None;
    }
    let ray = camera.ray_from_ndc(ndc);
    let candidates: Vec<EntityId> = planets.iter().map(|p| p.entity).collect();
    let hit = pick_nearest(scene, &ray, &candidates)?;
    let planet = planets.iter().find(|p| p.entity == hit.id)?;
    Some(HoverState {
        name: planet.name.clone(),
        ndc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::{Entity, MeshColor, MeshComponent};

    fn camera() -> Camera3D {
        Camera3D::new(60.0, 1.0, 0.1, 500.0)
            .with_position(Vec3::new(0.0, 0.0, 30.0))
            .looking_at(Vec3::ZERO)
    }

    fn add_planet(scene: &mut Scene, planets: &mut Vec<Planet>, name: &str, pos: Vec3, size: f32) {
        let id = EntityId(planets.len() as u32 + 1);
        scene.spawn(
            Entity::new(id)
                .with_tag(name)
                .with_pos(pos)
                .with_mesh(MeshComponent::sphere(size, MeshColor::WHITE)),
        );
        planets.push(Planet::new(name, id, pos.length() as f64));
    }

    #[test]
    fn single_hit_reports_that_planet() {
        let (mut scene, mut planets) = (Scene::new(), Vec::new());
        add_planet(&mut scene, &mut planets, "Mars", Vec3::new(8.0, 0.0, 0.0), 1.0);
        add_planet(&mut scene, &mut planets, "Earth", Vec3::new(-8.0, 0.0, 0.0), 1.0);

        let cam = camera();
        let ndc = cam.project_to_ndc(Vec3::new(8.0, 0.0, 0.0)).unwrap();
        let hover = pick_planet(&cam, &scene, &planets, ndc).unwrap();
        assert_eq!(hover.name, "Mars");
        assert_eq!(hover.ndc, ndc);
    }

    #[test]
    fn empty_space_reports_no_hover() {
        let (mut scene, mut planets) = (Scene::new(), Vec::new());
        add_planet(&mut scene, &mut planets, "Mars", Vec3::new(8.0, 0.0, 0.0), 1.0);

        let cam = camera();
        let first = pick_planet(&cam, &scene, &planets, cam.project_to_ndc(Vec3::new(8.0, 0.0, 0.0)).unwrap());
        assert!(first.is_some());
        // The next frame's pick does not remember the previous result.
        assert!(pick_planet(&cam, &scene, &planets, Vec2::new(0.9, 0.9)).is_none());
    }

    #[test]
    fn nearest_planet_wins_when_both_are_under_pointer() {
        let (mut scene, mut planets) = (Scene::new(), Vec::new());
        add_planet(&mut scene, &mut planets, "Far", Vec3::new(0.0, 0.0, -10.0), 3.0);
        add_planet(&mut scene, &mut planets, "Near", Vec3::new(0.0, 0.0, 10.0), 1.0);

        let hover = pick_planet(&camera(), &scene, &planets, Vec2::ZERO).unwrap();
        assert_eq!(hover.name, "Near");
    }

    #[test]
    fn non_planet_meshes_are_not_pickable() {
        let (mut scene, mut planets) = (Scene::new(), Vec::new());
        scene.spawn(
            Entity::new(EntityId(100))
                .with_tag("sun")
                .with_mesh(MeshComponent::sphere(3.0, MeshColor::WHITE)),
        );
        add_planet(&mut scene, &mut planets, "Earth", Vec3::new(12.0, 0.0, 0.0), 1.0);

        assert!(pick_planet(&camera(), &scene, &planets, Vec2::ZERO).is_none());
    }

    #[test]
    fn off_canvas_pointer_never_hovers() {
        let (mut scene, mut planets) = (Scene::new(), Vec::new());
        let cam = camera();
        // A planet sitting exactly where the off-screen ray would go.
        let behind_sentinel = cam.ray_from_ndc(PointerState::OFF_SCREEN).at(30.0);
        add_planet(&mut scene, &mut planets, "Mars", behind_sentinel, 2.0);

        assert!(pick_planet(&cam, &scene, &planets, PointerState::OFF_SCREEN).is_none());
        assert!(pick_planet(&cam, &scene, &planets, Vec2::new(1.2, 0.0)).is_none());
        assert!(PointerState::is_on_canvas(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn pointer_starts_off_screen_and_tracks_moves() {
        let mut pointer = PointerState::new();
        assert_eq!(pointer.ndc, PointerState::OFF_SCREEN);
        pointer.move_to(&Viewport::new(800.0, 600.0), 400.0, 300.0);
        assert_eq!(pointer.ndc, Vec2::ZERO);
    }
}
