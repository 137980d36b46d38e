//! Builds the initial scene: starfield, sun, lights, ground, planets and
//! their orbit rings, and the camera.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use orrery_engine::{Camera3D, EngineContext, Entity, MeshColor, MeshComponent, PointLight, Rng};

use crate::bodies::{self, PlanetDescriptor};
use crate::orbit::Planet;

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 30.0, 50.0);
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

fn color((r, g, b): (f32, f32, f32)) -> MeshColor {
    MeshColor::new(r, g, b)
}

/// Populate `ctx` and return one orbital record per descriptor, in order.
pub fn build_scene(ctx: &mut EngineContext, descriptors: &[PlanetDescriptor]) -> Vec<Planet> {
    spawn_starfield(ctx);
    spawn_sun(ctx);
    spawn_ground(ctx);

    let planets = descriptors
        .iter()
        .map(|desc| {
            spawn_orbit_ring(ctx, desc);
            spawn_planet(ctx, desc)
        })
        .collect();

    ctx.camera = Camera3D::new(CAMERA_FOV_DEGREES, 1.0, CAMERA_NEAR, CAMERA_FAR)
        .with_position(CAMERA_POSITION)
        .looking_at(Vec3::ZERO);
    ctx.camera.set_aspect(ctx.viewport.width, ctx.viewport.height);

    log::info!(
        "scene: {} entities, {} textures requested",
        ctx.scene.len(),
        ctx.textures.len()
    );
    planets
}

fn spawn_starfield(ctx: &mut EngineContext) {
    let mut rng = Rng::new(bodies::STAR_SEED);
    let half = bodies::STARFIELD_SIDE / 2.0;
    for _ in 0..bodies::STAR_COUNT {
        let pos = Vec3::new(
            rng.range(-half, half),
            rng.range(-half, half),
            rng.range(-half, half),
        );
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("star")
                .with_pos(pos)
                .with_mesh(MeshComponent::sphere(bodies::STAR_RADIUS, MeshColor::WHITE).with_emissive(1.0)),
        );
    }
}

fn spawn_sun(ctx: &mut EngineContext) {
    let texture = ctx.textures.request(bodies::SUN_TEXTURE);
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id).with_tag("sun").with_mesh(
            MeshComponent::sphere(bodies::SUN_RADIUS, color(bodies::SUN_COLOR))
                .with_texture(texture)
                .with_emissive(bodies::SUN_EMISSIVE),
        ),
    );

    ctx.lights
        .set_ambient(bodies::AMBIENT_COLOR, bodies::AMBIENT_INTENSITY);
    ctx.lights.add(PointLight::new(
        Vec3::ZERO,
        bodies::SUN_LIGHT_COLOR,
        bodies::SUN_LIGHT_INTENSITY,
        bodies::SUN_LIGHT_RANGE,
    ));
    ctx.lights.enable_shadows(true);
}

fn spawn_ground(ctx: &mut EngineContext) {
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag("ground")
            .with_pos(Vec3::new(0.0, bodies::GROUND_Y, 0.0))
            .with_mesh(
                MeshComponent::plane(bodies::GROUND_SIZE, bodies::GROUND_SIZE, color(bodies::GROUND_COLOR))
                    .with_shadows(false, true),
            ),
    );
}

fn spawn_orbit_ring(ctx: &mut EngineContext, desc: &PlanetDescriptor) {
    let r = desc.orbit_radius as f32;
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(format!("{} orbit", desc.name))
            // Rings are built in local XY; lay them flat in the orbital plane.
            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2))
            .with_mesh(MeshComponent::ring(
                r - bodies::ORBIT_RING_HALF_WIDTH,
                r + bodies::ORBIT_RING_HALF_WIDTH,
                color(bodies::ORBIT_RING_COLOR),
            )),
    );
}

fn spawn_planet(ctx: &mut EngineContext, desc: &PlanetDescriptor) -> Planet {
    let texture = ctx.textures.request(desc.texture);
    let id = ctx.next_id();
    let planet = Planet::new(desc.name, id, desc.orbit_radius);
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(desc.name)
            .with_pos(planet.position().as_vec3())
            .with_mesh(
                MeshComponent::sphere(desc.size, MeshColor::WHITE)
                    .with_texture(texture)
                    .with_shadows(true, true),
            ),
    );
    planet
}
