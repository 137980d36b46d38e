use crate::assets::textures::TextureRegistry;
use crate::components::entity::Entity;
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Build the render buffer from a set of entities.
/// One instance per active entity with a mesh, in iteration order.
/// Textures that are not ready yet are written as untextured.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    textures: &TextureRegistry,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let texture = match mesh.texture {
            Some(id) if textures.is_ready(id) => id.0 as f32,
            _ => MeshInstance::NO_TEXTURE,
        };
        let [shape_a, shape_b] = mesh.shape.params();
        buffer.push(MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            scale: entity.scale,
            qx: entity.rotation.x,
            qy: entity.rotation.y,
            qz: entity.rotation.z,
            qw: entity.rotation.w,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive: mesh.emissive,
            shininess: mesh.shininess,
            shape_kind: mesh.shape.kind(),
            shape_a,
            shape_b,
            texture,
            cast_shadow: if mesh.cast_shadow { 1.0 } else { 0.0 },
            receive_shadow: if mesh.receive_shadow { 1.0 } else { 0.0 },
            _pad: 0.0,
        });
    }
}
