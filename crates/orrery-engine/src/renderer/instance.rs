use bytemuck::{Pod, Zeroable};

/// Per-instance mesh data read by the TypeScript renderer.
/// Must match the TypeScript protocol: 20 floats = 80 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Rotation quaternion (x, y, z, w).
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    pub shininess: f32,
    /// 0 = sphere, 1 = ring, 2 = plane.
    pub shape_kind: f32,
    /// Sphere: radius. Ring: inner radius. Plane: width.
    pub shape_a: f32,
    /// Ring: outer radius. Plane: depth.
    pub shape_b: f32,
    /// Texture slot, or -1 when untextured or not yet loaded.
    pub texture: f32,
    pub cast_shadow: f32,
    pub receive_shadow: f32,
    pub _pad: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const NO_TEXTURE: f32 = -1.0;
}

/// Render buffer holding one instance per visible mesh, in scene order.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
