/// Point and ambient lighting for the 3D scene.
///
/// Lights are persistent — they stay until explicitly removed.
/// Each frame the runner exposes the light array to the renderer,
/// together with the ambient term and the shadow switch.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A point light with position, color, intensity and falloff range.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, intensity, r, g, b, range]`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Falloff distance in world units (0 = no falloff).
    pub range: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            intensity,
            r: color[0],
            g: color[1],
            b: color[2],
            range,
        }
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Active lights, ambient color and shadow switch.
///
/// The ambient term defaults to white at full intensity, which renders
/// unlit scenes as flat color.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    ambient_intensity: f32,
    shadows: bool,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(4)
    }

    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: [1.0, 1.0, 1.0],
            ambient_intensity: 1.0,
            shadows: false,
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: [f32; 3], intensity: f32) {
        self.ambient = color;
        self.ambient_intensity = intensity;
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    /// Turn on shadow-map rendering for lights and shadow-flagged meshes.
    pub fn enable_shadows(&mut self, enabled: bool) {
        self.shadows = enabled;
    }

    pub fn shadows_enabled(&self) -> bool {
        self.shadows
    }

    /// Pointer to the lights data for the renderer.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
