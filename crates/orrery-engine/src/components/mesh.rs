use crate::assets::textures::TextureId;

/// RGB color for mesh rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Mesh shape primitive. Dimensions are in world units before entity scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Flat annulus in the entity's local XY plane.
    Ring { inner: f32, outer: f32 },
    /// Flat rectangle in the entity's local XZ plane.
    Plane { width: f32, depth: f32 },
}

impl MeshShape {
    /// Wire code for the shape kind.
    pub fn kind(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Ring { .. } => 1.0,
            MeshShape::Plane { .. } => 2.0,
        }
    }

    /// The two shape parameters as written to the wire.
    pub fn params(&self) -> [f32; 2] {
        match *self {
            MeshShape::Sphere { radius } => [radius, 0.0],
            MeshShape::Ring { inner, outer } => [inner, outer],
            MeshShape::Plane { width, depth } => [width, depth],
        }
    }
}

/// Renderable mesh attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: MeshColor,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// Self-illumination multiplier (default: 0.0). Emissive meshes ignore lights.
    pub emissive: f32,
    /// Texture to sample; untextured until the texture reports ready.
    pub texture: Option<TextureId>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere { radius: 1.0 },
            color: MeshColor::default(),
            shininess: 32.0,
            emissive: 0.0,
            texture: None,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: MeshColor) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn ring(inner: f32, outer: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Ring { inner, outer }, color)
    }

    pub fn plane(width: f32, depth: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Plane { width, depth }, color)
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    /// Radius of a sphere around the local origin enclosing the shape.
    pub fn bounding_radius(&self) -> f32 {
        match self.shape {
            MeshShape::Sphere { radius } => radius,
            MeshShape::Ring { outer, .. } => outer,
            MeshShape::Plane { width, depth } => 0.5 * (width * width + depth * depth).sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_fields() {
        let mesh = MeshComponent::sphere(2.0, MeshColor::new(1.0, 0.5, 0.0))
            .with_emissive(1.5)
            .with_texture(TextureId(3))
            .with_shadows(true, false);
        assert_eq!(mesh.shape, MeshShape::Sphere { radius: 2.0 });
        assert_eq!(mesh.emissive, 1.5);
        assert_eq!(mesh.texture, Some(TextureId(3)));
        assert!(mesh.cast_shadow);
        assert!(!mesh.receive_shadow);
    }

    #[test]
    fn ring_bounding_radius_is_outer_edge() {
        let ring = MeshComponent::ring(9.9, 10.1, MeshColor::WHITE);
        assert_eq!(ring.bounding_radius(), 10.1);
        assert_eq!(ring.shape.kind(), 1.0);
        assert_eq!(ring.shape.params(), [9.9, 10.1]);
    }

    #[test]
    fn plane_bounding_radius_is_half_diagonal() {
        let plane = MeshComponent::plane(6.0, 8.0, MeshColor::WHITE);
        assert!((plane.bounding_radius() - 5.0).abs() < 1e-6);
    }
}
