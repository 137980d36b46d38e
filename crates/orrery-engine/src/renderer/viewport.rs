use glam::Vec2;

/// Canvas size in CSS pixels, with conversions to and from normalized
/// device coordinates. Pixel Y grows downward; NDC Y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel position to NDC in [-1, 1] on each axis.
    pub fn to_ndc(&self, px: f32, py: f32) -> Vec2 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(px / self.width * 2.0 - 1.0, 1.0 - py / self.height * 2.0)
    }

    /// NDC to pixel position.
    pub fn ndc_to_pixels(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
