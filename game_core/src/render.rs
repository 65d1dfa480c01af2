use glam::Vec2;

use crate::Aabb;

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLUE: Self = Self([0.0, 0.0, 1.0, 1.0]);
    pub const RED: Self = Self([1.0, 0.0, 0.0, 1.0]);
}

/// Drawing target for one frame
///
/// Implementations only record or rasterize; nothing here feeds back into
/// the simulation.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Draw `text` with its top-left corner at `origin`
    fn text(&mut self, origin: Vec2, scale: f32, text: &str, color: Color);
}
