use game_core::{Aabb, Canvas, Color};
use glam::Vec2;

use super::resources::InstanceData;
use crate::font;

/// Instances collected for one frame, split by mesh
#[derive(Debug, Default)]
pub struct Frame {
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for Frame {
    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let center = rect.center();
        let size = rect.size();
        self.rects.push(InstanceData {
            transform: [center.x, center.y, size.x, size.y],
            tint: color.0,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        // The circle mesh has diameter 1
        self.circles.push(InstanceData {
            transform: [center.x, center.y, radius * 2.0, radius * 2.0],
            tint: color.0,
        });
    }

    fn text(&mut self, origin: Vec2, scale: f32, text: &str, color: Color) {
        for rect in font::text_rects(origin, scale, text) {
            self.fill_rect(rect, color);
        }
    }
}
