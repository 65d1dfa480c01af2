use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Same box translated so its center lands on `center`
    pub fn with_center(&self, center: Vec2) -> Self {
        Self::from_center_size(center, self.size())
    }

    /// Strictly between the bottom and top edges
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.min.y && y < self.max.y
    }
}

/// Playable area: the window, origin bottom-left, Y up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a vertical center so a box of `half_height` stays inside
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        // max/min rather than clamp: a box taller than the arena pins to the top
        y.max(half_height).min(self.height - half_height)
    }

    pub fn contains_x(&self, x: f32) -> bool {
        (0.0..=self.width).contains(&x)
    }
}
