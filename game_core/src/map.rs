use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.min.y < other.max.y
            && self.max.x > other.min.x
            && self.max.y > other.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// The rectangular playfield
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Which half of the field a horizontal position falls in
    pub fn half_of(&self, x: f32) -> crate::Side {
        if x < self.mid_x() {
            crate::Side::Player
        } else {
            crate::Side::Ai
        }
    }

    /// Dashes of the centre net, top to bottom
    pub fn net_dashes(&self, dash: f32, spacing: f32, width: f32) -> Vec<Aabb> {
        let mut dashes = Vec::new();
        let x = self.mid_x() - width / 2.0;
        let mut y = 0.0;
        while y <= self.height {
            dashes.push(Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(width, dash)));
            y += spacing;
        }
        dashes
    }
}
