use glam::DVec2;

/// Axis-aligned box, top-left corner plus extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub size: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, size: DVec2) -> Self {
        Self { min, size }
    }

    pub fn centered(center: DVec2, size: DVec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    /// Strict overlap test; boxes that share only an edge or a corner do not
    /// intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.min.x + other.size.x
            && other.min.x < self.min.x + self.size.x
            && self.min.y < other.min.y + other.size.y
            && other.min.y < self.min.y + self.size.y
    }
}
