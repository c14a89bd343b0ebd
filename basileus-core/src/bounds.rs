use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(origin: Position, width: i32, height: i32) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap: boxes sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: i32) -> Bounds {
        Bounds::new(Position::new(x, 150), 50, 100)
    }

    #[test]
    fn overlapping_bodies_collide() {
        assert!(body_at(100).overlaps(&body_at(149)));
        assert!(body_at(149).overlaps(&body_at(100)));
    }

    #[test]
    fn shared_edge_is_not_overlap() {
        assert!(!body_at(100).overlaps(&body_at(150)));
        assert!(!body_at(150).overlaps(&body_at(100)));
    }

    #[test]
    fn vertical_separation_prevents_overlap() {
        let low = Bounds::new(Position::new(100, 300), 50, 100);
        assert!(!body_at(100).overlaps(&low));
    }
}
