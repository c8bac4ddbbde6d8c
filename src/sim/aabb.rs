//! Axis-aligned bounding boxes
//!
//! Every entity in the arena (paddle, ball, bricks, falling bonuses) is a
//! rectangle anchored at its bottom-left corner. Overlap tests and
//! penetration depths used by the resolver all operate on this one shape.

use glam::Vec2;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Width and height (never negative)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size: size.max(Vec2::ZERO),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Closed-interval overlap: touching edges count as overlapping so a
    /// ball that just landed on a surface is detected the same frame.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
    }

    /// True if `other` lies entirely inside this box
    pub fn contains(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        b_min.x >= a_min.x && b_max.x <= a_max.x && b_min.y >= a_min.y && b_max.y <= a_max.y
    }

    /// How far this box has pushed into `other` through each of its faces
    pub fn penetration(&self, other: &Aabb) -> Penetration {
        Penetration {
            left: self.max().x - other.min().x,
            right: other.max().x - self.min().x,
            bottom: self.max().y - other.min().y,
            top: other.max().y - self.min().y,
        }
    }
}

/// Free-function form of [`Aabb::overlaps`]
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Collision axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Penetration depth through each face of the struck box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Penetration {
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left.min(self.right)
    }

    #[inline]
    pub fn vertical(&self) -> f32 {
        self.bottom.min(self.top)
    }

    /// Axis of least penetration. Ties resolve vertically.
    pub fn axis(&self) -> Axis {
        if self.horizontal() < self.vertical() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}
