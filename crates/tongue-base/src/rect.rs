use {
    crate::Vec2,
    std::ops::{Add, Sub},
};

/// Axis-aligned rectangle: top-left `origin` plus `size`, max edge exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Sub<Output = T> + Copy> Rect<T> {
    pub fn from_min_max(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self::new(min, max - min)
    }
}

impl<T: Add<Output = T> + PartialOrd + Copy> Rect<T> {
    /// One past the bottom-right corner.
    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }

    pub fn contains_rect(&self, other: Rect<T>) -> bool {
        let (max, other_max) = (self.max(), other.max());
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other_max.x <= max.x
            && other_max.y <= max.y
    }

    /// Whether the two rectangles share at least one pixel.
    pub fn intersects(&self, other: Rect<T>) -> bool {
        let (max, other_max) = (self.max(), other.max());
        self.origin.x < other_max.x
            && other.origin.x < max.x
            && self.origin.y < other_max.y
            && other.origin.y < max.y
    }
}

impl<T: Add<Output = T> + Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    /// Overlap of two rectangles, `None` if they share no pixel.
    ///
    /// Used to clip a region to a frame.
    pub fn intersection(&self, other: Rect<T>) -> Option<Rect<T>> {
        if !self.intersects(other) {
            return None;
        }
        let (max, other_max) = (self.max(), other.max());
        let min = Vec2::new(
            larger(self.origin.x, other.origin.x),
            larger(self.origin.y, other.origin.y),
        );
        let max = Vec2::new(smaller(max.x, other_max.x), smaller(max.y, other_max.y));
        Some(Rect::from_min_max(min, max))
    }
}

fn larger<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

fn smaller<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}
