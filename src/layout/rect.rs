//! Rect: A rectangle primitive for layout calculations.

/// A rectangle defined by position and size, in cell coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle at the origin from a size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Get the area (number of cells).
    #[inline]
    pub const fn area(&self) -> u32 {
        (self.width as u32) * (self.height as u32)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink the rectangle by a margin on all four sides.
    ///
    /// Returns [`Rect::ZERO`] when the margin consumes the rectangle.
    #[inline]
    #[must_use]
    pub const fn shrink(&self, margin: u16) -> Self {
        let m2 = margin.saturating_mul(2);
        if self.width <= m2 || self.height <= m2 {
            return Self::ZERO;
        }
        Self::new(self.x + margin, self.y + margin, self.width - m2, self.height - m2)
    }

    /// Center point (rounded toward the top-left on even sizes).
    #[inline]
    pub const fn center(&self) -> (u16, u16) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Midpoint of the top edge.
    #[inline]
    pub const fn mid_top(&self) -> (u16, u16) {
        (self.x + self.width / 2, self.y)
    }

    /// Midpoint of the bottom edge (exclusive bottom).
    #[inline]
    pub const fn mid_bottom(&self) -> (u16, u16) {
        (self.x + self.width / 2, self.bottom())
    }

    /// Midpoint of the left edge.
    #[inline]
    pub const fn mid_left(&self) -> (u16, u16) {
        (self.x, self.y + self.height / 2)
    }

    /// Midpoint of the right edge (exclusive right).
    #[inline]
    pub const fn mid_right(&self) -> (u16, u16) {
        (self.right(), self.y + self.height / 2)
    }

    /// Top-left corner.
    #[inline]
    pub const fn top_left(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Top-right corner (exclusive right).
    #[inline]
    pub const fn top_right(&self) -> (u16, u16) {
        (self.right(), self.y)
    }

    /// Bottom-left corner (exclusive bottom).
    #[inline]
    pub const fn bottom_left(&self) -> (u16, u16) {
        (self.x, self.bottom())
    }

    /// Bottom-right corner (exclusive right and bottom).
    #[inline]
    pub const fn bottom_right(&self) -> (u16, u16) {
        (self.right(), self.bottom())
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(2, 3, 10, 4);
        assert_eq!(rect.right(), 12);
        assert_eq!(rect.bottom(), 7);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(11, 6));
        assert!(!rect.contains(12, 6));
    }

    #[test]
    fn test_rect_shrink() {
        let rect = Rect::new(0, 0, 10, 10);
        assert_eq!(rect.shrink(2), Rect::new(2, 2, 6, 6));
        assert_eq!(rect.shrink(5), Rect::ZERO);
        assert_eq!(rect.shrink(0), rect);
    }

    #[test]
    fn test_rect_anchor_points() {
        let rect = Rect::new(4, 2, 8, 6);
        assert_eq!(rect.center(), (8, 5));
        assert_eq!(rect.mid_top(), (8, 2));
        assert_eq!(rect.mid_bottom(), (8, 8));
        assert_eq!(rect.mid_left(), (4, 5));
        assert_eq!(rect.mid_right(), (12, 5));
        assert_eq!(rect.top_left(), (4, 2));
        assert_eq!(rect.top_right(), (12, 2));
        assert_eq!(rect.bottom_left(), (4, 8));
        assert_eq!(rect.bottom_right(), (12, 8));
    }
}
