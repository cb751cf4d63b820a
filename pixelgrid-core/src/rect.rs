use serde::{Deserialize, Serialize};

use crate::error::RegionError;

/// Rectangle in logical grid units (always u32 coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GridRect {
    /// Create new grid rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area in logical units (u64 so a full 1000×1000 grid never overflows)
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge. Saturates for rects that were never validated.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge. Saturates like [`GridRect::right`].
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the two rects share any area. Touching edges do not count.
    pub fn intersects(&self, other: &GridRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.x as u64) < other.x as u64 + other.width as u64
            && (other.x as u64) < self.x as u64 + self.width as u64
            && (self.y as u64) < other.y as u64 + other.height as u64
            && (other.y as u64) < self.y as u64 + self.height as u64
    }

    /// Check if a logical point lies inside the rectangle.
    ///
    /// Edges are inclusive on both sides: logical points are fractional, and a
    /// pointer resting exactly on a region border still counts as a hit.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let right = self.x as f64 + self.width as f64;
        let bottom = self.y as f64 + self.height as f64;
        x >= self.x as f64 && x <= right && y >= self.y as f64 && y <= bottom
    }

    /// Validate that the rectangle is non-empty and fits inside a square grid.
    pub fn validate(&self, grid_size: u32) -> Result<(), RegionError> {
        if self.is_empty() {
            return Err(RegionError::EmptyRect(*self));
        }
        let fits = (self.x as u64 + self.width as u64) <= grid_size as u64
            && (self.y as u64 + self.height as u64) <= grid_size as u64;
        if !fits {
            return Err(RegionError::OutOfBounds {
                rect: *self,
                grid_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rect_area() {
        let rect = GridRect::new(0, 0, 1000, 1000);
        assert_eq!(rect.area(), 1_000_000);
    }

    #[test]
    fn test_grid_rect_edges() {
        let rect = GridRect::new(10, 20, 100, 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
    }

    #[test]
    fn test_grid_rect_contains_point() {
        let rect = GridRect::new(10, 20, 100, 50);

        assert!(rect.contains(50.0, 40.0));
        assert!(rect.contains(10.0, 20.0)); // Top-left corner
        assert!(rect.contains(110.0, 70.0)); // Bottom-right corner
        assert!(!rect.contains(110.5, 70.0)); // Just outside
        assert!(!rect.contains(9.9, 20.0)); // Just left
        assert!(!rect.contains(50.0, 19.5)); // Just above
    }

    #[test]
    fn test_grid_rect_edges_near_u32_max() {
        let rect = GridRect::new(u32::MAX - 5, u32::MAX, 10, 10);
        assert_eq!(rect.right(), u32::MAX);
        assert_eq!(rect.bottom(), u32::MAX);
        assert!(!rect.contains(10.0, 10.0));
        assert!(rect.contains(u32::MAX as f64, u32::MAX as f64));
    }

    #[test]
    fn test_grid_rect_intersects() {
        let rect = GridRect::new(0, 0, 100, 100);
        assert!(rect.intersects(&GridRect::new(50, 50, 100, 100)));
        assert!(!rect.intersects(&GridRect::new(100, 0, 10, 10))); // Shares an edge only
        assert!(!rect.intersects(&GridRect::new(200, 200, 10, 10)));
        assert!(!rect.intersects(&GridRect::new(10, 10, 0, 10)));
    }

    #[test]
    fn test_validate_accepts_rect_touching_grid_edge() {
        let rect = GridRect::new(900, 990, 100, 10);
        assert!(rect.validate(1000).is_ok());
    }

    #[test]
    fn test_validate_rejects_overflowing_rect() {
        let rect = GridRect::new(950, 0, 100, 10);
        assert!(matches!(
            rect.validate(1000),
            Err(RegionError::OutOfBounds { grid_size: 1000, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_rect() {
        let rect = GridRect::new(10, 10, 0, 20);
        assert!(matches!(rect.validate(1000), Err(RegionError::EmptyRect(_))));
    }

    #[test]
    fn test_grid_rect_serialization_roundtrip() {
        let original = GridRect::new(100, 200, 40, 30);

        let json = serde_json::to_string(&original).unwrap();
        let restored: GridRect = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
