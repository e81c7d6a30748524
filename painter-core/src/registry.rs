/// Per-frame shape storage
use crate::error::{Error, Result};
use crate::geometry::Shape;

/// Maximum number of shapes alive in one frame
pub const MAX_SHAPES: usize = 250;

/// Owns every shape for the current frame.
///
/// The registry never grows past [`MAX_SHAPES`]; [`ShapeRegistry::add`]
/// rejects the overflowing shape instead.
#[derive(Debug)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self {
            shapes: Vec::with_capacity(MAX_SHAPES),
        }
    }

    /// Register a shape, returning its index in the current order.
    pub fn add(&mut self, shape: Shape) -> Result<usize> {
        if self.shapes.len() >= MAX_SHAPES {
            return Err(Error::CapacityExceeded {
                capacity: MAX_SHAPES,
            });
        }
        self.shapes.push(shape);
        Ok(self.shapes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    /// Keep only the shapes for which `keep` returns true
    pub fn retain_mut<F>(&mut self, keep: F)
    where
        F: FnMut(&mut Shape) -> bool,
    {
        self.shapes.retain_mut(keep);
    }

    /// Release every shape. Capacity is kept for the next frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rgb;
    use nalgebra::Point3;

    fn triangle() -> Shape {
        Shape::new(
            &[
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            Rgb::RED,
        )
        .unwrap()
    }

    #[test]
    fn test_add_returns_index() {
        let mut registry = ShapeRegistry::new();
        assert_eq!(registry.add(triangle()).unwrap(), 0);
        assert_eq!(registry.add(triangle()).unwrap(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_251st_shape_is_rejected() {
        let mut registry = ShapeRegistry::new();
        for _ in 0..MAX_SHAPES {
            registry.add(triangle()).unwrap();
        }

        let err = registry.add(triangle()).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { capacity: 250 }));
        assert_eq!(registry.len(), MAX_SHAPES);
    }

    #[test]
    fn test_clear_releases_shapes() {
        let mut registry = ShapeRegistry::new();
        for _ in 0..MAX_SHAPES {
            registry.add(triangle()).unwrap();
        }
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.add(triangle()).is_ok());
    }
}
