/// Constant geometry rebuilt into the registry every frame
use nalgebra::Point3;

use crate::error::Result;
use crate::geometry::{Rgb, Shape};
use crate::registry::ShapeRegistry;

/// Shape templates plus the point the object spins about
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    pivot: Point3<f32>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>, pivot: Point3<f32>) -> Self {
        Self { shapes, pivot }
    }

    /// Axis-aligned cube with one corner at the origin, one colour per face
    pub fn cube(size: f32) -> Self {
        let s = size;
        let p = Point3::<f32>::new;
        let faces: [([Point3<f32>; 4], Rgb); 6] = [
            // z = 0
            ([p(0.0, 0.0, 0.0), p(s, 0.0, 0.0), p(s, s, 0.0), p(0.0, s, 0.0)], Rgb::RED),
            // z = s
            ([p(0.0, 0.0, s), p(s, 0.0, s), p(s, s, s), p(0.0, s, s)], Rgb::GREEN),
            // x = 0
            ([p(0.0, 0.0, 0.0), p(0.0, s, 0.0), p(0.0, s, s), p(0.0, 0.0, s)], Rgb::BLUE),
            // x = s
            ([p(s, 0.0, 0.0), p(s, s, 0.0), p(s, s, s), p(s, 0.0, s)], Rgb::YELLOW),
            // y = 0
            ([p(0.0, 0.0, 0.0), p(s, 0.0, 0.0), p(s, 0.0, s), p(0.0, 0.0, s)], Rgb::MAGENTA),
            // y = s
            ([p(0.0, s, 0.0), p(s, s, 0.0), p(s, s, s), p(0.0, s, s)], Rgb::CYAN),
        ];

        let shapes = faces
            .iter()
            .filter_map(|(points, color)| Shape::new(points, *color).ok())
            .collect();

        let half = size / 2.0;
        Self::new(shapes, Point3::new(half, half, half))
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn pivot(&self) -> Point3<f32> {
        self.pivot
    }

    /// Copy every template into `registry`.
    ///
    /// Stops at the first rejected shape; the ones already added stay.
    pub fn populate(&self, registry: &mut ShapeRegistry) -> Result<usize> {
        for shape in &self.shapes {
            registry.add(shape.clone())?;
        }
        Ok(self.shapes.len())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::cube(200.0)
    }
}
