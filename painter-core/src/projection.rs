/// Screen-space projection
use nalgebra::Point3;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::geometry::Shape;
use crate::registry::ShapeRegistry;

/// Additive pseudo-perspective projector.
///
/// A vertex at depth `z` moves by `focal_length / z` on both screen axes;
/// `z` itself is left alone so the depth of projected shapes stays readable.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub focal_length: f32,
    pub depth_epsilon: f32,
}

impl Projector {
    pub fn new(focal_length: f32, depth_epsilon: f32) -> Self {
        Self {
            focal_length,
            depth_epsilon,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.focal_length, config.depth_epsilon)
    }

    /// Screen-space offset applied at depth `z`
    pub fn offset_at(&self, z: f32) -> Result<f32> {
        // Exact zero is always rejected, even with a zero epsilon.
        if z == 0.0 || z.abs() <= self.depth_epsilon || !z.is_finite() {
            return Err(Error::DegenerateProjection { depth: z });
        }
        Ok(self.focal_length / z)
    }

    /// Project a single point
    pub fn project_point(&self, point: &Point3<f32>) -> Result<Point3<f32>> {
        let offset = self.offset_at(point.z)?;
        Ok(Point3::new(point.x + offset, point.y + offset, point.z))
    }

    /// Project every vertex of `shape`.
    ///
    /// Either every vertex is projected or none is.
    pub fn project_shape(&self, shape: &mut Shape) -> Result<()> {
        let mut projected = [Point3::origin(); crate::geometry::MAX_VERTICES];
        for (slot, vertex) in projected.iter_mut().zip(shape.vertices()) {
            *slot = self.project_point(vertex)?;
        }

        let count = shape.len();
        shape.vertices_mut().copy_from_slice(&projected[..count]);
        Ok(())
    }

    /// Project the whole registry, dropping shapes that cannot be projected.
    ///
    /// Returns how many shapes were dropped.
    pub fn project(&self, registry: &mut ShapeRegistry) -> usize {
        let before = registry.len();
        registry.retain_mut(|shape| match self.project_shape(shape) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("dropping shape from frame: {}", err);
                false
            }
        });
        before - registry.len()
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rgb;

    #[test]
    fn test_offset_matches_focal_over_depth() {
        let projector = Projector::default();
        for z in [200.0_f32, -50.0, 1.5, 373.2] {
            let q = projector.project_point(&Point3::new(0.0, 0.0, z)).unwrap();
            assert_eq!(q.x, 256.0 / z);
            assert_eq!(q.y, 256.0 / z);
            assert_eq!(q.z, z);

            let p = Point3::new(12.0, -7.0, z);
            let q = projector.project_point(&p).unwrap();
            assert!((q.x - p.x - 256.0 / z).abs() < 1e-4);
            assert!((q.y - p.y - 256.0 / z).abs() < 1e-4);
        }
    }

    #[test]
    fn test_zero_depth_is_degenerate() {
        let projector = Projector::new(256.0, 0.0);
        let err = projector.project_point(&Point3::new(1.0, 1.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::DegenerateProjection { .. }));

        let projector = Projector::new(256.0, 0.5);
        assert!(projector.project_point(&Point3::new(1.0, 1.0, -0.25)).is_err());
        assert!(projector.project_point(&Point3::new(1.0, 1.0, 0.75)).is_ok());
    }

    #[test]
    fn test_failed_shape_is_left_untouched() {
        let projector = Projector::default();
        let points = [
            Point3::new(0.0, 0.0, 10.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(5.0, 5.0, 10.0),
        ];
        let mut shape = Shape::new(&points, Rgb::RED).unwrap();
        assert!(projector.project_shape(&mut shape).is_err());
        assert_eq!(shape.vertices(), &points);
    }

    #[test]
    fn test_project_drops_only_degenerate_shapes() {
        let projector = Projector::default();
        let mut registry = ShapeRegistry::new();
        let good = [
            Point3::new(0.0, 0.0, 128.0),
            Point3::new(10.0, 0.0, 128.0),
            Point3::new(10.0, 10.0, 128.0),
        ];
        let bad = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 1.0),
            Point3::new(10.0, 10.0, 1.0),
        ];
        registry.add(Shape::new(&good, Rgb::RED).unwrap()).unwrap();
        registry.add(Shape::new(&bad, Rgb::GREEN).unwrap()).unwrap();
        registry.add(Shape::new(&good, Rgb::BLUE).unwrap()).unwrap();

        assert_eq!(projector.project(&mut registry), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.shapes()[0].color, Rgb::RED);
        assert_eq!(registry.shapes()[1].color, Rgb::BLUE);
        assert_eq!(registry.shapes()[1].vertices()[1], Point3::new(12.0, 2.0, 128.0));
    }
}
