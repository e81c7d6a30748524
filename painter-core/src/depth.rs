/// Painter's-algorithm ordering
use crate::registry::ShapeRegistry;

/// Reorder the registry back-to-front: largest depth centroid first.
///
/// Equal depths keep their registration order.
pub fn sort_back_to_front(registry: &mut ShapeRegistry) {
    registry
        .shapes_mut()
        .sort_by(|a, b| b.depth_centroid().total_cmp(&a.depth_centroid()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rgb, Shape};
    use nalgebra::Point3;

    fn flat(z: f32, color: Rgb) -> Shape {
        Shape::new(
            &[
                Point3::new(0.0, 0.0, z),
                Point3::new(1.0, 0.0, z),
                Point3::new(1.0, 1.0, z),
            ],
            color,
        )
        .unwrap()
    }

    #[test]
    fn test_farthest_first() {
        let mut registry = ShapeRegistry::new();
        registry.add(flat(10.0, Rgb::RED)).unwrap();
        registry.add(flat(300.0, Rgb::GREEN)).unwrap();
        registry.add(flat(-5.0, Rgb::BLUE)).unwrap();
        registry.add(flat(120.0, Rgb::YELLOW)).unwrap();

        sort_back_to_front(&mut registry);

        let colors: Vec<Rgb> = registry.shapes().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Rgb::GREEN, Rgb::YELLOW, Rgb::RED, Rgb::BLUE]);
    }

    #[test]
    fn test_output_is_non_increasing() {
        let mut registry = ShapeRegistry::new();
        // Scrambled, distinct, with tilted shapes so the mean matters.
        for i in 0..40 {
            let base = ((i * 37) % 41) as f32 * 7.5 - 100.0;
            let shape = Shape::new(
                &[
                    Point3::new(0.0, 0.0, base - 3.0),
                    Point3::new(1.0, 0.0, base + 9.0),
                    Point3::new(1.0, 1.0, base),
                ],
                Rgb::CYAN,
            )
            .unwrap();
            registry.add(shape).unwrap();
        }

        sort_back_to_front(&mut registry);

        for pair in registry.shapes().windows(2) {
            assert!(pair[0].depth_centroid() >= pair[1].depth_centroid());
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut registry = ShapeRegistry::new();
        sort_back_to_front(&mut registry);
        assert!(registry.is_empty());

        registry.add(flat(1.0, Rgb::RED)).unwrap();
        sort_back_to_front(&mut registry);
        assert_eq!(registry.len(), 1);
    }
}
