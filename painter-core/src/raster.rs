/// Line-sweep polygon rasterizer
use nalgebra::Point3;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::geometry::{Rgb, Shape};
use crate::host::Canvas;
use crate::registry::ShapeRegistry;

/// Upper bound on sweep intervals per triangle
pub const MAX_FILL_STEPS: usize = 100_000;

/// Per-frame rasterization counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    pub filled: usize,
    pub outlined: usize,
    pub rejected: usize,
    pub segments: usize,
}

/// Triangles covering a polygon of `count` vertices.
///
/// Consecutive triples `(j, j+1, j+2)` for `j` in `0..count-3`, closed by
/// `(count-2, count-1, 0)`. Yields nothing below three vertices.
pub fn triangle_indices(count: usize) -> impl Iterator<Item = [usize; 3]> {
    let closing = (count >= 3).then(|| [count - 2, count - 1, 0]);
    (0..count.saturating_sub(3))
        .map(|j| [j, j + 1, j + 2])
        .chain(closing)
}

/// Fills and outlines shapes using nothing but line segments
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    pub fill_step: f32,
    pub outline: Rgb,
}

impl Rasterizer {
    pub fn new(fill_step: f32, outline: Rgb) -> Self {
        Self { fill_step, outline }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.fill_step, config.outline_color)
    }

    /// Number of sweep intervals per triangle, capped at [`MAX_FILL_STEPS`]
    fn fill_steps(&self) -> usize {
        if !(self.fill_step > 0.0) || self.fill_step >= 1.0 {
            return 1;
        }
        let steps = (1.0 / self.fill_step).round();
        if steps >= MAX_FILL_STEPS as f32 {
            return MAX_FILL_STEPS;
        }
        steps as usize
    }

    /// Render every shape in registry order, fill first, then outline.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        registry: &ShapeRegistry,
        canvas: &mut C,
    ) -> RasterStats {
        let mut stats = RasterStats::default();

        for shape in registry.shapes() {
            match self.fill(shape, canvas) {
                Ok(segments) => {
                    stats.filled += 1;
                    stats.segments += segments;
                }
                Err(err) => {
                    log::debug!("not filling shape: {}", err);
                    stats.rejected += 1;
                }
            }

            if let Ok(segments) = self.outline(shape, canvas) {
                stats.outlined += 1;
                stats.segments += segments;
            }
        }

        log::trace!("rasterized {:?}", stats);
        stats
    }

    /// Sweep-fill the shape in its own colour. Returns segments drawn.
    pub fn fill<C: Canvas + ?Sized>(&self, shape: &Shape, canvas: &mut C) -> Result<usize> {
        if shape.len() < 3 {
            return Err(Error::InvalidShape {
                vertices: shape.len(),
                reason: "fill needs at least 3 vertices",
            });
        }

        let vertices = shape.vertices();
        let mut segments = 0;
        for [a, b, c] in triangle_indices(vertices.len()) {
            segments += self.sweep_triangle(
                &vertices[a],
                &vertices[b],
                &vertices[c],
                shape.color,
                canvas,
            );
        }
        Ok(segments)
    }

    /// Fill triangle `(a, b, c)` by drawing `lerp(a, b, t) -> lerp(a, c, t)`
    /// for evenly spaced `t` in `[0, 1]`.
    pub fn sweep_triangle<C: Canvas + ?Sized>(
        &self,
        a: &Point3<f32>,
        b: &Point3<f32>,
        c: &Point3<f32>,
        color: Rgb,
        canvas: &mut C,
    ) -> usize {
        let steps = self.fill_steps();
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let start = a.lerp(b, t);
            let end = a.lerp(c, t);
            canvas.draw_line(start.x as i32, start.y as i32, end.x as i32, end.y as i32, color);
        }
        steps + 1
    }

    /// Draw the closed outline. Two vertices give a single segment.
    pub fn outline<C: Canvas + ?Sized>(&self, shape: &Shape, canvas: &mut C) -> Result<usize> {
        let vertices = shape.vertices();
        let edges = match vertices.len() {
            0 | 1 => {
                return Err(Error::InvalidShape {
                    vertices: vertices.len(),
                    reason: "outline needs at least 2 vertices",
                })
            }
            2 => 1,
            n => n,
        };

        for j in 0..edges {
            let start = &vertices[j];
            let end = &vertices[(j + 1) % vertices.len()];
            canvas.draw_line(
                start.x as i32,
                start.y as i32,
                end.x as i32,
                end.y as i32,
                self.outline,
            );
        }
        Ok(edges)
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(i32, i32, i32, i32, Rgb)>,
    }

    impl Canvas for Recorder {
        fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
            self.lines.push((x1, y1, x2, y2, color));
        }

        fn clear(&mut self, _color: Rgb) {
            panic!("rasterizer must not clear");
        }
    }

    fn shape(points: &[(f32, f32)], color: Rgb) -> Shape {
        let points: Vec<Point3<f32>> = points
            .iter()
            .map(|&(x, y)| Point3::new(x, y, 1.0))
            .collect();
        Shape::new(&points, color).unwrap()
    }

    fn distance_to_segment(px: f32, py: f32, line: &(i32, i32, i32, i32, Rgb)) -> f32 {
        let (x1, y1, x2, y2) = (line.0 as f32, line.1 as f32, line.2 as f32, line.3 as f32);
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len2 = dx * dx + dy * dy;
        let t = if len2 == 0.0 {
            0.0
        } else {
            (((px - x1) * dx + (py - y1) * dy) / len2).clamp(0.0, 1.0)
        };
        let (cx, cy) = (x1 + t * dx, y1 + t * dy);
        ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
    }

    #[test]
    fn test_triangle_indices() {
        assert_eq!(triangle_indices(2).count(), 0);
        assert_eq!(triangle_indices(3).collect::<Vec<_>>(), vec![[1, 2, 0]]);
        assert_eq!(triangle_indices(4).collect::<Vec<_>>(), vec![[0, 1, 2], [2, 3, 0]]);
        assert_eq!(
            triangle_indices(5).collect::<Vec<_>>(),
            vec![[0, 1, 2], [1, 2, 3], [3, 4, 0]]
        );
        for s in 3..=12 {
            assert_eq!(triangle_indices(s).count(), s - 2);
        }
    }

    #[test]
    fn test_fill_steps_are_bounded() {
        assert_eq!(Rasterizer::default().fill_steps(), 1000);
        assert_eq!(Rasterizer::new(0.5, Rgb::BLACK).fill_steps(), 2);
        assert_eq!(Rasterizer::new(1e-30, Rgb::BLACK).fill_steps(), MAX_FILL_STEPS);
        assert_eq!(Rasterizer::new(0.0, Rgb::BLACK).fill_steps(), 1);
        assert_eq!(Rasterizer::new(f32::NAN, Rgb::BLACK).fill_steps(), 1);
        assert_eq!(Rasterizer::new(2.0, Rgb::BLACK).fill_steps(), 1);
    }

    #[test]
    fn test_sweep_endpoints() {
        let rasterizer = Rasterizer::default();
        let mut canvas = Recorder::default();
        let drawn = rasterizer.sweep_triangle(
            &Point3::new(10.0, 10.0, 1.0),
            &Point3::new(110.0, 10.0, 1.0),
            &Point3::new(10.0, 60.0, 1.0),
            Rgb::RED,
            &mut canvas,
        );

        assert_eq!(drawn, 1001);
        assert_eq!(canvas.lines.len(), 1001);
        // t = 0 collapses onto A, t = 1 is the edge BC.
        assert_eq!(canvas.lines[0], (10, 10, 10, 10, Rgb::RED));
        assert_eq!(canvas.lines[1000], (110, 10, 10, 60, Rgb::RED));
    }

    #[test]
    fn test_quad_fill_covers_interior() {
        let rasterizer = Rasterizer::default();
        let mut canvas = Recorder::default();
        let quad = shape(&[(0.0, 0.0), (200.0, 0.0), (200.0, 200.0), (0.0, 200.0)], Rgb::BLUE);

        let segments = rasterizer.fill(&quad, &mut canvas).unwrap();
        assert_eq!(segments, 2 * 1001);

        let mut y = 2.5;
        while y < 200.0 {
            let mut x = 2.5;
            while x < 200.0 {
                let nearest = canvas
                    .lines
                    .iter()
                    .map(|line| distance_to_segment(x, y, line))
                    .fold(f32::INFINITY, f32::min);
                assert!(nearest <= 1.5, "({}, {}) is {} from any fill line", x, y, nearest);
                x += 9.5;
            }
            y += 9.5;
        }
    }

    #[test]
    fn test_outline_closes_polygon_in_black() {
        let rasterizer = Rasterizer::default();
        let mut canvas = Recorder::default();
        let quad = shape(&[(0.0, 0.0), (200.0, 0.0), (200.0, 200.0), (0.0, 200.0)], Rgb::BLUE);

        assert_eq!(rasterizer.outline(&quad, &mut canvas).unwrap(), 4);
        assert_eq!(
            canvas.lines,
            vec![
                (0, 0, 200, 0, Rgb::BLACK),
                (200, 0, 200, 200, Rgb::BLACK),
                (200, 200, 0, 200, Rgb::BLACK),
                (0, 200, 0, 0, Rgb::BLACK),
            ]
        );
    }

    #[test]
    fn test_degenerate_shapes() {
        let rasterizer = Rasterizer::default();
        let mut canvas = Recorder::default();

        let segment = shape(&[(0.0, 0.0), (5.0, 5.0)], Rgb::RED);
        assert!(matches!(
            rasterizer.fill(&segment, &mut canvas),
            Err(Error::InvalidShape { vertices: 2, .. })
        ));
        assert_eq!(rasterizer.outline(&segment, &mut canvas).unwrap(), 1);
        assert_eq!(canvas.lines, vec![(0, 0, 5, 5, Rgb::BLACK)]);

        let point = shape(&[(1.0, 1.0)], Rgb::RED);
        assert!(rasterizer.outline(&point, &mut canvas).is_err());
    }

    #[test]
    fn test_draw_fills_before_outlining_in_order() {
        let rasterizer = Rasterizer::new(0.5, Rgb::BLACK);
        let mut registry = ShapeRegistry::new();
        registry
            .add(shape(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)], Rgb::RED))
            .unwrap();
        registry.add(shape(&[(9.0, 9.0), (12.0, 9.0)], Rgb::GREEN)).unwrap();
        registry
            .add(shape(&[(20.0, 20.0), (24.0, 20.0), (20.0, 24.0)], Rgb::BLUE))
            .unwrap();

        let mut canvas = Recorder::default();
        let stats = rasterizer.draw(&registry, &mut canvas);

        assert_eq!(
            stats,
            RasterStats {
                filled: 2,
                outlined: 3,
                rejected: 1,
                segments: 3 + 3 + 1 + 3 + 3,
            }
        );
        let colors: Vec<Rgb> = canvas.lines.iter().map(|line| line.4).collect();
        assert_eq!(
            colors,
            vec![
                Rgb::RED,
                Rgb::RED,
                Rgb::RED,
                Rgb::BLACK,
                Rgb::BLACK,
                Rgb::BLACK,
                Rgb::BLACK,
                Rgb::BLUE,
                Rgb::BLUE,
                Rgb::BLUE,
                Rgb::BLACK,
                Rgb::BLACK,
                Rgb::BLACK,
            ]
        );
    }
}
