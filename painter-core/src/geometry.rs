/// Geometry primitives for the painter pipeline
use nalgebra::Point3;

use crate::error::{Error, Result};

/// Maximum number of vertices a single shape can hold
pub const MAX_VERTICES: usize = 12;

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb::new(0x00, 0xff, 0x00);
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);
    pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
    pub const MAGENTA: Rgb = Rgb::new(0xff, 0x00, 0xff);
    pub const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A planar polygon with a fill colour.
///
/// Vertices live in a fixed slot of [`MAX_VERTICES`] points; only the first
/// `count` are meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: [Point3<f32>; MAX_VERTICES],
    count: usize,
    pub color: Rgb,
}

impl Shape {
    /// Build a shape from an ordered vertex list.
    ///
    /// Fails with [`Error::InvalidShape`] when more than [`MAX_VERTICES`]
    /// points are supplied. Degenerate polygons (fewer than three points) are
    /// accepted here and rejected later by the fill pass.
    pub fn new(points: &[Point3<f32>], color: Rgb) -> Result<Self> {
        if points.len() > MAX_VERTICES {
            return Err(Error::InvalidShape {
                vertices: points.len(),
                reason: "more vertices than a shape can hold",
            });
        }

        let mut vertices = [Point3::origin(); MAX_VERTICES];
        vertices[..points.len()].copy_from_slice(points);

        Ok(Self {
            vertices,
            count: points.len(),
            color,
        })
    }

    /// Number of vertices in use
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices[..self.count]
    }

    pub fn vertices_mut(&mut self) -> &mut [Point3<f32>] {
        &mut self.vertices[..self.count]
    }

    /// Mean z over all vertices; the painter's-algorithm sort key.
    ///
    /// An empty shape reports a depth of zero.
    pub fn depth_centroid(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let sum: f32 = self.vertices().iter().map(|v| v.z).sum();
        sum / self.count as f32
    }
}
