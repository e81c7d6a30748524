/// Tunable constants of the rendering pipeline
use nalgebra::Vector3;

use crate::geometry::Rgb;

/// Pipeline configuration.
///
/// Defaults produce the tumbling six-colour cube.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Pseudo-focal constant `k` in `x' = x + k / z`
    pub focal_length: f32,
    /// Depths with magnitude at or below this cannot be projected
    pub depth_epsilon: f32,
    /// Sweep parameter increment used when filling a triangle
    pub fill_step: f32,
    /// Spin accumulated per elapsed millisecond, in radians
    pub spin_rate: f32,
    /// Multiplier applied to the accumulated spin on each axis
    pub spin_axes: Vector3<f32>,
    /// Depth the scene is pushed to after spinning
    pub world_depth: f32,
    pub background: Rgb,
    pub outline_color: Rgb,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            focal_length: 256.0,
            depth_epsilon: 1e-6,
            fill_step: 0.001,
            spin_rate: 0.001,
            spin_axes: Vector3::new(1.0 / 3.0, 1.0, 0.0),
            world_depth: 200.0,
            background: Rgb::BLACK,
            outline_color: Rgb::BLACK,
        }
    }

    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn with_fill_step(mut self, fill_step: f32) -> Self {
        self.fill_step = fill_step;
        self
    }

    pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    pub fn with_world_depth(mut self, world_depth: f32) -> Self {
        self.world_depth = world_depth;
        self
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
