/// painter-core - software painter's-algorithm renderer
///
/// Shapes are registered fresh every frame, moved and spun in place,
/// sorted back-to-front, pushed through an additive pseudo-perspective and
/// drawn as sweep-filled, outlined polygons using only line segments.

pub mod config;
pub mod depth;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod projection;
pub mod raster;
pub mod registry;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use config::RenderConfig;
pub use depth::sort_back_to_front;
pub use driver::{FrameDriver, FrameStats};
pub use error::{Error, Result};
pub use framebuffer::Framebuffer;
pub use geometry::{Rgb, Shape, MAX_VERTICES};
pub use host::{Canvas, HostEvent, RenderHost};
pub use projection::Projector;
pub use raster::{RasterStats, Rasterizer};
pub use registry::{ShapeRegistry, MAX_SHAPES};
pub use scene::Scene;
pub use transform::{RotationState, Transform};
