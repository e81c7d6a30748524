/// Interfaces a display host provides to the pipeline
use crate::error::Result;
use crate::geometry::Rgb;

/// Events surfaced by a host between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The user asked to close the renderer
    Quit,
    /// The drawable area changed size (in logical pixels)
    Resized { width: u32, height: u32 },
}

/// Something lines can be drawn on.
///
/// Coordinates are integer screen pixels and may fall outside the drawable
/// area; implementations clip.
pub trait Canvas {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb);

    fn clear(&mut self, color: Rgb);
}

/// A windowing host driving the frame loop
pub trait RenderHost: Canvas {
    /// Publish the finished frame
    fn present(&mut self) -> Result<()>;

    /// Drawable size in logical pixels
    fn window_size(&self) -> (u32, u32);

    /// Next pending event, without blocking
    fn poll_event(&mut self) -> Result<Option<HostEvent>>;

    /// Monotonic milliseconds since the host started
    fn elapsed_millis(&self) -> u64;
}
