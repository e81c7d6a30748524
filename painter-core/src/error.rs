/// Error types for the painter pipeline

use thiserror::Error;

/// Errors raised by the shape pipeline and by host implementations.
///
/// Everything except [`Error::Host`] and [`Error::Io`] is local to one shape
/// or vertex; the frame driver skips the offender and keeps rendering.
#[derive(Error, Debug)]
pub enum Error {
    #[error("shape registry is full ({capacity} shapes)")]
    CapacityExceeded { capacity: usize },

    #[error("vertex depth {depth} is too close to zero to project")]
    DegenerateProjection { depth: f32 },

    #[error("invalid shape with {vertices} vertices: {reason}")]
    InvalidShape {
        vertices: usize,
        reason: &'static str,
    },

    #[error("host error: {0}")]
    Host(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for painter operations
pub type Result<T> = std::result::Result<T, Error>;
