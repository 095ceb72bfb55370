use std::fmt;

/// Failure reported by a [`Surface`](super::Surface) primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// Backend-specific failure.
    Backend(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Backend(msg) => write!(f, "surface error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}
