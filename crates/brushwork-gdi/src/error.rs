use std::fmt;

use brushwork_engine::surface::SurfaceError;

/// Why a draw call produced less than it was asked for.
///
/// Draw calls never return these: they are logged, and collected when the
/// facade is in strict mode (see [`Graphics::set_strict`](crate::Graphics::set_strict)).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// The operation needs a bound widget and none is set.
    Unbound { op: &'static str },
    /// No texture was supplied.
    MissingTexture,
    /// Too few points, or a zero-length line.
    Degenerate { op: &'static str },
    /// `end_group` without a matching `begin_group`.
    UnbalancedGroup,
    /// The font family is not registered; the default family was used.
    FontFallback { family: String },
    /// The surface rejected a primitive.
    Surface(SurfaceError),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::Unbound { op } => write!(f, "{op}: no widget bound, nothing drawn"),
            DrawError::MissingTexture => write!(f, "draw_texture: no texture, nothing drawn"),
            DrawError::Degenerate { op } => write!(f, "{op}: degenerate geometry, nothing drawn"),
            DrawError::UnbalancedGroup => write!(f, "end_group without matching begin_group"),
            DrawError::FontFallback { family } => write!(f, "font family {family:?} not found, used default"),
            DrawError::Surface(e) => write!(f, "surface rejected draw: {e}"),
        }
    }
}

impl std::error::Error for DrawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DrawError::Surface(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SurfaceError> for DrawError {
    fn from(e: SurfaceError) -> Self {
        DrawError::Surface(e)
    }
}
