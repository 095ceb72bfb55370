//! Coordinate and geometry types shared by the surface contract and the
//! drawing facade.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rotations are expressed in degrees, clockwise on screen (the +Y-down
//! convention turns the mathematical counter-clockwise angle into a
//! clockwise one).

mod affine;
mod rect;
mod vec2;

pub use affine::Affine;
pub use rect::Rect;
pub use vec2::Vec2;
