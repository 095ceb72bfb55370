//! Paint model shared between the drawing facade and surfaces.
//!
//! Scope: color representation only. Pens, brushes and fonts are facade-level
//! styling and live in `brushwork-gdi`.

pub mod color;

pub use color::Color;
