//! brushwork engine crate.
//!
//! Owns everything below the drawing facade: geometry, color, textures,
//! fonts, the painting-surface contract and a recording surface, plus the
//! process-wide logging and configuration setup.

pub mod config;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;
pub mod text;
pub mod texture;
