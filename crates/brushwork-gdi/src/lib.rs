//! brushwork GDI: pen/brush drawing on top of a `brushwork-engine` surface.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use brushwork_gdi::prelude::*;
//!
//! // Once, at startup:
//! let mut textures = TextureStore::new();
//! let assets = DefaultAssets::create(&mut textures);
//! let fonts = FontRegistry::new();
//!
//! // In a widget's paint handler:
//! let mut g = Graphics::new(&mut surface, &layout, SharedResources { fonts: &fonts, assets }, Some(id));
//! g.fill_rectangle(Color::from_rgb(240, 240, 240), Rect::new(0.0, 0.0, 120.0, 24.0));
//! g.draw_rectangle(&Pen::new(Color::BLACK), Rect::new(0.0, 0.0, 120.0, 24.0));
//! g.draw_string("File", None, Color::BLACK, Rect::new(4.0, 0.0, 112.0, 24.0), ContentAlignment::MiddleLeft);
//! ```
//!
//! Container widgets wrap their children's paint pass in
//! [`Graphics::begin_group`] / [`Graphics::end_group`] (or
//! [`Graphics::with_group`]), after which children keep painting in their
//! own local coordinates.

pub mod align;
pub mod curve;
pub mod error;
pub mod fill;
pub mod font;
pub mod graphics;
pub mod pen;
pub mod resolve;
pub mod stroke;
pub mod text;

pub use error::DrawError;
pub use graphics::{Graphics, SharedResources};

/// Everything a paint handler needs. Import this in widget code.
pub mod prelude {
    pub use crate::align::{ContentAlignment, HorizontalAlignment, StringAlignment, StringFormat};
    pub use crate::error::DrawError;
    pub use crate::fill::Image;
    pub use crate::font::{Font, FontStyle};
    pub use crate::graphics::{Graphics, SharedResources};
    pub use crate::pen::{DashStyle, Pen, SolidBrush};
    pub use crate::resolve::{PositionProvider, WidgetId};

    // Re-export the engine primitives everyone needs.
    pub use brushwork_engine::coords::{Rect, Vec2};
    pub use brushwork_engine::paint::Color;
    pub use brushwork_engine::text::FontRegistry;
    pub use brushwork_engine::texture::{DefaultAssets, TextureId, TextureStore};
}
