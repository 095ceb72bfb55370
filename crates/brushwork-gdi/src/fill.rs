//! Solid fills, textured blits and the ellipse approximation.

use std::ops::{Deref, DerefMut};

use brushwork_engine::coords::{Affine, Rect, Vec2};
use brushwork_engine::paint::Color;
use brushwork_engine::surface::Surface;
use brushwork_engine::texture::TextureId;

use crate::error::DrawError;
use crate::graphics::Graphics;

/// A texture paired with the tint it is normally drawn with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Image {
    pub texture: TextureId,
    pub tint: Color,
}

impl Image {
    pub fn new(texture: TextureId) -> Self {
        Self { texture, tint: Color::WHITE }
    }

    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}

/// Rotates a surface about a pivot and puts the previous matrix back on drop.
///
/// The surface is reachable through `Deref`, so primitives issued through
/// the guard are rotated. The restore also runs when a primitive fails or a
/// caller returns early.
pub struct MatrixRestore<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    saved: Affine,
}

impl<'s, S: Surface + ?Sized> MatrixRestore<'s, S> {
    pub fn rotate(surface: &'s mut S, degrees: f32, pivot: Vec2) -> Self {
        let saved = surface.matrix();
        surface.rotate_around_pivot(degrees, pivot);
        Self { surface, saved }
    }
}

impl<S: Surface + ?Sized> Deref for MatrixRestore<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for MatrixRestore<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for MatrixRestore<'_, S> {
    fn drop(&mut self) {
        self.surface.set_matrix(self.saved);
    }
}

impl Graphics<'_> {
    // ── fills ─────────────────────────────────────────────────────────────

    /// Solid rectangle. Skipped for transparent colors and when fills are
    /// suppressed.
    pub fn fill_rectangle(&mut self, color: impl Into<Color>, rect: Rect) {
        if self.config.no_fill {
            return;
        }
        let color = color.into();
        if color.is_transparent() {
            return;
        }
        self.fill_solid(color, rect);
    }

    /// Stretched circle sprite. Needs a bound widget.
    pub fn fill_ellipse(&mut self, color: impl Into<Color>, rect: Rect) {
        if !self.require_bound("fill_ellipse") {
            return;
        }
        let color = color.into();
        if color.is_transparent() {
            return;
        }
        let circle = self.resources.assets.circle;
        let rect = self.resolve_rect(rect);
        self.blit_resolved(circle, color, &[rect], None);
    }

    /// Triangle fan anchored at the first point.
    pub fn fill_polygon_convex(&mut self, color: impl Into<Color>, points: &[Vec2]) {
        if self.config.no_fill {
            return;
        }
        if points.len() < 3 {
            self.report(DrawError::Degenerate { op: "fill_polygon_convex" });
            return;
        }
        let color = color.into();
        if color.is_transparent() {
            return;
        }
        let resolved: Vec<Vec2> = points.iter().map(|p| self.resolve(*p)).collect();
        let anchor = resolved[0];
        for pair in resolved[1..].windows(2) {
            self.surface.triangle(anchor, pair[0], pair[1], color);
        }
    }

    // ── textures ──────────────────────────────────────────────────────────

    pub fn draw_texture(&mut self, texture: Option<TextureId>, rect: Rect) {
        self.draw_texture_rotated(texture, rect, Color::WHITE, 0.0, None);
    }

    pub fn draw_texture_tinted(&mut self, texture: Option<TextureId>, rect: Rect, tint: impl Into<Color>) {
        self.draw_texture_rotated(texture, rect, tint, 0.0, None);
    }

    /// Draws `texture` over `rect`, rotated by `angle` degrees about
    /// `rect.origin + pivot` (the rect centre when `pivot` is `None`).
    ///
    /// No-op without a bound widget or texture.
    pub fn draw_texture_rotated(
        &mut self,
        texture: Option<TextureId>,
        rect: Rect,
        tint: impl Into<Color>,
        angle: f32,
        pivot: Option<Vec2>,
    ) {
        if !self.require_bound("draw_texture") {
            return;
        }
        let Some(texture) = texture else {
            self.report(DrawError::MissingTexture);
            return;
        };
        let pivot = pivot.unwrap_or(rect.size / 2.0);
        let rect = self.resolve_rect(rect);
        self.blit_resolved(texture, tint.into(), &[rect], Some((angle, rect.origin + pivot)));
    }

    pub fn draw_image(&mut self, image: &Image, rect: Rect) {
        self.draw_texture_tinted(Some(image.texture), rect, image.tint);
    }

    /// Single tinted pixel.
    pub fn draw_point(&mut self, color: impl Into<Color>, at: Vec2) {
        let white = self.resources.assets.white;
        self.draw_texture_tinted(Some(white), Rect::from_origin_size(at, Vec2::new(1.0, 1.0)), color);
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Tinted 1×1 white sprite stretched over `rect` (widget-local).
    pub(crate) fn fill_solid(&mut self, color: Color, rect: Rect) {
        let white = self.resources.assets.white;
        let rect = self.resolve_rect(rect);
        self.blit_resolved(white, color, &[rect], None);
    }

    /// Blits already-resolved rects with one tint, optionally under a single
    /// rotation `(degrees, resolved pivot)`. Stops at the first failure.
    pub(crate) fn blit_resolved(
        &mut self,
        texture: TextureId,
        tint: Color,
        rects: &[Rect],
        rotation: Option<(f32, Vec2)>,
    ) {
        self.surface.set_tint(tint);
        let result = match rotation {
            Some((degrees, pivot)) if degrees != 0.0 => {
                let mut rotated = MatrixRestore::rotate(&mut *self.surface, degrees, pivot);
                rects.iter().try_for_each(|r| rotated.blit(*r, texture))
            }
            _ => rects.iter().try_for_each(|r| self.surface.blit(*r, texture)),
        };
        if let Err(e) = result {
            self.report(e.into());
        }
    }
}
