//! Labels, editable text controls and text measurement.
//!
//! The surface keeps font settings per skin bucket. Every text call
//! overrides the bucket through a [`FontScope`], which puts the previous
//! settings back when it goes out of scope.

use std::ops::{Deref, DerefMut};

use brushwork_engine::coords::{Rect, Vec2};
use brushwork_engine::paint::Color;
use brushwork_engine::surface::{LabelStyle, SkinBucket, SkinFont, Surface};
use brushwork_engine::text::DEFAULT_FAMILY;

use crate::align::{ContentAlignment, HorizontalAlignment};
use crate::error::DrawError;
use crate::font::Font;
use crate::graphics::Graphics;

/// Size used when a call passes no font.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Layout box of [`Graphics::draw_string_at`].
pub const POINT_LAYOUT_SIZE: Vec2 = Vec2::new(512.0, 64.0);

/// Per-character advance of [`Graphics::measure_string_fast`].
pub const FAST_CHAR_WIDTH: f32 = 8.0;

/// Mask shown by [`Graphics::draw_password_field`] by default.
pub const PASSWORD_MASK: char = '*';

/// Overrides one skin bucket's font and restores the previous one on drop.
pub struct FontScope<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    bucket: SkinBucket,
    saved: SkinFont,
}

impl<'s, S: Surface + ?Sized> FontScope<'s, S> {
    pub fn apply(surface: &'s mut S, bucket: SkinBucket, font: SkinFont) -> Self {
        let saved = surface.skin_font(bucket);
        surface.set_skin_font(bucket, font);
        Self { surface, bucket, saved }
    }
}

impl<S: Surface + ?Sized> Deref for FontScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for FontScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for FontScope<'_, S> {
    fn drop(&mut self) {
        self.surface.set_skin_font(self.bucket, self.saved);
    }
}

impl Graphics<'_> {
    // ── labels ────────────────────────────────────────────────────────────

    /// Draws `text` inside `rect`. Skipped entirely when strings are
    /// suppressed.
    ///
    /// `alignment` accepts [`ContentAlignment`], [`HorizontalAlignment`] or
    /// [`StringFormat`](crate::align::StringFormat).
    pub fn draw_string(
        &mut self,
        text: &str,
        font: Option<&Font>,
        color: impl Into<Color>,
        rect: Rect,
        alignment: impl Into<ContentAlignment>,
    ) {
        if self.config.no_strings {
            return;
        }
        let skin = self.skin_font_for(font);
        let anchor = alignment.into().anchor();
        let rect = self.resolve_rect(rect);

        let mut surface = FontScope::apply(&mut *self.surface, SkinBucket::Label, skin);
        surface.set_tint(color.into());
        surface.label(rect, text, anchor);
    }

    /// Top-left aligned label in a fixed 512×64 box at `at`.
    pub fn draw_string_at(&mut self, text: &str, font: Option<&Font>, color: impl Into<Color>, at: Vec2) {
        let rect = Rect::from_origin_size(at, POINT_LAYOUT_SIZE);
        self.draw_string(text, font, color, rect, ContentAlignment::TopLeft);
    }

    // ── editable controls ─────────────────────────────────────────────────

    /// Single-line editable field. Returns the (possibly edited) text, or
    /// `text` unchanged when no widget is bound.
    pub fn draw_text_field(
        &mut self,
        text: &str,
        font: Option<&Font>,
        color: impl Into<Color>,
        rect: Rect,
        alignment: HorizontalAlignment,
    ) -> String {
        self.field(text, font, color.into(), rect, alignment, None)
    }

    /// Like [`draw_text_field`](Self::draw_text_field) with every character
    /// shown as `mask`.
    pub fn draw_password_field(
        &mut self,
        text: &str,
        font: Option<&Font>,
        color: impl Into<Color>,
        rect: Rect,
        alignment: HorizontalAlignment,
        mask: char,
    ) -> String {
        self.field(text, font, color.into(), rect, alignment, Some(mask))
    }

    /// Multi-line editable area, top-left aligned.
    pub fn draw_text_area(&mut self, text: &str, font: Option<&Font>, color: impl Into<Color>, rect: Rect) -> String {
        if !self.require_bound("draw_text_area") {
            return text.to_owned();
        }
        let skin = self.skin_font_for(font);
        let rect = self.resolve_rect(rect);

        let mut surface = FontScope::apply(&mut *self.surface, SkinBucket::TextArea, skin);
        surface.set_tint(color.into());
        surface.text_area(rect, text)
    }

    // ── measurement ───────────────────────────────────────────────────────

    /// Exact size `text` occupies as a label, measured by the surface.
    pub fn measure_string(&mut self, text: &str, font: Option<&Font>) -> Vec2 {
        let skin = self.skin_font_for(font);
        let surface = FontScope::apply(&mut *self.surface, SkinBucket::Label, skin);
        surface.calc_size(SkinBucket::Label, text)
    }

    /// Cheap estimate: a fixed advance per character, one font size tall.
    pub fn measure_string_fast(&self, text: &str, font: Option<&Font>) -> Vec2 {
        let height = font.map_or(DEFAULT_FONT_SIZE as f32, |f| f.size);
        Vec2::new(text.chars().count() as f32 * FAST_CHAR_WIDTH, height)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn field(
        &mut self,
        text: &str,
        font: Option<&Font>,
        color: Color,
        rect: Rect,
        alignment: HorizontalAlignment,
        mask: Option<char>,
    ) -> String {
        if !self.require_bound("draw_text_field") {
            return text.to_owned();
        }
        let skin = self.skin_font_for(font);
        let anchor = ContentAlignment::from(alignment).anchor();
        let rect = self.resolve_rect(rect);

        let mut surface = FontScope::apply(&mut *self.surface, SkinBucket::TextField, skin);
        surface.set_tint(color);
        surface.text_field(rect, text, anchor, mask)
    }

    /// Surface font settings for `font`, or the default family at 12px.
    fn skin_font_for(&mut self, font: Option<&Font>) -> SkinFont {
        let fonts = self.resources.fonts;
        let Some(font) = font else {
            return SkinFont { family: fonts.find(DEFAULT_FAMILY), size: DEFAULT_FONT_SIZE, style: LabelStyle::Normal };
        };
        let family = match fonts.find(&font.family) {
            Some(id) => Some(id),
            None => {
                self.report(DrawError::FontFallback { family: font.family.clone() });
                fonts.resolve_or_default(&font.family)
            }
        };
        SkinFont { family, size: font.size as u32, style: font.style.into() }
    }
}
