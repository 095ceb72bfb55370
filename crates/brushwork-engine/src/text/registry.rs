use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::coords::Vec2;

/// Family used when a requested family is not registered.
pub const DEFAULT_FAMILY: &str = "Arial";

/// Error returned by [`FontRegistry::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontRegistry`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Loaded fonts, addressable by family name.
///
/// Fonts are immutable after loading. The registry is populated at startup
/// and shared read-only with every drawing facade; the only interior
/// mutation is the set of families already reported as missing, so the
/// fallback warning is logged once per family rather than once per frame.
pub struct FontRegistry {
    fonts: Vec<fontdue::Font>,
    by_family: HashMap<String, FontId>,
    warned: RefCell<HashSet<String>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self { fonts: Vec::new(), by_family: HashMap::new(), warned: RefCell::new(HashSet::new()) }
    }

    /// Parses a TrueType or OpenType font and registers it under `family`.
    ///
    /// Registering the same family twice replaces the lookup entry; the old
    /// font stays alive so existing [`FontId`]s remain valid.
    pub fn load_font(&mut self, family: &str, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        self.by_family.insert(family.to_owned(), id);
        log::debug!("registered font family {family:?} as {id:?}");
        Ok(id)
    }

    /// Exact lookup.
    pub fn find(&self, family: &str) -> Option<FontId> {
        self.by_family.get(family).copied()
    }

    /// Looks up `family`, falling back to [`DEFAULT_FAMILY`].
    ///
    /// Returns `None` only when neither is registered; the surface then uses
    /// its built-in font.
    pub fn resolve_or_default(&self, family: &str) -> Option<FontId> {
        if let Some(id) = self.find(family) {
            return Some(id);
        }
        if self.warned.borrow_mut().insert(family.to_owned()) {
            log::warn!("font family {family:?} not registered, falling back to {DEFAULT_FAMILY:?}");
        }
        self.find(DEFAULT_FAMILY)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Bounding box of `text` laid out on a single line at `size` pixels.
    ///
    /// Width is the pen position after the last glyph (advance extent) rather
    /// than the right edge of its bitmap, so trailing spaces count.
    #[must_use]
    pub fn measure(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("fonts", &self.fonts.len())
            .field("families", &self.by_family.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: &[u8] = include_bytes!("../../../../assets/fonts/DejaVuSansMono.ttf");

    fn with_default_family() -> (FontRegistry, FontId) {
        let mut reg = FontRegistry::new();
        let id = reg.load_font(DEFAULT_FAMILY, MONO).unwrap();
        (reg, id)
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let reg = FontRegistry::new();
        assert_eq!(reg.find("Segoe UI"), None);
        assert_eq!(reg.resolve_or_default("Segoe UI"), None);
        assert!(reg.is_empty());
    }

    #[test]
    fn missing_family_is_remembered_once() {
        let reg = FontRegistry::new();
        let _ = reg.resolve_or_default("Tahoma");
        let _ = reg.resolve_or_default("Tahoma");
        assert_eq!(reg.warned.borrow().len(), 1);
    }

    #[test]
    fn invalid_font_bytes_are_rejected() {
        let mut reg = FontRegistry::new();
        assert!(reg.load_font("Broken", &[0u8; 16]).is_err());
        assert_eq!(reg.find("Broken"), None);
    }

    #[test]
    fn measuring_with_unknown_id_reports_line_height_only() {
        let reg = FontRegistry::new();
        assert_eq!(reg.measure("abc", FontId(3), 10.0), Vec2::new(0.0, 10.0 * 1.2));
    }

    // ── loaded fonts ──────────────────────────────────────────────────────

    #[test]
    fn unknown_family_resolves_to_the_registered_default() {
        let (reg, arial) = with_default_family();
        assert_eq!(reg.find("Segoe UI"), None);
        assert_eq!(reg.resolve_or_default("Segoe UI"), Some(arial));
        assert_eq!(reg.resolve_or_default(DEFAULT_FAMILY), Some(arial));
        assert_eq!(reg.warned.borrow().len(), 1);
    }

    #[test]
    fn reloading_a_family_keeps_old_ids_valid() {
        let (mut reg, first) = with_default_family();
        let second = reg.load_font(DEFAULT_FAMILY, MONO).unwrap();
        assert_ne!(first, second);
        assert_eq!(reg.find(DEFAULT_FAMILY), Some(second));
        assert!(reg.get(first).is_some());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn measure_follows_glyph_advances() {
        let (reg, id) = with_default_family();
        let advance = reg.get(id).unwrap().metrics('a', 20.0).advance_width;
        let size = reg.measure("abcd", id, 20.0);
        assert!(advance > 0.0);
        // Layout snaps the pen to whole pixels after each glyph.
        let expected = 3.0 * advance.ceil() + advance;
        assert!((size.x - expected).abs() < 1.5, "width {} vs expected {expected}", size.x);
        assert!(size.y >= 20.0);
        assert!(reg.measure("abcdabcd", id, 20.0).x > size.x);
    }

    #[test]
    fn trailing_spaces_count_toward_width() {
        let (reg, id) = with_default_family();
        assert!(reg.measure("ab  ", id, 16.0).x > reg.measure("ab", id, 16.0).x);
    }
}
