use core::ops::BitOr;

use brushwork_engine::surface::LabelStyle;

/// Bold/italic flags of a [`Font`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FontStyle(u8);

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle(0);
    pub const BOLD: FontStyle = FontStyle(1);
    pub const ITALIC: FontStyle = FontStyle(2);

    #[inline]
    pub const fn contains(self, other: FontStyle) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FontStyle {
    type Output = FontStyle;
    fn bitor(self, rhs: FontStyle) -> FontStyle {
        FontStyle(self.0 | rhs.0)
    }
}

impl From<FontStyle> for LabelStyle {
    fn from(style: FontStyle) -> Self {
        match (style.contains(FontStyle::BOLD), style.contains(FontStyle::ITALIC)) {
            (true, true) => LabelStyle::BoldAndItalic,
            (true, false) => LabelStyle::Bold,
            (false, true) => LabelStyle::Italic,
            (false, false) => LabelStyle::Normal,
        }
    }
}

/// Font request: family name, size in pixels and style flags.
///
/// The family is resolved against the font registry at draw time; unknown
/// families fall back to the registry's default family.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub style: FontStyle,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size, style: FontStyle::REGULAR }
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bold(self) -> Self {
        let style = self.style | FontStyle::BOLD;
        self.style(style)
    }

    pub fn italic(self) -> Self {
        let style = self.style | FontStyle::ITALIC;
        self.style(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_flags_map_onto_label_styles() {
        assert_eq!(LabelStyle::from(FontStyle::REGULAR), LabelStyle::Normal);
        assert_eq!(LabelStyle::from(FontStyle::BOLD), LabelStyle::Bold);
        assert_eq!(LabelStyle::from(FontStyle::ITALIC), LabelStyle::Italic);
        assert_eq!(LabelStyle::from(FontStyle::BOLD | FontStyle::ITALIC), LabelStyle::BoldAndItalic);
    }

    #[test]
    fn builder_accumulates_flags() {
        let font = Font::new("Verdana", 11.0).bold().italic();
        assert!(font.style.contains(FontStyle::BOLD));
        assert!(font.style.contains(FontStyle::ITALIC));
    }
}
