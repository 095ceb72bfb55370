//! Text alignment vocabularies.
//!
//! Callers describe placement in one of three ways: the 9-way
//! [`ContentAlignment`], a horizontal-only [`HorizontalAlignment`], or a
//! paragraph-style [`StringFormat`]. All of them normalize into
//! `ContentAlignment`, which maps 1:1 onto the surface's [`Anchor`].

use brushwork_engine::surface::Anchor;

/// 9-way placement of content inside a layout rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ContentAlignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ContentAlignment {
    /// Decodes the conventional bit-flag encoding (`TopLeft = 1` …
    /// `BottomRight = 1024`). Unknown values fall back to `TopLeft`.
    pub fn from_bits(bits: u32) -> Self {
        use ContentAlignment::*;
        match bits {
            0x001 => TopLeft,
            0x002 => TopCenter,
            0x004 => TopRight,
            0x010 => MiddleLeft,
            0x020 => MiddleCenter,
            0x040 => MiddleRight,
            0x100 => BottomLeft,
            0x200 => BottomCenter,
            0x400 => BottomRight,
            other => {
                log::debug!("unknown content alignment {other:#x}, using TopLeft");
                TopLeft
            }
        }
    }

    pub fn bits(self) -> u32 {
        use ContentAlignment::*;
        match self {
            TopLeft => 0x001,
            TopCenter => 0x002,
            TopRight => 0x004,
            MiddleLeft => 0x010,
            MiddleCenter => 0x020,
            MiddleRight => 0x040,
            BottomLeft => 0x100,
            BottomCenter => 0x200,
            BottomRight => 0x400,
        }
    }

    pub fn anchor(self) -> Anchor {
        use ContentAlignment::*;
        match self {
            TopLeft => Anchor::UpperLeft,
            TopCenter => Anchor::UpperCenter,
            TopRight => Anchor::UpperRight,
            MiddleLeft => Anchor::MiddleLeft,
            MiddleCenter => Anchor::MiddleCenter,
            MiddleRight => Anchor::MiddleRight,
            BottomLeft => Anchor::LowerLeft,
            BottomCenter => Anchor::LowerCenter,
            BottomRight => Anchor::LowerRight,
        }
    }
}

impl From<ContentAlignment> for Anchor {
    fn from(alignment: ContentAlignment) -> Self {
        alignment.anchor()
    }
}

/// Horizontal-only alignment used by single-line text controls.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Right,
    Center,
}

impl HorizontalAlignment {
    /// `0` Left, `1` Right, `2` Center; anything else is Left.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => HorizontalAlignment::Right,
            2 => HorizontalAlignment::Center,
            0 => HorizontalAlignment::Left,
            other => {
                log::debug!("unknown horizontal alignment {other}, using Left");
                HorizontalAlignment::Left
            }
        }
    }
}

/// Vertically centred.
impl From<HorizontalAlignment> for ContentAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Left => ContentAlignment::MiddleLeft,
            HorizontalAlignment::Center => ContentAlignment::MiddleCenter,
            HorizontalAlignment::Right => ContentAlignment::MiddleRight,
        }
    }
}

/// Position along one axis of a paragraph layout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum StringAlignment {
    #[default]
    Near,
    Center,
    Far,
}

/// Paragraph-style alignment: `alignment` is horizontal, `line_alignment`
/// vertical.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringFormat {
    pub alignment: StringAlignment,
    pub line_alignment: StringAlignment,
}

impl StringFormat {
    pub const fn new(alignment: StringAlignment, line_alignment: StringAlignment) -> Self {
        Self { alignment, line_alignment }
    }
}

impl From<StringFormat> for ContentAlignment {
    fn from(format: StringFormat) -> Self {
        use ContentAlignment::*;
        use StringAlignment::*;
        match (format.alignment, format.line_alignment) {
            (Near, Near) => TopLeft,
            (Near, Center) => MiddleLeft,
            (Near, Far) => BottomLeft,
            (Center, Near) => TopCenter,
            (Center, Center) => MiddleCenter,
            (Center, Far) => BottomCenter,
            (Far, Near) => TopRight,
            (Far, Center) => MiddleRight,
            (Far, Far) => BottomRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ContentAlignment; 9] = [
        ContentAlignment::TopLeft,
        ContentAlignment::TopCenter,
        ContentAlignment::TopRight,
        ContentAlignment::MiddleLeft,
        ContentAlignment::MiddleCenter,
        ContentAlignment::MiddleRight,
        ContentAlignment::BottomLeft,
        ContentAlignment::BottomCenter,
        ContentAlignment::BottomRight,
    ];

    #[test]
    fn anchor_mapping_is_one_to_one() {
        let anchors: std::collections::HashSet<Anchor> = ALL.iter().map(|a| a.anchor()).collect();
        assert_eq!(anchors.len(), 9);
        assert_eq!(ContentAlignment::MiddleCenter.anchor(), Anchor::MiddleCenter);
        assert_eq!(ContentAlignment::BottomRight.anchor(), Anchor::LowerRight);
    }

    #[test]
    fn bits_decode_back() {
        for a in ALL {
            assert_eq!(ContentAlignment::from_bits(a.bits()), a);
        }
    }

    #[test]
    fn unknown_bits_fall_back_to_top_left() {
        assert_eq!(ContentAlignment::from_bits(0), ContentAlignment::TopLeft);
        assert_eq!(ContentAlignment::from_bits(0x003), ContentAlignment::TopLeft);
    }

    #[test]
    fn horizontal_alignment_is_vertically_centred() {
        assert_eq!(ContentAlignment::from(HorizontalAlignment::Left), ContentAlignment::MiddleLeft);
        assert_eq!(ContentAlignment::from(HorizontalAlignment::Center), ContentAlignment::MiddleCenter);
        assert_eq!(ContentAlignment::from(HorizontalAlignment::Right), ContentAlignment::MiddleRight);
        assert_eq!(HorizontalAlignment::from_i32(7), HorizontalAlignment::Left);
    }

    #[test]
    fn string_format_covers_the_grid() {
        use StringAlignment::*;
        assert_eq!(ContentAlignment::from(StringFormat::default()), ContentAlignment::TopLeft);
        assert_eq!(ContentAlignment::from(StringFormat::new(Center, Center)), ContentAlignment::MiddleCenter);
        assert_eq!(ContentAlignment::from(StringFormat::new(Far, Near)), ContentAlignment::TopRight);
        assert_eq!(ContentAlignment::from(StringFormat::new(Near, Far)), ContentAlignment::BottomLeft);
    }
}
