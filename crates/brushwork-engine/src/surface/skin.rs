use crate::text::FontId;

/// Label placement inside its layout rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// Font style understood by the label subsystem.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldAndItalic,
}

/// Named group of font settings on the surface ("control skin").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SkinBucket {
    Label,
    TextField,
    TextArea,
}

impl SkinBucket {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SkinBucket::Label => 0,
            SkinBucket::TextField => 1,
            SkinBucket::TextArea => 2,
        }
    }
}

/// Font settings of one skin bucket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SkinFont {
    /// `None` selects the surface's built-in font.
    pub family: Option<FontId>,
    /// Whole pixels, as label subsystems size fonts.
    pub size: u32,
    pub style: LabelStyle,
}

impl Default for SkinFont {
    fn default() -> Self {
        Self { family: None, size: 12, style: LabelStyle::Normal }
    }
}
