use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::surface::{Anchor, SkinFont};
use crate::texture::TextureId;

/// Tinted texture stretched over a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct BlitCmd {
    pub rect: Rect,
    pub texture: TextureId,
    pub tint: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: Color,
}

/// Anchored text label with the font settings captured at record time.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCmd {
    pub rect: Rect,
    pub text: String,
    pub anchor: Anchor,
    pub font: SkinFont,
    pub color: Color,
}

/// Editable text control (single-line field or multi-line area).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCmd {
    pub rect: Rect,
    pub text: String,
    pub anchor: Anchor,
    pub font: SkinFont,
    pub color: Color,
    pub mask: Option<char>,
    pub multiline: bool,
}

/// Renderer-agnostic primitive stream, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Blit(BlitCmd),
    Line(LineCmd),
    Triangle(TriangleCmd),
    Label(LabelCmd),
    Field(FieldCmd),
}
