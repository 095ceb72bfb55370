use brushwork_engine::paint::Color;

/// Stroke pattern of a [`Pen`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum DashStyle {
    #[default]
    Solid,
    /// Dashes of `6 × width - 2` separated by 2-pixel gaps.
    Dash,
}

/// Stroke styling for outline draws.
///
/// Width must be non-negative; callers clamp before constructing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
    pub dash_style: DashStyle,
}

impl Pen {
    /// 1-pixel solid pen.
    pub const fn new(color: Color) -> Self {
        Self { color, width: 1.0, dash_style: DashStyle::Solid }
    }

    pub fn width(mut self, width: f32) -> Self {
        debug_assert!(width >= 0.0, "pen width must be non-negative, got {width}");
        self.width = width;
        self
    }

    pub fn dash_style(mut self, style: DashStyle) -> Self {
        self.dash_style = style;
        self
    }

    pub fn dashed(self) -> Self {
        self.dash_style(DashStyle::Dash)
    }
}

impl From<Color> for Pen {
    fn from(color: Color) -> Self {
        Pen::new(color)
    }
}

/// Fill color for solid-fill draws.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SolidBrush {
    pub color: Color,
}

impl SolidBrush {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl From<SolidBrush> for Color {
    fn from(brush: SolidBrush) -> Self {
        brush.color
    }
}

impl From<&SolidBrush> for Color {
    fn from(brush: &SolidBrush) -> Self {
        brush.color
    }
}
