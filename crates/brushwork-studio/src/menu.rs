//! A drop-down menu painted the way toolkit menu items paint themselves.

use brushwork_gdi::prelude::*;

pub const ITEM_HEIGHT: f32 = 24.0;
pub const SEPARATOR_HEIGHT: f32 = 4.0;

const FORE: Color = Color::from_rgb(64, 64, 64);
const BACK: Color = Color::from_rgb(246, 246, 246);
const HOVER: Color = Color::from_argb(64, 200, 200, 200);
const DISABLED_SHIFT: Color = Color::from_argb(0, 100, 100, 100);
const BORDER_SHIFT: Color = Color::from_argb(0, 64, 64, 64);

#[derive(Debug, Clone)]
pub enum Entry {
    Item(MenuItem),
    Separator,
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
    pub shortcut: Option<String>,
    pub checked: bool,
    pub enabled: bool,
    pub hovered: bool,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), shortcut: None, checked: false, enabled: true, hovered: false }
    }

    pub fn shortcut(mut self, keys: impl Into<String>) -> Self {
        self.shortcut = Some(keys.into());
        self
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn hovered(mut self) -> Self {
        self.hovered = true;
        self
    }

    fn paint(&self, g: &mut Graphics<'_>, rect: Rect, font: &Font, check_mark: Option<TextureId>) {
        g.fill_rectangle(BACK, rect);
        if self.enabled && self.hovered {
            let hover = rect.offset_by(Rect::new(2.0, 2.0, -4.0, -4.0));
            g.fill_rectangle(HOVER, hover);
            g.draw_rectangle(&Pen::new(HOVER - BORDER_SHIFT), hover);
        }

        if self.checked {
            let box_size = rect.height() - 8.0;
            let mark_size = rect.height() - 12.0;
            let check_box = Rect::new(rect.x() + 4.0, rect.y() + 4.0, box_size, box_size);
            g.fill_rectangle(HOVER, check_box);
            g.draw_rectangle(&Pen::new(HOVER - BORDER_SHIFT), check_box);
            g.draw_texture(check_mark, Rect::new(rect.x() + 6.0, rect.y() + 6.0, mark_size, mark_size));
        }

        let brush = SolidBrush::new(if self.enabled { FORE } else { FORE + DISABLED_SHIFT });
        let text_rect = Rect::new(rect.x() + 32.0, rect.y(), rect.width() - 32.0, rect.height());
        g.draw_string(&self.text, Some(font), &brush, text_rect, ContentAlignment::MiddleLeft);

        if let Some(keys) = &self.shortcut {
            let keys_rect = Rect::new(rect.max().x - 60.0, rect.y(), 60.0, rect.height());
            let format = StringFormat::new(StringAlignment::Near, StringAlignment::Center);
            g.draw_string(keys, Some(font), &brush, keys_rect, format);
        }
    }
}

/// Vertical drop-down: a bordered panel whose entries paint inside a clip
/// group owned by the panel.
pub struct DropDown {
    pub id: WidgetId,
    pub width: f32,
    pub entries: Vec<Entry>,
}

impl DropDown {
    pub fn height(&self) -> f32 {
        self.entries
            .iter()
            .map(|e| match e {
                Entry::Item(_) => ITEM_HEIGHT,
                Entry::Separator => SEPARATOR_HEIGHT,
            })
            .sum()
    }

    pub fn paint(&self, g: &mut Graphics<'_>, font: &Font, check_mark: Option<TextureId>) {
        let bounds = Rect::new(0.0, 0.0, self.width, self.height() + 2.0);
        g.fill_rectangle(Color::WHITE, bounds);
        g.draw_rectangle(&Pen::new(Color::from_rgb(204, 204, 204)), bounds);

        let inner = Rect::new(1.0, 1.0, self.width - 2.0, self.height());
        g.with_group(self.id, inner, |g| {
            let mut y = 1.0;
            for entry in &self.entries {
                match entry {
                    Entry::Item(item) => {
                        item.paint(g, Rect::new(1.0, y, self.width - 2.0, ITEM_HEIGHT), font, check_mark);
                        y += ITEM_HEIGHT;
                    }
                    Entry::Separator => {
                        let (x0, x1) = (33.0, self.width - 8.0);
                        g.draw_line(&Pen::new(Color::from_rgb(215, 215, 215)), Vec2::new(x0, y + 1.0), Vec2::new(x1, y + 1.0));
                        g.draw_line(&Pen::new(Color::WHITE), Vec2::new(x0, y + 2.0), Vec2::new(x1, y + 2.0));
                        y += SEPARATOR_HEIGHT;
                    }
                }
            }
        });
    }
}

/// The "File" menu used by the demo.
pub fn file_menu(id: WidgetId) -> DropDown {
    DropDown {
        id,
        width: 200.0,
        entries: vec![
            Entry::Item(MenuItem::new("New").shortcut("Ctrl+N")),
            Entry::Item(MenuItem::new("Open...").shortcut("Ctrl+O").hovered()),
            Entry::Item(MenuItem::new("Save").shortcut("Ctrl+S").disabled()),
            Entry::Separator,
            Entry::Item(MenuItem::new("Word wrap").checked()),
            Entry::Separator,
            Entry::Item(MenuItem::new("Exit")),
        ],
    }
}
