use std::rc::Rc;

use crate::coords::{Affine, Rect, Vec2};
use crate::paint::Color;
use crate::surface::{Anchor, SkinBucket, SkinFont, Surface, SurfaceError};
use crate::text::FontRegistry;
use crate::texture::TextureId;

use super::cmd::{BlitCmd, DrawCmd, FieldCmd, LabelCmd, LineCmd, TriangleCmd};

/// A single recorded primitive plus the ambient state it was drawn under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Absolute scissor rect. `None` = no clipping.
    pub clip_rect: Option<Rect>,
    /// Transform in effect (absolute space).
    pub transform: Affine,
}

impl DrawItem {
    /// Screen-space corners of a blit after the item's transform, clockwise
    /// from the top-left. `None` for non-blit items.
    pub fn blit_corners(&self) -> Option<[Vec2; 4]> {
        let DrawCmd::Blit(blit) = &self.cmd else {
            return None;
        };
        let r = blit.rect;
        let max = r.max();
        Some([
            r.origin,
            Vec2::new(max.x, r.origin.y),
            max,
            Vec2::new(r.origin.x, max.y),
        ]
        .map(|p| self.transform.transform_point(p)))
    }
}

/// One open clip region.
#[derive(Debug, Copy, Clone)]
struct ClipFrame {
    /// Absolute origin subsequent coordinates are relative to.
    origin: Vec2,
    /// Absolute scissor, already intersected with every parent.
    effective: Rect,
}

/// Recorded primitive stream for one paint pass.
///
/// Performance characteristics:
/// - every primitive is O(1) to record
/// - `clear()` keeps allocated capacity for reuse across frames
///
/// # Clipping
///
/// `begin_clip` rects are given in the current clip's coordinate space, as
/// the [`Surface`] contract requires. The list converts them (and every
/// primitive) to absolute space and intersects each clip with its parent,
/// so nested scroll containers record correct scissors.
#[derive(Debug)]
pub struct DrawList {
    items: Vec<DrawItem>,
    clip_stack: Vec<ClipFrame>,
    tint: Color,
    matrix: Affine,
    skin: [SkinFont; 3],
    fonts: Option<Rc<FontRegistry>>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            clip_stack: Vec::new(),
            tint: Color::WHITE,
            matrix: Affine::IDENTITY,
            skin: [SkinFont::default(); 3],
            fonts: None,
        }
    }
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a font registry so [`Surface::calc_size`] measures exactly.
    pub fn with_fonts(mut self, fonts: Rc<FontRegistry>) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Clears recorded items and resets ambient state. Keeps allocated
    /// capacity and the attached font registry.
    pub fn clear(&mut self) {
        if !self.clip_stack.is_empty() {
            log::warn!("DrawList cleared with {} clip region(s) still open", self.clip_stack.len());
        }
        self.items.clear();
        self.clip_stack.clear();
        self.tint = Color::WHITE;
        self.matrix = Affine::IDENTITY;
        self.skin = [SkinFont::default(); 3];
    }

    /// Items in submission order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of currently open clip regions.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Tint that the next blit or label will use.
    #[inline]
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Iterates recorded blits only.
    pub fn blits(&self) -> impl Iterator<Item = &BlitCmd> {
        self.items.iter().filter_map(|item| match &item.cmd {
            DrawCmd::Blit(b) => Some(b),
            _ => None,
        })
    }

    #[inline]
    fn origin(&self) -> Vec2 {
        self.clip_stack.last().map_or(Vec2::zero(), |c| c.origin)
    }

    fn record(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            clip_rect: self.clip_stack.last().map(|c| c.effective),
            transform: self.matrix,
        });
    }
}

impl Surface for DrawList {
    fn begin_clip(&mut self, rect: Rect) {
        let absolute = rect.translate(self.origin());
        let effective = match self.clip_stack.last() {
            None => absolute,
            // No overlap: zero-area scissor so backends skip those items.
            Some(parent) => parent.effective.intersect(absolute).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(ClipFrame { origin: absolute.origin, effective });
    }

    fn end_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "end_clip called without matching begin_clip");
        self.clip_stack.pop();
    }

    fn set_tint(&mut self, color: Color) {
        self.tint = color;
    }

    fn blit(&mut self, rect: Rect, texture: TextureId) -> Result<(), SurfaceError> {
        let rect = rect.translate(self.origin());
        self.record(DrawCmd::Blit(BlitCmd { rect, texture, tint: self.tint }));
        Ok(())
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let o = self.origin();
        self.record(DrawCmd::Line(LineCmd { from: from + o, to: to + o, color }));
    }

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let o = self.origin();
        self.record(DrawCmd::Triangle(TriangleCmd { points: [a + o, b + o, c + o], color }));
    }

    fn label(&mut self, rect: Rect, text: &str, anchor: Anchor) {
        let rect = rect.translate(self.origin());
        self.record(DrawCmd::Label(LabelCmd {
            rect,
            text: text.to_owned(),
            anchor,
            font: self.skin[SkinBucket::Label.index()],
            color: self.tint,
        }));
    }

    fn text_field(&mut self, rect: Rect, text: &str, anchor: Anchor, mask: Option<char>) -> String {
        let rect = rect.translate(self.origin());
        self.record(DrawCmd::Field(FieldCmd {
            rect,
            text: text.to_owned(),
            anchor,
            font: self.skin[SkinBucket::TextField.index()],
            color: self.tint,
            mask,
            multiline: false,
        }));
        text.to_owned()
    }

    fn text_area(&mut self, rect: Rect, text: &str) -> String {
        let rect = rect.translate(self.origin());
        self.record(DrawCmd::Field(FieldCmd {
            rect,
            text: text.to_owned(),
            anchor: Anchor::UpperLeft,
            font: self.skin[SkinBucket::TextArea.index()],
            color: self.tint,
            mask: None,
            multiline: true,
        }));
        text.to_owned()
    }

    fn matrix(&self) -> Affine {
        self.matrix
    }

    fn set_matrix(&mut self, matrix: Affine) {
        self.matrix = matrix;
    }

    fn rotate_around_pivot(&mut self, degrees: f32, pivot: Vec2) {
        let pivot = pivot + self.origin();
        self.matrix = Affine::rotation_about(pivot, degrees) * self.matrix;
    }

    fn skin_font(&self, bucket: SkinBucket) -> SkinFont {
        self.skin[bucket.index()]
    }

    fn set_skin_font(&mut self, bucket: SkinBucket, font: SkinFont) {
        self.skin[bucket.index()] = font;
    }

    fn calc_size(&self, bucket: SkinBucket, text: &str) -> Vec2 {
        let font = self.skin[bucket.index()];
        let size = font.size as f32;
        match (&self.fonts, font.family) {
            (Some(fonts), Some(id)) => fonts.measure(text, id, size),
            // Built-in font: average advance of roughly half an em.
            _ => Vec2::new(text.chars().count() as f32 * size * 0.5, size * 1.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureStore;

    fn tex() -> TextureId {
        let mut store = TextureStore::new();
        store.insert(image::RgbaImage::new(1, 1))
    }

    // ── coordinates ───────────────────────────────────────────────────────

    #[test]
    fn blit_outside_clip_is_absolute() {
        let mut list = DrawList::new();
        list.blit(Rect::new(5.0, 6.0, 7.0, 8.0), tex()).unwrap();
        assert_eq!(list.blits().next().map(|b| b.rect), Some(Rect::new(5.0, 6.0, 7.0, 8.0)));
        assert_eq!(list.items()[0].clip_rect, None);
    }

    #[test]
    fn clip_translates_children() {
        let mut list = DrawList::new();
        list.begin_clip(Rect::new(100.0, 50.0, 200.0, 100.0));
        list.line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Color::BLACK);
        list.end_clip();
        let DrawCmd::Line(line) = &list.items()[0].cmd else { panic!("expected line") };
        assert_eq!(line.from, Vec2::new(100.0, 50.0));
        assert_eq!(line.to, Vec2::new(110.0, 50.0));
    }

    #[test]
    fn nested_clips_compose_origins_and_intersect() {
        let mut list = DrawList::new();
        list.begin_clip(Rect::new(10.0, 10.0, 100.0, 100.0));
        list.begin_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        list.blit(Rect::new(0.0, 0.0, 1.0, 1.0), tex()).unwrap();
        assert_eq!(list.clip_depth(), 2);
        let item = &list.items()[0];
        assert_eq!(item.clip_rect, Some(Rect::new(60.0, 60.0, 50.0, 50.0)));
        assert_eq!(list.blits().next().map(|b| b.rect.origin), Some(Vec2::new(60.0, 60.0)));
        list.end_clip();
        list.end_clip();
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn disjoint_nested_clip_is_zero_area() {
        let mut list = DrawList::new();
        list.begin_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.begin_clip(Rect::new(20.0, 20.0, 10.0, 10.0));
        list.triangle(Vec2::zero(), Vec2::zero(), Vec2::zero(), Color::RED);
        assert_eq!(list.items()[0].clip_rect.map(|r| r.is_empty()), Some(true));
    }

    // ── ambient state ─────────────────────────────────────────────────────

    #[test]
    fn blit_captures_current_tint() {
        let mut list = DrawList::new();
        list.set_tint(Color::RED);
        list.blit(Rect::new(0.0, 0.0, 1.0, 1.0), tex()).unwrap();
        assert_eq!(list.blits().next().map(|b| b.tint), Some(Color::RED));
    }

    #[test]
    fn rotation_pivot_is_unclipped() {
        let mut list = DrawList::new();
        list.begin_clip(Rect::new(10.0, 0.0, 100.0, 100.0));
        list.rotate_around_pivot(90.0, Vec2::new(5.0, 5.0));
        let absolute_pivot = Vec2::new(15.0, 5.0);
        let moved = list.matrix().transform_point(absolute_pivot);
        assert!((moved.x - 15.0).abs() < 1e-4 && (moved.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn label_records_bucket_font() {
        let mut list = DrawList::new();
        let font = SkinFont { family: None, size: 20, style: crate::surface::LabelStyle::Bold };
        list.set_skin_font(SkinBucket::Label, font);
        list.label(Rect::new(0.0, 0.0, 50.0, 20.0), "hi", Anchor::MiddleCenter);
        let DrawCmd::Label(label) = &list.items()[0].cmd else { panic!("expected label") };
        assert_eq!(label.font, font);
        assert_eq!(label.anchor, Anchor::MiddleCenter);
        assert_eq!(list.skin_font(SkinBucket::TextField), SkinFont::default());
    }

    #[test]
    fn builtin_font_size_is_approximated() {
        let list = DrawList::new();
        let size = list.calc_size(SkinBucket::Label, "abcd");
        assert_eq!(size.x, 4.0 * 12.0 * 0.5);
    }

    #[test]
    fn attached_registry_measures_with_the_bucket_font() {
        let mut fonts = FontRegistry::new();
        let id = fonts
            .load_font(crate::text::DEFAULT_FAMILY, include_bytes!("../../../../assets/fonts/DejaVuSansMono.ttf"))
            .unwrap();
        let fonts = Rc::new(fonts);
        let mut list = DrawList::new().with_fonts(Rc::clone(&fonts));
        list.set_skin_font(SkinBucket::Label, SkinFont { family: Some(id), size: 24, ..SkinFont::default() });

        let size = list.calc_size(SkinBucket::Label, "Open");
        assert!(size.x > 0.0);
        assert_eq!(size, fonts.measure("Open", id, 24.0));
        assert_ne!(size.x, 4.0 * 24.0 * 0.5);
        // Other buckets still use the built-in approximation.
        assert_eq!(list.calc_size(SkinBucket::TextField, "Open").x, 4.0 * 12.0 * 0.5);
    }

    #[test]
    fn clear_resets_state() {
        let mut list = DrawList::new();
        list.set_tint(Color::RED);
        list.rotate_around_pivot(45.0, Vec2::zero());
        list.line(Vec2::zero(), Vec2::new(1.0, 1.0), Color::RED);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.tint(), Color::WHITE);
        assert!(list.matrix().is_identity());
    }

    #[test]
    fn blit_corners_follow_transform() {
        let mut list = DrawList::new();
        list.rotate_around_pivot(180.0, Vec2::new(5.0, 5.0));
        list.blit(Rect::new(0.0, 0.0, 10.0, 10.0), tex()).unwrap();
        let corners = list.items()[0].blit_corners().unwrap();
        assert!((corners[0].x - 10.0).abs() < 1e-4 && (corners[0].y - 10.0).abs() < 1e-4);
    }
}
