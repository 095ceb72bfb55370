//! The painting-surface contract.
//!
//! A [`Surface`] only understands screen-space primitives: tinted texture
//! blits, colored lines and triangles, anchored labels and a couple of
//! editable text controls. It keeps three pieces of ambient state the
//! drawing facade manipulates around each call:
//!
//! - the current tint, overwritten before every blit and label,
//! - the transform matrix, which stacks multiplicatively and therefore has
//!   to be saved and restored by whoever rotates it,
//! - per-bucket font settings ("skin"), overridden for the duration of a
//!   text draw and then restored.
//!
//! Clip regions nest natively: coordinates passed between `begin_clip` and
//! the matching `end_clip` are relative to the clip rectangle's origin.

mod error;
mod skin;

pub use error::SurfaceError;
pub use skin::{Anchor, LabelStyle, SkinBucket, SkinFont};

use crate::coords::{Affine, Rect, Vec2};
use crate::paint::Color;
use crate::texture::TextureId;

pub trait Surface {
    /// Opens a clip region. `rect` is expressed in the current (possibly
    /// already clipped) coordinate space; subsequent coordinates become
    /// relative to `rect.origin`.
    fn begin_clip(&mut self, rect: Rect);

    /// Closes the innermost clip region.
    fn end_clip(&mut self);

    /// Sets the tint applied to subsequent blits and labels.
    fn set_tint(&mut self, color: Color);

    /// Stretches `texture` over `rect`, multiplied by the current tint.
    fn blit(&mut self, rect: Rect, texture: TextureId) -> Result<(), SurfaceError>;

    /// 1px line primitive.
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// Solid triangle primitive.
    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);

    /// Single-line label drawn with the [`SkinBucket::Label`] font settings
    /// and the current tint.
    fn label(&mut self, rect: Rect, text: &str, anchor: Anchor);

    /// Editable single-line field using the [`SkinBucket::TextField`] font.
    /// When `mask` is set every character is displayed as `mask`.
    /// Returns the (possibly edited) text.
    fn text_field(&mut self, rect: Rect, text: &str, anchor: Anchor, mask: Option<char>) -> String;

    /// Editable multi-line area using the [`SkinBucket::TextArea`] font.
    fn text_area(&mut self, rect: Rect, text: &str) -> String;

    /// Current transform.
    fn matrix(&self) -> Affine;

    /// Replaces the current transform.
    fn set_matrix(&mut self, matrix: Affine);

    /// Stacks a rotation of `degrees` about `pivot` (current coordinate
    /// space) on top of the current transform.
    fn rotate_around_pivot(&mut self, degrees: f32, pivot: Vec2);

    fn skin_font(&self, bucket: SkinBucket) -> SkinFont;

    fn set_skin_font(&mut self, bucket: SkinBucket, font: SkinFont);

    /// Size `text` would occupy when drawn with the bucket's current font.
    fn calc_size(&self, bucket: SkinBucket, text: &str) -> Vec2;
}
