use image::{Rgba, RgbaImage};

use super::{TextureId, TextureStore};

/// Edge length of the pre-rendered circle sprite.
const CIRCLE_SIZE: u32 = 64;

/// Sprites every drawing facade relies on.
///
/// Created once at startup and shared read-only by all facades.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultAssets {
    /// 1×1 opaque white; tinted and stretched for solid fills and strokes.
    pub white: TextureId,
    /// Anti-aliased disc; stretched to approximate ellipses.
    pub circle: TextureId,
    /// 1×4 white strip with soft top/bottom rows; used for rotated line strokes.
    pub smooth_line: TextureId,
}

impl DefaultAssets {
    pub fn create(store: &mut TextureStore) -> Self {
        let white = store.insert(RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255])));
        let circle = store.insert(circle_sprite(CIRCLE_SIZE));
        let smooth_line = store.insert(RgbaImage::from_fn(1, 4, |_, y| {
            let alpha = if y == 0 || y == 3 { 128 } else { 255 };
            Rgba([255, 255, 255, alpha])
        }));
        log::debug!("default assets created: {white:?} {circle:?} {smooth_line:?}");
        Self { white, circle, smooth_line }
    }
}

/// White disc with a one-pixel coverage ramp at the rim.
fn circle_sprite(size: u32) -> RgbaImage {
    let radius = size as f32 / 2.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        let coverage = (radius - (dx * dx + dy * dy).sqrt() + 0.5).clamp(0.0, 1.0);
        Rgba([255, 255, 255, (coverage * 255.0).round() as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_are_distinct_textures() {
        let mut store = TextureStore::new();
        let assets = DefaultAssets::create(&mut store);
        assert_eq!(store.len(), 3);
        assert_ne!(assets.white, assets.circle);
        assert_eq!(store.get(assets.white).map(|i| i.dimensions()), Some((1, 1)));
    }

    #[test]
    fn circle_is_opaque_in_the_middle_and_clear_in_the_corner() {
        let img = circle_sprite(CIRCLE_SIZE);
        assert_eq!(img.get_pixel(CIRCLE_SIZE / 2, CIRCLE_SIZE / 2)[3], 255);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
    }
}
