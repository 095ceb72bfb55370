use std::fmt;

use image::RgbaImage;

use crate::coords::Vec2;

/// Error returned by [`TextureStore::load_from_memory`].
#[derive(Debug, Clone)]
pub struct TextureLoadError(pub String);

impl fmt::Display for TextureLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture load error: {}", self.0)
    }
}

impl std::error::Error for TextureLoadError {}

/// Opaque handle to a bitmap owned by a [`TextureStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub(crate) u32);

impl TextureId {
    /// Raw index, for surfaces that keep their own per-texture GPU state.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owns decoded RGBA bitmaps.
///
/// Textures are immutable after insertion; handles stay valid for the
/// lifetime of the store.
#[derive(Default)]
pub struct TextureStore {
    images: Vec<RgbaImage>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of an already decoded bitmap.
    pub fn insert(&mut self, image: RgbaImage) -> TextureId {
        let id = TextureId(self.images.len() as u32);
        self.images.push(image);
        id
    }

    /// Decodes an encoded image (PNG, BMP) and stores it as RGBA8.
    pub fn load_from_memory(&mut self, bytes: &[u8]) -> Result<TextureId, TextureLoadError> {
        let decoded = image::load_from_memory(bytes).map_err(|e| TextureLoadError(e.to_string()))?;
        let id = self.insert(decoded.to_rgba8());
        log::debug!("loaded texture {:?} ({}x{})", id, self.images[id.index()].width(), self.images[id.index()].height());
        Ok(id)
    }

    pub fn get(&self, id: TextureId) -> Option<&RgbaImage> {
        self.images.get(id.index())
    }

    /// Pixel size of the bitmap, `None` for a handle from another store.
    pub fn size(&self, id: TextureId) -> Option<Vec2> {
        self.get(id).map(|img| Vec2::new(img.width() as f32, img.height() as f32))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_hands_out_sequential_ids() {
        let mut store = TextureStore::new();
        let a = store.insert(RgbaImage::new(2, 3));
        let b = store.insert(RgbaImage::new(4, 4));
        assert_ne!(a, b);
        assert_eq!(store.size(a), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut store = TextureStore::new();
        assert!(store.load_from_memory(b"not an image").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_id_has_no_size() {
        let store = TextureStore::new();
        assert_eq!(store.size(TextureId(7)), None);
    }
}
