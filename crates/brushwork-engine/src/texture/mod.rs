//! Texture handles and the bitmaps behind them.
//!
//! Bitmaps are loaded once by the host and referenced read-only while
//! painting. Draw calls only ever carry a [`TextureId`].

mod assets;
mod store;

pub use assets::DefaultAssets;
pub use store::{TextureId, TextureLoadError, TextureStore};
