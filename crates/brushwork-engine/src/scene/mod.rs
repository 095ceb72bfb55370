//! Recording surface.
//!
//! [`DrawList`] implements [`Surface`](crate::surface::Surface) by storing
//! every primitive it receives, already resolved to absolute screen space
//! and tagged with the clip rectangle and transform in effect. Hosts hand
//! the list to a GPU backend after the paint pass; tests assert on it.

mod cmd;
mod list;

pub use cmd::{BlitCmd, DrawCmd, FieldCmd, LabelCmd, LineCmd, TriangleCmd};
pub use list::{DrawItem, DrawList};
