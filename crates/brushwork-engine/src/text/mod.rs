//! Font registry keyed by family name.

mod registry;

pub use registry::{DEFAULT_FAMILY, FontId, FontLoadError, FontRegistry};
