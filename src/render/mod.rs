//! Consumed rendering capability: the crate orchestrates captures, something
//! else pushes pixels.

pub(crate) mod surface;

pub use surface::{RasterImage, RenderSurface};
