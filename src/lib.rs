//! Maquette is the core of an interactive 2D annotation workspace for
//! AI-assisted image editing.
//!
//! The crate owns the parts that are hard to get right and easy to test:
//!
//! - A [`Scene`] of typed objects (images, shapes, text, free-hand strokes, a
//!   field-of-view marker) on a fixed 4096x4096 workspace backdrop
//! - Snapshot-based undo/redo through a [`HistoryEngine`]
//! - Deterministic [`classify`](capture::classify) partitioning of objects
//!   into base content, annotation overlay, and style references, with
//!   independent crop regions per derived image
//! - A multi-layer [`capture`](capture::capture_layers) pass that rasterizes
//!   clean / marked / per-reference images through an external
//!   [`RenderSurface`] and restores scene appearance on every exit path
//! - Field-of-view marker geometry and its natural-language embedding
//! - A clause-based [`assemble_prompt`](prompt::assemble_prompt) producing the
//!   structured instruction payload for an external generation relay
//!
//! Rendering, persistence, and the network relay are consumed through the
//! traits in [`render`], [`store`], and [`relay`]; a [`Session`] ties the
//! pieces together and is the surface a UI or test harness drives.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod capture;
pub mod history;
pub mod prompt;
pub mod relay;
pub mod render;
pub mod scene;
pub mod session;
pub mod store;

pub use crate::foundation::core::{
    Affine, AspectRatio, BezPath, ObjectId, Point, Rect, ResolutionTier, Rgba8, Size, Vec2,
};
pub use crate::foundation::error::{MaquetteError, MaquetteResult, RelayError};

pub use crate::capture::{CaptureOpts, CapturedLayers, Classification, capture_layers, classify};
pub use crate::history::HistoryEngine;
pub use crate::prompt::assemble_prompt;
pub use crate::relay::{EncodedImage, GenerationOutcome, GenerationPayload, GenerationRelay};
pub use crate::render::{RasterImage, RenderSurface};
pub use crate::scene::{FovData, FovParams, ObjectKind, Placement, Scene, SceneObject};
pub use crate::session::{GenerationOptions, Session};
