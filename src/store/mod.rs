//! Consumed persistence: workspace autosave and the generated-image gallery.

pub(crate) mod memory;

pub use memory::MemoryStore;

use crate::foundation::core::AspectRatio;
use crate::foundation::error::MaquetteResult;
use crate::relay::EncodedImage;

/// Gallery record identifier.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ImageId(pub u64);

/// Metadata stored alongside a generated image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageMetadata {
    /// Prompt that produced the image.
    pub prompt: String,
    /// Model that produced it.
    pub model: String,
    /// Aspect ratio it was requested at.
    pub aspect_ratio: AspectRatio,
}

/// One gallery entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryRecord {
    /// Store-assigned id.
    pub id: ImageId,
    /// Request metadata.
    pub metadata: ImageMetadata,
    /// The generated image.
    pub image: EncodedImage,
}

/// Workspace autosave storage.
pub trait SceneStore {
    /// Persist the serialized scene, replacing any previous save.
    fn save_scene(&mut self, scene_json: &str) -> MaquetteResult<()>;

    /// Load the last saved scene, if one exists.
    fn load_scene(&mut self) -> MaquetteResult<Option<String>>;
}

/// Generated-image gallery storage.
pub trait GalleryStore {
    /// Store a generated image and return its assigned id.
    fn save_image(&mut self, metadata: ImageMetadata, image: EncodedImage)
    -> MaquetteResult<ImageId>;

    /// All stored records, oldest first.
    fn list_images(&self) -> MaquetteResult<Vec<GalleryRecord>>;

    /// Look up one record.
    fn get_image(&self, id: ImageId) -> MaquetteResult<Option<GalleryRecord>>;

    /// Delete a record. Unknown ids are a no-op.
    fn delete_image(&mut self, id: ImageId) -> MaquetteResult<()>;
}
