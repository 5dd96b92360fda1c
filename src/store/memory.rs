use crate::foundation::error::MaquetteResult;
use crate::relay::EncodedImage;
use crate::store::{GalleryRecord, GalleryStore, ImageId, ImageMetadata, SceneStore};

/// In-memory store backing both persistence traits.
///
/// Useful for tests and for embedding without a durable backend; nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    scene: Option<String>,
    records: Vec<GalleryRecord>,
    next_id: u64,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneStore for MemoryStore {
    fn save_scene(&mut self, scene_json: &str) -> MaquetteResult<()> {
        self.scene = Some(scene_json.to_string());
        Ok(())
    }

    fn load_scene(&mut self) -> MaquetteResult<Option<String>> {
        Ok(self.scene.clone())
    }
}

impl GalleryStore for MemoryStore {
    fn save_image(
        &mut self,
        metadata: ImageMetadata,
        image: EncodedImage,
    ) -> MaquetteResult<ImageId> {
        self.next_id += 1;
        let id = ImageId(self.next_id);
        self.records.push(GalleryRecord {
            id,
            metadata,
            image,
        });
        Ok(id)
    }

    fn list_images(&self) -> MaquetteResult<Vec<GalleryRecord>> {
        Ok(self.records.clone())
    }

    fn get_image(&self, id: ImageId) -> MaquetteResult<Option<GalleryRecord>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }

    fn delete_image(&mut self, id: ImageId) -> MaquetteResult<()> {
        self.records.retain(|r| r.id != id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/memory.rs"]
mod tests;
