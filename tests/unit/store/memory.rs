use super::*;
use crate::foundation::core::AspectRatio;

fn meta(prompt: &str) -> ImageMetadata {
    ImageMetadata {
        prompt: prompt.to_string(),
        model: "gemini-3-pro-image-preview".to_string(),
        aspect_ratio: AspectRatio::Square,
    }
}

fn jpeg_bytes() -> EncodedImage {
    EncodedImage::from_encoded("image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xD9])
}

#[test]
fn scene_autosave_roundtrips() {
    let mut store = MemoryStore::new();
    assert!(store.load_scene().unwrap().is_none());
    store.save_scene("{\"objects\":[]}").unwrap();
    assert_eq!(store.load_scene().unwrap().as_deref(), Some("{\"objects\":[]}"));
}

#[test]
fn gallery_assigns_distinct_ids_and_lists_oldest_first() {
    let mut store = MemoryStore::new();
    let a = store.save_image(meta("first"), jpeg_bytes()).unwrap();
    let b = store.save_image(meta("second"), jpeg_bytes()).unwrap();
    assert_ne!(a, b);

    let records = store.list_images().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].metadata.prompt, "first");
    assert_eq!(records[1].metadata.prompt, "second");
}

#[test]
fn get_and_delete_by_id() {
    let mut store = MemoryStore::new();
    let id = store.save_image(meta("keep"), jpeg_bytes()).unwrap();
    assert!(store.get_image(id).unwrap().is_some());

    store.delete_image(id).unwrap();
    assert!(store.get_image(id).unwrap().is_none());
    assert!(store.list_images().unwrap().is_empty());

    // Deleting again is a no-op.
    store.delete_image(id).unwrap();
}
