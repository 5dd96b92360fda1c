use crate::foundation::core::{ObjectId, Rect};
use crate::foundation::error::{MaquetteError, MaquetteResult};
use crate::scene::{FovData, Scene, SceneObject, bounding_box_of, fov_data};

/// Deterministic partition of the scene into capture roles, with the crop
/// region for each derived image.
///
/// `clean_bbox` and `marked_bbox` are deliberately different regions: the
/// clean capture crops tightly to the base imagery, the marked capture crops
/// to everything so no annotation is clipped.
#[derive(Clone, Debug)]
pub struct Classification {
    /// Objects rendered into the clean image, in z-order.
    pub content: Vec<ObjectId>,
    /// Style reference images, in z-order (encounter order of the capture).
    pub references: Vec<ObjectId>,
    /// Whether any image carries an explicit base tag.
    pub has_tagged_base: bool,
    /// Crop region of the clean capture (content set only).
    pub clean_bbox: Rect,
    /// Crop region of the marked capture (all non-workspace objects).
    pub marked_bbox: Rect,
    /// Viewing data of the placed marker, if any.
    pub fov: Option<FovData>,
}

/// Partition the live object set into base content, style references, and
/// marker data, and compute the two crop regions.
///
/// Rules, in order:
///
/// 1. With at least one tagged base image, content is exactly the tagged
///    images and every untagged image is a reference.
/// 2. With no tags, every image counts as base content; if two or more
///    images exist, the single largest by rendered area is the implicit base
///    and the rest double as references (ties keep insertion order, a single
///    image yields zero references).
/// 3. An empty scene and an imageless scene fail with distinct user-input
///    errors; neither starts a capture.
#[tracing::instrument(skip(scene))]
pub fn classify(scene: &Scene) -> MaquetteResult<Classification> {
    let all: Vec<&SceneObject> = scene.non_workspace_objects().collect();
    if all.is_empty() {
        return Err(MaquetteError::EmptyScene);
    }

    let has_tagged_base = all.iter().any(|o| o.is_base_image());

    let content_objects: Vec<&SceneObject> = all
        .iter()
        .copied()
        .filter(|o| {
            if has_tagged_base {
                o.is_base_image()
            } else {
                o.is_image()
            }
        })
        .collect();
    if content_objects.is_empty() {
        return Err(MaquetteError::EmptyBase);
    }

    let references: Vec<ObjectId> = if has_tagged_base {
        all.iter()
            .filter(|o| o.is_image() && !o.is_base_image())
            .map(|o| o.id())
            .collect()
    } else {
        let images: Vec<&SceneObject> = all.iter().copied().filter(|o| o.is_image()).collect();
        if images.len() <= 1 {
            Vec::new()
        } else {
            // Largest rendered area wins; the first encountered wins ties.
            let implicit_base = images
                .iter()
                .copied()
                .reduce(|best, candidate| {
                    if candidate.rendered_area() > best.rendered_area() {
                        candidate
                    } else {
                        best
                    }
                })
                .map(SceneObject::id);
            images
                .iter()
                .filter(|o| Some(o.id()) != implicit_base)
                .map(|o| o.id())
                .collect()
        }
    };

    let clean_bbox = bounding_box_of(content_objects.iter().copied())?;
    let marked_bbox = bounding_box_of(all.iter().copied())?;

    tracing::debug!(
        content = content_objects.len(),
        references = references.len(),
        has_tagged_base,
        "classified scene"
    );

    Ok(Classification {
        content: content_objects.iter().map(|o| o.id()).collect(),
        references,
        has_tagged_base,
        clean_bbox,
        marked_bbox,
        fov: scene.fov_marker().and_then(fov_data),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/capture/classify.rs"]
mod tests;
