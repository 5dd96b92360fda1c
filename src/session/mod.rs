//! The session: one scene, its history, and at most one pending generation.

use crate::capture::{CaptureOpts, capture_layers, classify};
use crate::foundation::core::{ObjectId, Point, Size};
use crate::foundation::error::{MaquetteError, MaquetteResult};
use crate::history::HistoryEngine;
use crate::prompt::{PromptInputs, assemble_prompt};
use crate::relay::{
    DEFAULT_MODEL_ID, EncodedImage, GenerationOutcome, GenerationPayload, GenerationRelay,
    JPEG_QUALITY_CONTEXT, JPEG_QUALITY_REFERENCE,
};
use crate::render::RenderSurface;
use crate::scene::{FovParams, Placement, Scene, SceneObject};
use crate::store::{GalleryStore, ImageMetadata, SceneStore};
use crate::{AspectRatio, ResolutionTier};

/// User-facing knobs of one generation request.
#[derive(Clone, Debug)]
pub struct GenerationOptions {
    /// Free-form edit instruction; blank falls back to the default.
    pub instruction: String,
    /// Target model id.
    pub model_id: String,
    /// Requested output aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Requested output resolution tier.
    pub resolution: ResolutionTier,
    /// Whether the "apply the color" toggle is on.
    pub apply_color: bool,
    /// A manually supplied style reference appended after the captured ones.
    pub extra_reference: Option<EncodedImage>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            instruction: String::new(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            aspect_ratio: AspectRatio::default(),
            resolution: ResolutionTier::default(),
            apply_color: false,
            extra_reference: None,
        }
    }
}

/// Owns the scene, its history, and the pending payload, and exposes the
/// operations a UI or test harness drives.
///
/// Every mutation going through the session is committed to history; the
/// capture pass and undo/redo restores are not (capture only toggles
/// transient appearance, restores *are* history movement). A second
/// `prepare_generation` while a payload is pending is rejected, keeping
/// generation single-flight.
#[derive(Debug)]
pub struct Session {
    scene: Scene,
    history: HistoryEngine,
    pending: Option<GenerationPayload>,
}

impl Session {
    /// A fresh session over an empty workspace, with the initial state
    /// recorded as the first snapshot.
    pub fn new() -> MaquetteResult<Self> {
        Self::with_scene(Scene::new())
    }

    /// A session over a restored scene (see [`Session::load`]).
    pub fn with_scene(scene: Scene) -> MaquetteResult<Self> {
        let mut history = HistoryEngine::new();
        history.record(&scene)?;
        Ok(Self {
            scene,
            history,
            pending: None,
        })
    }

    /// Restore the autosaved scene from `store`, or start fresh if none is
    /// saved.
    pub fn load(store: &mut dyn SceneStore) -> MaquetteResult<Self> {
        let scene = match store.load_scene()? {
            Some(json) => Scene::from_json(&json)?,
            None => Scene::new(),
        };
        Self::with_scene(scene)
    }

    /// Autosave the current scene into `store`.
    pub fn save(&self, store: &mut dyn SceneStore) -> MaquetteResult<()> {
        store.save_scene(&self.scene.to_json()?)
    }

    /// The live scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The undo/redo log.
    pub fn history(&self) -> &HistoryEngine {
        &self.history
    }

    fn commit(&mut self) -> MaquetteResult<()> {
        self.history.record(&self.scene)
    }

    // --- committed scene mutations ---

    /// Add an object and record the result.
    pub fn add_object(&mut self, object: SceneObject) -> MaquetteResult<ObjectId> {
        let id = self.scene.add_object(object)?;
        self.commit()?;
        Ok(id)
    }

    /// Remove an object and record the result. Removing nothing (unknown id,
    /// the workspace) records nothing.
    pub fn remove_object(&mut self, id: ObjectId) -> MaquetteResult<bool> {
        let removed = self.scene.remove_object(id);
        if removed {
            self.commit()?;
        }
        Ok(removed)
    }

    /// Remove all content (workspace stays) and record the result.
    pub fn clear_content(&mut self) -> MaquetteResult<()> {
        self.scene.clear_content();
        self.commit()
    }

    /// Tag or untag an image as base content and record the result.
    pub fn set_base_tag(&mut self, id: ObjectId, tagged: bool) -> MaquetteResult<()> {
        self.scene.set_base_tag(id, tagged)?;
        self.commit()
    }

    /// Move/rotate/scale an object and record the result.
    pub fn set_placement(&mut self, id: ObjectId, placement: Placement) -> MaquetteResult<()> {
        self.scene.set_placement(id, placement)?;
        self.commit()
    }

    /// Duplicate an object at a fixed offset and record the result.
    pub fn duplicate_object(&mut self, id: ObjectId) -> MaquetteResult<ObjectId> {
        let copy = self.scene.duplicate(id)?;
        self.commit()?;
        Ok(copy)
    }

    /// Move an object one step up the z-order and record the result.
    pub fn bring_forward(&mut self, id: ObjectId) -> MaquetteResult<()> {
        self.scene.bring_forward(id)?;
        self.commit()
    }

    /// Move an object one step down the z-order and record the result.
    pub fn send_backwards(&mut self, id: ObjectId) -> MaquetteResult<()> {
        self.scene.send_backwards(id)?;
        self.commit()
    }

    /// Move an object to the top of the z-order and record the result.
    pub fn bring_to_front(&mut self, id: ObjectId) -> MaquetteResult<()> {
        self.scene.bring_to_front(id)?;
        self.commit()
    }

    /// Move an object just above the workspace and record the result.
    pub fn send_to_back(&mut self, id: ObjectId) -> MaquetteResult<()> {
        self.scene.send_to_back(id)?;
        self.commit()
    }

    /// Place the field-of-view marker (evicting any existing one) and record
    /// the result.
    pub fn place_fov_marker(
        &mut self,
        position: Point,
        params: FovParams,
    ) -> MaquetteResult<ObjectId> {
        let marker = SceneObject::fov_marker(params, Placement::at(position))?;
        let id = self.scene.add_object(marker)?;
        self.commit()?;
        Ok(id)
    }

    /// Rebuild the marker with new parameters at its current placement and
    /// record the result. Returns `false` (recording nothing) when no marker
    /// is placed.
    pub fn set_fov_parameters(&mut self, params: FovParams) -> MaquetteResult<bool> {
        let changed = self.scene.set_fov_parameters(params)?;
        if changed {
            self.commit()?;
        }
        Ok(changed)
    }

    /// Record the current scene explicitly (batched edits such as nudge
    /// sequences commit once through this).
    pub fn record_history(&mut self) -> MaquetteResult<()> {
        self.commit()
    }

    /// Step history back. `Ok(false)` when already at the earliest snapshot.
    pub fn undo(&mut self) -> MaquetteResult<bool> {
        self.history.undo(&mut self.scene)
    }

    /// Step history forward. `Ok(false)` when already at the newest
    /// snapshot.
    pub fn redo(&mut self) -> MaquetteResult<bool> {
        self.history.redo(&mut self.scene)
    }

    // --- generation ---

    /// Classify the scene, run the capture pass, assemble the prompt, and
    /// stage the payload for dispatch.
    ///
    /// Fails without touching the scene when the canvas is empty or no base
    /// content exists, and rejects a second call while a payload is already
    /// pending.
    #[tracing::instrument(skip(self, surface, opts))]
    pub fn prepare_generation(
        &mut self,
        surface: &mut dyn RenderSurface,
        opts: &GenerationOptions,
    ) -> MaquetteResult<&GenerationPayload> {
        if self.pending.is_some() {
            return Err(MaquetteError::validation(
                "a generation request is already in flight",
            ));
        }

        let classification = classify(&self.scene)?;
        let layers = capture_layers(
            &mut self.scene,
            surface,
            &classification,
            &CaptureOpts::default(),
        )?;

        let clean = EncodedImage::jpeg_from_raster(&layers.clean, JPEG_QUALITY_CONTEXT)?;
        let marked = EncodedImage::jpeg_from_raster(&layers.marked, JPEG_QUALITY_CONTEXT)?;
        let mut references = layers
            .references
            .iter()
            .map(|r| EncodedImage::jpeg_from_raster(r, JPEG_QUALITY_REFERENCE))
            .collect::<MaquetteResult<Vec<_>>>()?;
        if let Some(extra) = &opts.extra_reference {
            references.push(extra.clone());
        }

        let prompt = assemble_prompt(&PromptInputs {
            user_text: &opts.instruction,
            aspect_ratio: opts.aspect_ratio,
            apply_color: opts.apply_color,
            fov: classification.fov,
            reference_count: references.len(),
        });

        tracing::debug!(
            references = references.len(),
            model = %opts.model_id,
            "generation payload prepared"
        );

        Ok(self.pending.insert(GenerationPayload {
            prompt,
            clean,
            marked,
            references,
            model_id: opts.model_id.clone(),
            aspect_ratio: opts.aspect_ratio,
            resolution: opts.resolution,
        }))
    }

    /// The staged payload, if any.
    pub fn pending_payload(&self) -> Option<&GenerationPayload> {
        self.pending.as_ref()
    }

    /// Discard the staged payload before dispatch. Returns whether one was
    /// pending.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Submit the staged payload to the relay.
    ///
    /// The payload is consumed regardless of outcome - a failed request is
    /// never retried with stale captures. An image result is stored into
    /// `gallery` when one is provided.
    #[tracing::instrument(skip(self, relay, gallery))]
    pub fn dispatch(
        &mut self,
        relay: &mut dyn GenerationRelay,
        gallery: Option<&mut dyn GalleryStore>,
    ) -> MaquetteResult<GenerationOutcome> {
        let payload = self
            .pending
            .take()
            .ok_or_else(|| MaquetteError::validation("no generation is pending"))?;

        let outcome = relay.submit(&payload)?;
        if let (GenerationOutcome::Image(image), Some(gallery)) = (&outcome, gallery) {
            gallery.save_image(
                ImageMetadata {
                    prompt: payload.prompt.clone(),
                    model: payload.model_id.clone(),
                    aspect_ratio: payload.aspect_ratio,
                },
                image.clone(),
            )?;
        }
        Ok(outcome)
    }

    /// Place a generated result back onto the workspace as a new image at
    /// the workspace center, recording the result.
    pub fn place_generated_image(
        &mut self,
        source: impl Into<String>,
        size: Size,
    ) -> MaquetteResult<ObjectId> {
        let center = self
            .scene
            .workspace()
            .map(|w| w.placement.position)
            .unwrap_or(Point::ZERO);
        let image = SceneObject::image(source, size, Placement::at(center))?;
        self.add_object(image)
    }
}
