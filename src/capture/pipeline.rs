use smallvec::SmallVec;

use crate::capture::classify::Classification;
use crate::foundation::core::{ObjectId, Rect};
use crate::foundation::error::{MaquetteError, MaquetteResult};
use crate::render::{RasterImage, RenderSurface};
use crate::scene::{OutlineStyle, Scene};

/// Target long-side resolution of the clean and marked captures.
pub const CONTEXT_TARGET_SIZE: f64 = 4096.0;
/// Target long-side resolution of per-reference captures.
pub const REFERENCE_TARGET_SIZE: f64 = 2048.0;
/// References are never upscaled past this factor.
pub const REFERENCE_MAX_UPSCALE: f64 = 2.0;

/// Capture resolution knobs. Defaults match the generation service's input
/// expectations.
#[derive(Clone, Copy, Debug)]
pub struct CaptureOpts {
    /// Long-side target of the clean and marked captures.
    pub context_target: f64,
    /// Long-side target of each reference capture.
    pub reference_target: f64,
}

impl Default for CaptureOpts {
    fn default() -> Self {
        Self {
            context_target: CONTEXT_TARGET_SIZE,
            reference_target: REFERENCE_TARGET_SIZE,
        }
    }
}

/// The three categories of rasterized output of one capture pass.
#[derive(Clone, Debug)]
pub struct CapturedLayers {
    /// Base content only, indicator outlines stripped, cropped to the
    /// content bounding box.
    pub clean: RasterImage,
    /// Everything visible, cropped to the full annotation bounding box.
    pub marked: RasterImage,
    /// One capture per style reference, in classification order.
    pub references: Vec<RasterImage>,
}

/// Pre-capture appearance of every non-workspace object.
struct SavedAppearance {
    entries: SmallVec<[(ObjectId, bool, Option<OutlineStyle>); 8]>,
}

impl SavedAppearance {
    fn capture(scene: &Scene) -> Self {
        Self {
            entries: scene
                .non_workspace_objects()
                .map(|o| (o.id(), o.visible, o.outline))
                .collect(),
        }
    }

    fn restore(&self, scene: &mut Scene) {
        for (id, visible, outline) in &self.entries {
            if let Some(object) = scene.object_mut(*id) {
                object.visible = *visible;
                object.outline = *outline;
            }
        }
    }
}

/// Produce the clean, marked, and per-reference captures for a classified
/// scene.
///
/// Capture is read-only with respect to scene membership: no object is added
/// or removed, only visibility and indicator styling are toggled, and both
/// are restored on every exit path before an error propagates. The caller
/// must not start a second pass (or edit the scene) until this returns.
#[tracing::instrument(skip(scene, surface, classification))]
pub fn capture_layers(
    scene: &mut Scene,
    surface: &mut dyn RenderSurface,
    classification: &Classification,
    opts: &CaptureOpts,
) -> MaquetteResult<CapturedLayers> {
    let saved = SavedAppearance::capture(scene);
    let result = run_capture(scene, surface, classification, opts, &saved);
    saved.restore(scene);
    match result {
        Ok(layers) => {
            surface.render(scene)?;
            Ok(layers)
        }
        Err(err) => {
            // Leave the viewport consistent, but report the capture failure.
            if let Err(render_err) = surface.render(scene) {
                tracing::warn!(%render_err, "restore render failed after capture error");
            }
            Err(err)
        }
    }
}

fn run_capture(
    scene: &mut Scene,
    surface: &mut dyn RenderSurface,
    classification: &Classification,
    opts: &CaptureOpts,
    saved: &SavedAppearance,
) -> MaquetteResult<CapturedLayers> {
    // Clean pass: only content visible, indicator outlines stripped so the
    // base-tag affordance never leaks into the output.
    for (id, _, _) in &saved.entries {
        let in_content = classification.content.contains(id);
        if let Some(object) = scene.object_mut(*id) {
            object.visible = in_content;
            if in_content {
                object.outline = None;
            }
        }
    }
    surface.render(scene)?;
    let clean = surface.rasterize(
        scene,
        classification.clean_bbox,
        context_scale(classification.clean_bbox, opts.context_target)?,
    )?;

    // Marked pass: original visibility and styling, annotations included.
    saved.restore(scene);
    surface.render(scene)?;
    let marked = surface.rasterize(
        scene,
        classification.marked_bbox,
        context_scale(classification.marked_bbox, opts.context_target)?,
    )?;

    // Reference passes: one object at a time against the backdrop.
    let mut references = Vec::with_capacity(classification.references.len());
    if !classification.references.is_empty() {
        for (id, _, _) in &saved.entries {
            if let Some(object) = scene.object_mut(*id) {
                object.visible = false;
            }
        }
        for id in &classification.references {
            let region = {
                let object = scene.object_mut(*id).ok_or_else(|| {
                    MaquetteError::capture("reference object vanished mid-capture")
                })?;
                object.visible = true;
                object.bounding_rect()
            };
            surface.render(scene)?;
            references.push(surface.rasterize(scene, region, reference_scale(region, opts)?)?);
            if let Some(object) = scene.object_mut(*id) {
                object.visible = false;
            }
        }
    }

    Ok(CapturedLayers {
        clean,
        marked,
        references,
    })
}

fn long_side(region: Rect) -> MaquetteResult<f64> {
    let side = region.width().max(region.height());
    if !side.is_finite() || side <= 0.0 {
        return Err(MaquetteError::capture("capture region has no extent"));
    }
    Ok(side)
}

fn context_scale(region: Rect, target: f64) -> MaquetteResult<f64> {
    Ok(target / long_side(region)?)
}

fn reference_scale(region: Rect, opts: &CaptureOpts) -> MaquetteResult<f64> {
    Ok((opts.reference_target / long_side(region)?).min(REFERENCE_MAX_UPSCALE))
}

#[cfg(test)]
#[path = "../../tests/unit/capture/pipeline.rs"]
mod tests;
