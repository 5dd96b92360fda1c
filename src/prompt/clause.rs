use std::fmt::Write as _;

use crate::foundation::core::AspectRatio;
use crate::prompt::REMOVAL_MAGENTA;
use crate::scene::FovData;

/// One independently renderable section of the assembled prompt.
#[derive(Clone, Debug, PartialEq)]
pub enum PromptClause {
    /// The user's free-form edit instruction.
    UserInstruction(String),
    /// "Apply the color." toggle.
    ApplyColor,
    /// Aspect-ratio reinforcement phrase.
    AspectRatio(AspectRatio),
    /// Camera-perspective block, present iff a marker is placed.
    Perspective(FovData),
    /// Style-reference block, present iff reference images exist.
    StyleReferences(usize),
    /// Fixed system footer enumerating the attached images and the editing
    /// rules.
    SystemFooter {
        /// Number of style-reference images attached after the clean and
        /// marked pair.
        reference_count: usize,
    },
}

impl PromptClause {
    /// Render this clause to its prompt text.
    pub fn render(&self) -> String {
        match self {
            Self::UserInstruction(text) => text.clone(),
            Self::ApplyColor => "Apply the color.".to_string(),
            Self::AspectRatio(ratio) => ratio.reinforcement_phrase().to_string(),
            Self::Perspective(fov) => render_perspective(fov),
            Self::StyleReferences(count) => render_style_references(*count),
            Self::SystemFooter { reference_count } => render_footer(*reference_count),
        }
    }
}

fn render_perspective(fov: &FovData) -> String {
    let angle = fov.angle_deg.round() as i64;
    format!(
        "PERSPECTIVE VIEW INSTRUCTION:\n\
         - The instruction overlay contains a CAMERA MARKER with these visual elements:\n\
         \x20 * CYAN CIRCLE: the exact camera/eye position where you are standing\n\
         \x20 * ORANGE ARROW: points in the EXACT DIRECTION you are looking\n\
         \x20 * CYAN CONE: the field-of-view spread ({angle} degrees)\n\
         - Generate a PHOTOREALISTIC INTERIOR PERSPECTIVE VIEW:\n\
         \x20 * Stand at the cyan circle position\n\
         \x20 * Look in the direction the orange arrow points\n\
         \x20 * Match the field of view to the cone angle ({angle} degrees)\n\
         \x20 * Create an immersive eye-level interior view as if you were physically standing there\n\
         - The arrow direction is critical: it shows exactly where the camera is facing\n\
         - Do NOT include the marker graphics (circle, arrow, cone) in the output; they are instructions only"
    )
}

fn render_style_references(count: usize) -> String {
    format!(
        "REFERENCE IMAGES FOR STYLE & FURNITURE:\n\
         - {count} REFERENCE IMAGE(S) are provided alongside the scene.\n\
         - They show the DESIRED STYLE, FURNITURE, MATERIALS, and ATMOSPHERE for the output.\n\
         - Incorporate elements from these reference images:\n\
         \x20 * use similar FURNITURE STYLES (sofas, chairs, tables)\n\
         \x20 * match the MATERIAL FINISHES (wood, marble, fabric, metal)\n\
         \x20 * apply the COLOR PALETTE and LIGHTING MOOD\n\
         - Use them as a visual guide; do not copy their composition."
    )
}

fn render_footer(reference_count: usize) -> String {
    let total = 2 + reference_count;
    let mut out = String::new();
    let _ = write!(
        out,
        "*** SYSTEM INSTRUCTIONS ***\n\
         You are provided with {total} images:\n\
         1. IMAGE 1: the \"Clean\" original scene (base image).\n\
         2. IMAGE 2: the \"Instruction\" layer (arrows, boxes, text labels, magenta brush marks, camera marker) overlaid on the scene."
    );
    for i in 0..reference_count {
        let n = i + 3;
        let _ = write!(
            out,
            "\n{n}. IMAGE {n}: REFERENCE/STYLE IMAGE - use this for furniture, materials, colors, and design inspiration."
        );
    }

    let magenta = REMOVAL_MAGENTA.to_hex_rgb();
    let _ = write!(
        out,
        "\n\nSPECIAL INSTRUCTION - MAGENTA REMOVAL ZONES:\n\
         - Any area marked with BRIGHT MAGENTA (hex code {magenta}) is a region to REMOVE and INTELLIGENTLY FILL IN.\n\
         - Erase the content in those magenta-painted areas.\n\
         - Inpaint naturally from the surrounding context so the result is seamless.\n\
         - Remove all traces of the magenta markings themselves.\n\
         \n\
         ORIENTATION PRESERVATION:\n\
         - When replacing or transforming objects, MAINTAIN the orientation, rotation, and perspective of the original.\n\
         - New elements must align with the spatial direction and angle of what they replace.\n\
         - Respect the existing perspective grid and vanishing points in the scene.\n\
         \n\
         TASK:\n\
         - Apply the edits described by the MARKUPS in Image 2 to the context of Image 1.\n\
         - The output must correspond to the Clean Image with the requested changes applied."
    );
    if reference_count > 0 {
        out.push_str(
            "\n- INCORPORATE the furniture styles, materials, and design aesthetic from the REFERENCE IMAGES.",
        );
    }
    out.push_str(
        "\n- Do NOT include the arrows, boxes, text labels, magenta brush marks, or camera-marker graphics in the final result.\n\
         - The goal is a high-quality, continuous image that looks like the original but edited.",
    );
    out
}
