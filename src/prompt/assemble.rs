use crate::foundation::core::AspectRatio;
use crate::prompt::clause::PromptClause;
use crate::scene::FovData;

/// Instruction used when the user provides none.
pub const DEFAULT_INSTRUCTION: &str = "Enhance the image and remove visual markers.";

/// Everything the assembler needs to decide which clauses appear.
#[derive(Clone, Debug)]
pub struct PromptInputs<'a> {
    /// Free-form user instruction; blank falls back to
    /// [`DEFAULT_INSTRUCTION`].
    pub user_text: &'a str,
    /// Requested output aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Whether the "apply the color" toggle is on.
    pub apply_color: bool,
    /// Marker viewing data from classification, if a marker is placed.
    pub fov: Option<FovData>,
    /// Number of style-reference images attached to the payload.
    pub reference_count: usize,
}

/// Build the ordered clause list for these inputs.
pub fn clauses(inputs: &PromptInputs<'_>) -> Vec<PromptClause> {
    let instruction = inputs.user_text.trim();
    let instruction = if instruction.is_empty() {
        DEFAULT_INSTRUCTION.to_string()
    } else {
        instruction.to_string()
    };

    let mut out = vec![PromptClause::UserInstruction(instruction)];
    if inputs.apply_color {
        out.push(PromptClause::ApplyColor);
    }
    out.push(PromptClause::AspectRatio(inputs.aspect_ratio));
    if let Some(fov) = inputs.fov {
        out.push(PromptClause::Perspective(fov));
    }
    if inputs.reference_count > 0 {
        out.push(PromptClause::StyleReferences(inputs.reference_count));
    }
    out.push(PromptClause::SystemFooter {
        reference_count: inputs.reference_count,
    });
    out
}

/// Assemble the final prompt text: each clause rendered in order, joined by
/// blank lines. Pure and deterministic - the same inputs always produce the
/// same text.
pub fn assemble_prompt(inputs: &PromptInputs<'_>) -> String {
    clauses(inputs)
        .iter()
        .map(PromptClause::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/assemble.rs"]
mod tests;
