//! Structured prompt assembly for the generation relay.
//!
//! The prompt is an ordered list of optional clauses, each independently
//! renderable, joined deterministically at the end. Which clauses appear is
//! decided entirely by classification results and user options, never by
//! string inspection.

pub(crate) mod assemble;
pub(crate) mod clause;

pub use assemble::{DEFAULT_INSTRUCTION, PromptInputs, assemble_prompt};
pub use clause::PromptClause;

use crate::foundation::core::Rgba8;

/// Brush color reserved for erase-and-inpaint regions. The assembled prompt
/// names this exact hex value, so the annotation tools and the prompt must
/// agree on it.
pub const REMOVAL_MAGENTA: Rgba8 = Rgba8::rgb(0xFF, 0x00, 0xFF);
