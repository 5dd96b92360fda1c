use crate::foundation::error::{MaquetteError, MaquetteResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Stable per-scene object identifier.
///
/// Ids are allocated by the owning [`Scene`](crate::Scene) and are never
/// reused within one scene, including across undo/redo restores.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ObjectId(pub u64);

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Construct an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Construct a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Uppercase `#RRGGBB` form, as referenced in generated instruction text.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Output aspect ratio requested from the generation service.
///
/// Each supported ratio maps to one fixed reinforcement phrase injected into
/// the assembled prompt.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum AspectRatio {
    /// Square 1:1.
    #[default]
    #[serde(rename = "1:1")]
    Square,
    /// Wide cinematic 16:9.
    #[serde(rename = "16:9")]
    WideCinematic,
    /// Tall vertical 9:16.
    #[serde(rename = "9:16")]
    TallVertical,
    /// Standard 4:3.
    #[serde(rename = "4:3")]
    Standard,
    /// Vertical 3:4.
    #[serde(rename = "3:4")]
    Vertical,
}

impl AspectRatio {
    /// Wire tag understood by the generation service (`"16:9"` etc.).
    pub fn tag(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::WideCinematic => "16:9",
            Self::TallVertical => "9:16",
            Self::Standard => "4:3",
            Self::Vertical => "3:4",
        }
    }

    /// Fixed descriptive phrase appended to the prompt for reinforcement.
    pub fn reinforcement_phrase(self) -> &'static str {
        match self {
            Self::Square => "Square 1:1 Aspect Ratio.",
            Self::WideCinematic => "Wide Cinematic 16:9 Aspect Ratio.",
            Self::TallVertical => "Tall Vertical 9:16 Aspect Ratio.",
            Self::Standard => "Standard 4:3 Aspect Ratio.",
            Self::Vertical => "Vertical 3:4 Aspect Ratio.",
        }
    }

    /// Parse a wire tag back into a ratio.
    pub fn from_tag(tag: &str) -> MaquetteResult<Self> {
        match tag {
            "1:1" => Ok(Self::Square),
            "16:9" => Ok(Self::WideCinematic),
            "9:16" => Ok(Self::TallVertical),
            "4:3" => Ok(Self::Standard),
            "3:4" => Ok(Self::Vertical),
            other => Err(MaquetteError::validation(format!(
                "unknown aspect ratio tag '{other}'"
            ))),
        }
    }
}

/// Output resolution tier requested from the generation service.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum ResolutionTier {
    /// Roughly 1024 px on the long side.
    #[default]
    #[serde(rename = "1K")]
    OneK,
    /// Roughly 2048 px on the long side.
    #[serde(rename = "2K")]
    TwoK,
    /// Roughly 4096 px on the long side.
    #[serde(rename = "4K")]
    FourK,
}

impl ResolutionTier {
    /// Wire tag understood by the generation service.
    pub fn tag(self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
