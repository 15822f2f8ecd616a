//! Processing-option vocabulary for proxy URLs

use std::str::FromStr;

use crate::error::BridgeError;

/// How the proxy fits the image into the requested box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeType {
    /// Preserve aspect ratio, fit within the box (default)
    #[default]
    Fit,
    /// Preserve aspect ratio, crop projecting parts to fill the box
    Fill,
    /// Exact box, aspect ratio not preserved
    Force,
}

impl ResizeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::Force => "force",
        }
    }
}

impl FromStr for ResizeType {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fit" => Ok(ResizeType::Fit),
            "fill" => Ok(ResizeType::Fill),
            "force" => Ok(ResizeType::Force),
            _ => Err(BridgeError::UnknownResizeType(s.to_string())),
        }
    }
}

/// Quality selection for one generated URL.
///
/// Numeric quality and the per-format spec are mutually exclusive on the
/// wire; modeling them as one value makes that impossible to get wrong at a
/// call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quality {
    /// Fixed quality percentage, rendered as `q:<n>`
    Numeric(u8),
    /// Per-format quality spec passed through verbatim, rendered as `fq:<spec>`
    FormatSpec(String),
    /// No quality option; the proxy applies its own default
    Default,
}
