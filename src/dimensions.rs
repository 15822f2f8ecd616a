//! Pixel dimensions of a source or target image

use std::fmt;

/// Width/height pair in pixels.
///
/// A component of 0 means "unknown" or "unconstrained"; there is no negative
/// or fractional state. Fractional intermediate results are rounded before a
/// new `Dimensions` is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from optional components, treating `None` as 0.
    pub fn from_optional(width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            width: width.unwrap_or(0),
            height: height.unwrap_or(0),
        }
    }

    /// Width over height, or 0.0 when the height is unknown.
    ///
    /// The 0.0 return is a sentinel for "ratio undefined", not a real ratio;
    /// callers must check `no_height` before trusting a zero here.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height > 0 {
            f64::from(self.width) / f64::from(self.height)
        } else {
            0.0
        }
    }

    pub fn is_zero(&self) -> bool {
        self.no_width() && self.no_height()
    }

    pub fn no_width(&self) -> bool {
        self.width == 0
    }

    pub fn no_height(&self) -> bool {
        self.height == 0
    }

    /// True when `other` fits into this box in both dimensions.
    pub fn contains(&self, other: Dimensions) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
