//! Predicts proxy output dimensions without a round-trip

use crate::dimensions::Dimensions;
use crate::options::ResizeType;

/// Predict the dimensions the proxy will produce when resizing `actual` into
/// the `target` box.
///
/// First matching rule wins:
/// 1. Unknown source size: return `target` (no source ratio to preserve).
/// 2. Zero target: return `actual` (no resize requested).
/// 3. No-enlarge and the target box already holds the image: return `actual`.
/// 4. `force` and `fill` produce exactly the requested box.
/// 5. `fit` scales along the constraining axis, keeping the source ratio.
///
/// Fractional results round half-away-from-zero.
pub fn expected_size(
    actual: Dimensions,
    target: Dimensions,
    resize_type: ResizeType,
    enlarge: bool,
) -> Dimensions {
    if actual.no_width() || actual.no_height() {
        return target;
    }
    if target.is_zero() {
        return actual;
    }

    let actual_ratio = actual.aspect_ratio();
    let target_ratio = if !target.no_width() && !target.no_height() {
        target.aspect_ratio()
    } else {
        actual_ratio
    };

    if !enlarge && target.contains(actual) {
        return actual;
    }

    match resize_type {
        ResizeType::Force | ResizeType::Fill => target,
        ResizeType::Fit => {
            if target.no_height() || actual_ratio > target_ratio {
                Dimensions::new(target.width, round(f64::from(target.width) / actual_ratio))
            } else {
                Dimensions::new(round(actual_ratio * f64::from(target.height)), target.height)
            }
        }
    }
}

fn round(value: f64) -> u32 {
    value.round() as u32
}
