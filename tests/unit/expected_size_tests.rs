// Expected-size calculator unit tests
// The table mirrors the sizes the proxy actually produces for each mode

use imgproxy_bridge::{expected_size, Dimensions, ResizeType};

#[test]
fn test_expected_size_table() {
    #[rustfmt::skip]
    let test_cases: Vec<(Option<u32>, Option<u32>, u32, u32, ResizeType, bool, u32, u32)> = vec![
        (Some(1000), Some(800), 400, 300, ResizeType::Fit,   false, 375, 300),
        (Some(1000), Some(500), 400, 300, ResizeType::Fit,   false, 400, 200),
        (Some(1000), Some(800), 400, 300, ResizeType::Fill,  false, 400, 300),
        (Some(1000), Some(500), 400, 300, ResizeType::Fill,  false, 400, 300),
        (Some(800),  Some(600), 200, 300, ResizeType::Force, false, 200, 300),
        (Some(800),  Some(600), 0,   0,   ResizeType::Fit,   false, 800, 600),
        (Some(800),  Some(600), 400, 0,   ResizeType::Fit,   false, 400, 300),
        (Some(800),  Some(600), 0,   300, ResizeType::Fit,   false, 400, 300),
        (Some(0),    Some(0),   400, 300, ResizeType::Fit,   false, 400, 300),
        (None,       None,      400, 300, ResizeType::Fit,   false, 400, 300),
        (Some(0),    Some(0),   0,   0,   ResizeType::Fit,   false, 0,   0),
        (None,       None,      0,   0,   ResizeType::Fit,   false, 0,   0),
    ];

    for (actual_w, actual_h, target_w, target_h, resize_type, enlarge, expected_w, expected_h) in
        test_cases
    {
        let actual = Dimensions::from_optional(actual_w, actual_h);
        let target = Dimensions::new(target_w, target_h);
        let size = expected_size(actual, target, resize_type, enlarge);

        assert_eq!(
            size,
            Dimensions::new(expected_w, expected_h),
            "Actual {:?}x{:?} into {}x{} ({:?}, enlarge {}) should produce {}x{}",
            actual_w,
            actual_h,
            target_w,
            target_h,
            resize_type,
            enlarge,
            expected_w,
            expected_h
        );
    }
}

#[test]
fn test_enlarge_allows_upscaling() {
    let size = expected_size(
        Dimensions::new(400, 300),
        Dimensions::new(1000, 800),
        ResizeType::Fit,
        true,
    );
    assert_eq!(size, Dimensions::new(1000, 750));
}

#[test]
fn test_containing_target_without_enlarge_keeps_actual() {
    let size = expected_size(
        Dimensions::new(400, 300),
        Dimensions::new(1000, 800),
        ResizeType::Fit,
        false,
    );
    assert_eq!(size, Dimensions::new(400, 300));
}

#[test]
fn test_containment_check_precedes_fill() {
    // A fill into a larger box is still a no-op when upscaling is off
    let size = expected_size(
        Dimensions::new(400, 300),
        Dimensions::new(1000, 800),
        ResizeType::Fill,
        false,
    );
    assert_eq!(size, Dimensions::new(400, 300));
}

#[test]
fn test_partial_target_keeps_source_ratio_when_enlarging() {
    let size = expected_size(
        Dimensions::new(400, 300),
        Dimensions::new(800, 0),
        ResizeType::Fit,
        true,
    );
    assert_eq!(size, Dimensions::new(800, 600));
}

#[test]
fn test_dimensions_invariants() {
    let dims = [
        Dimensions::new(0, 0),
        Dimensions::new(100, 0),
        Dimensions::new(0, 100),
        Dimensions::new(640, 480),
    ];
    for d in dims {
        assert_eq!(
            d.is_zero(),
            d.no_width() && d.no_height(),
            "is_zero must match both components being zero for {}",
            d
        );
        assert!(d.contains(d), "{} must contain itself", d);
    }
}
