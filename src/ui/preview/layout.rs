// SPDX-License-Identifier: MPL-2.0
//! Geometry for sizing the preview surface inside the overlay.

use crate::config::{PREVIEW_HEIGHT_DIVISOR, PREVIEW_HORIZONTAL_MARGIN};
use iced::Size;

/// Computes the bounding box the preview surface must fit into:
/// the window width minus a fixed horizontal margin, and a fraction
/// of the window height.
#[must_use]
pub fn bounding_box(window: Size) -> Size {
    Size::new(
        (window.width - PREVIEW_HORIZONTAL_MARGIN).max(0.0),
        window.height / PREVIEW_HEIGHT_DIVISOR,
    )
}

/// Scales a natural media size down to fit inside `bounds`, preserving
/// aspect ratio.
///
/// The fit is applied in two sequential passes: width first, then height
/// on the already width-corrected size. When both constraints bind, the
/// second pass can leave one axis slightly under-fit compared to a joint
/// solve; the sequential order is part of the component's observable
/// behavior.
#[must_use]
pub fn fit_preview(natural: Size, bounds: Size) -> Size {
    let mut w = natural.width;
    let mut h = natural.height;

    if w > bounds.width {
        h = (h * bounds.width) / w;
        w = bounds.width;
    }

    if h > bounds.height {
        w = (w * bounds.height) / h;
        h = bounds.height;
    }

    Size::new(w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn media_smaller_than_bounds_is_untouched() {
        let fitted = fit_preview(Size::new(320.0, 240.0), Size::new(780.0, 433.0));
        assert_abs_diff_eq!(fitted.width, 320.0);
        assert_abs_diff_eq!(fitted.height, 240.0);
    }

    #[test]
    fn wide_media_is_scaled_by_width_preserving_aspect() {
        let fitted = fit_preview(Size::new(1920.0, 1080.0), Size::new(960.0, 1000.0));
        assert_abs_diff_eq!(fitted.width, 960.0);
        assert_abs_diff_eq!(fitted.height, 540.0);
        // Aspect ratio preserved when only the width pass fires.
        assert_abs_diff_eq!(fitted.width / fitted.height, 1920.0 / 1080.0, epsilon = 1e-4);
    }

    #[test]
    fn tall_media_is_scaled_by_height_preserving_aspect() {
        let fitted = fit_preview(Size::new(400.0, 1600.0), Size::new(800.0, 400.0));
        assert_abs_diff_eq!(fitted.height, 400.0);
        assert_abs_diff_eq!(fitted.width, 100.0);
        assert_abs_diff_eq!(fitted.width / fitted.height, 400.0 / 1600.0, epsilon = 1e-4);
    }

    #[test]
    fn output_never_exceeds_either_bound() {
        let naturals = [
            Size::new(4096.0, 2160.0),
            Size::new(720.0, 1280.0),
            Size::new(1.0, 1.0),
            Size::new(3000.0, 3000.0),
            Size::new(5000.0, 100.0),
        ];
        let bounds = Size::new(780.0, 433.0);

        for natural in naturals {
            let fitted = fit_preview(natural, bounds);
            assert!(fitted.width <= bounds.width + 1e-3, "width for {:?}", natural);
            assert!(
                fitted.height <= bounds.height + 1e-3,
                "height for {:?}",
                natural
            );
        }
    }

    #[test]
    fn both_passes_firing_keeps_the_height_bound() {
        // Width pass shrinks to 780 wide, leaving the height still above
        // the bound, so the height pass fires too.
        let fitted = fit_preview(Size::new(1000.0, 1000.0), Size::new(780.0, 433.0));
        assert_abs_diff_eq!(fitted.height, 433.0);
        assert!(fitted.width < 780.0);
    }

    #[test]
    fn bounding_box_applies_margin_and_height_fraction() {
        let bounds = bounding_box(Size::new(800.0, 650.0));
        assert_abs_diff_eq!(bounds.width, 780.0);
        assert_abs_diff_eq!(bounds.height, 650.0 / 1.5, epsilon = 1e-4);
    }

    #[test]
    fn bounding_box_width_never_goes_negative() {
        let bounds = bounding_box(Size::new(10.0, 300.0));
        assert_abs_diff_eq!(bounds.width, 0.0);
    }
}
