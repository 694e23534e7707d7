// URL builder unit tests through the public API

use rstest::rstest;
use thumbor_url::*;

fn image(target: &str) -> UrlBuilder {
    Thumbor::default().build_image(target).unwrap()
}

#[rstest]
#[case(10, 5, "/unsafe/10x5/a.com/b.png")]
#[case(0, 5, "/unsafe/0x5/a.com/b.png")]
#[case(300, 0, "/unsafe/300x0/a.com/b.png")]
fn test_resize_renders_dimensions(#[case] width: i32, #[case] height: i32, #[case] expected: &str) {
    let url = image("a.com/b.png")
        .resize(width, height)
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(url, expected);
}

#[rstest]
#[case(-1, 5)]
#[case(10, -400)]
#[case(0, 0)]
fn test_resize_rejects_invalid_dimensions(#[case] width: i32, #[case] height: i32) {
    let err = image("a.com/b.png").resize(width, height).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_resize_mixed_original_and_pixels() {
    let url = image("b.com/c.png")
        .resize(Dimension::Original, 300)
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(url, "/unsafe/origx300/b.com/c.png");
}

#[rstest]
#[case(-1, 0, 1, 1)]
#[case(0, -1, 1, 1)]
#[case(0, 0, -1, 1)]
#[case(0, 0, 1, -1)]
#[case(0, 1, 1, 0)]
#[case(1, 0, 0, 1)]
#[case(5, 0, 5, 1)]
fn test_crop_rejects_invalid_bounds(
    #[case] top: i32,
    #[case] left: i32,
    #[case] bottom: i32,
    #[case] right: i32,
) {
    assert!(image("a.png").crop(top, left, bottom, right).is_err());
}

#[test]
fn test_crop_does_not_require_resize() {
    let image = image("a.png").crop(1, 2, 3, 4).unwrap();
    assert_eq!(
        image.crop_bounds(),
        Some(CropBounds {
            top: 1,
            left: 2,
            bottom: 3,
            right: 4
        })
    );
    assert_eq!(image.to_url().unwrap(), "/unsafe/2x1:4x3/a.png");
}

#[test]
fn test_resize_dependent_options_fail_without_resize() {
    let base = image("a.png");
    assert!(base.clone().flip_horizontally().unwrap_err().is_invalid_state());
    assert!(base.clone().flip_vertically().unwrap_err().is_invalid_state());
    assert!(base.clone().fit_in().unwrap_err().is_invalid_state());
    assert!(base
        .clone()
        .fit_in_style(FitInStyle::Full)
        .unwrap_err()
        .is_invalid_state());
    assert!(base.clone().smart().unwrap_err().is_invalid_state());
    assert!(base
        .align_both(VerticalAlign::Top, HorizontalAlign::Left)
        .unwrap_err()
        .is_invalid_state());
}

#[rstest]
#[case(HorizontalAlign::Left, VerticalAlign::Top, "/unsafe/10x5/left/top/a.png")]
#[case(HorizontalAlign::Center, VerticalAlign::Middle, "/unsafe/10x5/center/middle/a.png")]
#[case(HorizontalAlign::Right, VerticalAlign::Bottom, "/unsafe/10x5/right/bottom/a.png")]
fn test_alignment_renders_horizontal_then_vertical(
    #[case] horizontal: HorizontalAlign,
    #[case] vertical: VerticalAlign,
    #[case] expected: &str,
) {
    // Vertical is set first; output order is still horizontal then vertical
    let url = image("a.png")
        .resize(10, 5)
        .unwrap()
        .align_vertical(vertical)
        .unwrap()
        .align_horizontal(horizontal)
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(url, expected);
}

#[test]
fn test_single_alignment_axis() {
    let url = image("a.png")
        .resize(10, 5)
        .unwrap()
        .align_vertical(VerticalAlign::Bottom)
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(url, "/unsafe/10x5/bottom/a.png");
}

#[test]
fn test_smart_wins_over_alignment() {
    let image = image("a.png")
        .resize(10, 5)
        .unwrap()
        .align_both(VerticalAlign::Top, HorizontalAlign::Right)
        .unwrap()
        .smart()
        .unwrap();
    assert!(image.is_smart());
    assert_eq!(image.to_url().unwrap(), "/unsafe/10x5/smart/a.png");
    assert_eq!(
        image.alignment(),
        (Some(VerticalAlign::Top), Some(HorizontalAlign::Right))
    );
}

#[rstest]
#[case(None, 0, "/unsafe/trim/a.png")]
#[case(Some(TrimPixelColor::TopLeft), 0, "/unsafe/trim:top-left/a.png")]
#[case(Some(TrimPixelColor::BottomRight), 0, "/unsafe/trim:bottom-right/a.png")]
#[case(Some(TrimPixelColor::TopLeft), 100, "/unsafe/trim:top-left:100/a.png")]
#[case(Some(TrimPixelColor::BottomRight), 442, "/unsafe/trim:bottom-right:442/a.png")]
fn test_trim_forms(
    #[case] pixel_color: Option<TrimPixelColor>,
    #[case] tolerance: i32,
    #[case] expected: &str,
) {
    let url = image("a.png")
        .trim_with(pixel_color, tolerance)
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(url, expected);
}

#[test]
fn test_trim_tolerance_bounds() {
    let base = image("a.png");
    assert!(base
        .clone()
        .trim_with(Some(TrimPixelColor::TopLeft), -1)
        .unwrap_err()
        .is_invalid_argument());
    assert!(base
        .clone()
        .trim_with(Some(TrimPixelColor::TopLeft), 443)
        .unwrap_err()
        .is_invalid_argument());
    assert!(base.trim_with(None, 1).unwrap_err().is_invalid_argument());
}

#[test]
fn test_filters_accumulate_in_order() {
    let image = image("a.png")
        .filter([Filter::brightness(10).unwrap()])
        .unwrap()
        .filter([Filter::grayscale(), Filter::no_upscale()])
        .unwrap()
        .filter(["custom(1)"])
        .unwrap();
    assert_eq!(
        image.filters(),
        ["brightness(10)", "grayscale()", "no_upscale()", "custom(1)"]
    );
    assert_eq!(
        image.to_url().unwrap(),
        "/unsafe/filters:brightness(10):grayscale():no_upscale():custom(1)/a.png"
    );
}

#[test]
fn test_empty_filter_batch_rejected() {
    let err = image("a.png").filter(Vec::<Filter>::new()).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_every_segment_in_order() {
    let url = image("a.com/b.png")
        .filter([Filter::quality(80).unwrap()])
        .unwrap()
        .trim_pixel(TrimPixelColor::TopLeft)
        .resize(300, 200)
        .unwrap()
        .flip_vertically()
        .unwrap()
        .flip_horizontally()
        .unwrap()
        .fit_in_style(FitInStyle::Adaptive)
        .unwrap()
        .smart()
        .unwrap()
        .crop(10, 20, 30, 40)
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(
        url,
        "/unsafe/trim:top-left/20x10:40x30/adaptive-fit-in/-300x-200/smart/filters:quality(80)/a.com/b.png"
    );
}

#[test]
fn test_builder_is_reusable_after_build() {
    let image = image("a.png").resize(10, 10).unwrap();
    let first = image.to_url().unwrap();
    let image = image.fit_in().unwrap();
    assert_eq!(first, "/unsafe/10x10/a.png");
    assert_eq!(image.to_url().unwrap(), "/unsafe/fit-in/10x10/a.png");
}
