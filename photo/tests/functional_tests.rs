use image::{DynamicImage, Rgba, RgbaImage};
use stitch_core::{crop_rows, Error, StitchOptions};
use stitch_photo::stitch;

fn page_value(y: u32) -> u8 {
    (((y * 53 + 7) % 101) * 2) as u8
}

/// Tall synthetic page with a distinct, non-repeating color per row.
fn page(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let r = page_value(y);
        let g = page_value(y + 17);
        let b = 255 - page_value(y);
        for x in 0..width {
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }
    img
}

fn as_frames(images: Vec<RgbaImage>) -> Vec<DynamicImage> {
    images.into_iter().map(DynamicImage::ImageRgba8).collect()
}

#[test]
fn test_single_frame_is_returned_bit_identical() {
    let mut frame = RgbaImage::new(4, 4);
    for y in 0..4 {
        let v = if y % 2 == 0 { 0 } else { 255 };
        for x in 0..4 {
            frame.put_pixel(x, y, Rgba([v, v, v, 255]));
        }
    }

    let result = stitch(
        &as_frames(vec![frame.clone()]),
        &StitchOptions::default(),
    )
    .unwrap();

    assert!(result.offsets.is_empty());
    assert_eq!(result.image, frame);
}

#[test]
fn test_identical_pair_collapses_to_one_frame() {
    let frame = crop_rows(&page(8, 12), 0, 12);
    let options = StitchOptions::default()
        .with_pyramid_levels(1)
        .with_sample_steps(1, 1)
        .with_blend_band(0);

    let result = stitch(&as_frames(vec![frame.clone(), frame.clone()]), &options).unwrap();

    assert_eq!(result.offsets.len(), 1);
    assert_eq!(result.offsets[0].offset_px, 0);
    assert!(result.offsets[0].confidence >= 0.99);
    assert_eq!(result.image.height(), 12);
    assert_eq!(result.image, frame);
}

#[test]
fn test_upward_scroll_reports_positive_offset_and_extends_tail() {
    let source = page(6, 20);
    let frames = as_frames(vec![crop_rows(&source, 0, 16), crop_rows(&source, 2, 16)]);
    let options = StitchOptions {
        max_search_percent: 0.3,
        ..StitchOptions::default()
            .with_pyramid_levels(1)
            .with_sample_steps(1, 1)
            .with_blend_band(0)
    };

    let result = stitch(&frames, &options).unwrap();

    assert_eq!(result.offsets[0].offset_px, 2);
    assert!(result.offsets[0].confidence >= 0.95);
    assert_eq!(result.image.height(), 18);
    assert_eq!(result.image, crop_rows(&source, 0, 18));
}

#[test]
fn test_three_frames_reconstruct_the_source_exactly() {
    let source = page(10, 24);
    let frames = as_frames(vec![
        crop_rows(&source, 0, 16),
        crop_rows(&source, 4, 16),
        crop_rows(&source, 8, 16),
    ]);
    let options = StitchOptions::default()
        .with_pyramid_levels(2)
        .with_sample_steps(1, 1)
        .with_blend_band(0);

    let result = stitch(&frames, &options).unwrap();

    let offsets: Vec<i32> = result.offsets.iter().map(|o| o.offset_px).collect();
    assert_eq!(offsets, vec![4, 4]);
    assert_eq!(result.image.height(), 24);
    assert_eq!(result.image, source);
}

#[test]
fn test_blend_band_over_identical_content_stays_exact() {
    let source = page(10, 24);
    let frames = as_frames(vec![
        crop_rows(&source, 0, 16),
        crop_rows(&source, 4, 16),
        crop_rows(&source, 8, 16),
    ]);
    let options = StitchOptions::default()
        .with_pyramid_levels(2)
        .with_sample_steps(1, 1)
        .with_blend_band(6);

    let result = stitch(&frames, &options).unwrap();

    // feathering two copies of the same row reproduces the row
    assert_eq!(result.image, source);
}

#[test]
fn test_flat_frames_fall_back_to_plain_append() {
    let frame = RgbaImage::from_pixel(8, 12, Rgba([77, 77, 77, 255]));
    let frames = as_frames(vec![frame.clone(), frame]);

    let result = stitch(&frames, &StitchOptions::default()).unwrap();

    assert_eq!(result.offsets[0].offset_px, 0);
    assert_eq!(result.offsets[0].confidence, -2.0);
    assert_eq!(result.image.height(), 24);
}

#[test]
fn test_cropped_header_survives_from_first_frame() {
    let width = 16;
    let height = 16;
    let header_h = 3;
    let shift = 5;
    let body = page(width, 32);

    let mut frames = Vec::new();
    for i in 0..2u32 {
        let mut frame = RgbaImage::new(width, height);
        for y in 0..header_h {
            for x in 0..width {
                frame.put_pixel(x, y, Rgba([220, (40 + 80 * i) as u8, 60, 255]));
            }
        }
        for y in header_h..height {
            let src = body.get_pixel(0, i * shift + y - header_h);
            for x in 0..width {
                frame.put_pixel(x, y, *src);
            }
        }
        frames.push(frame);
    }

    let options = StitchOptions::default()
        .with_pyramid_levels(1)
        .with_sample_steps(1, 1)
        .with_crop(header_h, 0)
        .with_blend_band(0);

    let result = stitch(&as_frames(frames), &options).unwrap();

    assert_eq!(result.offsets[0].offset_px, shift as i32);
    assert_eq!(result.image.height(), height + shift);

    // header band is the first frame's
    for y in 0..header_h {
        assert_eq!(result.image.get_pixel(4, y).0, [220, 40, 60, 255]);
    }
    // body content runs continuously below it
    for y in header_h..result.image.height() {
        assert_eq!(
            result.image.get_pixel(4, y),
            body.get_pixel(0, y - header_h),
            "body row {y}"
        );
    }
}

#[test]
fn test_dynamic_sidebar_does_not_disturb_alignment() {
    let width = 20;
    let height = 16;
    let shift = 4;
    let body = page(width, 32);

    let mut frames = Vec::new();
    for i in 0..2u32 {
        let mut frame = RgbaImage::new(width, height);
        for y in 0..height {
            let src = body.get_pixel(0, i * shift + y);
            for x in 0..width {
                frame.put_pixel(x, y, *src);
            }
            // left 10% columns change every capture
            for x in 0..2 {
                frame.put_pixel(x, y, Rgba([(10 + 90 * i) as u8, 255, 0, 255]));
            }
        }
        frames.push(frame);
    }

    let options = StitchOptions::default()
        .with_pyramid_levels(1)
        .with_sample_steps(1, 1)
        .with_blend_band(0);

    let result = stitch(&as_frames(frames), &options).unwrap();

    assert_eq!(result.offsets[0].offset_px, shift as i32);
    assert_eq!(result.image.height(), height + shift);
}

#[test]
fn test_mixed_widths_are_normalized_to_first_frame() {
    let source = page(8, 24);
    let first = crop_rows(&source, 0, 16);
    let second = stitch_imgproc::resize_rgba(&crop_rows(&source, 4, 16), 16, 32);

    let result = stitch(
        &as_frames(vec![first, second]),
        &StitchOptions::default().with_sample_steps(1, 1),
    )
    .unwrap();

    assert_eq!(result.offsets.len(), 1);
    assert_eq!(result.image.width(), 8);
    assert!(result.image.height() >= 16);
}

#[test]
fn test_empty_input_is_an_error() {
    let err = stitch(&[], &StitchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
}

#[test]
fn test_invalid_options_fail_before_any_work() {
    let frames = as_frames(vec![page(8, 16)]);
    let options = StitchOptions {
        max_search_percent: 2.0,
        ..StitchOptions::default()
    };
    let err = stitch(&frames, &options).unwrap_err();
    assert!(matches!(err, Error::InvalidOption(_)));
}

#[test]
fn test_zero_sized_frame_is_rejected() {
    let frames = vec![DynamicImage::new_rgba8(0, 5)];
    let err = stitch(&frames, &StitchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch(_)));
}

#[test]
fn test_panorama_height_never_shrinks() {
    let source = page(10, 40);
    let frames = as_frames(vec![
        crop_rows(&source, 0, 16),
        crop_rows(&source, 6, 16),
        crop_rows(&source, 6, 16),
        crop_rows(&source, 12, 16),
    ]);
    let options = StitchOptions::default()
        .with_pyramid_levels(2)
        .with_sample_steps(1, 1);

    let result = stitch(&frames, &options).unwrap();
    assert_eq!(result.offsets.len(), 3);
    assert!(result.image.height() >= 16 + 12);
}
