//! Benchmarks for offset estimation and full-capture stitching.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use scrollstitch::core::crop_rows;
use scrollstitch::{estimate_vertical_offset, init_thread_pool, stitch, StitchOptions};

/// Synthetic scroll capture: a tall patterned page cropped at a fixed step.
fn create_scroll_frames(width: u32, height: u32, count: u32, step: u32) -> Vec<RgbaImage> {
    let content_h = height + (count - 1) * step;
    let mut page = RgbaImage::new(width, content_h);
    for y in 0..content_h {
        let v = ((y * 37 + 11) % 97) as u8;
        for x in 0..width {
            let shade = v.wrapping_add((x % 7) as u8 * 5);
            page.put_pixel(x, y, Rgba([shade, shade / 2, 255 - shade, 255]));
        }
    }

    (0..count)
        .map(|i| crop_rows(&page, i * step, height))
        .collect()
}

fn benchmark_offset_estimation(c: &mut Criterion) {
    let frames = create_scroll_frames(1080, 1920, 2, 400);
    let options = StitchOptions::default();
    init_thread_pool(&options, 1920).unwrap();

    c.bench_function("estimate_vertical_offset_1080p", |b| {
        b.iter(|| {
            let result =
                estimate_vertical_offset(black_box(&frames[0]), black_box(&frames[1]), &options)
                    .unwrap();
            black_box(result)
        })
    });
}

fn benchmark_full_stitch(c: &mut Criterion) {
    let frames: Vec<DynamicImage> = create_scroll_frames(720, 1280, 5, 300)
        .into_iter()
        .map(DynamicImage::ImageRgba8)
        .collect();
    let options = StitchOptions::default();

    c.bench_function("stitch_five_frames_720p", |b| {
        b.iter(|| {
            let result = stitch(black_box(&frames), &options).unwrap();
            black_box(result.image.height())
        })
    });
}

criterion_group!(benches, benchmark_offset_estimation, benchmark_full_stitch);
criterion_main!(benches);
