//! Stitches a synthetic scroll capture and writes the panorama to disk.
//!
//! A tall page is generated (striped background, text-like row blocks),
//! cropped into overlapping frames at a fixed scroll step with a fixed
//! header bar overlaid on each frame, then reassembled. Run with
//! `cargo run --example stitch_demo`.

use image::{DynamicImage, Rgba, RgbaImage};
use stitch_core::{crop_rows, StitchOptions};
use stitch_photo::stitch;

const HEADER_H: u32 = 40;

fn main() {
    let frames = synthesize_frames(360, 520, 6, 120);
    let options = StitchOptions {
        max_search_percent: 0.45,
        blend_band_px: 28,
        crop_top_px: HEADER_H,
        ..StitchOptions::default()
    };

    let result = stitch(&frames, &options).expect("stitch failed");

    println!(
        "panorama: {}x{}",
        result.image.width(),
        result.image.height()
    );
    for (i, off) in result.offsets.iter().enumerate() {
        println!(
            "join {}: offset {} px, ncc {:.3}",
            i, off.offset_px, off.confidence
        );
    }

    result.image.save("panorama.png").expect("write panorama.png");
    println!("wrote panorama.png");
}

/// Build a long synthetic page and cut it into overlapping scroll frames.
fn synthesize_frames(width: u32, height: u32, count: u32, scroll_step: u32) -> Vec<DynamicImage> {
    let content_height = height + (count - 1) * scroll_step + 200;
    let mut page = RgbaImage::new(width, content_height);

    // striped background
    for y in 0..content_height {
        let band = y / 40 * 40;
        let color = Rgba([
            ((band * 3) % 256) as u8,
            ((band * 7) % 256) as u8,
            ((band * 11) % 256) as u8,
            255,
        ]);
        for x in 0..width {
            page.put_pixel(x, y, color);
        }
    }

    // text-like row blocks
    let mut row = 120;
    while row + 60 < content_height {
        let shade = ((row * 23) % 200 + 30) as u8;
        for y in (row + 20)..(row + 60) {
            for x in 24..(width - 24) {
                page.put_pixel(x, y, Rgba([shade, 255 - shade, shade / 2, 255]));
            }
        }
        row += 100;
    }

    (0..count)
        .map(|i| {
            let top = (i * scroll_step).min(content_height - height);
            let mut frame = crop_rows(&page, top, height);
            // fixed header bar, identical on every frame
            for y in 0..HEADER_H.min(height) {
                for x in 0..width {
                    frame.put_pixel(x, y, Rgba([30, 30, 30, 255]));
                }
            }
            DynamicImage::ImageRgba8(frame)
        })
        .collect()
}
