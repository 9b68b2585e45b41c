use image::RgbaImage;
use stitch_core::{OffsetResult, StitchOptions};

use crate::blend::blend_rows;
use crate::seam::find_seam_row;

/// Grow the panorama by one frame.
///
/// `next` is aligned against the bottom of `panorama` by the estimated
/// offset, a seam row is picked inside the overlap, and a feather band
/// around it is blended. Estimates that leave no overlap, or that carry
/// the undefined-score sentinel, append the frame below the panorama
/// unblended.
pub fn join_frames(
    panorama: &RgbaImage,
    next: &RgbaImage,
    estimate: &OffsetResult,
    options: &StitchOptions,
) -> RgbaImage {
    let width = panorama.width();
    let pano_h = panorama.height() as i64;
    let next_h = next.height() as i64;
    let shift = estimate.offset_px as i64;

    let overlap = if shift >= 0 {
        next_h - shift
    } else {
        next_h + shift
    };
    let overlap_h = overlap.clamp(0, next_h.min(pano_h));
    if overlap_h <= 0 || estimate.confidence < -1.0 {
        return append_below(panorama, next);
    }

    let align_top = pano_h - overlap_h;
    let seam_row = find_seam_row(panorama, next, align_top as u32, overlap_h as u32) as i64;

    let band = options.blend_band_px as i64;
    let seam_start = (align_top + seam_row - band / 2).clamp(0, pano_h);
    let seam_end = (seam_start + band).min(pano_h);

    let new_height = pano_h.max(align_top + next_h);
    let stride = width as usize * 4;
    let mut out = vec![0u8; stride * new_height as usize];
    out[..stride * pano_h as usize].copy_from_slice(panorama.as_raw());

    let pano_raw = panorama.as_raw();
    let next_raw = next.as_raw();

    for y in 0..(seam_end - seam_start) {
        let dst_y = seam_start + y;
        let next_y = dst_y - align_top;
        if next_y < 0 {
            continue;
        }
        let alpha = if band <= 1 {
            1.0
        } else {
            y as f32 / (band - 1) as f32
        };
        let dst = dst_y as usize * stride;
        let src_n = next_y as usize * stride;
        blend_rows(
            &pano_raw[dst..dst + stride],
            &next_raw[src_n..src_n + stride],
            alpha,
            &mut out[dst..dst + stride],
        );
    }

    let tail_start = (seam_row + (band + 1) / 2).max(0);
    if tail_start < next_h {
        let dest = align_top + tail_start;
        let rows = (next_h - tail_start).min(new_height - dest);
        if rows > 0 {
            let src = tail_start as usize * stride;
            let dst = dest as usize * stride;
            let len = rows as usize * stride;
            out[dst..dst + len].copy_from_slice(&next_raw[src..src + len]);
        }
    }

    RgbaImage::from_raw(width, new_height as u32, out).unwrap()
}

fn append_below(panorama: &RgbaImage, next: &RgbaImage) -> RgbaImage {
    let width = panorama.width();
    let total = panorama.height() + next.height();
    let mut out = Vec::with_capacity(width as usize * 4 * total as usize);
    out.extend_from_slice(panorama.as_raw());
    out.extend_from_slice(next.as_raw());
    RgbaImage::from_raw(width, total, out).unwrap()
}
