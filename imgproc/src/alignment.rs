//! Vertical offset estimation between consecutive scroll frames.
//!
//! Candidate shifts are scored with zero-mean normalized cross-correlation
//! over grayscale pyramids; a coarse-to-fine search bounds the displacement
//! cheaply at the top level and refines the argmax on the way down.

use image::RgbaImage;
use rayon::prelude::*;
use stitch_core::{crop_rows, Error, GrayPlane, OffsetResult, StitchOptions};

use crate::color::luma_plane;
use crate::pyramid::build_pyramid;
use crate::Result;

/// In-band score for shifts whose correlation is undefined.
pub const SCORE_UNDEFINED: f64 = -2.0;

/// Zero-mean normalized cross-correlation between two equal-size planes
/// under a vertical shift of `off` rows.
///
/// For `off >= 0` rows `[0, h-off)` of `a` are compared against rows
/// `[off, h)` of `b`; negative shifts mirror the roles. Sampling walks the
/// overlap with the given strides. Returns a score in `[-1, 1]`, or
/// [`SCORE_UNDEFINED`] when the overlap is 4 rows or fewer, nothing was
/// sampled, or either plane is flat over the overlap.
pub fn zncc_vertical_shift(
    a: &GrayPlane,
    b: &GrayPlane,
    off: i32,
    step_x: u32,
    step_y: u32,
) -> f64 {
    let width = a.width as usize;
    let height = a.height as i64;
    let off = off as i64;

    let overlap = height - off.abs();
    if overlap <= 4 {
        return SCORE_UNDEFINED;
    }
    let (a_start, b_start) = if off >= 0 { (0, off) } else { (-off, 0) };

    let step_x = step_x.max(1) as usize;
    let step_y = step_y.max(1) as i64;

    let mut sum_a = 0.0f64;
    let mut sum_b = 0.0f64;
    let mut sum_aa = 0.0f64;
    let mut sum_bb = 0.0f64;
    let mut sum_ab = 0.0f64;
    let mut count = 0u64;

    let mut ya = a_start;
    let mut yb = b_start;
    while ya < a_start + overlap {
        let row_a = a.row(ya as u32);
        let row_b = b.row(yb as u32);
        let mut x = 0;
        while x < width {
            let ia = row_a[x] as f64;
            let ib = row_b[x] as f64;
            sum_a += ia;
            sum_b += ib;
            sum_aa += ia * ia;
            sum_bb += ib * ib;
            sum_ab += ia * ib;
            count += 1;
            x += step_x;
        }
        ya += step_y;
        yb += step_y;
    }

    if count == 0 {
        return SCORE_UNDEFINED;
    }
    let n = count as f64;
    let mean_a = sum_a / n;
    let mean_b = sum_b / n;
    let var_a = sum_aa / n - mean_a * mean_a;
    let var_b = sum_bb / n - mean_b * mean_b;
    let denom = var_a * var_b;
    if denom <= 1e-6 {
        return SCORE_UNDEFINED;
    }
    let cov = sum_ab / n - mean_a * mean_b;
    (cov / denom.sqrt()).clamp(-1.0, 1.0)
}

/// Estimate the vertical displacement between two consecutive frames.
///
/// The reported offset follows the scroll convention: positive when the
/// content moved up between `prev` and `next`. It is measured in rows of
/// the cropped band at full resolution. A featureless pair reports offset
/// 0 with the sentinel confidence instead of failing.
pub fn estimate_vertical_offset(
    prev: &RgbaImage,
    next: &RgbaImage,
    options: &StitchOptions,
) -> Result<OffsetResult> {
    options.validate()?;
    crate::validate_frame_size(prev.width(), prev.height())?;
    if prev.dimensions() != next.dimensions() {
        return Err(Error::DimensionMismatch(format!(
            "frame pair {}x{} vs {}x{}",
            prev.width(),
            prev.height(),
            next.width(),
            next.height()
        )));
    }

    let height = prev.height();
    let crop_top = options.crop_top_px.min(height - 1);
    let crop_bottom = options.crop_bottom_px.min(height - 1 - crop_top);
    let effective_height = height - crop_top - crop_bottom;
    if effective_height <= 8 {
        return Err(Error::EffectiveHeightTooSmall(effective_height));
    }

    let levels = options.pyramid_levels.max(1);
    let prev_crop = crop_rows(prev, crop_top, effective_height);
    let next_crop = crop_rows(next, crop_top, effective_height);
    let (prev_pyr, next_pyr) = rayon::join(
        || build_pyramid(luma_plane(&prev_crop), levels),
        || build_pyramid(luma_plane(&next_crop), levels),
    );

    let mut guess = 0i32;
    let mut confidence = SCORE_UNDEFINED;

    for level in (0..levels).rev() {
        let prev_level = &prev_pyr[level as usize];
        let next_level = &next_pyr[level as usize];
        let h = prev_level.height as i32;

        let coarsest = level == levels - 1;
        let range = if coarsest {
            ((h as f32 * options.max_search_percent).round() as i32).max(1)
        } else {
            (options.refine_window_px as i32).max(1)
        };
        let center = if coarsest { 0 } else { guess * 2 };
        let from = (center - range).max(-(h - 1));
        let to = (center + range).min(h - 1);

        let scores: Vec<f64> = (from..=to)
            .into_par_iter()
            .map(|off| {
                zncc_vertical_shift(
                    next_level,
                    prev_level,
                    off,
                    options.sample_x_step,
                    options.sample_y_step,
                )
            })
            .collect();

        // sequential argmax: ties keep the first shift in ascending order
        let mut best_off = center;
        let mut best_score = SCORE_UNDEFINED;
        for (i, &score) in scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best_off = from + i as i32;
            }
        }

        guess = best_off;
        confidence = best_score;
    }

    let mut offset = guess;
    if options.clamp_offset_to_range {
        let limit = effective_height as i32 - 1;
        offset = offset.clamp(-limit, limit);
    }
    Ok(OffsetResult {
        offset_px: offset,
        confidence,
    })
}
