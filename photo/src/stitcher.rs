use image::{DynamicImage, RgbaImage};
use stitch_core::{force_opaque, Error, OffsetResult, StitchOptions};
use stitch_imgproc::{estimate_vertical_offset, resize_rgba, validate_frame_size};

use crate::compositor::join_frames;
use crate::Result;

/// Output of a stitch call: the grown panorama plus one offset estimate
/// per join, in input order.
#[derive(Debug)]
pub struct StitchResult {
    pub image: RgbaImage,
    pub offsets: Vec<OffsetResult>,
}

/// Panorama builder driving alignment and compositing over a frame
/// sequence.
pub struct Stitcher {
    options: StitchOptions,
}

impl Stitcher {
    pub fn new(options: StitchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &StitchOptions {
        &self.options
    }

    pub fn stitch(&self, frames: &[DynamicImage]) -> Result<StitchResult> {
        stitch(frames, &self.options)
    }
}

impl Default for Stitcher {
    fn default() -> Self {
        Self::new(StitchOptions::default())
    }
}

/// Stitch a scroll-capture sequence into one tall panorama.
///
/// Frames are normalized to the first frame's width, then each consecutive
/// pair is aligned and composited onto the running panorama. Joins whose
/// confidence falls below `min_confidence` are still composited; callers
/// can inspect the returned offsets to react to them.
pub fn stitch(frames: &[DynamicImage], options: &StitchOptions) -> Result<StitchResult> {
    options.validate()?;
    if frames.is_empty() {
        return Err(Error::EmptyInput);
    }

    let normalized = normalize_widths(frames)?;
    let mut panorama = normalized[0].clone();
    let mut offsets = Vec::with_capacity(normalized.len() - 1);

    for pair in normalized.windows(2) {
        let estimate = estimate_vertical_offset(&pair[0], &pair[1], options)?;
        tracing::debug!(
            "join {}: offset {} px, ncc {:.3}{}",
            offsets.len(),
            estimate.offset_px,
            estimate.confidence,
            if estimate.confidence < options.min_confidence {
                " (low confidence)"
            } else {
                ""
            }
        );
        panorama = join_frames(&panorama, &pair[1], &estimate, options);
        offsets.push(estimate);
    }

    Ok(StitchResult {
        image: panorama,
        offsets,
    })
}

/// Rescale every frame to the first frame's width and hand back owned,
/// fully-opaque RGBA copies.
fn normalize_widths(frames: &[DynamicImage]) -> Result<Vec<RgbaImage>> {
    let mut target_width = 0u32;
    let mut out = Vec::with_capacity(frames.len());

    for frame in frames {
        let mut rgba = frame.to_rgba8();
        validate_frame_size(rgba.width(), rgba.height())?;
        if target_width == 0 {
            target_width = rgba.width();
        } else if rgba.width() != target_width {
            let scaled_h = (rgba.height() as f32 * target_width as f32 / rgba.width() as f32)
                .round() as u32;
            rgba = resize_rgba(&rgba, target_width, scaled_h.max(1));
        }
        force_opaque(&mut rgba);
        out.push(rgba);
    }

    Ok(out)
}
