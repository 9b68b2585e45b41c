use crate::{Error, Result};

/// Tuning knobs for alignment and compositing.
#[derive(Debug, Clone)]
pub struct StitchOptions {
    /// Number of pyramid levels; the coarsest search happens at the last one.
    pub pyramid_levels: u32,
    /// Fraction of the coarsest-level height searched in both directions.
    pub max_search_percent: f32,
    /// Half-window searched around the upscaled guess at finer levels.
    pub refine_window_px: u32,
    /// Horizontal sampling stride inside the correlation.
    pub sample_x_step: u32,
    /// Vertical sampling stride inside the correlation.
    pub sample_y_step: u32,
    /// Rows removed from the top of both frames before alignment.
    pub crop_top_px: u32,
    /// Rows removed from the bottom of both frames before alignment.
    pub crop_bottom_px: u32,
    /// Joins scoring below this are flagged to the caller, never rejected.
    pub min_confidence: f64,
    /// Height of the alpha-feather band around the seam.
    pub blend_band_px: u32,
    /// Clamp the reported offset into the valid shift range.
    pub clamp_offset_to_range: bool,
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self {
            pyramid_levels: 3,
            max_search_percent: 0.5,
            refine_window_px: 12,
            sample_x_step: 2,
            sample_y_step: 2,
            crop_top_px: 0,
            crop_bottom_px: 0,
            min_confidence: 0.25,
            blend_band_px: 24,
            clamp_offset_to_range: true,
        }
    }
}

impl StitchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pyramid_levels(mut self, levels: u32) -> Self {
        self.pyramid_levels = levels;
        self
    }

    pub fn with_sample_steps(mut self, x: u32, y: u32) -> Self {
        self.sample_x_step = x;
        self.sample_y_step = y;
        self
    }

    pub fn with_crop(mut self, top: u32, bottom: u32) -> Self {
        self.crop_top_px = top;
        self.crop_bottom_px = bottom;
        self
    }

    pub fn with_blend_band(mut self, px: u32) -> Self {
        self.blend_band_px = px;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.pyramid_levels < 1 {
            return Err(Error::InvalidOption("pyramid_levels must be >= 1".into()));
        }
        if !(self.max_search_percent > 0.0 && self.max_search_percent <= 1.0) {
            return Err(Error::InvalidOption(
                "max_search_percent must be in (0, 1]".into(),
            ));
        }
        if self.refine_window_px < 1 {
            return Err(Error::InvalidOption("refine_window_px must be >= 1".into()));
        }
        if self.sample_x_step < 1 || self.sample_y_step < 1 {
            return Err(Error::InvalidOption(
                "sampling strides must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Estimated vertical displacement for one frame pair.
///
/// A positive offset means the content scrolled up between the frames: row
/// `y` of the earlier frame shows the same content as row `y - offset_px`
/// of the later one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetResult {
    pub offset_px: i32,
    pub confidence: f64,
}
