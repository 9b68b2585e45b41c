pub use stitch_core as core;
pub use stitch_imgproc as imgproc;
pub use stitch_photo as photo;

pub use stitch_core::{Error, OffsetResult, StitchOptions};
pub use stitch_imgproc::estimate_vertical_offset;
pub use stitch_photo::{stitch, StitchResult, Stitcher};

use rayon::ThreadPoolBuilder;
use std::sync::OnceLock;
use std::thread;

static THREAD_POOL_INIT: OnceLock<Result<usize, String>> = OnceLock::new();

/// Widest fan-out a stitch with these options can use: the number of
/// candidate shifts scored at the coarsest pyramid level of a
/// `frame_height`-row capture.
pub fn alignment_fanout(options: &StitchOptions, frame_height: u32) -> usize {
    let levels = options.pyramid_levels.max(1);
    let coarse_h = (frame_height >> (levels - 1).min(31)).max(1);
    let range = ((coarse_h as f32 * options.max_search_percent).round() as u32).max(1);
    2 * range as usize + 1
}

/// Bound the global Rayon pool by the alignment fan-out before stitching.
///
/// Candidate shifts at the coarsest pyramid level are the widest section a
/// stitch evaluates in parallel, so threads beyond that window only sit
/// idle. Call once at startup with the options and the tallest frame
/// height the capture will produce; repeated calls are idempotent and
/// return the thread count chosen by the first one.
pub fn init_thread_pool(options: &StitchOptions, frame_height: u32) -> Result<usize, String> {
    let res = THREAD_POOL_INIT.get_or_init(|| {
        let available = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let threads = alignment_fanout(options, frame_height)
            .min(available)
            .max(1);
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map(|_| threads)
            .map_err(|e| e.to_string())
    });
    res.clone()
}
