//! Scroll-capture compositing.
//!
//! Joins a sequence of vertically-scrolling screenshots into one tall
//! panorama.
//!
//! # Stages
//!
//! - **Seam finding**: central-strip color distance picks the quietest row
//!   inside the estimated overlap
//! - **Blending**: alpha feather across a configurable band around the seam
//! - **Stitching**: pairwise panorama growth with per-join diagnostics
//!
//! # Example
//!
//! ```no_run
//! # use stitch_photo::stitch;
//! # use stitch_core::StitchOptions;
//! # let frames: Vec<image::DynamicImage> = Vec::new();
//! let result = stitch(&frames, &StitchOptions::default()).unwrap();
//! println!("panorama is {} rows tall", result.image.height());
//! ```

pub use stitch_core::{Error, Result};

pub mod blend;
pub mod compositor;
pub mod seam;
pub mod stitcher;

pub use blend::*;
pub use compositor::*;
pub use seam::*;
pub use stitcher::*;
