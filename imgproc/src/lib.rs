pub mod alignment;
pub mod color;
pub mod pyramid;
pub mod resize;

pub use alignment::*;
pub use color::*;
pub use pyramid::*;
pub use resize::*;

pub type ImgprocError = stitch_core::Error;
pub type Result<T> = stitch_core::Result<T>;

pub fn validate_frame_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(stitch_core::Error::DimensionMismatch(
            "frame dimensions must be non-zero".into(),
        ));
    }
    Ok(())
}
