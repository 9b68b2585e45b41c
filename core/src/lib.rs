pub mod frame;
pub mod options;
pub mod plane;

pub use frame::*;
pub use options::*;
pub use plane::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no frames provided")]
    EmptyInput,

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("effective height too small: {0} rows left after cropping")]
    EffectiveHeightTooSmall(u32),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;
