use core::fmt;

use crate::sink::{InitError, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Buffer length is zero or longer than the sink can address
    InvalidLength { count: usize, max: usize },
    /// Pixel index outside of the buffer
    IndexOutOfRange { index: usize, len: usize },
    /// Pattern length differs from the strip length
    LengthMismatch { expected: usize, actual: usize },
    /// Render sink could not be initialized
    Init(InitError),
    /// Render sink failed to transmit a frame
    Render(RenderError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { count, max } => {
                write!(f, "invalid strip length {count}, expected 1..={max}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} out of range for length {len}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "pattern length {actual} does not match strip length {expected}")
            }
            Self::Init(err) => write!(f, "sink initialization failed: {err}"),
            Self::Render(err) => write!(f, "sink render failed: {err}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<InitError> for Error {
    fn from(err: InitError) -> Self {
        Self::Init(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
