//! Error type shared by surfaces, configuration and the line orchestrator.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Rotating a line requires a square working area.
    NotSquare { width: u32, height: u32 },
    /// A buffer handed to a surface does not match the surface size.
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    UnknownFace(String),
    UnknownRasterizer(String),
    InvalidConfig(String),
    Image(image::ImageError),
    Io(std::io::Error),
    Config(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotSquare { width, height } => {
                write!(f, "surface is not square ({width}x{height})")
            }
            Error::DimensionMismatch { expected, actual } => write!(
                f,
                "buffer is {}x{} but the surface is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Error::UnknownFace(name) => write!(f, "unknown cube face '{name}'"),
            Error::UnknownRasterizer(name) => write!(f, "unknown rasterizer '{name}'"),
            Error::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
            Error::Image(e) => write!(f, "image error: {e}"),
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Config(e) => write!(f, "could not parse configuration: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e)
    }
}
