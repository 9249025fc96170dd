use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single pixel access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelError {
    #[error("pixel ({x}, {y}) is outside a {width}x{height} image")]
    IndexOutOfRange {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}

/// Failure while loading or saving an image file.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("no encoder for format {0:?}")]
    UnsupportedFormat(String),
    #[error("cannot encode an empty image")]
    EmptyImage,
}

/// Failure while presenting a buffer on screen.
#[cfg(feature = "viewer")]
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("cannot display an empty image")]
    EmptyImage,
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}
