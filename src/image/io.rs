//! File I/O for pixel buffers and JSON.
//!
//! - `read` / `write`: load and save a [`PixelBuffer`], logging failures.
//!   A failed load yields the empty sentinel; a failed save returns normally.
//! - `try_read` / `try_write`: the same operations with the error returned.
//! - `format_token`: the format key a path selects on save.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageView, ImageViewMut, PixelBuffer};
use crate::color::{decode_argb, encode_argb};
use crate::error::CodecError;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, Rgba, RgbaImage};
use log::{debug, error};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load an image, or the empty sentinel if anything goes wrong.
pub fn read<P: AsRef<Path>>(path: P) -> PixelBuffer {
    let path = path.as_ref();
    try_read(path).unwrap_or_else(|e| {
        error!("{e}");
        PixelBuffer::empty()
    })
}

/// Save an image; failures are logged and otherwise ignored.
pub fn write<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) {
    if let Err(e) = try_write(buffer, path) {
        error!("{e}");
    }
}

/// Decode the file at `path` into packed ARGB words.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. Every source layout is converted to 8-bit RGBA first, so
/// sources without alpha come back opaque.
pub fn try_read<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, CodecError> {
    let path = path.as_ref();
    let io_err = |source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|e| decode_error(path, e))?;

    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    let mut buffer = PixelBuffer::new(width, height);
    for (word, px) in buffer.as_mut_slice().iter_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = px.0;
        *word = encode_argb([a, r, g, b]);
    }
    debug!("Read {}: {width}x{height}", path.display());
    Ok(buffer)
}

/// Encode `buffer` to `path` in the format named by [`format_token`].
///
/// Formats that cannot carry alpha (JPEG) are written from an RGB copy.
pub fn try_write<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), CodecError> {
    let path = path.as_ref();
    let token = format_token(path);
    debug!("Writing {} as {token:?}", path.display());
    let format = ImageFormat::from_extension(&token)
        .ok_or_else(|| CodecError::UnsupportedFormat(token.clone()))?;
    if buffer.is_empty() {
        return Err(CodecError::EmptyImage);
    }

    let (width, height) = buffer.dimensions();
    let rgba = RgbaImage::from_fn(width, height, |x, y| {
        let [a, r, g, b] = decode_argb(buffer.row(y)[x as usize]);
        Rgba([r, g, b, a])
    });
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).into_rgb8()),
        _ => DynamicImage::ImageRgba8(rgba),
    };

    image
        .save_with_format(path, format)
        .map_err(|e| match e {
            ImageError::IoError(source) => CodecError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => CodecError::Encode {
                path: path.to_path_buf(),
                source,
            },
        })
}

/// Text after the last `.` of `path`, or the whole path if it has none.
///
/// Case is kept as written; `a/b.PNG` gives `"PNG"`.
pub fn format_token(path: &Path) -> String {
    let text = path.to_string_lossy();
    match text.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => text.into_owned(),
    }
}

fn decode_error(path: &Path, e: ImageError) -> CodecError {
    match e {
        ImageError::IoError(source) => CodecError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => CodecError::Decode {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Write `value` as pretty JSON to `path`. Missing parent directories are
/// created first.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?,
        _ => {}
    }
    let file = File::create(path)
        .map_err(|e| format!("Failed to create JSON {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    out.flush()
        .map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}
