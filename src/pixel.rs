//! Channel-level pixel access on a [`PixelBuffer`].
//!
//! Coordinates are signed so that negative positions surface as
//! [`PixelError::IndexOutOfRange`] instead of wrapping. A failed call reads or
//! writes nothing.
use crate::color::{decode_argb, decode_rgb, encode_argb, encode_rgb, Argb, Rgb};
use crate::error::PixelError;
use crate::image::PixelBuffer;

/// `[r, g, b]` of the pixel at `(x, y)`; alpha is ignored.
pub fn get_rgb(buffer: &PixelBuffer, x: i64, y: i64) -> Result<Rgb, PixelError> {
    buffer.word(x, y).map(decode_rgb)
}

/// `[a, r, g, b]` of the pixel at `(x, y)`.
pub fn get_argb(buffer: &PixelBuffer, x: i64, y: i64) -> Result<Argb, PixelError> {
    buffer.word(x, y).map(decode_argb)
}

/// Overwrite the pixel at `(x, y)` with an opaque color.
pub fn set_rgb(buffer: &mut PixelBuffer, x: i64, y: i64, rgb: Rgb) -> Result<(), PixelError> {
    buffer.set_word(x, y, encode_rgb(rgb))
}

/// Overwrite the pixel at `(x, y)`, alpha included.
pub fn set_argb(buffer: &mut PixelBuffer, x: i64, y: i64, argb: Argb) -> Result<(), PixelError> {
    buffer.set_word(x, y, encode_argb(argb))
}
