#![doc = include_str!("../README.md")]

pub mod color;
pub mod config;
pub mod error;
pub mod image;
pub mod pixel;
#[cfg(feature = "viewer")]
pub mod viewer;

// --- High-level re-exports -------------------------------------------------

pub use crate::color::{Argb, Rgb};
pub use crate::error::{CodecError, PixelError};
pub use crate::image::PixelBuffer;
pub use crate::pixel::{get_argb, get_rgb, set_argb, set_rgb};

#[cfg(feature = "viewer")]
pub use crate::error::ViewerError;
#[cfg(feature = "viewer")]
pub use crate::viewer::{show, Viewer};

// --- Prelude ---------------------------------------------------------------

/// Everything needed to load, poke at and save an image.
///
/// ```no_run
/// use pixel_util::prelude::*;
///
/// let mut img = read("photo.png");
/// if img.is_empty() {
///     eprintln!("load failed");
///     return;
/// }
/// let [a, r, g, b] = get_argb(&img, 0, 0).unwrap();
/// set_rgb(&mut img, 0, 0, [255 - r, 255 - g, 255 - b]).unwrap();
/// println!("alpha was {a}");
/// write(&img, "photo-inverted.png");
/// ```
pub mod prelude {
    pub use crate::image::{read, write, ImageView, PixelBuffer};
    pub use crate::pixel::{get_argb, get_rgb, set_argb, set_rgb};
    pub use crate::{Argb, Rgb};
}
